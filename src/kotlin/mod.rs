pub mod render;

pub use render::{module_file_name, render_module};
