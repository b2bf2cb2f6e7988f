use crate::error::Result;
use crate::report::{DependencyGraph, ReportParser};

pub mod config;
pub mod modules;
pub mod naming;
pub mod status;

pub use config::GeneratorConfig;
pub use modules::{Constant, ConstantValue, GeneratedModule, NestedObject};
pub use naming::ResolvedDependency;
pub use status::StatusKind;

/// The two module descriptions produced by one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedModules {
    pub versions: GeneratedModule,
    pub libs: GeneratedModule,
}

impl GeneratedModules {
    /// True when the report contained no dependencies at all. Still a valid
    /// outcome: versions keeps the four gradle channel constants and libs is
    /// empty.
    pub fn is_empty(&self) -> bool {
        self.libs.constants.is_empty()
    }
}

/// Sequences parse, name resolution, status annotation and module
/// generation. All-or-nothing: a malformed report aborts with no output.
pub struct Pipeline<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline over a raw report payload.
    pub fn run(&self, payload: &str) -> Result<GeneratedModules> {
        let graph = ReportParser::new().parse(payload)?;
        Ok(self.generate(&graph))
    }

    /// Generate both modules from an already parsed report.
    pub fn generate(&self, graph: &DependencyGraph) -> GeneratedModules {
        let resolved = self.resolve(graph);
        GeneratedModules {
            versions: modules::versions_module(&resolved, &graph.gradle, self.config),
            libs: modules::libs_module(&resolved, self.config),
        }
    }

    /// Resolve the constant name of every dependency in the graph, in its
    /// final (deduplicated, sorted) order.
    pub fn resolve(&self, graph: &DependencyGraph) -> Vec<ResolvedDependency> {
        let force_qualified = naming::force_qualified_set(&self.config.qualify_always);
        naming::resolve_names(&graph.flatten(), &force_qualified)
    }
}
