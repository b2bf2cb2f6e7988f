use crate::pipeline::{Constant, ConstantValue, GeneratedModule, NestedObject};

const INDENT: &str = "    ";
const NESTED_INDENT: &str = "        ";

/// Render a module description to Kotlin source text.
///
/// Output is byte-deterministic for a given description: fixed indentation,
/// one blank line between top-level members, a single trailing newline.
pub fn render_module(module: &GeneratedModule) -> String {
    let mut lines: Vec<String> = Vec::new();

    kdoc_lines(&mut lines, "", &module.header);
    lines.push(format!("object {} {{", module.name));

    let mut first_member = true;
    for constant in &module.constants {
        if !first_member {
            lines.push(String::new());
        }
        first_member = false;
        constant_lines(&mut lines, INDENT, constant);
    }

    if let Some(nested) = &module.nested {
        if !first_member {
            lines.push(String::new());
        }
        nested_lines(&mut lines, nested);
    }

    lines.push("}".to_string());

    let mut source = lines.join("\n");
    source.push('\n');
    source
}

/// File name the module is persisted under.
pub fn module_file_name(module: &GeneratedModule) -> String {
    format!("{}.kt", module.name)
}

fn constant_lines(lines: &mut Vec<String>, indent: &str, constant: &Constant) {
    if let Some(doc) = &constant.doc {
        kdoc_lines(lines, indent, doc);
    }

    if let Some(comment) = &constant.comment {
        for line in comment.lines() {
            if line.is_empty() {
                lines.push(format!("{indent}//"));
            } else {
                lines.push(format!("{indent}// {line}"));
            }
        }
    }

    lines.push(format!(
        "{indent}const val {}: String = {}",
        constant.name,
        render_value(&constant.value)
    ));
}

fn nested_lines(lines: &mut Vec<String>, nested: &NestedObject) {
    if let Some(doc) = &nested.doc {
        kdoc_lines(lines, INDENT, doc);
    }

    lines.push(format!("{INDENT}object {} {{", nested.name));
    for constant in &nested.constants {
        constant_lines(lines, NESTED_INDENT, constant);
    }
    lines.push(format!("{INDENT}}}"));
}

fn kdoc_lines(lines: &mut Vec<String>, indent: &str, text: &str) {
    lines.push(format!("{indent}/**"));
    for line in text.lines() {
        if line.is_empty() {
            lines.push(format!("{indent} *"));
        } else {
            lines.push(format!("{indent} * {line}"));
        }
    }
    lines.push(format!("{indent} */"));
}

fn render_value(value: &ConstantValue) -> String {
    match value {
        ConstantValue::Literal(literal) => quote(literal),
        ConstantValue::Concat { prefix, reference } => {
            format!("{} + {}", quote(prefix), reference)
        }
    }
}

/// Quote a string as a Kotlin literal. `$` starts a template expression in
/// Kotlin, so it is escaped along with the usual suspects.
fn quote(raw: &str) -> String {
    let mut quoted = String::with_capacity(raw.len() + 2);
    quoted.push('"');
    for c in raw.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '$' => quoted.push_str("\\$"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}
