//! Python skeleton backend.

use husk_codegen::{Backend, Indent, join_blocks, shift_body};
use husk_model::{Class, Field, Method, Parameter};

use crate::naming;

/// Backend rendering Python class skeletons.
///
/// Stateless; the indent unit comes from the package at `generate` time.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonBackend;

impl PythonBackend {
    /// Create a new Python backend.
    pub fn new() -> Self {
        Self
    }

    /// Build the `__init__` synthesized for a class with fields: one
    /// parameter per field (name plus optional default, in field order)
    /// and one `self.{name} = {name}` assignment per field in the same
    /// order. The method value is rendering-local; the model class is
    /// never written to.
    fn constructor(class: &Class) -> Method {
        let mut init = Method::new("__init__");
        let mut body = String::new();
        for field in &class.fields {
            let mut parameter = Parameter::new(field.name.clone());
            if let Some(default) = field.default_value() {
                parameter = parameter.with_default(default);
            }
            init = init.with_parameter(parameter);
            body.push_str("self.");
            body.push_str(&field.name);
            body.push_str(" = ");
            body.push_str(&field.name);
            body.push('\n');
        }
        init.with_body(body)
    }
}

impl Backend for PythonBackend {
    fn language(&self) -> &'static str {
        "python"
    }

    fn file_extension(&self) -> &'static str {
        "py"
    }

    fn class_header(&self, class: &Class) -> String {
        match class.parent_name() {
            Some(parent) => format!("class {}({}):", class.name, parent),
            None => format!("class {}:", class.name),
        }
    }

    fn empty_body(&self) -> &'static str {
        "pass"
    }

    fn render_field(&self, field: &Field) -> String {
        format!(
            "{} {}",
            naming::field_display_name(&field.access, &field.name),
            field.ty
        )
    }

    fn render_method(&self, method: &Method, indent: Indent) -> String {
        let mut params: Vec<String> = Vec::with_capacity(method.parameters.len() + 1);
        if !method.is_static {
            params.push("self".to_string());
        }
        for parameter in &method.parameters {
            params.push(match parameter.default_value() {
                Some(default) => format!("{}={}", parameter.name, default),
                None => parameter.name.clone(),
            });
        }

        let mut out = String::new();
        if method.is_static {
            out.push_str("@staticmethod\n");
        }
        out.push_str("def ");
        out.push_str(&naming::mangle(&method.access, &method.name));
        out.push('(');
        out.push_str(&params.join(", "));
        out.push_str("):\n");

        let body = method.body_text().unwrap_or_else(|| self.empty_body());
        out.push_str(&shift_body(body, indent));
        out
    }

    /// Python skeletons carry fields through the synthesized constructor,
    /// not a declaration list.
    fn fields_block(&self, _class: &Class, _indent: Indent) -> String {
        String::new()
    }

    fn methods_block(&self, class: &Class, indent: Indent) -> String {
        let mut blocks = Vec::with_capacity(class.methods.len() + 1);
        if !class.fields.is_empty() {
            blocks.push(self.render_method(&Self::constructor(class), indent));
        }
        for method in &class.methods {
            blocks.push(self.render_method(method, indent));
        }
        join_blocks(blocks)
    }

    fn is_identifier(&self, name: &str) -> bool {
        naming::is_identifier(name)
    }
}
