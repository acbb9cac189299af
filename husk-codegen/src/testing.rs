//! Test utilities for backend and driver tests.
//!
//! Enable with the `testing` feature to use these from dependent crates'
//! test suites.

use husk_model::{Class, Field, Method};

use crate::backend::Backend;
use crate::indent::{Indent, shift_body};

/// A minimal line-oriented backend exercising only the shared driver.
///
/// It renders a deliberately plain pseudo-language so driver tests read
/// the composition, not any real language's conventions.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainBackend;

impl Backend for PlainBackend {
    fn language(&self) -> &'static str {
        "plain"
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }

    fn class_header(&self, class: &Class) -> String {
        match class.parent_name() {
            Some(parent) => format!("class {} : {}", class.name, parent),
            None => format!("class {}", class.name),
        }
    }

    fn empty_body(&self) -> &'static str {
        "(empty)"
    }

    fn render_field(&self, field: &Field) -> String {
        format!("{}: {}", field.name, field.ty)
    }

    fn render_method(&self, method: &Method, indent: Indent) -> String {
        let params: Vec<&str> = method.parameters.iter().map(|p| p.name.as_str()).collect();
        let mut out = format!("method {}({})\n", method.name, params.join(", "));
        let body = method.body_text().unwrap_or_else(|| self.empty_body());
        out.push_str(&shift_body(body, indent));
        out
    }
}
