//! The generator contract and the shared composition driver.

use husk_model::{Class, Field, Method, Package};

use crate::error::Result;
use crate::indent::{Indent, shift};
use crate::validate;

/// Contract every language backend implements.
///
/// A backend supplies the lexical conventions of one target language (how
/// a class header, a field and a method look); the recursive composition
/// of class bodies is implemented once, in the provided methods, and
/// reused by all backends. Backends are stateless: the indent unit is
/// derived per [`generate`](Self::generate) call from the package and
/// passed down by value, so concurrent calls over independent packages
/// share nothing mutable.
///
/// Rendering never writes to the model. Naming decisions (display casing,
/// access mangling) are made locally on the way to the output text.
pub trait Backend {
    /// Language identifier (e.g., "python").
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "py").
    fn file_extension(&self) -> &'static str;

    /// Declaration line for a class, including any inheritance clause,
    /// without a trailing newline.
    fn class_header(&self, class: &Class) -> String;

    /// The minimal-valid-body statement for an otherwise empty class or
    /// method body (e.g., `pass`).
    fn empty_body(&self) -> &'static str;

    /// One line representing a field declaration, reflecting its access
    /// level through the backend's naming convention.
    fn render_field(&self, field: &Field) -> String;

    /// A full method block: signature line(s) followed by the indented
    /// body, the method's own text or the empty-body placeholder.
    /// Must be newline-terminated.
    fn render_method(&self, method: &Method, indent: Indent) -> String;

    /// Whether `name` is a valid identifier in the target language.
    ///
    /// The default accepts ASCII identifiers (`[A-Za-z_][A-Za-z0-9_]*`);
    /// backends tighten this to exclude their keywords.
    fn is_identifier(&self, name: &str) -> bool {
        let mut chars = name.chars();
        matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    /// Field declarations of a class body, one [`render_field`] line per
    /// field in declared order. Empty for zero fields. Backends that fold
    /// fields into a synthesized constructor override this.
    ///
    /// [`render_field`]: Self::render_field
    fn fields_block(&self, class: &Class, _indent: Indent) -> String {
        let mut out = String::new();
        for field in &class.fields {
            out.push_str(&self.render_field(field));
            out.push('\n');
        }
        out
    }

    /// Method blocks of a class body, in declared order with a blank line
    /// between. Empty for zero methods. Backends that synthesize methods
    /// (constructors) override this and prepend them.
    fn methods_block(&self, class: &Class, indent: Indent) -> String {
        join_blocks(class.methods.iter().map(|m| self.render_method(m, indent)))
    }

    /// Nested class blocks, recursively rendered in declared order with a
    /// blank line between. Empty for no nested classes.
    fn classes_block(&self, class: &Class, indent: Indent) -> String {
        join_blocks(class.classes.iter().map(|c| self.render_class(c, indent)))
    }

    /// The complete textual block for one class: header, then the fields
    /// block, methods block and nested-classes block in that fixed order,
    /// each shifted one level and separated by a blank line.
    ///
    /// An empty sequence of fields, methods or nested classes contributes
    /// nothing; only when all three blocks come up empty is the
    /// [`empty_body`](Self::empty_body) fallback emitted, once, beneath
    /// the header.
    fn render_class(&self, class: &Class, indent: Indent) -> String {
        let unit = indent.unit();
        let body = join_blocks([
            self.fields_block(class, indent),
            self.methods_block(class, indent),
            self.classes_block(class, indent),
        ]);

        let mut out = self.class_header(class);
        out.push('\n');
        if body.is_empty() {
            out.push_str(&unit);
            out.push_str(self.empty_body());
            out.push('\n');
        } else {
            out.push_str(&shift(&body, 1, &unit));
        }
        out
    }

    /// Render every top-level class of `package`, in package order, into
    /// a map keyed by class name. Each entry is the rendered class with
    /// exactly one extra trailing line break, ready to be written to one
    /// file per entry.
    ///
    /// The whole package is validated first: on an
    /// [`Error`](crate::Error) no partial map is returned. The package
    /// itself is read-only input and is never mutated.
    fn generate(&self, package: &Package) -> Result<crate::IndexMap<String, String>> {
        validate::package(self, package)?;
        let indent = Indent::from_style(package.use_spaces);
        let mut output = crate::IndexMap::with_capacity(package.classes.len());
        for class in &package.classes {
            let mut text = self.render_class(class, indent);
            text.push('\n');
            output.insert(class.name.clone(), text);
        }
        Ok(output)
    }
}

/// Join newline-terminated blocks with a blank line between them,
/// skipping empty blocks entirely.
pub fn join_blocks(blocks: impl IntoIterator<Item = String>) -> String {
    let mut out = String::new();
    for block in blocks {
        if block.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&block);
    }
    out
}
