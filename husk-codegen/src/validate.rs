//! Model validation ahead of rendering.
//!
//! Validation walks the whole class tree before any text is produced, so
//! a structural error never leaves the caller with a partial output map.

use husk_model::{Class, Package};

use crate::backend::Backend;
use crate::error::{Error, Result};

/// Maximum nesting depth of the class tree.
///
/// Nested classes are owned exclusively, so cycles cannot be constructed;
/// the bound keeps the recursive walk finite for pathological inputs.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Validate every class of a package against a backend's identifier rules.
pub fn package<B: Backend + ?Sized>(backend: &B, package: &Package) -> Result<()> {
    for class in &package.classes {
        check_class(backend, class, "", 1)?;
    }
    Ok(())
}

fn check_class<B: Backend + ?Sized>(
    backend: &B,
    class: &Class,
    scope: &str,
    depth: usize,
) -> Result<()> {
    let path = if scope.is_empty() {
        class.name.clone()
    } else {
        format!("{scope}.{}", class.name)
    };

    if depth > MAX_NESTING_DEPTH {
        return Err(Error::StructuralCycle {
            path,
            limit: MAX_NESTING_DEPTH,
        });
    }

    check_name(backend, "class", &class.name, &path)?;
    if let Some(parent) = class.parent_name() {
        check_name(backend, "parent", parent, &path)?;
    }
    for field in &class.fields {
        check_name(backend, "field", &field.name, &path)?;
    }
    for method in &class.methods {
        check_name(backend, "method", &method.name, &path)?;
        let method_path = format!("{path}.{}", method.name);
        for parameter in &method.parameters {
            check_name(backend, "parameter", &parameter.name, &method_path)?;
        }
    }
    for nested in &class.classes {
        check_class(backend, nested, &path, depth + 1)?;
    }
    Ok(())
}

fn check_name<B: Backend + ?Sized>(
    backend: &B,
    kind: &'static str,
    name: &str,
    path: &str,
) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidIdentifier {
            kind,
            name: name.to_string(),
            path: path.to_string(),
            reason: "name is empty".to_string(),
        });
    }
    if !backend.is_identifier(name) {
        return Err(Error::InvalidIdentifier {
            kind,
            name: name.to_string(),
            path: path.to_string(),
            reason: format!("not a valid {} identifier", backend.language()),
        });
    }
    Ok(())
}
