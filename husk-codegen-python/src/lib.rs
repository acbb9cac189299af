//! Python backend for the Husk skeleton generator.
//!
//! Renders a [`husk_model::Package`] into Python class skeletons: class
//! headers with inheritance clauses, a synthesized `__init__` for classes
//! with fields, access-mangled method names, `@staticmethod` decorators,
//! and `pass` placeholders for empty bodies.
//!
//! # Example
//!
//! ```
//! use husk_codegen_python::{Backend, PythonBackend};
//! use husk_model::{Class, Field, Package};
//!
//! let package = Package::new("geometry").with_spaces(true).with_class(
//!     Class::new("Point")
//!         .with_field(Field::new("x", "int").with_access("public"))
//!         .with_field(Field::new("y", "int").with_access("public")),
//! );
//!
//! let rendered = PythonBackend::new().generate(&package).unwrap();
//! assert_eq!(
//!     rendered["Point"],
//!     "class Point:\n    def __init__(self, x, y):\n        self.x = x\n        self.y = y\n\n"
//! );
//! ```

mod backend;
mod naming;

pub use backend::PythonBackend;
pub use husk_codegen::{Access, Backend, Error, Indent, Result};
pub use naming::{PYTHON_KEYWORDS, field_display_name, is_identifier, mangle};
