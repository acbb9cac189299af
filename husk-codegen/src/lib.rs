//! Language-agnostic rendering core for the Husk skeleton generator.
//!
//! This crate provides the shared machinery every language backend builds
//! on (e.g., `husk-codegen-python`):
//!
//! - [`indent`] - Indent unit selection and block re-indentation
//! - [`backend`] - The [`Backend`] contract and the recursive composition
//!   driver shared by all backends
//! - [`access`] - Access level interpretation with the public fallback
//! - [`validate`] - Model validation ahead of rendering
//! - [`error`] - Typed error taxonomy
//! - [`testing`] - Test utilities (feature-gated)
//!
//! Rendering is a pure, deterministic tree walk: a backend turns a
//! [`husk_model::Package`] into one text blob per top-level class without
//! touching the model, so re-rendering and rendering the same tree through
//! several backends are always safe.

pub mod access;
pub mod backend;
pub mod error;
pub mod indent;
pub mod validate;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use access::Access;
pub use backend::{Backend, join_blocks};
pub use error::{Error, Result};
pub use indent::{Indent, shift, shift_body};
pub use indexmap::IndexMap;
