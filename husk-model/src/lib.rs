//! Language-neutral object model for skeleton code generation.
//!
//! This crate defines the entity tree handed to language backends:
//!
//! ```text
//! Package → Class → { Field, Method { Parameter }, nested Class }
//! ```
//!
//! The model is plain data. It carries no rendering logic and no opinion
//! about any target language: field types are opaque strings, access
//! levels are carried verbatim for the backend to interpret, and nested
//! classes are owned exclusively by their parent, so a class tree cannot
//! contain cycles.
//!
//! All types are serde-enabled so an upstream model-construction stage
//! (schema loader, IDL compiler) can hand the tree over as JSON.

mod class;
mod package;

pub use class::{Class, Field, Method, Parameter};
pub use package::Package;
