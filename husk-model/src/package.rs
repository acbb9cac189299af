//! Top-level container of class declarations.

use serde::{Deserialize, Serialize};

use crate::Class;

/// A package of top-level classes to render.
///
/// Classes render in the order they appear in [`classes`](Self::classes);
/// insertion order is declaration order is output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Package name.
    pub name: String,
    /// Top-level classes, in declaration order.
    #[serde(default)]
    pub classes: Vec<Class>,
    /// Indent style: spaces when true, tabs otherwise.
    #[serde(default)]
    pub use_spaces: bool,
}

impl Package {
    /// Create an empty package with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classes: Vec::new(),
            use_spaces: false,
        }
    }

    /// Append a top-level class.
    pub fn with_class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }

    /// Set the indent style.
    pub fn with_spaces(mut self, use_spaces: bool) -> Self {
        self.use_spaces = use_spaces;
        self
    }
}
