//! Class declarations and their members.

use serde::{Deserialize, Serialize};

/// A class declaration: fields, methods, and nested classes.
///
/// Nested classes are owned exclusively by their parent (`Vec<Class>`),
/// so a class cannot alias or nest itself; the tree is acyclic by
/// construction and only its depth needs bounding during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    /// Class name.
    pub name: String,
    /// Parent class to inherit from. `None` or empty means no inheritance.
    #[serde(default)]
    pub parent: Option<String>,
    /// Fields, in declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Methods, in declaration order.
    #[serde(default)]
    pub methods: Vec<Method>,
    /// Nested classes, in declaration order.
    #[serde(default)]
    pub classes: Vec<Class>,
}

impl Class {
    /// Create a class with no parent and no members.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            fields: Vec::new(),
            methods: Vec::new(),
            classes: Vec::new(),
        }
    }

    /// Set the parent class.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Append a field.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Append a method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Append a nested class.
    pub fn with_class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }

    /// Parent class name, treating an empty string as "no inheritance".
    pub fn parent_name(&self) -> Option<&str> {
        self.parent.as_deref().filter(|p| !p.is_empty())
    }
}

/// A field declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Field type, opaque to rendering beyond placement.
    #[serde(rename = "type")]
    pub ty: String,
    /// Access level. Backends interpret `"public"`, `"protected"` and
    /// `"private"`; anything else is treated as public.
    #[serde(default)]
    pub access: String,
    /// Default value literal. `None` or empty means no default.
    #[serde(default)]
    pub default: Option<String>,
}

impl Field {
    /// Create a public field with no default.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            access: String::new(),
            default: None,
        }
    }

    /// Set the access level.
    pub fn with_access(mut self, access: impl Into<String>) -> Self {
        self.access = access.into();
        self
    }

    /// Set the default value literal.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Default value literal, treating an empty string as absent.
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref().filter(|d| !d.is_empty())
    }
}

/// A method declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    /// Method name.
    pub name: String,
    /// Access level, same interpretation as [`Field::access`].
    #[serde(default)]
    pub access: String,
    /// Static methods take no instance reference.
    #[serde(default, rename = "static")]
    pub is_static: bool,
    /// Parameters, in declaration order.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Body text. `None` or empty means the backend supplies its
    /// empty-body placeholder.
    #[serde(default)]
    pub body: Option<String>,
}

impl Method {
    /// Create a public instance method with no parameters and no body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access: String::new(),
            is_static: false,
            parameters: Vec::new(),
            body: None,
        }
    }

    /// Set the access level.
    pub fn with_access(mut self, access: impl Into<String>) -> Self {
        self.access = access.into();
        self
    }

    /// Mark the method static.
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Append a parameter.
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Set the body text.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Body text, treating an empty string as absent.
    pub fn body_text(&self) -> Option<&str> {
        self.body.as_deref().filter(|b| !b.is_empty())
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Default value literal. `None` or empty means no default.
    #[serde(default)]
    pub default: Option<String>,
}

impl Parameter {
    /// Create a parameter with no default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    /// Set the default value literal.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Default value literal, treating an empty string as absent.
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref().filter(|d| !d.is_empty())
    }
}
