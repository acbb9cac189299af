//! End-to-end contract tests for the Python backend.
//!
//! These pin the exact rendered text, including indentation and trailing
//! line breaks, for the shapes the generator guarantees.

use husk_codegen_python::{Backend, Error, PythonBackend};
use husk_model::{Class, Field, Method, Package, Parameter};

fn point_class() -> Class {
    Class::new("Point")
        .with_field(Field::new("x", "int").with_access("public"))
        .with_field(Field::new("y", "int").with_access("public"))
}

#[test]
fn test_point_end_to_end() {
    let package = Package::new("geometry").with_spaces(true).with_class(point_class());
    let output = PythonBackend.generate(&package).unwrap();

    let expected = concat!(
        "class Point:\n",
        "    def __init__(self, x, y):\n",
        "        self.x = x\n",
        "        self.y = y\n",
        "\n",
    );
    assert_eq!(output["Point"], expected);
}

#[test]
fn test_private_static_method_end_to_end() {
    let package = Package::new("util").with_spaces(true).with_class(
        Class::new("Registry")
            .with_method(Method::new("foo").with_access("private").with_static(true)),
    );
    let output = PythonBackend.generate(&package).unwrap();

    let expected = concat!(
        "class Registry:\n",
        "    @staticmethod\n",
        "    def __foo():\n",
        "        pass\n",
        "\n",
    );
    assert_eq!(output["Registry"], expected);
}

#[test]
fn test_empty_class_end_to_end() {
    let package = Package::new("p").with_spaces(true).with_class(Class::new("Marker"));
    let output = PythonBackend.generate(&package).unwrap();
    assert_eq!(output["Marker"], "class Marker:\n    pass\n\n");
}

#[test]
fn test_tab_indentation() {
    let package = Package::new("geometry").with_class(point_class());
    let output = PythonBackend.generate(&package).unwrap();

    assert_eq!(
        output["Point"],
        "class Point:\n\tdef __init__(self, x, y):\n\t\tself.x = x\n\t\tself.y = y\n\n"
    );
}

#[test]
fn test_output_order_matches_package_order() {
    let package = Package::new("p")
        .with_spaces(true)
        .with_class(Class::new("Zebra"))
        .with_class(Class::new("Aardvark"))
        .with_class(Class::new("Mongoose"));
    let output = PythonBackend.generate(&package).unwrap();
    let keys: Vec<&str> = output.keys().map(String::as_str).collect();
    assert_eq!(keys, ["Zebra", "Aardvark", "Mongoose"]);
}

#[test]
fn test_generate_leaves_package_untouched() {
    let package = Package::new("p").with_spaces(true).with_class(
        point_class()
            .with_method(Method::new("norm").with_access("protected"))
            .with_class(Class::new("Inner").with_field(Field::new("tag", "str"))),
    );
    let before = package.clone();
    PythonBackend.generate(&package).unwrap();
    assert_eq!(package, before);
}

#[test]
fn test_keyword_method_name_aborts_generation() {
    let package = Package::new("p").with_spaces(true).with_class(
        Class::new("Ok").with_method(Method::new("lambda")),
    );
    let err = PythonBackend.generate(&package).unwrap_err();
    match err {
        Error::InvalidIdentifier { kind, name, path, reason } => {
            assert_eq!(kind, "method");
            assert_eq!(name, "lambda");
            assert_eq!(path, "Ok");
            assert!(reason.contains("python"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_invalid_nested_class_aborts_generation() {
    let package = Package::new("p").with_spaces(true).with_class(
        Class::new("Outer").with_class(Class::new("in valid")),
    );
    assert!(PythonBackend.generate(&package).is_err());
}

#[test]
fn test_constructor_defaults_come_from_fields() {
    let package = Package::new("p").with_spaces(true).with_class(
        Class::new("Config")
            .with_field(Field::new("host", "str"))
            .with_field(Field::new("port", "int").with_default("8080")),
    );
    let output = PythonBackend.generate(&package).unwrap();
    assert!(output["Config"].contains("def __init__(self, host, port=8080):"));
}

#[test]
fn test_declared_method_with_parameter_defaults() {
    let method = Method::new("resize")
        .with_parameter(Parameter::new("width").with_default("5"))
        .with_parameter(Parameter::new("height"));
    let package = Package::new("p")
        .with_spaces(true)
        .with_class(Class::new("Box").with_method(method));
    let output = PythonBackend.generate(&package).unwrap();
    assert!(output["Box"].contains("def resize(self, width=5, height):"));
}

#[test]
fn test_package_from_json_renders_like_hand_built() {
    let json = r#"
    {
        "name": "geometry",
        "use_spaces": true,
        "classes": [
            {
                "name": "Point",
                "fields": [
                    {"name": "x", "type": "int", "access": "public"},
                    {"name": "y", "type": "int", "access": "public"}
                ]
            }
        ]
    }
    "#;
    let deserialized: Package = serde_json::from_str(json).unwrap();
    let hand_built = Package::new("geometry").with_spaces(true).with_class(point_class());

    assert_eq!(deserialized, hand_built);
    assert_eq!(
        PythonBackend.generate(&deserialized).unwrap(),
        PythonBackend.generate(&hand_built).unwrap()
    );
}
