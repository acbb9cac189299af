//! Snapshot tests for Python skeleton generation.
//!
//! These pin the overall shape of rendered classes; exact trailing-newline
//! semantics are covered by `generate_contract.rs`.

use husk_codegen_python::{Backend, PythonBackend};
use husk_model::{Class, Field, Method, Package, Parameter};

fn render(class: Class) -> String {
    let package = Package::new("snapshot").with_spaces(true).with_class(class);
    let output = PythonBackend.generate(&package).unwrap();
    output[0].clone()
}

#[test]
fn test_full_class_tree() {
    let class = Class::new("Shape")
        .with_parent("Drawable")
        .with_field(Field::new("name", "str"))
        .with_method(Method::new("area"))
        .with_class(
            Class::new("Metrics")
                .with_method(
                    Method::new("compare")
                        .with_access("private")
                        .with_static(true)
                        .with_parameter(Parameter::new("a"))
                        .with_parameter(Parameter::new("b").with_default("None")),
                )
                .with_class(Class::new("Unit")),
        );

    insta::assert_snapshot!(render(class), @r"
    class Shape(Drawable):
        def __init__(self, name):
            self.name = name

        def area(self):
            pass

        class Metrics:
            @staticmethod
            def __compare(a, b=None):
                pass

            class Unit:
                pass
    ");
}

#[test]
fn test_inheritance_without_members() {
    insta::assert_snapshot!(render(Class::new("Circle").with_parent("Shape")), @r"
    class Circle(Shape):
        pass
    ");
}

#[test]
fn test_access_levels_across_methods() {
    let class = Class::new("Vault")
        .with_method(Method::new("open"))
        .with_method(Method::new("audit").with_access("protected"))
        .with_method(Method::new("rotate").with_access("private"));

    insta::assert_snapshot!(render(class), @r"
    class Vault:
        def open(self):
            pass

        def _audit(self):
            pass

        def __rotate(self):
            pass
    ");
}

#[test]
fn test_explicit_bodies_survive_reindentation() {
    let class = Class::new("Counter")
        .with_field(Field::new("count", "int").with_default("0"))
        .with_method(
            Method::new("bump")
                .with_parameter(Parameter::new("by").with_default("1"))
                .with_body("self.count += by\nreturn self.count"),
        );

    insta::assert_snapshot!(render(class), @r"
    class Counter:
        def __init__(self, count=0):
            self.count = count

        def bump(self, by=1):
            self.count += by
            return self.count
    ");
}

#[test]
fn test_nested_only_class() {
    let class = Class::new("Namespace")
        .with_class(Class::new("First"))
        .with_class(Class::new("Second").with_field(Field::new("tag", "str")));

    insta::assert_snapshot!(render(class), @r"
    class Namespace:
        class First:
            pass

        class Second:
            def __init__(self, tag):
                self.tag = tag
    ");
}
