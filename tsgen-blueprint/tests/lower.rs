//! Blueprint lowering and rendering.

use tsgen_blueprint::{BlueprintFile, Error};

const ROUND_TRIP: &str = r#"
[[files]]
path = "test.ts"

[[files.interfaces]]
name = "TestInterface"
export = true
properties = [
    { name = "testProp", type = "string" },
    { name = "anotherProp", type = "number" },
]

[[files.classes]]
name = "MyClass"
export = true
members = [{ name = "something", type = "string", scope = "private" }]

[files.classes.constructor]
parameters = [{ name = "something", type = "string" }]
assignments = [{ lhs = "this.something", rhs = "something" }]

[[files.classes.methods]]
name = "doSomething"
scope = "private"
returns = "string"
parameters = [
    { name = "input", type = "string" },
    { name = "anotherInput", type = "number" },
]
"#;

#[test]
fn test_blueprint_matches_builder_output() {
    let file: BlueprintFile = ROUND_TRIP.parse().unwrap();

    let expected = "
// test.ts
export interface TestInterface {
  testProp: string;
  anotherProp: number;
}

export class MyClass {
  private something : string;
  constructor(something: string) {
    this.something = something;
  }
  private doSomething = (input: string, anotherInput: number) : string => {
  }

}

";

    assert_eq!(file.render(None).unwrap(), expected);
}

#[test]
fn test_indent_override() {
    let file: BlueprintFile = ROUND_TRIP.parse().unwrap();
    let code = file.render(Some(4)).unwrap();

    assert!(code.contains("\n    testProp: string;\n"));
    assert!(code.contains("\n        this.something = something;\n"));
}

#[test]
fn test_options_indent() {
    let source = format!("[options]\nindent = 0\n{ROUND_TRIP}");
    let file: BlueprintFile = source.parse().unwrap();

    let generator = file.to_generator("out", None);
    assert_eq!(generator.indent().width(), 0);
    assert!(file.render(None).unwrap().contains("\nthis.something = something;\n"));
}

#[test]
fn test_generator_keeps_declaration_order() {
    let file: BlueprintFile = r#"
[[files]]
path = "b.ts"

[[files]]
path = "a.ts"
"#
    .parse()
    .unwrap();

    let generator = file.to_generator("out", None);
    let paths: Vec<&str> = generator.source_files().iter().map(|f| f.path()).collect();
    assert_eq!(paths, ["b.ts", "a.ts"]);
}

#[test]
fn test_extends_and_bare_method() {
    let file: BlueprintFile = r#"
[[files]]
path = "dog.ts"

[[files.classes]]
name = "Dog"
extends = "extends Animal"
constructor = {}

[[files.classes.methods]]
name = "bark"
"#
    .parse()
    .unwrap();

    insta::assert_snapshot!(file.render(None).unwrap(), @r"
    // dog.ts
    class Dog extends Animal {
      constructor() {
      }
      bark = () => {
      }

    }
    ");
}

#[test]
fn test_missing_constructor_points_at_class() {
    let source = r#"
[[files]]
path = "broken.ts"

[[files.classes]]
name = "Orphan"
"#;
    let file: BlueprintFile = source.parse().unwrap();

    let err = file.render(None).unwrap_err();
    match *err {
        Error::Render { span, source: cause, .. } => {
            let offset = source.find("\"Orphan\"").unwrap();
            assert_eq!(span.map(|s| s.offset()), Some(offset));
            assert_eq!(cause.to_string(), "class 'Orphan' has no constructor");
        }
        other => panic!("expected render error, got {other:?}"),
    }
}

#[test]
fn test_indent_override_is_bounded() {
    let file: BlueprintFile = ROUND_TRIP.parse().unwrap();

    let err = file.render(Some(65)).unwrap_err();
    match *err {
        Error::Render { span, source: cause, .. } => {
            assert!(span.is_none());
            assert_eq!(cause.to_string(), "indent width 65 exceeds the maximum of 64");
        }
        other => panic!("expected render error, got {other:?}"),
    }
}
