//! Integration tests for the implementation registry.
//!
//! The type graph used throughout:
//!
//! ```text
//! A (abstract)
//! ├── B (abstract)
//! │   └── C
//! │       └── D
//! └── E
//!     └── F (hidden)
//! ```

use ftoolz::registry::{Kind, Registration, Registry, RegistryError};
use rstest::{fixture, rstest};

trait Plugin {
    fn label(&self) -> &'static str;
}

macro_rules! plugin {
    ($name:ident, $factory:ident) => {
        struct $name;

        impl Plugin for $name {
            fn label(&self) -> &'static str {
                stringify!($name)
            }
        }

        fn $factory() -> Box<dyn Plugin> {
            Box::new($name)
        }
    };
}

plugin!(C, make_c);
plugin!(D, make_d);
plugin!(E, make_e);
plugin!(F, make_f);

fn registrations() -> Vec<Registration<dyn Plugin>> {
    vec![
        Registration::abstract_type("A"),
        Registration::abstract_type("B").extends("A"),
        Registration::concrete("C", make_c).extends("B"),
        Registration::concrete("D", make_d).extends("C"),
        Registration::concrete("E", make_e).extends("A"),
        Registration::concrete("F", make_f).extends("E").hidden(),
    ]
}

#[fixture]
fn registry() -> Registry<dyn Plugin> {
    let mut registry = Registry::new();
    for registration in registrations() {
        registry.register(registration).unwrap();
    }
    registry
}

fn implementation_names(registry: &Registry<dyn Plugin>, base: &str) -> Vec<String> {
    registry
        .find_implementations(base)
        .unwrap()
        .into_iter()
        .map(|registration| registration.name().to_owned())
        .collect()
}

// =============================================================================
// Discovery
// =============================================================================

#[rstest]
#[case("A", vec!["C", "D", "E"])]
#[case("B", vec!["C", "D"])]
#[case("C", vec!["D"])]
#[case("D", vec![])]
#[case("E", vec![])]
fn test_find_implementations(
    registry: Registry<dyn Plugin>,
    #[case] base: &str,
    #[case] expected: Vec<&str>,
) {
    assert_eq!(implementation_names(&registry, base), expected);
}

#[rstest]
fn test_subtypes_include_hidden_and_abstract(registry: Registry<dyn Plugin>) {
    let names: Vec<&str> = registry
        .subtypes("A")
        .unwrap()
        .into_iter()
        .map(Registration::name)
        .collect();
    assert_eq!(names, vec!["B", "C", "D", "E", "F"]);
}

#[rstest]
fn test_hidden_type_can_still_be_instantiated(registry: Registry<dyn Plugin>) {
    let plugin = registry.instantiate("F").unwrap();
    assert_eq!(plugin.label(), "F");
    assert!(!registry.get("F").unwrap().is_discoverable());
}

#[rstest]
fn test_every_implementation_instantiates(registry: Registry<dyn Plugin>) {
    let labels: Vec<&str> = registry
        .find_implementations("A")
        .unwrap()
        .into_iter()
        .filter_map(Registration::instantiate)
        .map(|plugin| plugin.label())
        .collect();
    assert_eq!(labels, vec!["C", "D", "E"]);
}

#[rstest]
fn test_kinds(registry: Registry<dyn Plugin>) {
    assert_eq!(registry.get("B").map(Registration::kind), Some(Kind::Abstract));
    assert_eq!(registry.get("D").map(Registration::kind), Some(Kind::Concrete));
    assert_eq!(registry.get("D").map(Registration::parents), Some(&["C".to_string()][..]));
}

// =============================================================================
// Order Independence
// =============================================================================

#[rstest]
fn test_registration_order_does_not_change_results() {
    // Parents first is the only constraint; swap independent branches.
    let order = [0, 4, 5, 1, 2, 3];
    let source = registrations();

    let mut registry = Registry::new();
    for index in order {
        registry.register(source[index].clone()).unwrap();
    }

    assert_eq!(implementation_names(&registry, "A"), vec!["C", "D", "E"]);
    assert_eq!(implementation_names(&registry, "B"), vec!["C", "D"]);
}

// =============================================================================
// Errors
// =============================================================================

#[rstest]
fn test_child_before_parent_is_rejected() {
    let mut registry: Registry<dyn Plugin> = Registry::new();
    let result = registry.register(Registration::concrete("C", make_c).extends("B"));

    assert_eq!(
        result,
        Err(RegistryError::UnknownParent {
            name: "C".to_string(),
            parent: "B".to_string(),
        })
    );
    assert!(registry.is_empty());
}

#[rstest]
fn test_unknown_base(registry: Registry<dyn Plugin>) {
    assert_eq!(
        registry.find_implementations("Z").map(|found| found.len()),
        Err(RegistryError::UnknownType {
            name: "Z".to_string()
        })
    );
}

#[rstest]
fn test_duplicate(mut registry: Registry<dyn Plugin>) {
    let result = registry.register(Registration::abstract_type("E"));
    assert!(matches!(result, Err(RegistryError::Duplicate { name }) if name == "E"));
    assert_eq!(registry.get("E").map(Registration::kind), Some(Kind::Concrete));
}
