#![cfg(test)]

use std::rc::Rc;

use indexmap::IndexSet;

use super::*;
use crate::naming::InstanceId;

#[test]
fn test_bind_and_lookup() {
    let bindings = Bindings::new();
    let value = Rc::new("value");

    assert!(!bindings.bind("Main", "Value", &value), "A new binding shouldn't replace anything.");
    assert_eq!(bindings.lookup("Main", "Value"), Some(InstanceId::of(&value)));
    assert_eq!(bindings.lookup("Main", "Missing"), None);
    assert_eq!(bindings.lookup("Other", "Value"), None);

    let other = Rc::new("other");
    assert!(bindings.bind("Main", "Value", &other), "Rebinding should replace the binding.");
    assert_eq!(bindings.lookup("Main", "Value"), Some(InstanceId::of(&other)));
    assert_eq!(bindings.len(), 1);
}

#[test]
fn test_strong_and_weak_bindings() {
    let bindings = Bindings::new();
    let strong = Rc::new(1);
    let weak = Rc::new(2);

    bindings.bind("Main", "Strong", &strong);
    bindings.bind_weak("Main", "Weak", &weak);
    assert_eq!(Rc::strong_count(&strong), 2, "A binding should keep its target alive.");
    assert_eq!(Rc::strong_count(&weak), 1, "A weak binding shouldn't keep its target alive.");

    drop(weak);
    assert_eq!(bindings.lookup("Main", "Weak"), None, "A stale binding should resolve to nothing.");
    assert_eq!(bindings.len(), 2, "Stale bindings are still counted.");
}

#[test]
fn test_unbind_and_remove_scope() {
    let bindings = Bindings::new();
    let value = Rc::new(0);
    bindings.bind("Main", "Zero", &value);
    bindings.bind("Extra", "Zero", &value);

    assert!(bindings.unbind("Main", "Zero"));
    assert!(!bindings.unbind("Main", "Zero"));
    assert!(!bindings.unbind("Missing", "Zero"));

    assert!(bindings.remove_scope("Extra"));
    assert!(!bindings.remove_scope("Extra"));
    assert!(bindings.is_empty());
    assert_eq!(Rc::strong_count(&value), 1, "Removed bindings should release their targets.");
}

#[test]
fn test_declaration_order() {
    let bindings = Bindings::new();
    let value = Rc::new(0);
    bindings.bind("Zoo", "Zebra", &value);
    bindings.bind("Aquarium", "Angelfish", &value);
    bindings.bind("Zoo", "Aardvark", &value);

    assert_eq!(bindings.scopes(), ["Zoo", "Aquarium"]);

    let visits: Vec<String> = bindings.snapshot(&IndexSet::new())
        .into_iter()
        .map(|visit| format!("{}::{}", visit.scope, visit.name))
        .collect();
    assert_eq!(
        visits, ["Zoo::Zebra", "Zoo::Aardvark", "Aquarium::Angelfish"],
        "Scans should visit bindings in declaration order, scope by scope."
    );

    let skipped = IndexSet::from(["Zoo".to_string()]);
    assert_eq!(bindings.snapshot(&skipped).len(), 1, "Skipped scopes shouldn't be visited.");
}

#[test]
fn test_scope_handle() {
    let bindings = Bindings::new();
    let zoo = bindings.scope("Zoo");
    let lion = Rc::new("lion");

    zoo.bind("Lion", &lion);
    assert_eq!(zoo.name(), "Zoo");
    assert_eq!(zoo.lookup("Lion"), Some(InstanceId::of(&lion)));
    assert_eq!(bindings.lookup("Zoo", "Lion"), Some(InstanceId::of(&lion)));

    assert!(zoo.unbind("Lion"));
    assert_eq!(bindings.lookup("Zoo", "Lion"), None);
}

#[test]
fn test_shared_handles() {
    let bindings = Bindings::new();
    let clone = bindings.clone();
    let value: Rc<dyn std::any::Any> = Rc::new(1.5_f64);

    clone.bind("Main", "Value", &value);
    assert_eq!(bindings.lookup("Main", "Value"), Some(InstanceId::of(&value)));
}

#[test]
fn test_debug_output() {
    let bindings = Bindings::new();
    let value = Rc::new(0);
    bindings.bind("Main", "Zero", &value);

    let output = format!("{bindings:?}");
    assert_eq!(output, format!("{{Main: [Zero => {}]}}", InstanceId::of(&value)));
}
