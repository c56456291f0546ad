#![cfg(test)]

use std::collections::HashMap;

use super::*;

#[test]
fn test_constant_format() {
    let format = NameFormat::Constant;
    for valid in ["A", "Water", "H2O", "Cl_minus", "Ärger"] {
        assert!(format.accepts(valid), "{valid:?} should be accepted.");
    }
    for invalid in ["", "water", "_Water", "2H", "Hydrogen peroxide", "Na+"] {
        assert!(!format.accepts(invalid), "{invalid:?} should be rejected.");
    }
}

#[test]
fn test_any_format() {
    let format = NameFormat::Any;
    assert!(format.accepts("lowercase"));
    assert!(format.accepts("Na+"));
    assert!(!format.accepts(""));
    assert!(!format.accepts("two words"));
}

#[test]
fn test_invalid_name_message() {
    let error = NameFormat::Constant.validate("water").unwrap_err();
    assert_eq!(
        error.to_string(),
        "invalid name \"water\", expected an uppercase letter followed by letters, digits or '_'"
    );
}

#[test]
fn test_name_lookup_by_str() {
    let mut names = HashMap::new();
    names.insert(Name::from("Water"), 1);

    assert_eq!(names.get("Water"), Some(&1), "Names should be usable as keys looked up by str.");
    assert_eq!(format!("{:?}", Name::from("Water")), ":Water");
    assert_eq!(Name::from("Water"), "Water");
}

#[test]
fn test_error_flattening() {
    let not_found = NotFoundError {
        subject: Subject::Name(Name::from("Nobody")),
        registry: "Species".into(),
    };
    assert_eq!(not_found.to_string(), "name Nobody is not registered in Species");

    let error = Error::from(SetNameError::from(not_found));
    assert!(error.is_not_found(), "Operation errors should flatten into the module error.");

    let error = Error::from(ConfigurationError::from(HookAlreadySetError { hook: "on_name_query" }));
    assert_eq!(error.to_string(), "hook on_name_query has already been set");
}
