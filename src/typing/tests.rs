#![cfg(test)]

use std::any::Any;

use super::*;

#[test]
fn test_comply_and_refuse() {
    let word = "kettle";

    let inquiry = inquire(word).named("word")
        .comply("start with a consonant", |w| !w.starts_with(['a', 'e', 'i', 'o', 'u']))
        .unwrap();
    assert_eq!(inquiry.subject(), "word");
    assert_eq!(inquiry.value(), "kettle");

    let error = inquire(word).named("word")
        .refuse("contain a double letter", |w| w.as_bytes().windows(2).any(|p| p[0] == p[1]))
        .unwrap_err();
    assert_eq!(error.to_string(), "word must not contain a double letter (\"kettle\" given)");
}

#[test]
fn test_numeric_checks() {
    assert!(inquire(&1).positive().is_ok());
    assert!(inquire(&0).positive().is_err(), "Zero isn't positive.");
    assert!(inquire(&0).non_negative().is_ok());
    assert!(inquire(&f64::NAN).non_negative().is_err(), "NaN shouldn't pass comparisons.");

    let error = inquire(&-1.5).named("speed").positive().unwrap_err();
    assert_eq!(
        error,
        ArgumentError {
            subject: "speed".into(),
            requirement: "be positive".into(),
            found: "-1.5".into(),
        }
    );

    assert!(inquire(&5_u8).in_range(1..=5).is_ok());
    let error = inquire(&5_u8).in_range(1..5).unwrap_err();
    assert_eq!(error.to_string(), "value must be within 1..5 (5 given)");
}

#[test]
fn test_equality_checks() {
    assert!(inquire(&3).equal(&3).is_ok());
    assert_eq!(
        inquire(&3).equal(&4).unwrap_err().to_string(),
        "value must be equal to 4 (3 given)"
    );
    assert!(inquire(&3).not_equal(&4).is_ok());
    assert!(inquire(&3).not_equal(&3).is_err());

    let mode = "fast";
    assert!(inquire(&mode).one_of(&["fast", "slow"]).is_ok());
    assert_eq!(
        inquire(&"medium").named("mode").one_of(&["fast", "slow"]).unwrap_err().to_string(),
        "mode must be one of [\"fast\", \"slow\"] (\"medium\" given)"
    );
}

#[test]
fn test_text_checks() {
    assert!(inquire("name").present().is_ok());
    assert!(inquire(" \t").present().is_err());
    assert!(inquire(&String::new()).blank().is_ok());
    assert_eq!(
        inquire("x").named("padding").blank().unwrap_err().to_string(),
        "padding must be blank (\"x\" given)"
    );
}

#[test]
fn test_slice_checks() {
    let empty: &[u32] = &[];
    assert!(inquire(empty).not_empty().is_err());

    let weights = [0.5, 1.0, -2.0];
    let error = inquire(&weights[..]).named("weights")
        .not_empty()
        .and_then(|inquiry| inquiry.each("be non-negative", |w| *w >= 0.0))
        .unwrap_err();
    assert_eq!(error.subject, "weights[2]");
    assert_eq!(error.found, "-2.0");
}

#[test]
fn test_kind_of() {
    let value: Box<dyn Any> = Box::new(42_u32);

    let number = inquire(&*value).named("answer").kind_of::<u32>().unwrap();
    assert_eq!(*number.positive().unwrap().value(), 42);

    let error = inquire(&*value).named("answer").kind_of::<String>().unwrap_err();
    assert_eq!(error.expected, std::any::type_name::<String>());
    assert!(error.to_string().starts_with("answer must be of type"));
}

#[test]
fn test_inquiry_error() {
    let error: InquiryError = inquire(&0).positive().unwrap_err().into();
    assert!(error.is_argument());

    let value: Box<dyn Any> = Box::new(0_i8);
    let error: InquiryError = inquire(&*value).kind_of::<u8>().unwrap_err().into();
    assert!(error.is_type());
}
