use super::*;
use pretty_assertions::assert_eq;

#[derive(Debug, PartialEq)]
struct Failure(&'static str);

#[test]
fn normal_return_is_right() {
    let result = run_catching(|| 42);
    assert!(result.is_right());
    assert_eq!(result.right_value(), Some(42));
}

#[test]
fn panic_with_typed_payload_is_left() {
    let result = run_catching(|| -> i32 { std::panic::panic_any(Failure("failure")) });
    assert!(result.is_left());

    let caught = result.left_value();
    let failure = caught.as_ref().and_then(Caught::downcast_ref::<Failure>);
    assert_eq!(failure, Some(&Failure("failure")));
    assert_eq!(
        caught.as_ref().map(Caught::message),
        Some("non-string panic payload")
    );
}

#[test]
fn panic_with_str_message() {
    let result = run_catching(|| -> i32 { panic!("static message") });
    let caught = result.left_value();
    assert_eq!(caught.as_ref().map(Caught::message), Some("static message"));
}

#[test]
fn panic_with_formatted_message() {
    let n = 3;
    let result = run_catching(|| -> i32 { panic!("value was {n}") });
    let caught = result.left_value();
    assert_eq!(caught.as_ref().map(Caught::message), Some("value was 3"));
    assert_eq!(
        caught.map(|c| c.to_string()),
        Some("computation panicked: value was 3".to_string())
    );
}

#[test]
fn into_payload_returns_original_value() {
    let result = run_catching(|| -> i32 { std::panic::panic_any(17_u32) });
    let payload = result.left_value().map(Caught::into_payload);
    let value = payload.and_then(|p| p.downcast::<u32>().ok()).map(|b| *b);
    assert_eq!(value, Some(17));
}

#[test]
fn caught_is_a_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}

    let result = run_catching(|| -> i32 { panic!("x") });
    if let Either::Left(caught) = &result {
        assert_error(caught);
        assert!(caught.payload().is::<&'static str>());
    } else {
        panic!("expected Left");
    }
}
