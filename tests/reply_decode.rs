use funding_api::types::{FieldError, FieldPath, PathSegment, Reply};
use funding_api::Error;
use serde_json::json;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn decode_success_object() {
    let reply = Reply::decode(r#"{"url": "/proposals/new-wallet"}"#).unwrap();
    match reply {
        Reply::Success(value) => assert_eq!(value, json!({"url": "/proposals/new-wallet"})),
        _ => panic!("expected a success reply"),
    }
}

#[test]
fn decode_success_non_object() {
    let reply = Reply::decode(r#"[1, 2, 3]"#).unwrap();
    match reply {
        Reply::Success(value) => assert_eq!(value, json!([1, 2, 3])),
        _ => panic!("expected a success reply"),
    }
}

#[test]
fn decode_single_error() {
    let reply = Reply::decode(r#"{"error": "bad_request"}"#).unwrap();
    match reply {
        Reply::Failure(value) => assert_eq!(value, json!("bad_request")),
        _ => panic!("expected a failure reply"),
    }
}

#[test]
fn decode_single_error_any_json_value() {
    let reply = Reply::decode(r#"{"error": {"code": 13, "detail": "nope"}}"#).unwrap();
    match reply {
        Reply::Failure(value) => assert_eq!(value, json!({"code": 13, "detail": "nope"})),
        _ => panic!("expected a failure reply"),
    }
}

#[test]
fn error_takes_precedence_over_errors() {
    let body = r#"{"error": "boom", "errors": "[{\"loc\":\"email\",\"msg\":\"required\"}]"}"#;
    let reply = Reply::decode(body).unwrap();
    match reply {
        Reply::Failure(value) => assert_eq!(value, json!("boom")),
        _ => panic!("expected the error field to win"),
    }
}

#[test]
fn decode_single_field_error() {
    let body = r#"{"errors": "[{\"loc\":\"email\",\"msg\":\"required\"}]"}"#;
    let reply = Reply::decode(body).unwrap();
    match reply {
        Reply::Invalid(fields) => {
            assert_eq!(fields.len(), 1);
            assert_eq!(fields[0].to_string(), "email: required");
        }
        _ => panic!("expected a validation reply"),
    }
}

#[test]
fn decode_field_errors_preserves_order() {
    let body =
        r#"{"errors": "[{\"loc\":\"email\",\"msg\":\"required\"},{\"loc\":\"age\",\"msg\":\"must be positive\"}]"}"#;
    let reply = Reply::decode(body).unwrap();
    match reply {
        Reply::Invalid(fields) => {
            let messages: Vec<String> = fields.iter().map(ToString::to_string).collect();
            assert_eq!(messages, ["email: required", "age: must be positive"]);
        }
        _ => panic!("expected a validation reply"),
    }
}

#[test]
fn decode_field_errors_from_validator_report() {
    let body = load_fixture("validation_errors.json");
    let reply = Reply::decode(&body).unwrap();
    match reply {
        Reply::Invalid(fields) => {
            assert_eq!(fields.len(), 2);
            assert_eq!(
                fields[0].to_string(),
                "title: ensure this value has at least 8 characters"
            );
            assert_eq!(
                fields[1].to_string(),
                "funds_target: ensure this value is greater than 0"
            );
        }
        _ => panic!("expected a validation reply"),
    }
}

#[test]
fn field_path_renders_segments_comma_joined() {
    let field: FieldError =
        serde_json::from_str(r#"{"loc": ["body", "email"], "msg": "required"}"#).unwrap();
    assert_eq!(field.to_string(), "body,email: required");

    let field: FieldError =
        serde_json::from_str(r#"{"loc": ["items", 0, "amount"], "msg": "must be positive"}"#)
            .unwrap();
    assert_eq!(field.to_string(), "items,0,amount: must be positive");
}

#[test]
fn field_path_accepts_bare_name() {
    let path: FieldPath = serde_json::from_str(r#""email""#).unwrap();
    assert_eq!(path.to_string(), "email");

    let segment: PathSegment = serde_json::from_str("3").unwrap();
    assert_eq!(segment.to_string(), "3");
}

#[test]
fn decode_malformed_body_is_an_error() {
    match Reply::decode("{not valid json}") {
        Err(Error::MalformedJson(_)) => {}
        _ => panic!("expected a malformed JSON error"),
    }
}

#[test]
fn decode_malformed_nested_report_is_an_error() {
    let body = r#"{"errors": "{not a list}"}"#;
    match Reply::decode(body) {
        Err(Error::MalformedJson(_)) => {}
        _ => panic!("expected a malformed JSON error"),
    }
}
