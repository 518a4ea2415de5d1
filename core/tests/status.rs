use artistriage_core::Status;

#[test]
fn test_status_default() {
    assert_eq!(Status::default(), Status::Unlabeled);
}

#[test]
fn test_status_symbols() {
    assert_eq!(Status::Unlabeled.symbol(), "");
    assert_eq!(Status::Positive.symbol(), "+");
    assert_eq!(Status::Negative.symbol(), "-");
    assert_eq!(Status::Neutral.symbol(), "=");
    assert_eq!(Status::Potential.symbol(), "*");
}

#[test]
fn test_status_from_symbol() {
    assert_eq!(Status::from_symbol(""), Some(Status::Unlabeled));
    assert_eq!(Status::from_symbol("+"), Some(Status::Positive));
    assert_eq!(Status::from_symbol("*"), Some(Status::Potential));
    assert_eq!(Status::from_symbol("?"), None);
    assert_eq!(Status::from_symbol(" +"), None);
}

#[test]
fn test_status_user_assignable() {
    assert!(Status::Positive.is_user_assignable());
    assert!(Status::Negative.is_user_assignable());
    assert!(Status::Neutral.is_user_assignable());
    assert!(!Status::Potential.is_user_assignable());
    assert!(!Status::Unlabeled.is_user_assignable());
}

#[test]
fn test_status_display() {
    assert_eq!(Status::Potential.to_string(), "potential");
    assert_eq!(Status::Neutral.as_str(), "neutral");
}

#[test]
fn test_status_serde_serialization() {
    let positive_json = serde_json::to_string(&Status::Positive).unwrap();
    let potential_json = serde_json::to_string(&Status::Potential).unwrap();

    assert_eq!(positive_json, r#""positive""#);
    assert_eq!(potential_json, r#""potential""#);
}

#[test]
fn test_status_serde_deserialization() {
    let unlabeled: Status = serde_json::from_str(r#""unlabeled""#).unwrap();
    let negative: Status = serde_json::from_str(r#""negative""#).unwrap();

    assert_eq!(unlabeled, Status::Unlabeled);
    assert_eq!(negative, Status::Negative);
    assert!(serde_json::from_str::<Status>(r#""+""#).is_err());
}
