use valet::error::ValetError;

#[test]
fn error_constructors_group_1() {
    assert!(matches!(
        ValetError::already_parked("AB-123", "Castres"),
        ValetError::AlreadyParked { .. }
    ));
    assert!(matches!(
        ValetError::not_parked("AB-123"),
        ValetError::NotParked { .. }
    ));
    assert!(matches!(
        ValetError::session_closed("abc"),
        ValetError::SessionClosed { .. }
    ));
}

#[test]
fn error_constructors_group_2() {
    assert!(matches!(
        ValetError::validation("f", "m"),
        ValetError::Validation { .. }
    ));
    assert!(matches!(ValetError::config("x"), ValetError::Config { .. }));
    assert!(matches!(ValetError::io("x"), ValetError::Io { .. }));
    let ser = ValetError::Serialization {
        message: "s".into(),
    };
    assert!(matches!(ser, ValetError::Serialization { .. }));
}

#[test]
fn display_messages() {
    let e = ValetError::already_parked("AB-123", "Castres");
    assert_eq!(
        format!("{}", e),
        "vehicle AB-123 is already parked in garage Castres"
    );

    let e = ValetError::not_parked("AB-123");
    assert_eq!(
        format!("{}", e),
        "vehicle AB-123 is not currently parked in any garage"
    );

    let e = ValetError::validation("field", "bad");
    let s = format!("{}", e);
    assert!(s.contains("Validation error"));
}

#[test]
fn state_violations_are_recoverable() {
    assert!(ValetError::already_parked("P", "G").is_state_violation());
    assert!(ValetError::not_parked("P").is_state_violation());
    assert!(ValetError::session_closed("S").is_state_violation());
    assert!(ValetError::validation("f", "m").is_state_violation());

    assert!(!ValetError::config("x").is_state_violation());
    assert!(!ValetError::io("x").is_state_violation());
}

#[test]
fn io_errors_convert() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: ValetError = io_err.into();
    assert!(matches!(err, ValetError::Io { .. }));
    assert!(!err.is_state_violation());
}
