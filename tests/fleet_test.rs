use valet::error::ValetError;
use valet::fleet::Fleet;
use valet::garage::Garage;
use valet::journal::{Journal, MovementAction};

#[test]
fn register_and_lookup() {
    let mut fleet = Fleet::new();
    assert!(fleet.is_empty());

    fleet.register("AB-123").unwrap();
    assert_eq!(fleet.len(), 1);
    assert!(fleet.contains("AB-123"));
    assert!(fleet.vehicle("AB-123").is_some());
    assert!(fleet.vehicle("ZZ-999").is_none());

    // Duplicate and blank plates are rejected
    let err = fleet.register("AB-123").unwrap_err();
    assert!(matches!(err, ValetError::Validation { .. }));
    assert!(fleet.register("  ").is_err());
    assert_eq!(fleet.len(), 1);
}

#[test]
fn enter_and_exit_by_plate() {
    let mut fleet = Fleet::new();
    fleet.register("AB-123").unwrap();
    let castres = Garage::new("Castres").unwrap();

    fleet.enter("AB-123", &castres).unwrap();
    assert!(fleet.vehicle("AB-123").unwrap().is_in_garage());

    fleet.exit("AB-123").unwrap();
    assert!(!fleet.vehicle("AB-123").unwrap().is_in_garage());

    // Unregistered plates are a validation error, not a panic
    assert!(fleet.enter("ZZ-999", &castres).is_err());
    assert!(fleet.exit("ZZ-999").is_err());
}

#[test]
fn replay_sample_journal() {
    let journal = Journal::sample();
    assert!(!journal.is_empty());

    let mut fleet = Fleet::new();
    let summary = journal.replay(&mut fleet).unwrap();
    assert_eq!(summary.applied, journal.len());
    assert_eq!(summary.rejected, 0);

    // Both plates were registered on first sight
    assert_eq!(fleet.len(), 2);

    let first = fleet.vehicle("AB-123-CD").unwrap();
    assert!(first.is_in_garage());
    assert_eq!(first.current_garage().map(Garage::name), Some("Castres"));
    assert_eq!(first.sessions().len(), 3);
    assert_eq!(first.visited_garages().len(), 2);

    let second = fleet.vehicle("EF-456-GH").unwrap();
    assert!(second.is_in_garage());
    assert_eq!(second.sessions().len(), 1);
}

#[test]
fn replay_rejects_precondition_violations_and_keeps_going() {
    let yaml = r#"
movements:
  - plate: AB-123-CD
    action: enter
    garage: Castres
  - plate: AB-123-CD
    action: enter
    garage: Albi
  - plate: EF-456-GH
    action: exit
  - plate: AB-123-CD
    action: exit
"#;
    let journal = Journal::from_yaml_str(yaml).unwrap();
    let mut fleet = Fleet::new();
    let summary = journal.replay(&mut fleet).unwrap();

    // Second enter and the exit of a never-parked vehicle are rejected
    assert_eq!(summary.applied, 2);
    assert_eq!(summary.rejected, 2);

    let first = fleet.vehicle("AB-123-CD").unwrap();
    assert!(!first.is_in_garage());
    assert_eq!(first.sessions().len(), 1);

    // The rejected exit still registered the plate
    let second = fleet.vehicle("EF-456-GH").unwrap();
    assert!(second.sessions().is_empty());
}

#[test]
fn replay_rejects_enter_without_garage() {
    let yaml = "movements:\n  - plate: AB-123-CD\n    action: enter\n";
    let journal = Journal::from_yaml_str(yaml).unwrap();
    let mut fleet = Fleet::new();
    let summary = journal.replay(&mut fleet).unwrap();
    assert_eq!(summary.applied, 0);
    assert_eq!(summary.rejected, 1);
}

#[test]
fn journal_parses_explicit_timestamps() {
    let yaml = r#"
movements:
  - plate: AB-123-CD
    action: enter
    garage: Castres
    at: 2019-01-28T08:00:00Z
  - plate: AB-123-CD
    action: exit
    at: 2019-01-28T17:00:00Z
"#;
    let journal = Journal::from_yaml_str(yaml).unwrap();
    assert_eq!(journal.len(), 2);
    assert_eq!(journal.movements[0].action, MovementAction::Enter);
    assert_eq!(journal.movements[0].garage.as_deref(), Some("Castres"));
    assert!(journal.movements[0].at.is_some());

    let mut fleet = Fleet::new();
    let summary = journal.replay(&mut fleet).unwrap();
    assert_eq!(summary.applied, 2);

    let vehicle = fleet.vehicle("AB-123-CD").unwrap();
    let session = &vehicle.sessions()[0];
    assert_eq!(session.duration().num_hours(), 9);
}

#[test]
fn malformed_journal_is_a_serialization_error() {
    let err = Journal::from_yaml_str("movements: [unclosed").unwrap_err();
    assert!(matches!(err, ValetError::Serialization { .. }));
}
