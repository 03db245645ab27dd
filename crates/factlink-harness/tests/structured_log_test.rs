//! Integration test: structured logging contract.
//!
//! Validates that:
//! 1. Emitted entries serialize to lines the validator accepts.
//! 2. Optional fields are omitted when unset.
//! 3. The validation function catches schema violations.
//! 4. LogEmitter writes correct JSONL to files.
//!
//! Run: cargo test -p factlink-harness --test structured_log_test

use factlink_harness::structured_log::{
    LogEmitter, LogEntry, LogLevel, Outcome, validate_log_file, validate_log_line,
};

#[test]
fn entries_serialize_to_valid_lines() {
    let entry = LogEntry::new("demo::001", LogLevel::Info, "acquire")
        .with_target("./libfact.so", "calculate_factorial")
        .with_input(5);
    let line = serde_json::to_string(&entry).unwrap();
    let parsed = validate_log_line(&line, 1).expect("line validates");
    assert_eq!(parsed.event, "acquire");
    assert_eq!(parsed.input, Some(5));
    assert_eq!(parsed.symbol.as_deref(), Some("calculate_factorial"));
}

#[test]
fn optional_fields_are_omitted_when_unset() {
    let entry = LogEntry::new("demo::002", LogLevel::Info, "release");
    let line = serde_json::to_string(&entry).unwrap();
    assert!(!line.contains("artifact"));
    assert!(!line.contains("outcome"));
    assert!(!line.contains("detail"));
}

#[test]
fn validation_catches_schema_violations() {
    let missing = r#"{"timestamp":"t","level":"info","event":"acquire"}"#;
    let errors = validate_log_line(missing, 3).unwrap_err();
    assert!(errors.iter().any(|e| e.field == "trace_id"));

    let bad_level = r#"{"timestamp":"t","trace_id":"x","level":"loud","event":"acquire"}"#;
    let errors = validate_log_line(bad_level, 4).unwrap_err();
    assert!(errors.iter().any(|e| e.field == "level"));

    let errors = validate_log_line("not json", 5).unwrap_err();
    assert_eq!(errors[0].field, "<json>");
}

#[test]
fn emitter_writes_validatable_jsonl_files() {
    let path = std::env::temp_dir().join(format!("factlink_log_{}.jsonl", std::process::id()));
    let _ = std::fs::remove_file(&path);
    {
        let mut emitter = LogEmitter::to_file(&path, "test-run").unwrap();
        emitter.emit(LogLevel::Info, "acquire").unwrap();
        emitter
            .emit_entry(
                LogEntry::new("", LogLevel::Info, "run")
                    .with_result(120)
                    .with_outcome(Outcome::Pass),
            )
            .unwrap();
        emitter.flush().unwrap();
    }
    let (valid, errors) = validate_log_file(&path).unwrap();
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(valid, 2);
    std::fs::remove_file(&path).unwrap();
}
