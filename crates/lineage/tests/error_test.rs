use lineage::{ConfigError, LineageError, LineageErrorKind, LineageResult, StackError, StackErrorKind};

#[test]
fn config_error_records_caller() {
    let err = ConfigError::new("conf/lineage.toml", "bad value");
    let line = line!() - 1;

    assert_eq!(err.line, line);
    assert!(err.file.ends_with("error_test.rs"));
    assert!(err.to_string().contains("in conf/lineage.toml: bad value"));
}

#[test]
fn question_mark_converts_component_errors() {
    fn install() -> LineageResult<()> {
        Err(StackError::new(StackErrorKind::GlobalAlreadySet))?
    }

    let err = install().unwrap_err();
    assert!(matches!(err.kind(), LineageErrorKind::Stack(_)));
    assert!(err.to_string().contains("Global stack capture already set"));
}

#[test]
fn kind_round_trips_through_new() {
    let err = LineageError::new(ConfigError::new("bundled defaults", "oops").into());
    assert!(matches!(err.kind(), LineageErrorKind::Config(e) if e.message == "oops"));
}
