use lineage::{CodedError, LineageConfig, LineageErrorKind, StackConfig, StackErrorKind, init};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
enum AppErr {
    Startup,
}

#[test]
fn init_installs_capture_once() {
    let config = LineageConfig::default().with_stack(StackConfig::default().with_enabled(false));

    init(&config).unwrap();

    let err = CodedError::new(AppErr::Startup);
    assert!(err.stack().is_none());

    let again = init(&config).unwrap_err();
    match again.kind() {
        LineageErrorKind::Stack(stack) => {
            assert_eq!(stack.kind(), &StackErrorKind::GlobalAlreadySet)
        }
        other => panic!("expected a stack error, got {other}"),
    }
}
