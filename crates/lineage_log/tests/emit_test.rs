use lineage_error::{CodedError, Project, Projection, register_projection};
use lineage_log::test_utils::{CapturedEvent, CapturedLogs, capture_logs};
use lineage_log::{ErrorLogExt, log_error};
use lineage_stack::{DisabledCapture, FixedCapture, Frame, set_default};
use serde_json::json;
use tracing::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
enum DomainErr {
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
enum DbErr {
    ZeroRows,
}

fn recorded(logs: &CapturedLogs) -> Vec<CapturedEvent> {
    logs.events()
        .into_iter()
        .filter(|event| event.message == "Error recorded")
        .collect()
}

#[test]
fn coded_error_logs_projection_fields() {
    let _stack = set_default(DisabledCapture);
    let (logs, _guard) = capture_logs();

    let err = CodedError::new(DomainErr::NotFound)
        .with_data("user_id", 123)
        .with_tags(["iam"])
        .with_cause(CodedError::new(DbErr::ZeroRows));
    err.log_at(Level::WARN);

    let events = recorded(&logs);
    assert_eq!(events.len(), 1);

    let event = &events[0];
    assert_eq!(event.level, Level::WARN);
    assert_eq!(event.field("code"), Some("not_found"));
    assert_eq!(event.field("error"), Some("not_found: zero_rows"));
    assert_eq!(event.field("tags"), Some(r#"["iam"]"#));
    assert!(event.field("stack").is_none());

    let data: serde_json::Value = serde_json::from_str(event.field("data").unwrap()).unwrap();
    assert_eq!(data, json!({ "user_id": 123 }));

    let wrapped: serde_json::Value =
        serde_json::from_str(event.field("wrapped").unwrap()).unwrap();
    assert_eq!(wrapped["code"], "zero_rows");
    assert_eq!(wrapped["error"], "zero_rows");

    let projection: Projection = serde_json::from_str(event.field("projection").unwrap()).unwrap();
    assert_eq!(projection, err.projection());
}

#[test]
fn untagged_error_omits_empty_fields() {
    let _stack = set_default(DisabledCapture);
    let (logs, _guard) = capture_logs();

    CodedError::new(DomainErr::NotFound).log();

    let events = recorded(&logs);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::ERROR);
    for absent in ["data", "tags", "wrapped", "stack"] {
        assert!(events[0].field(absent).is_none(), "{absent}");
    }
}

#[test]
fn plain_cause_logs_as_message_and_stack_is_rendered() {
    let _stack = set_default(FixedCapture::new(vec![Frame::new(
        "src/users.rs",
        17,
        "app::users::load",
    )]));
    let (logs, _guard) = capture_logs();

    CodedError::new(DomainErr::NotFound)
        .with_message("no such user")
        .log();

    let events = recorded(&logs);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].field("wrapped"), Some("no such user"));
    assert_eq!(
        events[0].field("stack"),
        Some("\n    at src/users.rs:17 app::users::load()")
    );
}

#[test]
fn every_level_is_honored() {
    let _stack = set_default(DisabledCapture);
    let (logs, _guard) = capture_logs();

    let err = CodedError::new(DomainErr::NotFound);
    for level in [Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE] {
        err.log_at(level);
    }

    let levels: Vec<Level> = recorded(&logs).into_iter().map(|event| event.level).collect();
    assert_eq!(
        levels,
        vec![Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE]
    );
}

#[test]
fn foreign_error_logs_message_only() {
    let (logs, _guard) = capture_logs();

    log_error(Level::INFO, &std::io::Error::other("disk full"));

    let events = recorded(&logs);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].field("error"), Some("disk full"));
    assert!(events[0].field("code").is_none());
    assert!(events[0].field("projection").is_none());
}

#[test]
fn erased_coded_error_logs_projection() {
    let _stack = set_default(DisabledCapture);
    let (logs, _guard) = capture_logs();

    let err: Box<dyn std::error::Error + Send + Sync> =
        Box::new(CodedError::new(DomainErr::NotFound).with_message("no such user"));
    log_error(Level::ERROR, err.as_ref());

    let events = recorded(&logs);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].field("code"), Some("not_found"));
    assert_eq!(events[0].field("error"), Some("not_found: no such user"));
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("rate limited")]
struct RateLimited;

impl Project for RateLimited {
    fn projection(&self) -> Projection {
        Projection {
            code: "rate_limited".to_string(),
            message: self.to_string(),
            data: Default::default(),
            tags: vec!["quota".to_string()],
            wrapped: None,
            stack: None,
        }
    }
}

#[test]
fn registered_projection_is_used() {
    register_projection::<RateLimited>();
    let (logs, _guard) = capture_logs();

    log_error(Level::WARN, &RateLimited);

    let events = recorded(&logs);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].field("code"), Some("rate_limited"));
    assert_eq!(events[0].field("tags"), Some(r#"["quota"]"#));
}

#[test]
fn capture_is_thread_scoped() {
    let (logs, _guard) = capture_logs();

    std::thread::spawn(|| {
        let _stack = set_default(DisabledCapture);
        CodedError::new(DomainErr::NotFound).log();
    })
    .join()
    .unwrap();

    assert!(recorded(&logs).is_empty());
}

#[test]
fn clear_drops_captured_events() {
    let _stack = set_default(DisabledCapture);
    let (logs, _guard) = capture_logs();

    CodedError::new(DomainErr::NotFound).log();
    assert_eq!(recorded(&logs).len(), 1);

    logs.clear();
    assert!(logs.events().is_empty());
    assert_eq!(logs.count_at_level(Level::ERROR), 0);
}
