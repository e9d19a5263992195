use lineage_error::{CodedError, chain, find, find_as, has_code, root_cause};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
enum DomainErr {
    NotFound,
    BadRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
enum DbErr {
    ZeroRows,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
enum CacheErr {
    Miss,
}

fn request_chain() -> CodedError<DomainErr> {
    let db = CodedError::new(DbErr::ZeroRows)
        .with_data("req_id", 10)
        .with_message("db returned no rows");

    CodedError::new(DomainErr::NotFound)
        .with_data("user_id", 123)
        .with_data("trace", "1234")
        .with_cause(db)
}

#[test]
fn message_renders_the_whole_chain() {
    let err = CodedError::new("A").with_cause(CodedError::new("B").with_message("m"));
    assert_eq!(err.to_string(), "A: B: m");
}

#[test]
fn leaf_message_is_the_code() {
    let err = CodedError::new(DomainErr::BadRequest);
    assert_eq!(err.to_string(), "bad_request");
    assert_eq!(err.code_string(), "bad_request");
    assert!(err.cause().is_none());
}

#[test]
fn find_as_projects_outer_node() {
    let err = request_chain();

    let user_id = find_as(&err, |node: &CodedError<DomainErr>| {
        assert_eq!(*node.code(), DomainErr::NotFound);
        node.get("user_id").cloned()
    });

    assert_eq!(user_id, Some(Some(json!(123))));
}

#[test]
fn find_as_projects_inner_node() {
    let err = request_chain();

    let req_id = find_as(&err, |node: &CodedError<DbErr>| {
        assert_eq!(*node.code(), DbErr::ZeroRows);
        node.get("req_id").cloned()
    });

    assert_eq!(req_id, Some(Some(json!(10))));
}

#[test]
fn find_as_misses_unrelated_code_type() {
    let err = request_chain();
    let found = find_as(&err, |node: &CodedError<CacheErr>| *node.code());
    assert!(found.is_none());
}

#[test]
fn find_returns_typed_node() {
    let err = request_chain();
    let db = find::<DbErr>(&err).unwrap();
    assert_eq!(db.to_string(), "zero_rows: db returned no rows");
    assert!(find::<CacheErr>(&err).is_none());
}

#[test]
fn has_code_checks_every_node() {
    let err = request_chain();
    assert!(has_code(&err, &DomainErr::NotFound));
    assert!(has_code(&err, &DbErr::ZeroRows));
    assert!(!has_code(&err, &DomainErr::BadRequest));
    assert!(!has_code(&err, &CacheErr::Miss));
}

#[test]
fn has_code_sees_repeated_code_types_deeper_in_chain() {
    let err = CodedError::new(DomainErr::NotFound)
        .with_cause(CodedError::new(DbErr::ZeroRows).with_cause(CodedError::new(DomainErr::BadRequest)));

    assert!(has_code(&err, &DomainErr::BadRequest));
    // find stops at the first node of the type
    assert_eq!(*find::<DomainErr>(&err).unwrap().code(), DomainErr::NotFound);
}

#[test]
fn chain_walks_outermost_first() {
    let err = request_chain();
    let messages: Vec<String> = chain(&err).map(|e| e.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "not_found: zero_rows: db returned no rows",
            "zero_rows: db returned no rows",
            "db returned no rows",
        ]
    );
    assert_eq!(err.chain().count(), 3);
}

#[test]
fn root_cause_is_innermost() {
    let err = request_chain();
    assert_eq!(root_cause(&err).to_string(), "db returned no rows");

    let leaf = CodedError::new(CacheErr::Miss);
    assert_eq!(leaf.root_cause().to_string(), "miss");
}

#[test]
fn foreign_causes_are_walked() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing");
    let err = CodedError::new(DomainErr::NotFound).with_cause(io);

    assert_eq!(err.to_string(), "not_found: config.toml missing");
    assert!(root_cause(&err).downcast_ref::<std::io::Error>().is_some());
}

#[test]
fn boxed_causes_are_walked() {
    let boxed: lineage_error::BoxError = Box::new(CodedError::new(DbErr::ZeroRows));
    let err = CodedError::new(DomainErr::NotFound).with_boxed_cause(boxed);

    assert!(has_code(&err, &DbErr::ZeroRows));
}

#[test]
fn with_cause_replaces_previous_cause() {
    let err = CodedError::new(DomainErr::NotFound)
        .with_message("first")
        .with_message("second");
    assert_eq!(err.to_string(), "not_found: second");
}

#[test]
fn take_cause_detaches() {
    let mut err = request_chain();
    let cause = err.take_cause().unwrap();
    assert_eq!(err.to_string(), "not_found");
    assert!(has_code(cause.as_ref(), &DbErr::ZeroRows));
}

#[test]
fn question_mark_converts_codes() {
    fn lookup() -> lineage_error::CodedResult<(), DomainErr> {
        Err(DomainErr::NotFound)?
    }

    let err = lookup().unwrap_err();
    assert_eq!(*err.code(), DomainErr::NotFound);
}
