use mapsync_diff::{
    DiffConfig, DiffElement, DiffError, DiffOutcome, MalformedDiffPolicy, RawDiffElement,
    UpdatedElementsHandler, parse_diff_json,
};
use mapsync_types::{ElementKey, ElementType};
use pretty_assertions::assert_eq;

// ── Outcome classification ───────────────────────────────────────

#[test]
fn updated_outcome() {
    let diff = DiffElement::updated(ElementType::Node, -1, 10, 1);
    assert_eq!(diff.outcome(), DiffOutcome::Updated { id: 10, version: 1 });
    assert_eq!(diff.key(), ElementKey::new(ElementType::Node, -1));
}

#[test]
fn deleted_outcome() {
    let diff = DiffElement::deleted(ElementType::Way, 4);
    assert_eq!(diff.outcome(), DiffOutcome::Deleted);
    assert!(!diff.is_malformed());
}

#[test]
fn server_id_without_version_is_malformed() {
    let diff = DiffElement {
        element_type: ElementType::Relation,
        client_id: -1,
        server_id: Some(5),
        server_version: None,
    };
    assert_eq!(diff.outcome(), DiffOutcome::Malformed);
    assert!(diff.is_malformed());
}

#[test]
fn version_without_server_id_counts_as_deleted() {
    let diff = DiffElement {
        element_type: ElementType::Node,
        client_id: -1,
        server_id: None,
        server_version: Some(3),
    };
    assert_eq!(diff.outcome(), DiffOutcome::Deleted);
}

// ── Raw records ──────────────────────────────────────────────────

#[test]
fn raw_resolve_known_type() {
    let raw = RawDiffElement {
        element_type: Some("Way".to_string()),
        client_id: -7,
        server_id: Some(70),
        server_version: Some(1),
    };
    assert_eq!(
        raw.resolve().unwrap(),
        DiffElement::updated(ElementType::Way, -7, 70, 1)
    );
}

#[test]
fn raw_resolve_unknown_type() {
    let raw = RawDiffElement {
        element_type: Some("area".to_string()),
        client_id: -7,
        server_id: None,
        server_version: None,
    };
    assert!(matches!(raw.resolve(), Err(DiffError::UnknownElementType(t)) if t == "area"));
}

#[test]
fn raw_resolve_missing_type() {
    let raw = RawDiffElement {
        element_type: None,
        client_id: 1,
        server_id: None,
        server_version: None,
    };
    assert!(matches!(raw.resolve(), Err(DiffError::UnknownElementType(_))));
}

#[test]
fn parse_diff_json_accepts_field_aliases() {
    let json = r#"[
        {"type": "node", "client_id": -1, "server_id": 10, "server_version": 1},
        {"type": "way", "clientId": -2, "serverId": 20, "serverVersion": 1},
        {"type": "relation", "old_id": -3},
        {"type": "bogus", "client_id": -4}
    ]"#;
    let raws = parse_diff_json(json).unwrap();
    assert_eq!(raws.len(), 4);
    assert_eq!(raws[1].server_id, Some(20));
    assert_eq!(raws[2].server_id, None);

    let mut handler = UpdatedElementsHandler::new();
    for raw in raws {
        handler.handle_raw(raw).unwrap();
    }
    assert_eq!(handler.len(), 3);
    assert_eq!(
        handler.get_diff(ElementType::Relation, -3).map(DiffElement::outcome),
        Some(DiffOutcome::Deleted)
    );
}

#[test]
fn parse_diff_json_rejects_invalid_document() {
    assert!(matches!(parse_diff_json("{not json"), Err(DiffError::Json(_))));
}

#[test]
fn handle_raw_propagates_malformed_rejection() {
    let mut handler = UpdatedElementsHandler::with_config(DiffConfig {
        malformed: MalformedDiffPolicy::Reject,
    });
    let raw = RawDiffElement {
        element_type: Some("node".to_string()),
        client_id: -1,
        server_id: Some(1),
        server_version: None,
    };
    assert!(matches!(
        handler.handle_raw(raw),
        Err(DiffError::MalformedDiff { .. })
    ));
}

// ── Config ───────────────────────────────────────────────────────

#[test]
fn config_defaults_to_ignore() {
    assert_eq!(DiffConfig::default().malformed, MalformedDiffPolicy::Ignore);
}

#[test]
fn config_from_json() {
    let config: DiffConfig = serde_json::from_str(r#"{"malformed": "reject"}"#).unwrap();
    assert_eq!(config.malformed, MalformedDiffPolicy::Reject);
    let config: DiffConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, DiffConfig::default());
}

#[test]
fn error_messages() {
    let err = DiffError::MalformedDiff {
        key: ElementKey::new(ElementType::Node, -1),
    };
    assert!(err.to_string().contains("node/-1"));
    assert_eq!(
        DiffError::UnknownElementType("x".into()).to_string(),
        "unknown element type: x"
    );
}

// ── Lenient kind tags ────────────────────────────────────────────

#[test]
fn parse_diff_json_keeps_records_next_to_non_string_type() {
    let json = r#"[
        {"type": "node", "client_id": -1, "server_id": 10, "server_version": 1},
        {"type": 7, "client_id": -2, "server_id": 20, "server_version": 1},
        {"type": {"kind": "way"}, "client_id": -3},
        {"type": null, "client_id": -4}
    ]"#;
    let raws = parse_diff_json(json).unwrap();
    assert_eq!(raws.len(), 4);
    assert_eq!(raws[0].element_type.as_deref(), Some("node"));
    assert!(raws[1..].iter().all(|r| r.element_type.is_none()));

    let mut handler = UpdatedElementsHandler::new();
    for raw in raws {
        handler.handle_raw(raw).unwrap();
    }
    assert_eq!(handler.len(), 1);
    assert_eq!(
        handler.get_diff(ElementType::Node, -1),
        Some(&DiffElement::updated(ElementType::Node, -1, 10, 1))
    );
}
