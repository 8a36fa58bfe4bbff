use super::*;

// =============================================================
// Notification decoding
// =============================================================

#[test]
fn decodes_new_response_with_numeric_project_id() {
    let body = r#"[{
        "ID": 12,
        "UserID": 3,
        "Type": "new_response",
        "Payload": {"user_name": "Ann", "project_title": "Site", "project_id": 7, "user_id": 9},
        "Read": false,
        "CreatedAt": "2024-05-01T10:00:00Z"
    }]"#;
    let list = decode_notifications(body).unwrap();
    assert_eq!(list.len(), 1);
    let n = &list[0];
    assert_eq!(n.id, Some(12));
    assert_eq!(n.user_id, Some(3));
    assert!(!n.read);
    assert_eq!(n.created_at.as_deref(), Some("2024-05-01T10:00:00Z"));
    assert_eq!(
        n.kind,
        NotificationKind::NewResponse {
            responder: Some("Ann".to_owned()),
            project: ProjectRef {
                id: Some("7".to_owned()),
                title: Some("Site".to_owned()),
            },
        }
    );
}

#[test]
fn decodes_response_accepted_with_string_project_id() {
    let body = r#"[{"Type": "response_accepted", "Payload": {"project_title": "Site", "project_id": "42"}, "Read": true}]"#;
    let list = decode_notifications(body).unwrap();
    assert!(list[0].read);
    assert_eq!(
        list[0].kind,
        NotificationKind::ResponseAccepted {
            project: ProjectRef {
                id: Some("42".to_owned()),
                title: Some("Site".to_owned()),
            },
        }
    );
}

#[test]
fn unknown_type_keeps_type_string() {
    let list = decode_notifications(r#"[{"Type": "project_closed", "Payload": {}, "Read": false}]"#).unwrap();
    assert_eq!(list[0].kind, NotificationKind::Unknown("project_closed".to_owned()));
}

#[test]
fn null_payload_yields_empty_fields() {
    let list = decode_notifications(r#"[{"Type": "new_response", "Payload": null, "Read": false}]"#).unwrap();
    assert_eq!(
        list[0].kind,
        NotificationKind::NewResponse {
            responder: None,
            project: ProjectRef::default(),
        }
    );
}

#[test]
fn falsy_payload_values_decode_to_none() {
    let body = r#"[{"Type": "new_response", "Payload": {"user_name": "", "project_title": null, "project_id": 0}}]"#;
    let list = decode_notifications(body).unwrap();
    assert_eq!(
        list[0].kind,
        NotificationKind::NewResponse {
            responder: None,
            project: ProjectRef::default(),
        }
    );
}

#[test]
fn missing_read_defaults_to_unread() {
    let list = decode_notifications(r#"[{"Type": "response_accepted"}]"#).unwrap();
    assert!(!list[0].read);
    assert_eq!(list[0].id, None);
}

// =============================================================
// List-level decoding
// =============================================================

#[test]
fn null_body_is_empty_list() {
    assert!(decode_notifications("null").unwrap().is_empty());
}

#[test]
fn empty_array_is_empty_list() {
    assert!(decode_notifications("[]").unwrap().is_empty());
}

#[test]
fn object_body_is_rejected() {
    assert!(decode_notifications(r#"{"error": "unauthorized"}"#).is_err());
}

#[test]
fn html_body_is_rejected() {
    assert!(decode_notifications("<!doctype html><title>Login</title>").is_err());
}
