use super::*;
use crate::net::types::decode_notifications;

fn one_unread() -> Vec<Notification> {
    decode_notifications(
        r#"[{"Type": "new_response", "Payload": {"user_name": "Ann", "project_title": "Site", "project_id": 7}, "Read": false}]"#,
    )
    .unwrap()
}

// =============================================================
// Tickets
// =============================================================

#[test]
fn first_ticket_is_current() {
    let mut gate = LoadGate::default();
    let ticket = gate.begin();
    assert!(gate.is_current(ticket));
}

#[test]
fn newer_ticket_supersedes_older() {
    let mut gate = LoadGate::default();
    let stale = gate.begin();
    let fresh = gate.begin();
    assert!(!gate.is_current(stale));
    assert!(gate.is_current(fresh));
    assert_ne!(stale, fresh);
}

// =============================================================
// settle
// =============================================================

#[test]
fn superseded_response_is_dropped() {
    let mut gate = LoadGate::default();
    let stale = gate.begin();
    let _fresh = gate.begin();
    assert_eq!(gate.settle(stale, Ok(one_unread())), LoadOutcome::Stale);
    assert_eq!(gate.settle(stale, Err(ApiError::Network("offline".to_owned()))), LoadOutcome::Stale);
}

#[test]
fn entries_render_and_request_badge_mark_read() {
    let mut gate = LoadGate::default();
    let ticket = gate.begin();
    let LoadOutcome::Loaded { html, mark_read } = gate.settle(ticket, Ok(one_unread())) else {
        panic!("expected loaded outcome");
    };
    assert!(html.starts_with(r#"<a href="/project/7" class="notif-item unread">"#));
    assert_eq!(mark_read, Some(MarkReadScope::Badge));
}

#[test]
fn empty_list_renders_placeholder_without_mark_read() {
    let mut gate = LoadGate::default();
    let ticket = gate.begin();
    assert_eq!(
        gate.settle(ticket, Ok(Vec::new())),
        LoadOutcome::Loaded {
            html: r#"<div class="notif-empty">Нет уведомлений</div>"#.to_owned(),
            mark_read: None,
        }
    );
}

#[test]
fn failure_renders_error_placeholder() {
    let mut gate = LoadGate::default();
    let ticket = gate.begin();
    let error = ApiError::Status {
        endpoint: "/api/notifications".to_owned(),
        status: 500,
    };
    assert_eq!(
        gate.settle(ticket, Err(error.clone())),
        LoadOutcome::Failed {
            html: r#"<div class="notif-empty">Ошибка загрузки</div>"#.to_owned(),
            error,
        }
    );
}

// =============================================================
// MarkReadScope
// =============================================================

#[test]
fn badge_scope_keeps_unread_markers() {
    assert_eq!(
        MarkReadScope::Badge.cleanup(&Ok(())),
        Cleanup {
            remove_badge: true,
            clear_unread: false,
        }
    );
}

#[test]
fn explicit_scope_clears_badge_and_markers() {
    assert_eq!(
        MarkReadScope::BadgeAndItems.cleanup(&Ok(())),
        Cleanup {
            remove_badge: true,
            clear_unread: true,
        }
    );
}

#[test]
fn failed_request_cleans_nothing() {
    let failed = Err(ApiError::Status {
        endpoint: "/api/notifications/read".to_owned(),
        status: 403,
    });
    assert_eq!(MarkReadScope::Badge.cleanup(&failed), Cleanup::default());
    assert_eq!(MarkReadScope::BadgeAndItems.cleanup(&failed), Cleanup::default());
}
