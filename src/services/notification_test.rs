use serde_json::json;

use super::*;
use crate::state::test_helpers;

fn with_data(kind: NotificationKind, data: serde_json::Value) -> Notification {
    let mut n = test_helpers::dummy_notification("n", "1", kind);
    n.data = Some(data);
    n
}

fn path(n: &Notification, role: Role) -> String {
    destination(n, role).path
}

// =============================================================================
// feed & read state
// =============================================================================

#[tokio::test]
async fn list_is_per_user() {
    let state = test_helpers::test_app_state();
    assert_eq!(list_notifications(&state, "1").await.len(), 4);
    assert_eq!(list_notifications(&state, "2").await.len(), 8);
    assert!(list_notifications(&state, "8").await.is_empty());
}

#[tokio::test]
async fn mark_as_read_sets_flag() {
    let state = test_helpers::test_app_state();
    let n = mark_as_read(&state, "1").await.unwrap();
    assert!(n.is_read);
    let feed = list_notifications(&state, "1").await;
    assert!(feed.iter().find(|n| n.id == "1").unwrap().is_read);
}

#[tokio::test]
async fn mark_missing_notification_is_not_found() {
    let state = test_helpers::test_app_state();
    let err = mark_as_read(&state, "999").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { entity: "notification", .. }));
}

#[tokio::test]
async fn mark_all_marks_only_that_users_unread() {
    let state = test_helpers::test_app_state();
    assert_eq!(mark_all_as_read(&state, "2").await.unwrap(), 5);
    assert!(list_notifications(&state, "2").await.iter().all(|n| n.is_read));

    // Other users are untouched.
    assert!(list_notifications(&state, "1").await.iter().any(|n| !n.is_read));

    // Nothing left to mark.
    assert_eq!(mark_all_as_read(&state, "2").await.unwrap(), 0);
}

#[tokio::test]
async fn push_appends_unread_notification() {
    let state = test_helpers::test_app_state();
    {
        let mut store = state.store.write().await;
        push(
            &mut store,
            "8",
            Notice {
                kind: NotificationKind::Approval,
                title: ("Profile Approved", "تمت الموافقة على الملف الشخصي"),
                message: ("ok".into(), "تم".into()),
                data: json!({ "profileId": "8" }),
            },
        );
    }
    let feed = list_notifications(&state, "8").await;
    assert_eq!(feed.len(), 1);
    assert!(!feed[0].is_read);
    assert_eq!(feed[0].data_str("profileId"), Some("8"));
}

// =============================================================================
// destination
// =============================================================================

#[test]
fn admin_actions_route_to_admin_tabs() {
    let cases = [
        ("review_provider", "/admin?tab=providers"),
        ("verify_documents", "/admin?tab=providers"),
        ("review_service", "/admin?tab=services"),
        ("bulk_approve", "/admin?tab=services"),
        ("investigate", "/admin?tab=users"),
        ("support_needed", "/admin?tab=dashboard"),
        ("view_report", "/admin?tab=dashboard"),
        ("something_else", "/admin"),
    ];
    for (action, expected) in cases {
        let n = with_data(NotificationKind::Approval, json!({ "action": action }));
        assert_eq!(path(&n, Role::Admin), expected, "action {action}");
    }
}

#[test]
fn admin_without_action_uses_regular_routing() {
    let n = with_data(NotificationKind::Message, json!({ "type": "system_alert" }));
    assert_eq!(path(&n, Role::Admin), "/chat");
}

#[test]
fn action_is_ignored_for_non_admins() {
    let n = with_data(NotificationKind::Booking, json!({ "bookingId": "1", "action": "support_needed" }));
    assert_eq!(path(&n, Role::User), "/bookings");
}

#[test]
fn message_routes_to_provider_chat() {
    let n = with_data(NotificationKind::Message, json!({ "providerId": "3", "chatRoomId": "1-3" }));
    assert_eq!(path(&n, Role::User), "/chat?provider=3");
}

#[test]
fn booking_without_id_routes_to_dashboard() {
    let n = with_data(NotificationKind::Booking, json!({ "userId": "4" }));
    assert_eq!(path(&n, Role::User), "/dashboard");
}

#[test]
fn review_routes_depend_on_role() {
    let n = with_data(NotificationKind::Review, json!({ "providerId": "7" }));
    assert_eq!(path(&n, Role::Provider), "/profile");
    assert_eq!(path(&n, Role::User), "/provider/7");

    let n = with_data(NotificationKind::Review, json!({ "reviewId": "1" }));
    assert_eq!(path(&n, Role::User), "/dashboard");
}

#[test]
fn approval_routes_to_profile() {
    let n = with_data(NotificationKind::Approval, json!({ "profileId": "4" }));
    assert_eq!(path(&n, Role::Provider), "/profile");
}

#[test]
fn no_payload_routes_by_kind() {
    let route = |kind| path(&test_helpers::dummy_notification("n", "1", kind), Role::User);
    assert_eq!(route(NotificationKind::Message), "/chat");
    assert_eq!(route(NotificationKind::Booking), "/bookings");
    assert_eq!(route(NotificationKind::Review), "/profile");
    assert_eq!(route(NotificationKind::Approval), "/profile");
}
