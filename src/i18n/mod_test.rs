use std::collections::HashSet;

use super::*;
use crate::state::test_helpers;

// =============================================================================
// Language
// =============================================================================

#[test]
fn from_code_accepts_known_codes() {
    assert_eq!(Language::from_code("en"), Some(Language::En));
    assert_eq!(Language::from_code("ar"), Some(Language::Ar));
    assert_eq!(Language::from_code(" AR "), Some(Language::Ar));
}

#[test]
fn from_code_rejects_unknown() {
    assert_eq!(Language::from_code("fr"), None);
    assert_eq!(Language::from_code(""), None);
}

#[test]
fn arabic_is_rtl_english_is_ltr() {
    assert!(Language::Ar.is_rtl());
    assert_eq!(Language::Ar.direction(), Direction::Rtl);
    assert!(!Language::En.is_rtl());
    assert_eq!(Language::En.direction(), Direction::Ltr);
}

#[test]
fn pick_selects_rendition() {
    assert_eq!(Language::En.pick("Plumbing", "السباكة"), "Plumbing");
    assert_eq!(Language::Ar.pick("Plumbing", "السباكة"), "السباكة");
}

#[test]
fn language_serializes_as_code() {
    assert_eq!(serde_json::to_string(&Language::Ar).unwrap(), "\"ar\"");
    let info = serde_json::to_value(Language::Ar.info()).unwrap();
    assert_eq!(info["code"], "ar");
    assert_eq!(info["isRtl"], true);
    assert_eq!(info["direction"], "rtl");
}

// =============================================================================
// translate
// =============================================================================

#[test]
fn translate_uses_active_table() {
    assert_eq!(translate(Language::En, "nav.home"), "Home");
    assert_eq!(translate(Language::Ar, "nav.home"), "الرئيسية");
}

#[test]
fn translate_falls_back_to_key() {
    assert_eq!(translate(Language::En, "nope.missing.key"), "nope.missing.key");
    assert_eq!(translate(Language::Ar, "nope.missing.key"), "nope.missing.key");
}

#[test]
fn tables_cover_the_same_keys() {
    let en: HashSet<_> = entries(Language::En).iter().map(|(k, _)| *k).collect();
    let ar: HashSet<_> = entries(Language::Ar).iter().map(|(k, _)| *k).collect();
    assert_eq!(en, ar);
    assert_eq!(en.len(), entries(Language::En).len(), "duplicate english key");
}

// =============================================================================
// per-client selection
// =============================================================================

#[tokio::test]
async fn anonymous_client_gets_default_language() {
    let state = test_helpers::test_app_state();
    assert_eq!(current_language(&state, None).await, Language::En);
    assert_eq!(current_language(&state, Some("never-seen")).await, Language::En);
}

#[tokio::test]
async fn switching_language_changes_lookups() {
    let state = test_helpers::test_app_state();
    set_language(&state, "client-a", Language::Ar).await;

    let lang = current_language(&state, Some("client-a")).await;
    assert_eq!(lang, Language::Ar);
    assert_eq!(translate(lang, "nav.bookings"), "الحجوزات");

    // Other clients keep their own choice.
    assert_eq!(current_language(&state, Some("client-b")).await, Language::En);
}

#[tokio::test]
async fn corrupt_stored_language_falls_back_to_default() {
    let state = test_helpers::test_app_state();
    state.storage.set_item("client-a", LANGUAGE_KEY, "xx".into()).await;
    assert_eq!(current_language(&state, Some("client-a")).await, Language::En);
}
