//! Report routes: anyone signed in may file, admins moderate.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use crate::models::{Evidence, Priority, Report, ReportCategory, ReportType, ReportedUserType};
use crate::routes::ApiError;
use crate::routes::auth::{AdminUser, CurrentUser};
use crate::services::report::{self, NewReport, ReportUpdate};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportBody {
    pub reported_user_id: String,
    pub reported_user_type: ReportedUserType,
    #[serde(rename = "type")]
    pub kind: ReportType,
    pub category: ReportCategory,
    pub title: String,
    #[serde(default)]
    pub title_ar: String,
    pub description: String,
    #[serde(default)]
    pub description_ar: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub evidence: Option<Evidence>,
}

/// `GET /api/reports`
pub async fn list(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<ReportQuery>,
) -> Json<Vec<Report>> {
    let reports = report::list_reports(&state).await;
    Json(report::filter_reports(&reports, &query.status))
}

/// `POST /api/reports`: filed by the signed-in account.
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(body): Json<ReportBody>,
) -> (StatusCode, Json<Report>) {
    let new = NewReport {
        reporter_id: user.account.id().to_owned(),
        reported_user_id: body.reported_user_id,
        reported_user_type: body.reported_user_type,
        kind: body.kind,
        category: body.category,
        title: body.title,
        title_ar: body.title_ar,
        description: body.description,
        description_ar: body.description_ar,
        priority: body.priority,
        evidence: body.evidence,
    };
    (StatusCode::CREATED, Json(report::create_report(&state, new).await))
}

/// `GET /api/reports/{id}`
pub async fn detail(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<String>,
) -> Result<Json<Report>, ApiError> {
    report::get_report(&state, &id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("report", &id, admin.language))
}

/// `PATCH /api/reports/{id}`: status transition stamped with the acting admin.
pub async fn update_status(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<String>,
    Json(update): Json<ReportUpdate>,
) -> Result<Json<Report>, ApiError> {
    report::update_report_status(&state, &id, update, admin.account.id())
        .await
        .map(Json)
        .map_err(ApiError::localize(admin.language))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportStatus;
    use crate::state::test_helpers::{self, USER_EMAIL};

    #[tokio::test]
    async fn list_filters_by_status() {
        let state = test_helpers::test_app_state();
        let admin = test_helpers::signed_in_admin(&state).await;
        let query = ReportQuery { status: "resolved".into() };
        let Json(resolved) = list(State(state), admin, Query(query)).await;
        assert_eq!(resolved.len(), 2);
    }

    #[tokio::test]
    async fn customer_files_report_as_self() {
        let state = test_helpers::test_app_state();
        let john = test_helpers::signed_in(&state, USER_EMAIL).await;
        let body: ReportBody = serde_json::from_value(serde_json::json!({
            "reportedUserId": "6",
            "reportedUserType": "provider",
            "type": "safety_concern",
            "category": "safety",
            "title": "No protective gear",
            "description": "Worked on live wiring without gloves."
        }))
        .unwrap();

        let (status, Json(filed)) = create(State(state), john, Json(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(filed.reporter_id, "1");
        assert_eq!(filed.status, ReportStatus::Pending);
    }

    #[tokio::test]
    async fn resolving_records_acting_admin() {
        let state = test_helpers::test_app_state();
        let admin = test_helpers::signed_in_admin(&state).await;
        let update = ReportUpdate { status: ReportStatus::Resolved, admin_notes: None, resolution: None };
        let Json(resolved) = update_status(State(state), admin, Path("report-1".into()), Json(update))
            .await
            .unwrap();
        assert_eq!(resolved.resolved_by.as_deref(), Some("2"));
        assert!(resolved.resolved_at.is_some());
    }

    #[tokio::test]
    async fn unknown_report_is_not_found() {
        let state = test_helpers::test_app_state();
        let admin = test_helpers::signed_in_admin(&state).await;
        let err = detail(State(state), admin, Path("report-404".into())).await.unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
