//! Abuse reports and their moderation lifecycle.
//!
//! DESIGN
//! ======
//! Any status may move to any other. `resolvedAt`/`resolvedBy` describe the
//! current state only: they are stamped when a report enters `resolved` and
//! cleared whenever it is moved anywhere else.

use serde::Deserialize;

use crate::models::{
    Evidence, Priority, Report, ReportCategory, ReportStatus, ReportType, ReportedUserType,
};
use crate::services::catalog::ALL;
use crate::state::AppState;
use crate::store::{self, StoreError};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    pub reporter_id: String,
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

/// Admin transition request. Empty notes or resolution keep the old text.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportUpdate {
    pub status: ReportStatus,
    #[serde(default)]
    pub admin_notes: Option<String>,
    #[serde(default)]
    pub resolution: Option<String>,
}

pub async fn list_reports(state: &AppState) -> Vec<Report> {
    state.latency.standard().await;
    state.store.read().await.reports.clone()
}

pub async fn get_report(state: &AppState, id: &str) -> Option<Report> {
    state.latency.standard().await;
    let store = state.store.read().await;
    store.reports.iter().find(|r| r.id == id).cloned()
}

/// File a new report. It starts `pending` with no notes or resolution.
pub async fn create_report(state: &AppState, new: NewReport) -> Report {
    state.latency.standard().await;
    let now = store::now_rfc3339();
    let report = Report {
        id: store::new_id(),
        reporter_id: new.reporter_id,
        reported_user_id: new.reported_user_id,
        reported_user_type: new.reported_user_type,
        kind: new.kind,
        category: new.category,
        title_ar: if new.title_ar.is_empty() { new.title.clone() } else { new.title_ar },
        title: new.title,
        description_ar: if new.description_ar.is_empty() { new.description.clone() } else { new.description_ar },
        description: new.description,
        status: ReportStatus::Pending,
        priority: new.priority,
        evidence: new.evidence,
        admin_notes: String::new(),
        resolution: String::new(),
        created_at: now.clone(),
        updated_at: now,
        resolved_at: None,
        resolved_by: None,
    };
    state.store.write().await.reports.push(report.clone());
    tracing::info!(
        report_id = %report.id,
        reporter_id = %report.reporter_id,
        reported_user_id = %report.reported_user_id,
        "report filed"
    );
    report
}

/// Apply a status transition to `report` as of `now`.
pub fn apply_status(report: &mut Report, update: ReportUpdate, admin_id: &str, now: &str) {
    report.status = update.status;
    if let Some(notes) = update.admin_notes.filter(|n| !n.is_empty()) {
        report.admin_notes = notes;
    }
    if let Some(resolution) = update.resolution.filter(|r| !r.is_empty()) {
        report.resolution = resolution;
    }
    report.updated_at = now.to_owned();
    if update.status == ReportStatus::Resolved {
        report.resolved_at = Some(now.to_owned());
        report.resolved_by = Some(admin_id.to_owned());
    } else {
        report.resolved_at = None;
        report.resolved_by = None;
    }
}

/// Move a report to a new status on behalf of `admin_id`.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if no report has `id`.
pub async fn update_report_status(
    state: &AppState,
    id: &str,
    update: ReportUpdate,
    admin_id: &str,
) -> Result<Report, StoreError> {
    state.latency.standard().await;
    let mut store = state.store.write().await;
    let report = store
        .reports
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| StoreError::not_found("report", id))?;

    let from = report.status;
    apply_status(report, update, admin_id, &store::now_rfc3339());
    tracing::info!(
        report_id = id,
        admin_id,
        from = from.as_str(),
        to = report.status.as_str(),
        "report status changed"
    );
    Ok(report.clone())
}

/// Reports in `status`; `all` keeps everything, unknown values match nothing.
#[must_use]
pub fn filter_reports(reports: &[Report], status: &str) -> Vec<Report> {
    let wanted = match status {
        "" | ALL => return reports.to_vec(),
        raw => ReportStatus::from_str(raw),
    };
    reports.iter().filter(|r| Some(r.status) == wanted).cloned().collect()
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
