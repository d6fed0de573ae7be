//! Marketplace records.
//!
//! DESIGN
//! ======
//! Records mirror the JSON the web client consumes: camelCase fields, opaque
//! string ids, and foreign keys kept as plain strings that are joined by
//! linear scan. Nothing here enforces uniqueness or referential integrity.
//!
//! `ServiceProvider` extends `User` by flattening it, so a provider serializes
//! as a single flat object carrying both the identity and provider fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

// =============================================================================
// USERS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Provider,
    Admin,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Provider => "provider",
            Self::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_ar: Option<String>,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub role: Role,
    pub is_verified: bool,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality_ar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

impl User {
    /// Name shown in `lang`. Arabic falls back to the English name when no
    /// Arabic rendition exists.
    #[must_use]
    pub fn display_name(&self, lang: Language) -> &str {
        match (lang, self.name_ar.as_deref()) {
            (Language::Ar, Some(ar)) if !ar.is_empty() => ar,
            _ => &self.name,
        }
    }
}

// =============================================================================
// PROVIDERS
// =============================================================================

/// Text carried in both languages, e.g. a working-area place name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized {
    pub en: String,
    pub ar: String,
}

impl Localized {
    #[must_use]
    pub fn new(en: &str, ar: &str) -> Self {
        Self { en: en.to_owned(), ar: ar.to_owned() }
    }

    #[must_use]
    pub fn get(&self, lang: Language) -> &str {
        lang.pick(&self.en, &self.ar)
    }
}

/// Declaration order is calendar order, so a `BTreeMap` keyed by weekday
/// iterates Monday through Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];
}

/// Availability window for one weekday. Display only; bookings ignore it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub start: String,
    pub end: String,
    pub available: bool,
}

impl DaySchedule {
    #[must_use]
    pub fn new(start: &str, end: &str, available: bool) -> Self {
        Self { start: start.to_owned(), end: end.to_owned(), available }
    }
}

pub type WorkingHours = BTreeMap<Weekday, DaySchedule>;

/// Hours given to freshly registered providers: weekdays 09:00-17:00,
/// weekend closed.
#[must_use]
pub fn default_working_hours() -> WorkingHours {
    Weekday::ALL
        .into_iter()
        .map(|day| {
            let open = !matches!(day, Weekday::Saturday | Weekday::Sunday);
            (day, DaySchedule::new("09:00", "17:00", open))
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub overall: f64,
    pub cost: f64,
    pub speed: f64,
    pub punctuality: f64,
    pub review_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProvider {
    #[serde(flatten)]
    pub user: User,
    /// Offered service ids.
    pub services: Vec<String>,
    pub working_area: Vec<Localized>,
    /// Years of experience.
    pub experience: u32,
    pub rating: Rating,
    pub working_hours: WorkingHours,
    pub unavailable_dates: Vec<String>,
    pub is_approved: bool,
    pub description: String,
    pub description_ar: String,
}

impl ServiceProvider {
    /// Wrap a newly registered user as an unapproved provider with empty
    /// profile fields.
    #[must_use]
    pub fn pending(mut user: User) -> Self {
        user.role = Role::Provider;
        if user.name_ar.is_none() {
            user.name_ar = Some(user.name.clone());
        }
        if user.nationality_ar.is_none() {
            user.nationality_ar = Some(String::new());
        }
        Self {
            user,
            services: Vec::new(),
            working_area: Vec::new(),
            experience: 0,
            rating: Rating::default(),
            working_hours: default_working_hours(),
            unavailable_dates: Vec::new(),
            is_approved: false,
            description: String::new(),
            description_ar: String::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.user.id
    }

    #[must_use]
    pub fn description(&self, lang: Language) -> &str {
        lang.pick(&self.description, &self.description_ar)
    }
}

/// Any signed-in identity: a plain user/admin or a provider with its profile.
///
/// Untagged; providers are tried first because their shape is a superset of
/// the plain user shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Account {
    Provider(ServiceProvider),
    User(User),
}

impl Account {
    #[must_use]
    pub fn user(&self) -> &User {
        match self {
            Self::Provider(p) => &p.user,
            Self::User(u) => u,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.user().id
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.user().role
    }

    #[must_use]
    pub fn as_provider(&self) -> Option<&ServiceProvider> {
        match self {
            Self::Provider(p) => Some(p),
            Self::User(_) => None,
        }
    }
}

// =============================================================================
// CATALOG
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub name_ar: String,
    pub category: String,
    pub category_ar: String,
    /// Icon tag understood by the client's icon set.
    pub icon: String,
    pub is_approved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_by: Option<String>,
}

impl Service {
    #[must_use]
    pub fn localized_name(&self, lang: Language) -> &str {
        lang.pick(&self.name, &self.name_ar)
    }

    #[must_use]
    pub fn localized_category(&self, lang: Language) -> &str {
        lang.pick(&self.category, &self.category_ar)
    }
}

// =============================================================================
// CHAT
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub message: String,
    pub timestamp: String,
    pub is_read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_reported: Option<bool>,
}

/// Conversation between two users, derived from the message log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRoom {
    pub id: String,
    pub participants: [String; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message: Option<ChatMessage>,
    pub unread_count: u32,
}

// =============================================================================
// BOOKINGS & REVIEWS
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    #[must_use]
    pub fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub provider_id: String,
    pub service_id: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`.
    pub time: String,
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRatings {
    pub cost: u8,
    pub speed: u8,
    pub punctuality: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub provider_id: String,
    pub booking_id: String,
    pub ratings: ReviewRatings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: String,
}

// =============================================================================
// MODERATION
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportedUserType {
    User,
    Provider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    InappropriateBehavior,
    ServiceQuality,
    PaymentDispute,
    SpamFakeReviews,
    SafetyConcern,
    PricingFraud,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportCategory {
    Conduct,
    Service,
    Payment,
    PlatformAbuse,
    Safety,
    Fraud,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    #[default]
    Pending,
    Investigating,
    Resolved,
    Dismissed,
}

impl ReportStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Investigating => "investigating",
            Self::Resolved => "resolved",
            Self::Dismissed => "dismissed",
        }
    }

    #[must_use]
    pub fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(Self::Pending),
            "investigating" => Some(Self::Investigating),
            "resolved" => Some(Self::Resolved),
            "dismissed" => Some(Self::Dismissed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Evidence attached to a report. Known keys are typed; anything else the
/// reporter attached is kept verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evidence {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshots: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_messages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspicious_accounts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_comparisons: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_testimonies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub witness_statement: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub reporter_id: String,
    pub reported_user_id: String,
    pub reported_user_type: ReportedUserType,
    #[serde(rename = "type")]
    pub kind: ReportType,
    pub category: ReportCategory,
    pub title: String,
    pub title_ar: String,
    pub description: String,
    pub description_ar: String,
    pub status: ReportStatus,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Evidence>,
    pub admin_notes: String,
    pub resolution: String,
    pub created_at: String,
    pub updated_at: String,
    pub resolved_at: Option<String>,
    pub resolved_by: Option<String>,
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Message,
    Booking,
    Review,
    Approval,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub title_ar: String,
    pub message: String,
    pub message_ar: String,
    pub is_read: bool,
    pub created_at: String,
    /// Opaque payload the client uses to decide where a click navigates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl Notification {
    /// String field from the payload, if present.
    #[must_use]
    pub fn data_str(&self, key: &str) -> Option<&str> {
        self.data.as_ref()?.get(key)?.as_str()
    }
}

// =============================================================================
// ADMIN
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStats {
    /// Entries in the user array (customers and admins); providers are
    /// counted by approval state instead.
    pub total_users: usize,
    pub total_providers: usize,
    pub pending_providers: usize,
    pub total_bookings: usize,
    pub total_reviews: usize,
    pub total_reports: usize,
    pub pending_reports: usize,
    pub resolved_reports: usize,
}

#[cfg(test)]
#[path = "models_test.rs"]
mod tests;
