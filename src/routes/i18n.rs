//! Language selection and string lookup routes.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::response::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use crate::i18n::{self, Direction, Language, LanguageInfo};
use crate::routes::auth::Client;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SwitchBody {
    pub language: Language,
}

#[derive(Debug, Serialize)]
pub struct TranslationsResponse {
    pub language: &'static str,
    pub direction: Direction,
    pub strings: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub key: String,
    pub value: String,
}

/// `GET /api/i18n/language`
pub async fn current(client: Client) -> Json<LanguageInfo> {
    Json(client.language.info())
}

/// `PUT /api/i18n/language`: persist the choice for this client.
pub async fn switch(
    State(state): State<AppState>,
    client: Client,
    jar: CookieJar,
    Json(body): Json<SwitchBody>,
) -> (CookieJar, Json<LanguageInfo>) {
    let (client_id, jar) = client.ensure_id(jar, state.config.cookie_secure);
    i18n::set_language(&state, &client_id, body.language).await;
    (jar, Json(body.language.info()))
}

/// `GET /api/i18n/languages`
pub async fn languages() -> Json<Vec<LanguageInfo>> {
    Json(Language::ALL.iter().map(|l| l.info()).collect())
}

/// `GET /api/i18n/translations`: whole table for the client's language.
pub async fn translations(client: Client) -> Json<TranslationsResponse> {
    let lang = client.language;
    Json(TranslationsResponse {
        language: lang.code(),
        direction: lang.direction(),
        strings: i18n::entries(lang).iter().copied().collect(),
    })
}

/// `GET /api/i18n/t/{key}`: unknown keys come back unchanged.
pub async fn lookup(client: Client, Path(key): Path<String>) -> Json<LookupResponse> {
    let value = i18n::translate(client.language, &key).to_owned();
    Json(LookupResponse { key, value })
}

#[cfg(test)]
#[path = "i18n_test.rs"]
mod tests;
