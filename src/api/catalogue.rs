//! Read-only endpoints: locales, translations, locations and departments.

use std::collections::BTreeMap;

use axum::extract::{Path, Query};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::catalogue;
use crate::errors::AppError;
use crate::i18n::{self, Locale, LocaleCoverage, MessageKey, Translator};
use crate::models::{Department, LocationOption};
use crate::views::{self, LanguageOption};

fn parse_locale(code: &str) -> Result<Locale, AppError> {
    Locale::from_code(code)
        .ok_or_else(|| AppError::BadRequest(format!("Unsupported locale '{}'", code)))
}

/// GET /api/locales - List supported locales.
pub async fn list_locales() -> ApiResult<Vec<LanguageOption>> {
    success(views::language_options())
}

/// GET /api/translations/:locale - Every message resolved for one locale.
pub async fn get_translations(
    Path(locale): Path<String>,
) -> ApiResult<BTreeMap<&'static str, String>> {
    let t = Translator::new(parse_locale(&locale)?);
    let table = MessageKey::ALL
        .iter()
        .map(|key| (key.as_str(), t.t(*key)))
        .collect();
    success(table)
}

/// GET /api/translations/coverage - Keys each locale is missing.
pub async fn translation_coverage() -> ApiResult<Vec<LocaleCoverage>> {
    success(i18n::coverage_report())
}

/// GET /api/locations/states - List selectable states.
pub async fn list_states() -> ApiResult<Vec<LocationOption>> {
    success(catalogue::state_options())
}

/// GET /api/locations/states/:id/districts - List districts of a state.
pub async fn list_districts(Path(state_id): Path<String>) -> ApiResult<Vec<LocationOption>> {
    if catalogue::find_state(&state_id).is_none() {
        return Err(AppError::NotFound(format!("State {} not found", state_id)));
    }
    success(catalogue::district_options(&state_id))
}

#[derive(Debug, Deserialize)]
pub struct LocaleQuery {
    #[serde(default)]
    pub locale: Option<String>,
}

/// GET /api/departments - Department catalogue, localized by `?locale=`.
pub async fn list_departments(Query(query): Query<LocaleQuery>) -> ApiResult<Vec<Department>> {
    let locale = match query.locale.as_deref() {
        Some(code) => parse_locale(code)?,
        None => Locale::DEFAULT,
    };
    success(catalogue::departments(&Translator::new(locale)))
}
