use crate::controls::ControlSet;
use crate::errors::{AppError, SyncError};
use crate::models::{SelectionQuery, SelectionResponse, UpdateForm};
use crate::query::normalize_query;
use crate::state::AppState;
use crate::sync::{DateCheck, Navigation, SelectorSync, normalize_to_utc_date};
use crate::ui::render_index;
use axum::{
    Form, Json,
    extract::{Query, State},
    http::{HeaderValue, StatusCode, header::LOCATION},
    response::{Html, IntoResponse, Response},
};
use chrono::{DateTime, TimeZone, Utc};
use tracing::{info, warn};

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> Result<Response, AppError> {
    index_at(&state, &query, &Utc::now())
}

/// Renders the page, or redirects when a landing request shows a stale default date.
pub fn index_at<Tz: TimeZone>(
    state: &AppState,
    query: &SelectionQuery,
    now: &DateTime<Tz>,
) -> Result<Response, AppError> {
    let mut sync = build_sync(state, query, now);
    sync.mark_ready();

    // An explicit date is the user's choice; only the default is corrected.
    if query.date.is_none() {
        match sync.check_date(now) {
            Ok(DateCheck::Stale(navigation)) => return redirect(&navigation),
            Ok(DateCheck::Current | DateCheck::NotReady) => {}
            Err(err @ SyncError::InvalidDate { .. }) => warn!("skipping date check: {err}"),
            Err(err) => return Err(err.into()),
        }
    }

    Ok(Html(render_index(sync.controls())).into_response())
}

pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateForm>,
) -> Result<Response, AppError> {
    let query = SelectionQuery {
        date: Some(form.date),
        channel: Some(form.channel),
        product: Some(form.product),
    };
    let sync = build_sync(&state, &query, &Utc::now());
    let navigation = sync.update()?;
    info!(query = %navigation.query, "selection changed");
    redirect(&navigation)
}

pub async fn get_selection(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<SelectionResponse>, AppError> {
    let sync = build_sync(&state, &query, &Utc::now());
    let Navigation { selection, query } = sync.update()?;
    Ok(Json(SelectionResponse {
        date: selection.date,
        channel: selection.channel,
        product: selection.product,
        query,
    }))
}

fn build_sync<Tz: TimeZone>(
    state: &AppState,
    query: &SelectionQuery,
    now: &DateTime<Tz>,
) -> SelectorSync<ControlSet> {
    let today = normalize_to_utc_date(now);
    let dates = state.catalog.dates_for(today, state.settings.date_window);
    let mut selection = normalize_query(query, &state.catalog, today);
    if query.date.is_none() {
        if let Some(first) = dates.first() {
            selection.date = first.clone();
        }
    }
    let controls = ControlSet::from_catalog(&state.catalog, &selection, dates);
    SelectorSync::new(controls, state.settings.encoding)
}

fn redirect(navigation: &Navigation) -> Result<Response, AppError> {
    let location = HeaderValue::from_str(&format!("/{}", navigation.query))
        .map_err(|err| AppError::bad_request(format!("unusable navigation target: {err}")))?;
    Ok((StatusCode::SEE_OTHER, [(LOCATION, location)]).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::OptionCatalog;
    use crate::config::Settings;

    fn state(dates: &[&str]) -> AppState {
        let catalog = OptionCatalog {
            dates: dates.iter().map(|d| d.to_string()).collect(),
            ..OptionCatalog::default()
        };
        AppState::new(catalog, Settings::default())
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    fn location(response: &Response) -> &str {
        response.headers()[LOCATION].to_str().unwrap()
    }

    #[test]
    fn landing_with_stale_default_redirects_to_today() {
        let query = SelectionQuery {
            channel: Some("beta".into()),
            ..SelectionQuery::default()
        };
        let response = index_at(&state(&["2024-03-14", "2024-03-13"]), &query, &now()).unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/?date=2024-03-15&channel=beta&product=Firefox");
    }

    #[test]
    fn landing_with_current_default_renders() {
        let response = index_at(&state(&["2024-03-15"]), &SelectionQuery::default(), &now()).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn explicit_date_is_never_corrected() {
        let query = SelectionQuery {
            date: Some("2024-03-13".into()),
            ..SelectionQuery::default()
        };
        let response = index_at(&state(&["2024-03-14", "2024-03-13"]), &query, &now()).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn unparseable_default_date_renders_anyway() {
        let response = index_at(&state(&["latest"]), &SelectionQuery::default(), &now()).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn generated_window_never_redirects() {
        let response = index_at(&state(&[]), &SelectionQuery::default(), &now()).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
