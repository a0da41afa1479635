//! Summary info page

use axum::extract::State;
use axum::response::Html;
use chrono::{DateTime, Utc};
use chrono_tz::Europe::Bucharest;
use chrono_tz::Tz;

use crate::api::ApiError;
use crate::AppState;

/// GET /info
///
/// HTML fragment with the current record count and the current time in the
/// Europe/Bucharest timezone.
pub async fn info_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let count = state.store.count().await?;
    let now = Utc::now().with_timezone(&Bucharest);
    Ok(Html(render_info(count, now)))
}

fn render_info(count: u64, now: DateTime<Tz>) -> String {
    format!(
        "<p>Phonebook has info for {} people</p>\n<p>{}</p>",
        count,
        now.format("%a %b %d %Y %H:%M:%S %Z")
    )
}
