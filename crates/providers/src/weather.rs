//! Weather reports from wttr.in.
//!
//! The one-line `format=4` report looks like `Paris: ⛅️  🌡️+12°C 🌬️↗11km/h`
//! and is shown verbatim at the right edge of the top bar.

use tracing::{instrument, warn};

use crate::client::HttpClient;
use crate::error::Error;

/// Base URL of the weather service.
pub const WEATHER_BASE_URL: &str = "https://wttr.in";

/// Builds the report URL for `location`.
///
/// Spaces are sent as `+`, which wttr.in treats as a separator.
///
/// # Examples
///
/// ```
/// use dashboard_providers::weather::report_url;
///
/// assert_eq!(report_url("Paris"), "https://wttr.in/Paris?format=4");
/// assert_eq!(report_url("New York"), "https://wttr.in/New+York?format=4");
/// ```
#[must_use]
pub fn report_url(location: &str) -> String {
    let location = location.trim().replace(' ', "+");
    format!("{WEATHER_BASE_URL}/{location}?format=4")
}

/// Fetches the report for `location`.
///
/// Never fails: a non-success status becomes `Error: <status>` and any other
/// failure becomes `Error: <reason>`.
#[instrument(skip(client))]
pub async fn fetch_report(client: &HttpClient, location: &str) -> String {
    match client.get_text(&report_url(location)).await {
        Ok(body) => body.trim_end().to_string(),
        Err(err) => {
            warn!(error = %err, "weather fetch failed");
            describe_failure(&err)
        }
    }
}

/// Formats a fetch failure as the top-bar weather text.
fn describe_failure(err: &Error) -> String {
    match err {
        Error::Status { status, .. } => format!("Error: {status}"),
        other => format!("Error: {other}"),
    }
}
