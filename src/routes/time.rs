//! Current-time endpoint.
//!
//! Reports the server-local wall-clock time, formatted as
//! `DD/MM/YYYY, HH:MM:SS` on a 24-hour clock.

use axum::Json;
use chrono::{DateTime, Local};
use serde::Serialize;

use crate::config::TIME_FORMAT;

/// Response body for `GET /`: the current server time.
#[derive(Debug, Serialize)]
pub struct TimeResponse {
    pub time: String,
}

/// Clock handler.
///
/// Reads the clock at the moment the request is handled; nothing is cached
/// or batched between invocations.
pub async fn now() -> Json<TimeResponse> {
    Json(TimeResponse {
        time: format_timestamp(Local::now()),
    })
}

/// Format a timestamp as `DD/MM/YYYY, HH:MM:SS` with zero-padded fields.
pub fn format_timestamp(at: DateTime<Local>) -> String {
    at.format(TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn single_digit_fields_are_zero_padded() {
        let at = Local.with_ymd_and_hms(2026, 3, 5, 9, 4, 7).unwrap();
        assert_eq!(format_timestamp(at), "05/03/2026, 09:04:07");
    }

    #[test]
    fn uses_24_hour_clock() {
        let at = Local.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_timestamp(at), "31/12/2026, 23:59:59");
    }
}
