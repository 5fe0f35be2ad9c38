//! Validation helper functions
//!
//! Presence checks only: the Markdown engine never validates, so the few
//! checks that exist guard the cost ticker and command-line input.

use anyhow::{Result, bail};
use chrono::NaiveDateTime;

use crate::datetime::{DateStyle, parse_datetime_local, truncate_to_minute};

/// Check that the ticker has something to multiply
///
/// # Arguments
/// * `attendees` - Number of attendees
/// * `hourly_rate` - Hourly rate per person
///
/// # Returns
/// Ok when both are positive, otherwise an error naming what is missing
pub fn validate_ticker_inputs(attendees: u32, hourly_rate: f64) -> Result<()> {
    if attendees == 0 {
        bail!("Please enter a valid attendee count (at least 1)");
    }
    if !hourly_rate.is_finite() || hourly_rate <= 0.0 {
        bail!(
            "Please enter a valid hourly rate (got {}); it must be greater than zero",
            hourly_rate
        );
    }
    Ok(())
}

/// Parse a held-at value given on the command line
///
/// # Arguments
/// * `value` - `YYYY-MM-DDTHH:MM`, or any shape the date style accepts
/// * `style` - Date style used for the Markdown `Date/Time` line
///
/// # Returns
/// The parsed time truncated to the minute, or an error with the expected format
pub fn parse_held_at_arg(value: &str, style: &DateStyle) -> Result<NaiveDateTime> {
    if let Some(parsed) = parse_datetime_local(value) {
        return Ok(truncate_to_minute(parsed));
    }
    match style.parse(value) {
        Some(parsed) => Ok(parsed),
        None => bail!(
            "Invalid date/time '{}'. Use YYYY-MM-DDTHH:MM (e.g., '2025-03-14T14:30')",
            value
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_validate_ticker_inputs() {
        assert!(validate_ticker_inputs(3, 150.0).is_ok());
        assert!(validate_ticker_inputs(0, 150.0).is_err());
        assert!(validate_ticker_inputs(3, 0.0).is_err());
        assert!(validate_ticker_inputs(3, -5.0).is_err());
        assert!(validate_ticker_inputs(3, f64::NAN).is_err());
    }

    #[test]
    fn test_parse_held_at_arg() {
        let style = DateStyle::default();
        let expected = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(parse_held_at_arg("2025-03-14T14:30", &style).unwrap(), expected);
        assert_eq!(parse_held_at_arg("3/14/2025, 2:30:15 PM", &style).unwrap(), expected);

        let err = parse_held_at_arg("soon", &style).unwrap_err();
        assert!(err.to_string().contains("YYYY-MM-DDTHH:MM"));
    }
}
