use chrono::NaiveDateTime;

use crate::error::{Caom2Error, Caom2Result};

/// IVOA timestamp format, `yyyy-MM-dd'T'HH:mm:ss.SSS`.
pub const IVOA_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

const IVOA_PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Fractional seconds are mandatory when parsing, with 1 to 6 digits.
const MAX_FRACTION_DIGITS: usize = 6;

/// Formats a timestamp in the IVOA format, truncated to milliseconds.
///
/// # Examples
///
/// ```
/// use caom2::conversions::date_to_ivoa;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2016, 3, 1)
///     .unwrap()
///     .and_hms_micro_opt(8, 15, 0, 123_987)
///     .unwrap();
/// assert_eq!(date_to_ivoa(Some(date)).as_deref(), Some("2016-03-01T08:15:00.123"));
/// assert_eq!(date_to_ivoa(None), None);
/// ```
pub fn date_to_ivoa(date: Option<NaiveDateTime>) -> Option<String> {
    date.map(|d| d.format(IVOA_DATE_FORMAT).to_string())
}

/// Parses an IVOA-formatted timestamp.
///
/// # Errors
///
/// [`Caom2Error::InvalidDate`] if the text does not follow the IVOA format,
/// including text without fractional seconds or with more than six
/// fractional digits.
pub fn ivoa_to_date(text: Option<&str>) -> Caom2Result<Option<NaiveDateTime>> {
    let Some(text) = text else {
        return Ok(None);
    };
    check_fraction(text)?;
    NaiveDateTime::parse_from_str(text, IVOA_PARSE_FORMAT)
        .map(Some)
        .map_err(|e| Caom2Error::InvalidDate {
            input: text.to_string(),
            reason: e.to_string(),
        })
}

fn check_fraction(text: &str) -> Caom2Result<()> {
    let digits = text
        .rsplit_once('.')
        .map(|(_, fraction)| fraction)
        .filter(|fraction| fraction.bytes().all(|b| b.is_ascii_digit()))
        .map_or(0, str::len);
    if (1..=MAX_FRACTION_DIGITS).contains(&digits) {
        Ok(())
    } else {
        Err(Caom2Error::InvalidDate {
            input: text.to_string(),
            reason: format!(
                "expected 1 to {} fractional second digits",
                MAX_FRACTION_DIGITS
            ),
        })
    }
}
