//! # Time conversion
//!
//! Bidirectional mapping between calendar timestamps and the continuous Julian
//! Date (JD) scale used by the ephemeris, and the derived count of Julian
//! centuries since J2000.0 that drives the secular element rates.
//!
//! Two flavours of timestamp are supported:
//!
//! - raw **Unix milliseconds** (`f64`), mapped by the affine relation
//!   `JD = ms / 86 400 000 + 2440587.5`;
//! - calendar [`hifitime::Epoch`] values, converted through their Unix millisecond count.
//!
//! All conversions here are pure and total over finite inputs.

use hifitime::Epoch;
use std::str::FromStr;

use crate::{
    constants::{JulianCentury, JulianDate, DAYS_PER_CENTURY, J2000_JD, MS_PER_DAY, UNIX_EPOCH_JD},
    heliopos_errors::HelioposError,
};

/// Transformation from milliseconds since the Unix epoch to Julian Date
///
/// Argument
/// --------
/// * `ms`: milliseconds elapsed since 1970-01-01T00:00:00 UTC (may be negative)
///
/// Return
/// ------
/// * the corresponding Julian Date
pub fn unix_ms_to_jd(ms: f64) -> JulianDate {
    ms / MS_PER_DAY + UNIX_EPOCH_JD
}

/// Transformation from Julian Date to milliseconds since the Unix epoch.
///
/// Exact inverse of [`unix_ms_to_jd`] up to floating-point rounding.
pub fn jd_to_unix_ms(jd: JulianDate) -> f64 {
    (jd - UNIX_EPOCH_JD) * MS_PER_DAY
}

/// Julian centuries elapsed since J2000.0 (negative before the epoch).
pub fn centuries_since_j2000(jd: JulianDate) -> JulianCentury {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Julian Date of a calendar epoch.
///
/// Goes through the Unix millisecond count of the epoch, so the result is
/// exactly [`unix_ms_to_jd`] of that count, before and after 1972 alike.
pub fn epoch_to_jd(epoch: &Epoch) -> JulianDate {
    unix_ms_to_jd(epoch.to_unix_milliseconds())
}

/// Calendar epoch of a Julian Date, inverse of [`epoch_to_jd`].
pub fn jd_to_epoch(jd: JulianDate) -> Epoch {
    Epoch::from_unix_milliseconds(jd_to_unix_ms(jd))
}

/// Transformation from date in the format YYYY-MM-ddTHH:mm:ss (UTC) to Julian Date
///
/// Return
/// ------
/// * the Julian Date, or [`HelioposError::InvalidDate`] if the string does not parse
pub fn date_to_jd(date: &str) -> Result<JulianDate, HelioposError> {
    let epoch = Epoch::from_str(date.trim())
        .map_err(|e| HelioposError::InvalidDate(format!("{date}: {e}")))?;
    Ok(epoch_to_jd(&epoch))
}

/// Current wall-clock time as a Julian Date.
pub fn jd_now() -> Result<JulianDate, HelioposError> {
    let now = Epoch::now().map_err(|e| HelioposError::Clock(e.to_string()))?;
    Ok(epoch_to_jd(&now))
}

/// Calendar date (`YYYY-MM-DD`, UTC) of a Julian Date.
pub fn format_jd_date(jd: JulianDate) -> String {
    let (year, month, day, ..) = jd_to_epoch(jd).to_gregorian_utc();
    format!("{year:04}-{month:02}-{day:02}")
}

/// Reject NaN and infinite Julian Dates before they enter the pipeline.
pub(crate) fn ensure_finite_jd(jd: JulianDate) -> Result<JulianDate, HelioposError> {
    if jd.is_finite() {
        Ok(jd)
    } else {
        Err(HelioposError::InvalidInput(format!(
            "Julian Date must be finite, got {jd}"
        )))
    }
}
