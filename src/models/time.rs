//! Time-of-day normalization.
//!
//! The API reports times either as 24-hour `HH:MM:SS` strings or, when the
//! `formatted` flag is set, as 12-hour `HH:MM:SS AM/PM` strings. Comparing
//! sunrises only works on the 24-hour form, where zero-padded strings sort
//! lexicographically in chronological order.

/// Normalize a time-of-day string to its 24-hour `HH:MM:SS` form.
///
/// Strings carrying an ` AM`/` PM` suffix are converted; anything else is
/// assumed to already be in 24-hour form and passes through unchanged. A
/// suffixed string that cannot be parsed also passes through unchanged.
pub fn normalize(time: &str) -> String {
    let converted = if let Some(bare) = time.strip_suffix(" AM") {
        twelve_to_twenty_four(bare, false)
    } else if let Some(bare) = time.strip_suffix(" PM") {
        twelve_to_twenty_four(bare, true)
    } else {
        None
    };
    converted.unwrap_or_else(|| time.to_string())
}

/// Convert the hour field of an `HH:MM:SS` string from 12-hour to 24-hour
/// convention: hour 12 wraps to 00, and PM adds 12 to the result.
fn twelve_to_twenty_four(hms: &str, pm: bool) -> Option<String> {
    let (hour, rest) = hms.split_once(':')?;
    let hour: u32 = if hour == "12" { 0 } else { hour.parse().ok()? };
    let hour = if pm { hour + 12 } else { hour };
    Some(format!("{:02}:{}", hour, rest))
}
