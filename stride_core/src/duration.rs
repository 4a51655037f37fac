//! Textual duration parsing.
//!
//! Packages carry elapsed time as a sequence of `<number><unit>` components,
//! e.g. `50m`, `0h50m`, `1h30m`, `1.5h`, `90s`. Supported units are `ns`, `us`
//! (also `µs`/`μs`), `ms`, `s`, `m` and `h`. A bare `0` is accepted as zero.

use crate::{Error, Result};
use std::time::Duration;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;

/// Largest representable duration, in nanoseconds
const MAX_NANOS: u64 = i64::MAX as u64;

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Parse a duration string
///
/// Malformed input is an [`Error::Format`]. A leading `-` is understood but
/// negative durations are rejected with [`Error::Validation`]; `-0s` is zero.
pub fn parse_duration(input: &str) -> Result<Duration> {
    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(Error::Format(format!("invalid duration {:?}", input)));
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let int_len = leading_digits(rest);
        let int_part = &rest[..int_len];
        rest = &rest[int_len..];

        let mut frac_part = "";
        if let Some(after_dot) = rest.strip_prefix('.') {
            let frac_len = leading_digits(after_dot);
            frac_part = &after_dot[..frac_len];
            rest = &after_dot[frac_len..];
        }

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(Error::Format(format!("invalid duration {:?}", input)));
        }

        let unit_len = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        if unit_len == 0 {
            return Err(Error::Format(format!(
                "missing unit in duration {:?}",
                input
            )));
        }
        let unit = &rest[..unit_len];
        rest = &rest[unit_len..];

        let scale = unit_nanos(unit).ok_or_else(|| {
            Error::Format(format!("unknown unit {:?} in duration {:?}", unit, input))
        })?;

        let component = component_nanos(int_part, frac_part, scale)
            .ok_or_else(|| out_of_range(input))?;
        total = total
            .checked_add(component)
            .filter(|&nanos| nanos <= MAX_NANOS)
            .ok_or_else(|| out_of_range(input))?;
    }

    if negative && total > 0 {
        return Err(Error::Validation(format!(
            "duration must not be negative, got {:?}",
            input
        )));
    }

    Ok(Duration::from_nanos(total))
}

/// Nanoseconds for one `<int>.<frac><unit>` component, `None` on overflow
fn component_nanos(int_part: &str, frac_part: &str, scale: u64) -> Option<u64> {
    let whole: u64 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().ok()?
    };
    let mut nanos = whole.checked_mul(scale)?;

    if !frac_part.is_empty() {
        // Sub-nanosecond remainders are truncated.
        let fraction: f64 = format!("0.{}", frac_part).parse().ok()?;
        nanos = nanos.checked_add((fraction * scale as f64) as u64)?;
    }

    Some(nanos)
}

fn out_of_range(input: &str) -> Error {
    Error::Format(format!("duration {:?} is out of range", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes(n: u64) -> Duration {
        Duration::from_secs(n * 60)
    }

    #[test]
    fn test_parse_package_durations() {
        assert_eq!(parse_duration("50m").unwrap(), minutes(50));
        assert_eq!(parse_duration("0h50m").unwrap(), minutes(50));
        assert_eq!(parse_duration("1h30m").unwrap(), minutes(90));
        assert_eq!(parse_duration("1h0m").unwrap(), minutes(60));
        assert_eq!(parse_duration("90s").unwrap(), Duration::from_secs(90));
    }

    #[test]
    fn test_parse_small_units() {
        assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_duration("15us").unwrap(), Duration::from_micros(15));
        assert_eq!(parse_duration("15µs").unwrap(), Duration::from_micros(15));
        assert_eq!(parse_duration("7ns").unwrap(), Duration::from_nanos(7));
    }

    #[test]
    fn test_parse_fractions() {
        assert_eq!(parse_duration("1.5h").unwrap(), minutes(90));
        assert_eq!(parse_duration(".5m").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_duration("2.m").unwrap(), minutes(2));
    }

    #[test]
    fn test_parse_zero() {
        assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("-0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("0h0m").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("-0s").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_explicit_plus_sign() {
        assert_eq!(parse_duration("+10m").unwrap(), minutes(10));
    }

    #[test]
    fn test_malformed_durations() {
        for input in ["", "abc", "50", "h", "1x", "1h30", ".m", "-", "1 h", " 50m"] {
            assert!(
                matches!(parse_duration(input), Err(Error::Format(_))),
                "expected format error for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_negative_duration_rejected() {
        assert!(matches!(
            parse_duration("-10m"),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_overflow_is_format_error() {
        assert!(matches!(
            parse_duration("9999999999999h"),
            Err(Error::Format(_))
        ));
        assert!(matches!(
            parse_duration("99999999999999999999ns"),
            Err(Error::Format(_))
        ));
    }
}
