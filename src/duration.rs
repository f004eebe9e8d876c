//! Parsing of the catalog's ISO 8601 video durations.

use regex::Regex;
use std::sync::LazyLock;

/// Hours, minutes and seconds are each optional, but the order is fixed.
///
/// The pattern is deliberately unanchored: it accepts the `PT...` token
/// wherever it occurs in the input, and a bare `PT` with no components at all.
static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").expect("duration pattern is valid")
});

/// Parses an ISO 8601 duration such as `PT4M13S` into total seconds.
///
/// Absent components count as zero, so `PT1H` is 3600 and `PT13S` is 13.
/// Returns 0 when the input does not match the expected pattern at all,
/// which downstream filtering treats as "duration unknown".
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#contentDetails.duration>
#[must_use]
pub fn parse_duration(encoded: &str) -> u64 {
    let Some(captures) = DURATION_PATTERN.captures(encoded) else {
        return 0;
    };

    let component = |index: usize| {
        captures
            .get(index)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(0)
    };

    component(1) * 3600 + component(2) * 60 + component(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_and_seconds() {
        assert_eq!(parse_duration("PT4M13S"), 253);
    }

    #[test]
    fn single_components() {
        assert_eq!(parse_duration("PT1H"), 3600);
        assert_eq!(parse_duration("PT2M"), 120);
        assert_eq!(parse_duration("PT45S"), 45);
    }

    #[test]
    fn all_components() {
        assert_eq!(parse_duration("PT1H2M3S"), 3723);
    }

    #[test]
    fn no_components_is_zero() {
        assert_eq!(parse_duration("PT"), 0);
    }

    #[test]
    fn malformed_is_zero() {
        assert_eq!(parse_duration(""), 0);
        assert_eq!(parse_duration("four minutes"), 0);
        // Day-scale durations (`P1DT2H`) never contain a literal `PT` token.
        assert_eq!(parse_duration("P1DT2H"), 0);
    }

    #[test]
    fn shorts_boundary_values() {
        assert_eq!(parse_duration("PT60S"), 60);
        assert_eq!(parse_duration("PT1M"), 60);
        assert_eq!(parse_duration("PT1M1S"), 61);
    }

    #[test]
    fn unanchored_match_is_accepted() {
        // Parity with the original pattern: the token may sit inside a
        // longer string.
        assert_eq!(parse_duration("duration=PT5M"), 300);
    }
}
