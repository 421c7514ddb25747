use super::normalize::clamp;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

const DEFAULT_GPA_SCALE: f64 = 4.0;

const IELTS_MAX: f64 = 9.0;
const TOEFL_MAX: f64 = 120.0;
const DUOLINGO_MAX: f64 = 160.0;

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("number pattern is valid"))
}

fn with_decimal_point(text: &str) -> String {
    text.replacen(',', ".", 1)
}

pub fn text_len(text: &str) -> usize {
    text.trim().chars().count()
}

pub fn parse_number(text: &str) -> Option<f64> {
    let normalized = with_decimal_point(text);
    number_pattern()
        .find(&normalized)
        .and_then(|found| found.as_str().parse().ok())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gpa {
    pub value: f64,
    pub normalized: f64,
}

/// Reads `"3.5"`, `"3,5 / 4"` or `"85/100"`. A second positive number is the scale.
pub fn parse_gpa(text: &str) -> Gpa {
    let normalized_text = with_decimal_point(text);
    let mut numbers = number_pattern()
        .find_iter(&normalized_text)
        .filter_map(|found| found.as_str().parse::<f64>().ok());

    let Some(value) = numbers.next() else {
        return Gpa {
            value: 0.0,
            normalized: 0.0,
        };
    };
    let scale = numbers
        .next()
        .filter(|scale| *scale > 0.0)
        .unwrap_or(DEFAULT_GPA_SCALE);

    Gpa {
        value,
        normalized: clamp(value / scale * 4.0, 0.0, 4.0),
    }
}

/// Top of the language test's scale: IELTS 9, TOEFL 120, Duolingo 160.
/// Keyword and magnitude checks run TOEFL first.
pub fn language_ceiling(text: &str, numeric: Option<f64>) -> f64 {
    if text.is_empty() {
        return IELTS_MAX;
    }
    let lower = text.to_lowercase();
    if lower.contains("toefl") || lower.contains("ibt") || numeric.is_some_and(|n| n > IELTS_MAX)
    {
        return TOEFL_MAX;
    }
    if lower.contains("duolingo") || lower.contains("duo") {
        return DUOLINGO_MAX;
    }
    IELTS_MAX
}

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_len_trims_and_counts_characters() {
        assert_eq!(text_len(""), 0);
        assert_eq!(text_len("   \n\t "), 0);
        assert_eq!(text_len("  Data Analyst  "), 12);
        assert_eq!(text_len("café"), 4);
    }

    #[test]
    fn parse_number_finds_first_decimal() {
        assert_eq!(parse_number("IELTS 7.5 overall"), Some(7.5));
        assert_eq!(parse_number("skor 6,5"), Some(6.5));
        assert_eq!(parse_number("TOEFL iBT 100 (2024)"), Some(100.0));
        assert_eq!(parse_number("belum tes"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn parse_gpa_uses_explicit_scale() {
        let gpa = parse_gpa("3.5/4.0");
        assert_eq!(gpa.value, 3.5);
        assert_eq!(gpa.normalized, 3.5);

        let percent = parse_gpa("85/100");
        assert!((percent.normalized - 3.4).abs() < 1e-9);

        let comma = parse_gpa("3,2");
        assert!((comma.normalized - 3.2).abs() < 1e-9);
    }

    #[test]
    fn parse_gpa_clamps_and_defaults() {
        assert_eq!(parse_gpa("5/4").normalized, 4.0);
        assert_eq!(parse_gpa("3.0/0").normalized, 3.0);
        assert_eq!(parse_gpa("n/a"), Gpa { value: 0.0, normalized: 0.0 });
    }

    #[test]
    fn language_ceiling_classifies_tests() {
        assert_eq!(language_ceiling("", None), 9.0);
        assert_eq!(language_ceiling("IELTS 7.0", Some(7.0)), 9.0);
        assert_eq!(language_ceiling("TOEFL", None), 120.0);
        assert_eq!(language_ceiling("iBT 95", Some(95.0)), 120.0);
        assert_eq!(language_ceiling("100", Some(100.0)), 120.0);
        assert_eq!(language_ceiling("Duolingo 8", Some(8.0)), 160.0);
        assert_eq!(language_ceiling("Duolingo 125", Some(125.0)), 120.0);
    }

    #[test]
    fn parse_date_accepts_iso_dates_only() {
        assert_eq!(
            parse_date("2027-03-01"),
            NaiveDate::from_ymd_opt(2027, 3, 1)
        );
        assert_eq!(parse_date("01/03/2027"), None);
        assert_eq!(parse_date(""), None);
    }
}
