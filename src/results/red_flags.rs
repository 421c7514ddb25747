use crate::scoring::extract::{parse_date, parse_number};
use crate::types::scoring::AuxFields;
use chrono::NaiveDate;

const TEST_VALIDITY_DAYS: i64 = 730;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RedFlagInputs {
    pub language_score: Option<f64>,
    pub min_language: Option<f64>,
    pub score_expiry: Option<NaiveDate>,
    pub test_date: Option<NaiveDate>,
    pub gpa: Option<f64>,
    pub gpa_average: Option<f64>,
}

impl RedFlagInputs {
    pub fn from_aux(aux: &AuxFields) -> Self {
        let number = |key: &str| aux.get(key).and_then(parse_number);
        let date = |key: &str| aux.get(key).and_then(parse_date);
        Self {
            language_score: number("languageScore"),
            min_language: number("minLanguage"),
            score_expiry: date("scoreExpiry"),
            test_date: date("testDate"),
            gpa: number("gpa"),
            gpa_average: number("gpaAverage"),
        }
    }
}

pub fn red_flags(inputs: &RedFlagInputs, today: NaiveDate) -> Vec<String> {
    let mut flags = Vec::new();

    if let (Some(score), Some(min)) = (inputs.language_score, inputs.min_language) {
        if score < min {
            flags.push(format!(
                "Language score {score} is below the minimum of {min} for this program."
            ));
        }
    }

    match (inputs.score_expiry, inputs.test_date) {
        (Some(expiry), _) if expiry <= today => {
            flags.push(format!(
                "Language certificate expired on {expiry}; book a retake before applying."
            ));
        }
        (None, Some(taken)) => {
            let age = (today - taken).num_days();
            if age > TEST_VALIDITY_DAYS {
                flags.push(format!(
                    "Language test was taken {age} days ago; most certificates are valid for two years only."
                ));
            }
        }
        _ => {}
    }

    if let (Some(gpa), Some(average)) = (inputs.gpa, inputs.gpa_average) {
        if gpa < average {
            flags.push(format!(
                "GPA {gpa:.2} is below the benchmark average of {average:.2}."
            ));
        }
    }

    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date")
    }

    #[test]
    fn no_inputs_no_flags() {
        assert!(red_flags(&RedFlagInputs::default(), today()).is_empty());
    }

    #[test]
    fn each_condition_adds_one_line() {
        let inputs = RedFlagInputs {
            language_score: Some(6.0),
            min_language: Some(6.5),
            score_expiry: NaiveDate::from_ymd_opt(2026, 9, 1),
            test_date: None,
            gpa: Some(3.1),
            gpa_average: Some(3.4),
        };
        let flags = red_flags(&inputs, today());
        assert_eq!(flags.len(), 3);
        assert!(flags[0].contains("below the minimum of 6.5"));
        assert!(flags[1].contains("expired on 2026-09-01"));
        assert!(flags[2].contains("GPA 3.10"));
    }

    #[test]
    fn thresholds_met_raise_nothing() {
        let inputs = RedFlagInputs {
            language_score: Some(7.0),
            min_language: Some(6.5),
            score_expiry: NaiveDate::from_ymd_opt(2027, 9, 1),
            test_date: NaiveDate::from_ymd_opt(2020, 1, 1),
            gpa: Some(3.4),
            gpa_average: Some(3.4),
        };
        assert!(red_flags(&inputs, today()).is_empty());
    }

    #[test]
    fn certificate_expiring_today_is_flagged() {
        let inputs = RedFlagInputs {
            score_expiry: Some(today()),
            ..RedFlagInputs::default()
        };
        let flags = red_flags(&inputs, today());
        assert_eq!(flags.len(), 1);
        assert!(flags[0].contains("expired on 2026-10-18"));
    }

    #[test]
    fn old_test_date_flags_only_without_expiry() {
        let inputs = RedFlagInputs {
            test_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            ..RedFlagInputs::default()
        };
        let flags = red_flags(&inputs, today());
        assert_eq!(flags.len(), 1);
        assert!(flags[0].contains("days ago"));

        let recent = RedFlagInputs {
            test_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            ..RedFlagInputs::default()
        };
        assert!(red_flags(&recent, today()).is_empty());
    }

    #[test]
    fn inputs_parse_from_query_fields() {
        let mut aux = AuxFields::default();
        aux.set("languageScore", "IELTS 6,0");
        aux.set("minLanguage", "6.5");
        aux.set("testDate", "2023-05-02");
        aux.set("gpa", "3.20");
        aux.set("gpaAverage", "not a number");

        let inputs = RedFlagInputs::from_aux(&aux);
        assert_eq!(inputs.language_score, Some(6.0));
        assert_eq!(inputs.min_language, Some(6.5));
        assert_eq!(inputs.test_date, NaiveDate::from_ymd_opt(2023, 5, 2));
        assert_eq!(inputs.gpa, Some(3.2));
        assert_eq!(inputs.gpa_average, None);
    }
}
