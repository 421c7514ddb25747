use super::extract::{language_ceiling, parse_date, parse_gpa, parse_number};
use super::normalize::{band, clamp, rescale};
use crate::form::FormAnswers;
use crate::types::scoring::{Score, SubScoreSet};
use chrono::NaiveDate;

pub const LABELS: [&str; 3] = [
    "Academic Background",
    "Language Readiness",
    "Experience Impact",
];

const LANGUAGE_FALLBACK: f64 = 45.0;
const EXPERIENCE_TEXT_CAP: f64 = 1200.0;

pub fn score(answers: &FormAnswers, today: NaiveDate) -> SubScoreSet {
    let academic = academic(answers.raw("gpa"), answers.text("degree"));
    let language = language(
        answers.text("language_score"),
        answers.text("planned_test_date"),
        parse_date(answers.raw("score_expiry")),
        today,
    );
    let experience = experience(
        answers.length("work_relevance")
            + answers.length("leadership_story")
            + answers.length("volunteer_impact"),
        answers.is_filled("research_achievements"),
        answers.is_filled("additional_tests"),
    );
    SubScoreSet::new(LABELS, [academic, language, experience])
}

pub fn degree_bonus(degree: &str) -> f64 {
    match degree {
        "PhD" => 6.0,
        "Master" => 4.0,
        "Bachelor" => 2.0,
        _ => 0.0,
    }
}

pub fn academic(gpa_text: &str, degree: &str) -> Score {
    let gpa = parse_gpa(gpa_text);
    tracing::trace!(gpa = gpa.value, normalized = gpa.normalized, "gpa parsed");
    let base = rescale(gpa.normalized, 0.0, 4.0, 45.0, 90.0).round();
    clamp(base + degree_bonus(degree), 40.0, 96.0) as Score
}

pub fn expiry_bonus(days_remaining: i64) -> f64 {
    if days_remaining > 365 {
        3.0
    } else if days_remaining > 180 {
        1.0
    } else if days_remaining <= 0 {
        // the expiry day itself already counts as expired
        -5.0
    } else {
        0.0
    }
}

pub fn language(
    language_text: &str,
    planned_test_date: &str,
    score_expiry: Option<NaiveDate>,
    today: NaiveDate,
) -> Score {
    let numeric = parse_number(language_text).filter(|value| *value > 0.0);
    let base = match numeric {
        Some(value) => {
            let ceiling = language_ceiling(language_text, Some(value));
            rescale(clamp(value, 0.0, ceiling), 0.0, ceiling, 40.0, 92.0).round()
        }
        None => LANGUAGE_FALLBACK,
    };
    let expiry = score_expiry
        .map(|expiry| expiry_bonus((expiry - today).num_days()))
        .unwrap_or(0.0);
    let planned = if numeric.is_none() && !planned_test_date.is_empty() {
        4.0
    } else {
        0.0
    };
    clamp(base + expiry + planned, 35.0, 94.0) as Score
}

pub fn experience(story_len: usize, has_research: bool, has_additional_tests: bool) -> Score {
    let base = band(story_len as f64, EXPERIENCE_TEXT_CAP, 42.0, 92.0);
    let research = if has_research { 3.0 } else { 0.0 };
    let additional = if has_additional_tests { 2.0 } else { 0.0 };
    clamp(base + research + additional, 40.0, 95.0) as Score
}
