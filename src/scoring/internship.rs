use super::normalize::band;
use crate::form::FormAnswers;
use crate::types::scoring::{Score, SubScoreSet};

pub const LABELS: [&str; 3] = ["Project Fit", "Organization/Activity", "Growth Potential"];

pub fn score(answers: &FormAnswers) -> SubScoreSet {
    let project_fit = band(answers.length("projects") as f64, 500.0, 45.0, 92.0);
    let organization = band(answers.length("org") as f64, 400.0, 42.0, 88.0);
    let growth = band(answers.length("coursework") as f64, 400.0, 40.0, 86.0);

    SubScoreSet::new(
        LABELS,
        [project_fit as Score, organization as Score, growth as Score],
    )
}
