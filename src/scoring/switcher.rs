use super::normalize::{band, clamp, rescale};
use crate::form::FormAnswers;
use crate::types::scoring::{Score, SubScoreSet};

pub const LABELS: [&str; 3] = ["Transferable Skills", "Role Relevansi", "Narrative"];

const SKILLS_TEXT_CAP: f64 = 400.0;

pub fn score(answers: &FormAnswers) -> SubScoreSet {
    let skills_len = answers.length("skills") as f64;
    let transferable = band(skills_len, SKILLS_TEXT_CAP, 45.0, 92.0);
    let relevance = relevance(answers.text("role_from"), answers.text("role_to"), skills_len);
    let narrative = band(skills_len, SKILLS_TEXT_CAP, 42.0, 88.0);

    SubScoreSet::new(
        LABELS,
        [transferable as Score, relevance, narrative as Score],
    )
}

/// A real move between two named roles starts higher. The skills term is not
/// capped before rescaling; the final clamp bounds it.
pub fn relevance(role_from: &str, role_to: &str, skills_len: f64) -> Score {
    let base = if !role_from.is_empty() && !role_to.is_empty() && role_from != role_to {
        60.0
    } else {
        55.0
    };
    let skills = rescale(skills_len, 0.0, SKILLS_TEXT_CAP, 0.0, 25.0).round();
    clamp(base + skills, 40.0, 90.0) as Score
}
