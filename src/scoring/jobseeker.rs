use super::normalize::band;
use crate::form::FormAnswers;
use crate::types::scoring::{Score, SubScoreSet};

pub const LABELS: [&str; 3] = [
    "Experience Background",
    "Market Readiness",
    "Differentiation",
];

pub fn score(answers: &FormAnswers) -> SubScoreSet {
    let profile = band(
        (answers.length("target_role") + answers.length("motivation")) as f64,
        1500.0,
        45.0,
        96.0,
    );
    let market = band(
        (answers.length("portfolio")
            + answers.length("work_mode")
            + answers.length("region")
            + answers.length("salary_expectation")) as f64,
        1500.0,
        44.0,
        94.0,
    );
    let differentiation = band(answers.length("notes") as f64, 1200.0, 42.0, 92.0);

    SubScoreSet::new(
        LABELS,
        [profile as Score, market as Score, differentiation as Score],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_target_role_barely_moves_profile() {
        let answers = FormAnswers::new().with("target_role", "Data Analyst");
        assert_eq!(score(&answers).scores(), [45, 44, 42]);
    }

    #[test]
    fn choices_and_portfolio_feed_market_readiness() {
        let answers = FormAnswers::new()
            .with("portfolio", &"p".repeat(700))
            .with("work_mode", "Remote")
            .with("region", "Jakarta")
            .with("salary_expectation", "IDR 15-20 juta");
        // 700 + 6 + 7 + 14 = 727 characters
        assert_eq!(score(&answers).scores()[1], 68);
    }

    #[test]
    fn long_answers_saturate_at_band_ceilings() {
        let long = "x".repeat(2000);
        let answers = FormAnswers::new()
            .with("target_role", &long)
            .with("portfolio", &long)
            .with("notes", &long);
        assert_eq!(score(&answers).scores(), [96, 94, 92]);
    }
}
