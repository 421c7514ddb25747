use crate::results::ResultsView;
use crate::types::scoring::ScoreContext;
use serde::Serialize;

pub fn to_json(view: &ResultsView) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}

#[derive(Serialize)]
struct SubmissionOutput<'a> {
    #[serde(flatten)]
    context: &'a ScoreContext,
    link: &'a str,
}

pub fn submission_to_json(ctx: &ScoreContext, link: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&SubmissionOutput { context: ctx, link })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{decode, results_link};
    use crate::results::build_view;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date")
    }

    #[test]
    fn json_view_contains_scores_and_lock_state() {
        let view = build_view(&decode("role=Internship&score=71"), false, today());
        let rendered = to_json(&view).expect("json should serialize");
        assert!(rendered.contains("\"overall_score\": 71"));
        assert!(rendered.contains("\"role\": \"Internship\""));
        assert!(rendered.contains("\"locked\": true"));
        assert!(rendered.contains("\"kind\": \"bullets\""));
    }

    #[test]
    fn submission_json_carries_link() {
        let ctx = decode("role=Career+Switcher&score=70&s1=80&s2=70&s3=60");
        let link = results_link(&ctx);
        let rendered = submission_to_json(&ctx, &link).expect("json should serialize");
        assert!(rendered.contains("\"role\": \"Career Switcher\""));
        assert!(rendered.contains("\"overall\": 70"));
        assert!(rendered.contains("\"link\": \"analysis?role=Career+Switcher"));
    }
}
