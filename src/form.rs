use crate::error::{ReadinessError, Result};
use crate::scoring;
use crate::scoring::extract::{parse_gpa, text_len};
use crate::types::config::RedFlagConfig;
use crate::types::role::{ApplicantRole, RoleSelection};
use crate::types::scoring::{AuxFields, ScoreContext};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::Path;

const EXPERIENCE_LABEL_MAX_CHARS: usize = 60;

#[derive(Debug, Clone, Default)]
pub struct FormAnswers {
    values: BTreeMap<String, String>,
}

impl FormAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    #[cfg(test)]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.insert(key, value);
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table =
            toml::from_str(content).map_err(|e| ReadinessError::AnswersParse(e.to_string()))?;
        let mut answers = Self::new();
        for (key, value) in table {
            let text = match value {
                toml::Value::String(text) => text,
                toml::Value::Integer(n) => n.to_string(),
                toml::Value::Float(n) => n.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::Datetime(dt) => dt.to_string(),
                toml::Value::Array(_) | toml::Value::Table(_) => {
                    return Err(ReadinessError::AnswersParse(format!(
                        "field `{key}` must be a single value"
                    )));
                }
            };
            answers.insert(key, text);
        }
        Ok(answers)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ReadinessError::PathNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| ReadinessError::AnswersParse(format!("{}: {}", path.display(), e)))
    }

    pub fn apply_override(&mut self, raw: &str) -> Result<()> {
        let (key, value) = raw
            .split_once('=')
            .ok_or_else(|| ReadinessError::InvalidOverride(raw.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(ReadinessError::InvalidOverride(raw.to_string()));
        }
        self.insert(key, value);
        Ok(())
    }

    pub fn raw(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn text(&self, key: &str) -> &str {
        self.raw(key).trim()
    }

    pub fn length(&self, key: &str) -> usize {
        text_len(self.raw(key))
    }

    pub fn is_filled(&self, key: &str) -> bool {
        !self.text(key).is_empty()
    }
}

pub fn resolve_role(param: Option<&str>) -> ApplicantRole {
    match param.and_then(ApplicantRole::parse) {
        Some(role) => role,
        None => {
            if let Some(raw) = param.filter(|raw| !raw.trim().is_empty()) {
                let known: Vec<&str> = ApplicantRole::ALL.iter().map(|r| r.as_str()).collect();
                tracing::warn!(role = raw, known = ?known, "unknown role, using Scholarship form");
            }
            ApplicantRole::Scholarship
        }
    }
}

pub fn research_field_visible(degree: &str) -> bool {
    matches!(degree.trim(), "Master" | "PhD")
}

pub fn planned_test_visible(language_text: &str) -> bool {
    let lower = language_text.to_lowercase();
    lower.trim().is_empty() || lower.contains("belum")
}

/// Scores the active role and collects the context the results page shows.
pub fn submit(
    role: ApplicantRole,
    answers: &FormAnswers,
    today: NaiveDate,
    benchmarks: &RedFlagConfig,
) -> ScoreContext {
    if role == ApplicantRole::Scholarship {
        tracing::debug!(
            research = research_field_visible(answers.text("degree")),
            planned_test = planned_test_visible(answers.raw("language_score")),
            "conditional fields shown"
        );
    }
    let sub_scores = scoring::score_role(role, answers, today);
    let overall = sub_scores.overall();
    tracing::info!(
        role = %role,
        overall,
        scores = ?sub_scores.scores(),
        "form submitted"
    );

    ScoreContext {
        role: RoleSelection::Known(role),
        overall,
        sub_scores,
        aux: aux_fields(role, answers, benchmarks),
        unlocked_flag: false,
    }
}

fn aux_fields(role: ApplicantRole, answers: &FormAnswers, benchmarks: &RedFlagConfig) -> AuxFields {
    let mut aux = AuxFields::default();
    match role {
        ApplicantRole::Jobseeker => {
            aux.set("targetRole", answers.text("target_role"));
            aux.set("targetIndustry", answers.text("industry"));
            aux.set("targetLocation", answers.text("region"));
            let headline: String = answers
                .text("background")
                .lines()
                .next()
                .unwrap_or("")
                .chars()
                .take(EXPERIENCE_LABEL_MAX_CHARS)
                .collect();
            aux.set("experienceLabel", &headline);
            aux.set("motivation", answers.text("motivation"));
            aux.set("workMode", answers.text("work_mode"));
            aux.set("targetRoleLevel", answers.text("role_level"));
            aux.set("notes", answers.text("notes"));
        }
        ApplicantRole::Scholarship => {
            aux.set("targetField", answers.text("intended_field"));
            aux.set("targetLocation", answers.text("destination"));
            aux.set("languageScore", answers.text("language_score"));
            aux.set("scoreExpiry", answers.text("score_expiry"));
            aux.set("testDate", answers.text("test_date"));
            if answers.is_filled("gpa") {
                let gpa = parse_gpa(answers.raw("gpa"));
                aux.set("gpa", &format!("{:.2}", gpa.normalized));
            }
            if let Some(min) = benchmarks.min_language {
                aux.set("minLanguage", &min.to_string());
            }
            if let Some(average) = benchmarks.gpa_average {
                aux.set("gpaAverage", &average.to_string());
            }
        }
        ApplicantRole::CareerSwitcher | ApplicantRole::Internship => {}
    }
    aux
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date")
    }

    #[test]
    fn answers_parse_scalars_from_toml() {
        let answers = FormAnswers::from_toml_str(
            r#"
gpa = "3.5/4.0"
degree = "Master"
language_score = 7.5
score_expiry = 2028-01-01
"#,
        )
        .expect("answers should parse");

        assert_eq!(answers.text("gpa"), "3.5/4.0");
        assert_eq!(answers.text("language_score"), "7.5");
        assert_eq!(answers.text("score_expiry"), "2028-01-01");
        assert_eq!(answers.text("missing"), "");
    }

    #[test]
    fn answers_reject_nested_values() {
        let err = FormAnswers::from_toml_str("skills = [\"a\", \"b\"]").expect_err("should fail");
        assert!(matches!(err, ReadinessError::AnswersParse(_)));
    }

    #[test]
    fn override_requires_key_value_syntax() {
        let mut answers = FormAnswers::new();
        answers
            .apply_override("target_role=Data Analyst")
            .expect("override should apply");
        assert_eq!(answers.text("target_role"), "Data Analyst");
        assert!(answers.apply_override("no-separator").is_err());
        assert!(answers.apply_override("=value").is_err());
    }

    #[test]
    fn unknown_role_falls_back_to_scholarship() {
        assert_eq!(resolve_role(Some("General")), ApplicantRole::Scholarship);
        assert_eq!(resolve_role(None), ApplicantRole::Scholarship);
        assert_eq!(resolve_role(Some("Internship")), ApplicantRole::Internship);
    }

    #[test]
    fn conditional_fields_follow_answers() {
        assert!(research_field_visible("PhD"));
        assert!(research_field_visible("Master"));
        assert!(!research_field_visible("Bachelor"));
        assert!(planned_test_visible(""));
        assert!(planned_test_visible("Belum ada skor"));
        assert!(!planned_test_visible("IELTS 7"));
    }

    #[test]
    fn submit_jobseeker_carries_non_empty_context() {
        let answers = FormAnswers::new()
            .with("target_role", "Data Analyst")
            .with("background", "Accountant at a logistics firm for five years\nand more")
            .with("region", "Jakarta")
            .with("motivation", "   ");

        let ctx = submit(
            ApplicantRole::Jobseeker,
            &answers,
            today(),
            &RedFlagConfig::default(),
        );

        assert_eq!(ctx.role, RoleSelection::Known(ApplicantRole::Jobseeker));
        assert_eq!(ctx.overall, ctx.sub_scores.overall());
        assert_eq!(ctx.aux.get("targetRole"), Some("Data Analyst"));
        assert_eq!(ctx.aux.get("targetLocation"), Some("Jakarta"));
        assert_eq!(
            ctx.aux.get("experienceLabel"),
            Some("Accountant at a logistics firm for five years")
        );
        assert_eq!(ctx.aux.get("motivation"), None);
    }

    #[test]
    fn submit_truncates_experience_label() {
        let answers = FormAnswers::new().with("background", &"x".repeat(90));
        let ctx = submit(
            ApplicantRole::Jobseeker,
            &answers,
            today(),
            &RedFlagConfig::default(),
        );
        assert_eq!(
            ctx.aux.get("experienceLabel").map(|label| label.chars().count()),
            Some(60)
        );
    }

    #[test]
    fn submit_scholarship_forwards_red_flag_inputs() {
        let answers = FormAnswers::new()
            .with("gpa", "3.2/4")
            .with("language_score", "IELTS 6.0")
            .with("intended_field", "Public Health");
        let benchmarks = RedFlagConfig {
            min_language: Some(6.5),
            gpa_average: Some(3.4),
        };

        let ctx = submit(ApplicantRole::Scholarship, &answers, today(), &benchmarks);

        assert_eq!(ctx.aux.get("targetField"), Some("Public Health"));
        assert_eq!(ctx.aux.get("gpa"), Some("3.20"));
        assert_eq!(ctx.aux.get("languageScore"), Some("IELTS 6.0"));
        assert_eq!(ctx.aux.get("minLanguage"), Some("6.5"));
        assert_eq!(ctx.aux.get("gpaAverage"), Some("3.4"));
    }

    #[test]
    fn submit_other_roles_carry_no_context() {
        let answers = FormAnswers::new().with("skills", "SQL, Excel");
        let ctx = submit(
            ApplicantRole::CareerSwitcher,
            &answers,
            today(),
            &RedFlagConfig::default(),
        );
        assert!(ctx.aux.entries().is_empty());
    }
}
