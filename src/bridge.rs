use crate::scoring::labels_for;
use crate::types::role::{ApplicantRole, RoleSelection};
use crate::types::scoring::{AuxFields, Score, ScoreContext, SubScoreSet};
use std::collections::HashMap;
use url::form_urlencoded;

pub const FORM_PAGE: &str = "role-form";
pub const RESULTS_PAGE: &str = "analysis";

pub const DEFAULT_OVERALL: Score = 65;
pub const DEFAULT_SUB_SCORES: [Score; 3] = [68, 64, 62];
pub const UNLOCK_PARAM: &str = "unlocked";

const GENERIC_LABELS: [&str; 3] = ["Sub-score 1", "Sub-score 2", "Sub-score 3"];
const SCHOLARSHIP_RESULT_LABELS: [&str; 3] = ["Academic Strength", "Leadership", "Research Fit"];

pub fn encode(ctx: &ScoreContext) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("role", ctx.role.name());
    query.append_pair("score", &ctx.overall.to_string());
    for (index, sub) in ctx.sub_scores.entries().iter().enumerate() {
        query.append_pair(&format!("s{}", index + 1), &sub.score.to_string());
    }
    for (index, sub) in ctx.sub_scores.entries().iter().enumerate() {
        query.append_pair(&format!("l{}", index + 1), &sub.label);
    }
    for (key, value) in ctx.aux.entries() {
        query.append_pair(key, value);
    }
    if ctx.unlocked_flag {
        query.append_pair(UNLOCK_PARAM, "1");
    }
    query.finish()
}

/// Accepts a bare query, `?query`, or a full `page?query` link.
pub fn decode(input: &str) -> ScoreContext {
    // only a page name may precede the `?`; a raw `?` inside a value stays
    let query = match input.split_once('?') {
        Some((page, query)) if !page.contains(['=', '&']) => query,
        _ => input,
    };
    let mut params: HashMap<String, String> = HashMap::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        // first occurrence wins
        params
            .entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    let param = |key: &str| lookup(&params, key);

    let role = RoleSelection::from_param(param("role"));
    let overall = score_param(param("score"), DEFAULT_OVERALL);
    let scores = [
        score_param(param("s1"), DEFAULT_SUB_SCORES[0]),
        score_param(param("s2"), DEFAULT_SUB_SCORES[1]),
        score_param(param("s3"), DEFAULT_SUB_SCORES[2]),
    ];
    let fallback = default_labels(&role);
    let labels = [
        param("l1").unwrap_or(fallback[0]).to_string(),
        param("l2").unwrap_or(fallback[1]).to_string(),
        param("l3").unwrap_or(fallback[2]).to_string(),
    ];

    let mut aux = AuxFields::default();
    for key in AuxFields::KEYS {
        if let Some(value) = param(key) {
            aux.set(key, value);
        }
    }

    ScoreContext {
        role,
        overall,
        sub_scores: SubScoreSet::from_parts(labels, scores),
        aux,
        unlocked_flag: param(UNLOCK_PARAM) == Some("1"),
    }
}

fn lookup<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

pub fn default_labels(role: &RoleSelection) -> [&'static str; 3] {
    match role.known() {
        Some(ApplicantRole::Scholarship) => SCHOLARSHIP_RESULT_LABELS,
        Some(other) => labels_for(other),
        None => GENERIC_LABELS,
    }
}

fn score_param(raw: Option<&str>, default: Score) -> Score {
    raw.and_then(leading_integer)
        .map(|value| value.clamp(0, 100) as Score)
        .unwrap_or(default)
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // saturate rather than fail on absurdly long digit runs
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}

pub fn form_link(role: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("role", role)
        .finish();
    format!("{FORM_PAGE}?{query}")
}

pub fn results_link(ctx: &ScoreContext) -> String {
    format!("{RESULTS_PAGE}?{}", encode(ctx))
}

pub fn unlocked_results_link() -> String {
    format!("{RESULTS_PAGE}?{UNLOCK_PARAM}=1")
}
