pub mod advice;
pub mod red_flags;

use crate::types::role::{ApplicantRole, RoleSelection};
use crate::types::scoring::{Score, ScoreContext, SubScore};
use advice::{advice_for, preview_template, rewrite_samples, Advice};
use chrono::NaiveDate;
use red_flags::{red_flags, RedFlagInputs};
use serde::Serialize;

const TARGET_PLACEHOLDER: &str = "{target}";
const DEFAULT_TARGET: &str = "a new role";

#[derive(Debug, Clone, Serialize)]
pub struct ResultsView {
    pub role: RoleSelection,
    pub heading: String,
    pub badge: String,
    pub background: Option<String>,
    pub overall_score: Score,
    pub gauge_position_pct: f64,
    pub accent: Option<&'static str>,
    pub sub_scores: Vec<SubScore>,
    pub advice: Advice,
    pub red_flags: Vec<String>,
    pub rewrites: Vec<RewriteCard>,
    pub preview: CvPreview,
    pub premium: PremiumPanel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewriteCard {
    pub title: String,
    pub original: String,
    pub rewritten: String,
    pub locked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CvPreview {
    pub summary: String,
    pub projects: Vec<String>,
    pub skills: String,
    pub watermark: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PremiumPanel {
    pub unlocked: bool,
    pub title: &'static str,
    pub cta_label: &'static str,
    pub cta_enabled: bool,
    pub download_enabled: bool,
}

impl PremiumPanel {
    pub fn for_state(unlocked: bool) -> Self {
        if unlocked {
            Self {
                unlocked,
                title: "Premium Active – Full Access Unlocked",
                cta_label: "Already Premium",
                cta_enabled: false,
                download_enabled: true,
            }
        } else {
            Self {
                unlocked,
                title: "Unlock Premium for the full analysis",
                cta_label: "Unlock Premium",
                cta_enabled: true,
                download_enabled: false,
            }
        }
    }
}

pub fn accent_for(role: Option<ApplicantRole>) -> Option<&'static str> {
    role.map(|role| match role {
        ApplicantRole::Scholarship => "accent-green",
        ApplicantRole::Jobseeker => "accent-blue",
        ApplicantRole::CareerSwitcher => "accent-orange",
        ApplicantRole::Internship => "accent-purple",
    })
}

pub fn gauge_position(score: Score) -> f64 {
    5.0 + f64::from(score) / 100.0 * 90.0
}

pub fn build_view(ctx: &ScoreContext, unlocked: bool, today: NaiveDate) -> ResultsView {
    let role = ctx.role.known();
    let role_name = ctx.role.name();
    let target = ctx.aux.get("targetRole").unwrap_or(DEFAULT_TARGET);

    let heading = match ctx.aux.get("targetRoleLevel") {
        Some(level) => format!("{role_name} – {level}"),
        None => role_name.to_string(),
    };
    let background = match role {
        Some(ApplicantRole::Scholarship) => ctx.aux.get("targetField").map(str::to_string),
        Some(ApplicantRole::Jobseeker) => Some(
            ctx.aux
                .get("motivation")
                .unwrap_or("Jobseeker background")
                .to_string(),
        ),
        _ => Some("General profile".to_string()),
    };

    let rewrites = rewrite_samples(role)
        .iter()
        .enumerate()
        .map(|(index, sample)| RewriteCard {
            title: sample.title.to_string(),
            original: sample.original.to_string(),
            rewritten: sample.rewritten.replace(TARGET_PLACEHOLDER, target),
            // the first sample is the free preview
            locked: index > 0 && !unlocked,
        })
        .collect();

    let template = preview_template(role);
    let preview = CvPreview {
        summary: template.summary.replace(TARGET_PLACEHOLDER, target),
        projects: template.projects.iter().map(|p| p.to_string()).collect(),
        skills: template.skills.to_string(),
        watermark: !unlocked,
    };

    let red_flags = match role {
        Some(ApplicantRole::Scholarship) => red_flags(&RedFlagInputs::from_aux(&ctx.aux), today),
        _ => Vec::new(),
    };

    tracing::debug!(
        role = role_name,
        unlocked,
        red_flags = red_flags.len(),
        "results view built"
    );

    ResultsView {
        role: ctx.role.clone(),
        heading,
        badge: format!("{role_name} Snapshot"),
        background,
        overall_score: ctx.overall,
        gauge_position_pct: gauge_position(ctx.overall),
        accent: accent_for(role),
        sub_scores: ctx.sub_scores.entries().to_vec(),
        advice: advice_for(role),
        red_flags,
        rewrites,
        preview,
        premium: PremiumPanel::for_state(unlocked),
    }
}
