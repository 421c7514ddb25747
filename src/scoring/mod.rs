pub mod extract;
pub mod internship;
pub mod jobseeker;
pub mod normalize;
pub mod scholarship;
pub mod switcher;

use crate::form::FormAnswers;
use crate::types::role::ApplicantRole;
use crate::types::scoring::SubScoreSet;
use chrono::NaiveDate;

pub type Scorer = fn(&FormAnswers, NaiveDate) -> SubScoreSet;

pub fn scorer_for(role: ApplicantRole) -> Scorer {
    match role {
        ApplicantRole::Scholarship => scholarship::score,
        ApplicantRole::Jobseeker => score_jobseeker,
        ApplicantRole::CareerSwitcher => score_switcher,
        ApplicantRole::Internship => score_internship,
    }
}

fn score_jobseeker(answers: &FormAnswers, _today: NaiveDate) -> SubScoreSet {
    jobseeker::score(answers)
}

fn score_switcher(answers: &FormAnswers, _today: NaiveDate) -> SubScoreSet {
    switcher::score(answers)
}

fn score_internship(answers: &FormAnswers, _today: NaiveDate) -> SubScoreSet {
    internship::score(answers)
}

pub fn score_role(role: ApplicantRole, answers: &FormAnswers, today: NaiveDate) -> SubScoreSet {
    scorer_for(role)(answers, today)
}

pub fn labels_for(role: ApplicantRole) -> [&'static str; 3] {
    match role {
        ApplicantRole::Scholarship => scholarship::LABELS,
        ApplicantRole::Jobseeker => jobseeker::LABELS,
        ApplicantRole::CareerSwitcher => switcher::LABELS,
        ApplicantRole::Internship => internship::LABELS,
    }
}
