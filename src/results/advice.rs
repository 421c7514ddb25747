use crate::types::role::ApplicantRole;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RewriteSample {
    pub title: &'static str,
    pub original: &'static str,
    pub rewritten: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum Advice {
    Checklist(Vec<&'static str>),
    Bullets(Vec<&'static str>),
}

const SCHOLARSHIP_CHECKLIST: [&str; 5] = [
    "Official transcript with GPA scale stated",
    "Valid language certificate (IELTS/TOEFL/Duolingo) covering the deadline",
    "Two recommendation letters, at least one academic",
    "Motivation essay tied to the intended field of study",
    "One-page academic CV highlighting research and leadership",
];

const GENERAL_ADVICE: [&str; 2] = [
    "Lead every bullet with a measurable result, then the action behind it.",
    "Mirror the wording of the target posting in your summary and skills.",
];

pub fn advice_for(role: Option<ApplicantRole>) -> Advice {
    match role {
        Some(ApplicantRole::Scholarship) => Advice::Checklist(SCHOLARSHIP_CHECKLIST.to_vec()),
        _ => Advice::Bullets(GENERAL_ADVICE.to_vec()),
    }
}

const SCHOLARSHIP_REWRITES: [RewriteSample; 3] = [
    RewriteSample {
        title: "Academic Achievement: bullet rewrite",
        original: "Received an internal campus scholarship, active in academic activities.",
        rewritten: "Awarded competitive campus scholarship; maintained strong academic standing while contributing to research/club activities with measurable outcomes.",
    },
    RewriteSample {
        title: "Leadership/Organization: bullet rewrite",
        original: "Chair of the student organization, led several work programs.",
        rewritten: "Led 15+ member student organization to deliver 4 campus-wide programs, increasing participant satisfaction by 20% and fundraising Rp15 juta.",
    },
    RewriteSample {
        title: "Short Objective: scholarship",
        original: "Want to continue my studies with a scholarship.",
        rewritten: "Motivated scholar with strong academic foundation (STEM) seeking scholarship to deepen research in [field], aiming to deliver societal impact via [topic] with faculty collaboration.",
    },
];

const SWITCHER_REWRITES: [RewriteSample; 3] = [
    RewriteSample {
        title: "Transferable Skills: bullet rewrite",
        original: "Experienced in my previous role, want to change careers.",
        rewritten: "Translated cross-functional experience into data-driven decisions; improved process efficiency by 18% using spreadsheets, dashboards, and stakeholder alignment.",
    },
    RewriteSample {
        title: "New Role Target: summary",
        original: "Want to become a Product Manager.",
        rewritten: "Aspiring Product Manager with analytics, UX sense, and delivery track-record; able to scope MVPs, prioritize roadmap, and align teams to outcomes.",
    },
    RewriteSample {
        title: "Suggested Project/Portfolio: bullet",
        original: "Currently preparing a portfolio.",
        rewritten: "Built a public case study: redesigned onboarding flow, defined success metrics (activation rate), and delivered prototype validated by 5 user interviews.",
    },
];

const JOBSEEKER_REWRITES: [RewriteSample; 3] = [
    RewriteSample {
        title: "Jobseeker Summary: rewrite",
        original: "Professional with relevant experience looking to pursue a new role.",
        rewritten: "Strategic professional targeting {target}; connects current experience to business needs and shows readiness to contribute from day one.",
    },
    RewriteSample {
        title: "Jobseeker Experience Highlight",
        original: "Managed several projects and small teams.",
        rewritten: "Led cross-functional squad to deliver campaign impacting revenue +15%, mentored junior members, and built SOPs for scale-up.",
    },
    RewriteSample {
        title: "Jobseeker Growth Plan",
        original: "Currently taking training to upgrade my skills.",
        rewritten: "Mapped 90-day upskilling plan: advanced certification, peer mentoring, and a pilot project that demonstrates readiness for the new domain.",
    },
];

const INTERNSHIP_REWRITES: [RewriteSample; 3] = [
    RewriteSample {
        title: "Project: bullet rewrite (impact-oriented)",
        original: "Worked on a web-related course project.",
        rewritten: "Developed responsive web app for course project; implemented authentication and REST API integration, achieving 95% Lighthouse performance score.",
    },
    RewriteSample {
        title: "Organization/Volunteer: bullet rewrite",
        original: "Active in campus organizations.",
        rewritten: "Coordinated volunteer team of 10 to deliver campus event (300+ attendees), managing logistics, sponsors, and post-event reporting.",
    },
    RewriteSample {
        title: "1-page Summary: internship",
        original: "Want an internship to gain experience.",
        rewritten: "STEM undergraduate with hands-on projects and strong willingness to learn; ready to contribute on real tasks, iterate on feedback, and grow with the team.",
    },
];

pub fn rewrite_samples(role: Option<ApplicantRole>) -> [RewriteSample; 3] {
    match role {
        Some(ApplicantRole::Scholarship) => SCHOLARSHIP_REWRITES,
        Some(ApplicantRole::CareerSwitcher) => SWITCHER_REWRITES,
        Some(ApplicantRole::Jobseeker) => JOBSEEKER_REWRITES,
        Some(ApplicantRole::Internship) | None => INTERNSHIP_REWRITES,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTemplate {
    pub summary: &'static str,
    pub projects: [&'static str; 2],
    pub skills: &'static str,
}

pub fn preview_template(role: Option<ApplicantRole>) -> PreviewTemplate {
    match role {
        Some(ApplicantRole::Scholarship) | None => PreviewTemplate {
            summary: "Scholarship-focused candidate with solid academics and consistent leadership impact. Interested in research on [topic] with community contribution.",
            projects: [
                "Research assistant: contributed to data collection and analysis; summarized findings into 2-page brief.",
                "Capstone project: built prototype addressing [problem]; presented to faculty panel.",
            ],
            skills: "Academic Writing • Research Methods • Data Analysis • Leadership",
        },
        Some(ApplicantRole::Jobseeker) => PreviewTemplate {
            summary: "Strategic professional targeting {target}; highlights the experience, skills, and motivation a target company is hiring for.",
            projects: [
                "Key accomplishment: delivered measurable impact (e.g., +18% revenue, -25% churn) through cross-team collaboration.",
                "Growth plan: 90-day roadmap (certification, mentoring, sample project) to speed up ramp-up in the new role.",
            ],
            skills: "Strategic Execution • Stakeholder Management • Impact Storytelling • Continuous Learning",
        },
        Some(ApplicantRole::CareerSwitcher) => PreviewTemplate {
            summary: "Career switcher transitioning into [target role]; strong transferable skills across analysis, communication, and project delivery.",
            projects: [
                "Case study: redesigned [flow] with metric-driven approach; defined MVP, tracked outcomes.",
                "Self-learning portfolio: completed 3 mini projects relevant to the target role.",
            ],
            skills: "Problem Solving • Stakeholder Management • Agile • Analytics",
        },
        Some(ApplicantRole::Internship) => PreviewTemplate {
            summary: "Undergraduate with practical coursework and projects, eager to learn and contribute to real-world tasks.",
            projects: [
                "Web app project: authentication, API integration, responsive UI.",
                "Data mini-project: cleaned dataset and visualized insights with dashboards.",
            ],
            skills: "HTML/CSS/JS • Python/Excel • Teamwork • Communication",
        },
    }
}
