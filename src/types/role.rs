use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicantRole {
    Scholarship,
    Jobseeker,
    CareerSwitcher,
    Internship,
}

impl ApplicantRole {
    pub const ALL: [ApplicantRole; 4] = [
        ApplicantRole::Scholarship,
        ApplicantRole::Jobseeker,
        ApplicantRole::CareerSwitcher,
        ApplicantRole::Internship,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scholarship => "Scholarship",
            Self::Jobseeker => "Jobseeker",
            Self::CareerSwitcher => "Career Switcher",
            Self::Internship => "Internship",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let folded = raw
            .trim()
            .to_ascii_lowercase()
            .replace(['-', '_'], " ");
        match folded.as_str() {
            "scholarship" => Some(Self::Scholarship),
            "jobseeker" | "job seeker" => Some(Self::Jobseeker),
            "career switcher" => Some(Self::CareerSwitcher),
            "internship" => Some(Self::Internship),
            _ => None,
        }
    }
}

impl fmt::Display for ApplicantRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleSelection {
    Known(ApplicantRole),
    Unknown(String),
}

impl RoleSelection {
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|value| !value.is_empty()) {
            None => Self::Known(ApplicantRole::Scholarship),
            Some(value) => match ApplicantRole::parse(value) {
                Some(role) => Self::Known(role),
                None => Self::Unknown(value.to_string()),
            },
        }
    }

    pub fn known(&self) -> Option<ApplicantRole> {
        match self {
            Self::Known(role) => Some(*role),
            Self::Unknown(_) => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Known(role) => role.as_str(),
            Self::Unknown(name) => name,
        }
    }
}

impl Serialize for RoleSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
