use super::role::RoleSelection;
use serde::Serialize;
use std::collections::BTreeMap;

pub type Score = u8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubScore {
    pub label: String,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubScoreSet([SubScore; 3]);

impl SubScoreSet {
    pub fn new(labels: [&str; 3], scores: [Score; 3]) -> Self {
        let [l1, l2, l3] = labels;
        let [s1, s2, s3] = scores;
        Self([
            SubScore {
                label: l1.to_string(),
                score: s1,
            },
            SubScore {
                label: l2.to_string(),
                score: s2,
            },
            SubScore {
                label: l3.to_string(),
                score: s3,
            },
        ])
    }

    pub fn from_parts(labels: [String; 3], scores: [Score; 3]) -> Self {
        let [l1, l2, l3] = labels;
        let [s1, s2, s3] = scores;
        Self([
            SubScore {
                label: l1,
                score: s1,
            },
            SubScore {
                label: l2,
                score: s2,
            },
            SubScore {
                label: l3,
                score: s3,
            },
        ])
    }

    pub fn entries(&self) -> &[SubScore; 3] {
        &self.0
    }

    pub fn scores(&self) -> [Score; 3] {
        [self.0[0].score, self.0[1].score, self.0[2].score]
    }

    pub fn overall(&self) -> Score {
        overall_score(self.scores())
    }
}

pub fn overall_score(scores: [Score; 3]) -> Score {
    let sum: u16 = scores.iter().map(|score| u16::from(*score)).sum();
    (f64::from(sum) / 3.0).round() as Score
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuxFields(BTreeMap<&'static str, String>);

impl AuxFields {
    pub const KEYS: [&'static str; 15] = [
        "targetRole",
        "targetIndustry",
        "targetLocation",
        "experienceLabel",
        "motivation",
        "targetField",
        "workMode",
        "targetRoleLevel",
        "notes",
        "languageScore",
        "scoreExpiry",
        "testDate",
        "gpa",
        "minLanguage",
        "gpaAverage",
    ];

    pub fn set(&mut self, key: &str, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        match Self::KEYS.iter().find(|known| **known == key) {
            Some(known) => {
                self.0.insert(*known, value.to_string());
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        Self::KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreContext {
    pub role: RoleSelection,
    pub overall: Score,
    pub sub_scores: SubScoreSet,
    pub aux: AuxFields,
    pub unlocked_flag: bool,
}
