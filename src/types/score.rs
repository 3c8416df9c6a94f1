//! Compatibility score types

use serde::{Deserialize, Serialize};

/// One of the five independent compatibility dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    Study,
    DreamSchool,
    CurrentSchool,
    Timeframe,
    Major,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::Study,
        Criterion::DreamSchool,
        Criterion::CurrentSchool,
        Criterion::Timeframe,
        Criterion::Major,
    ];

    /// Weight in the final average
    pub fn weight(self) -> u32 {
        match self {
            Criterion::Study => 3,
            _ => 1,
        }
    }
}

/// Per-criterion pass/fail flags plus the weighted score in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub study: bool,
    pub dream_school: bool,
    pub current_school: bool,
    pub timeframe: bool,
    pub major: bool,
    pub score: f64,
}

impl ScoreBreakdown {
    /// Sum of all criterion weights
    pub const TOTAL_WEIGHT: u32 = 7;

    /// Build a breakdown from flags, computing the weighted score
    pub fn from_flags(
        study: bool,
        dream_school: bool,
        current_school: bool,
        timeframe: bool,
        major: bool,
    ) -> Self {
        let mut breakdown = Self {
            study,
            dream_school,
            current_school,
            timeframe,
            major,
            score: 0.0,
        };
        let weighted: u32 = Criterion::ALL
            .iter()
            .filter(|&&c| breakdown.passed(c))
            .map(|c| c.weight() * 100)
            .sum();
        breakdown.score = f64::from(weighted) / f64::from(Self::TOTAL_WEIGHT);
        breakdown
    }

    /// Breakdown with every criterion failed
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn passed(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::Study => self.study,
            Criterion::DreamSchool => self.dream_school,
            Criterion::CurrentSchool => self.current_school,
            Criterion::Timeframe => self.timeframe,
            Criterion::Major => self.major,
        }
    }

    /// Criteria that passed, in canonical order
    pub fn matched(&self) -> Vec<Criterion> {
        Criterion::ALL
            .into_iter()
            .filter(|&c| self.passed(c))
            .collect()
    }

    /// Score rounded to a whole percentage for display
    pub fn percent(&self) -> u32 {
        self.score.round() as u32
    }
}
