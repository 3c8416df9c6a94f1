//! Compatibility scoring
//!
//! Each criterion is pass/fail (0 or 100). Study interest weighs three,
//! the others one each, for a total weight of seven.

use crate::error::ScoreError;
use crate::search::{normalize, SynonymIndex};
use crate::types::{split_interests, Profile, ScoreBreakdown, Viewer};

/// Timeframe value that is compatible with any other timeframe
pub const FLEXIBLE: &str = "flexible";

/// Something that can score a candidate for a viewer
pub trait Scorer {
    fn score(&self, viewer: &Viewer, candidate: &Profile) -> Result<ScoreBreakdown, ScoreError>;
}

/// Synonym-aware scorer over the five profile criteria
#[derive(Debug, Clone)]
pub struct CompatibilityScorer {
    index: SynonymIndex,
}

impl CompatibilityScorer {
    pub fn new(index: SynonymIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &SynonymIndex {
        &self.index
    }
}

impl Default for CompatibilityScorer {
    fn default() -> Self {
        Self::new(SynonymIndex::interests())
    }
}

impl Scorer for CompatibilityScorer {
    fn score(&self, viewer: &Viewer, candidate: &Profile) -> Result<ScoreBreakdown, ScoreError> {
        if candidate.name.trim().is_empty() {
            return Err(ScoreError::UnnamedCandidate);
        }
        Ok(score(&self.index, viewer, candidate))
    }
}

/// Score a candidate against the viewer's profile
pub fn score(index: &SynonymIndex, viewer: &Viewer, candidate: &Profile) -> ScoreBreakdown {
    let me = &viewer.profile;
    ScoreBreakdown::from_flags(
        interests_overlap(index, &me.interest_tokens(), &candidate.interest_tokens()),
        mutual_contains(&me.dream_school, &candidate.dream_school),
        mutual_contains(&me.current_school, &candidate.current_school),
        timeframe_matches(&me.preferred_timeframe, &candidate.preferred_timeframe),
        mutual_contains(&me.major, &candidate.major),
    )
}

/// Any synonym-expanded viewer interest overlaps any candidate interest
/// by substring in either direction
pub fn study_matches(index: &SynonymIndex, viewer_interest: &str, candidate_interest: &str) -> bool {
    interests_overlap(
        index,
        &split_interests(viewer_interest),
        &split_interests(candidate_interest),
    )
}

/// Token-level form of `study_matches`; no viewer tokens means no match
pub fn interests_overlap(index: &SynonymIndex, mine: &[String], theirs: &[String]) -> bool {
    if mine.is_empty() {
        return false;
    }

    let expanded = index.expand_all(mine);
    expanded.iter().any(|term| {
        theirs
            .iter()
            .any(|t| t.contains(term.as_str()) || term.contains(t.as_str()))
    })
}

/// Normalized strings where one contains the other; empty never matches
pub fn mutual_contains(a: &str, b: &str) -> bool {
    let a = normalize(a);
    let b = normalize(b);
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}

/// Like `mutual_contains`, but "flexible" on either side always matches
pub fn timeframe_matches(a: &str, b: &str) -> bool {
    let a_norm = normalize(a);
    let b_norm = normalize(b);
    if a_norm.is_empty() || b_norm.is_empty() {
        return false;
    }
    a_norm == FLEXIBLE || b_norm == FLEXIBLE || mutual_contains(&a_norm, &b_norm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Criterion;

    fn viewer(profile: Profile) -> Viewer {
        Viewer::new(profile)
    }

    #[test]
    fn test_synonym_links_programming_to_coding() {
        let index = SynonymIndex::interests();
        let me = viewer(Profile::new("Me").with_interest("Programming, AI"));
        let them = Profile::new("Them").with_interest("Coding");

        let breakdown = score(&index, &me, &them);
        assert!(breakdown.study);
    }

    #[test]
    fn test_flexible_timeframe_matches_anything() {
        assert!(timeframe_matches("Evenings", "Flexible"));
        assert!(timeframe_matches(" FLEXIBLE ", "Early mornings"));
        assert!(!timeframe_matches("", "Flexible"));
    }

    #[test]
    fn test_timeframe_partial_overlap() {
        assert!(timeframe_matches("Evenings and weekends", "Weekends"));
        assert!(!timeframe_matches("Mornings", "Afternoons"));
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let index = SynonymIndex::interests();
        let me = viewer(
            Profile::new("Me")
                .with_schools("Yale", "Oxford")
                .with_major("Art")
                .with_timeframe("Mornings"),
        );
        let them = Profile::new("Them")
            .with_schools("MIT", "Caltech")
            .with_major("Physics")
            .with_timeframe("Late nights");

        let breakdown = score(&index, &me, &them);
        assert_eq!(breakdown.score, 0.0);
        assert!(breakdown.matched().is_empty());
    }

    #[test]
    fn test_empty_viewer_interest_never_matches() {
        let index = SynonymIndex::interests();
        assert!(!study_matches(&index, "", "Programming"));
        assert!(!study_matches(&index, " , ,", "Programming"));
    }

    #[test]
    fn test_profile_tokens_and_raw_text_agree() {
        let index = SynonymIndex::interests();
        let me = Profile::new("Me").with_interest("Programming, ");
        let them = Profile::new("Them").with_interest(" , Web dev");

        assert_eq!(me.interest_tokens(), vec!["programming"]);
        assert_eq!(
            interests_overlap(&index, &me.interest_tokens(), &them.interest_tokens()),
            study_matches(&index, &me.study_interest, &them.study_interest)
        );
        assert!(score(&index, &viewer(me), &them).study);
    }

    #[test]
    fn test_empty_candidate_interest_never_matches() {
        let index = SynonymIndex::interests();
        assert!(!study_matches(&index, "Programming", ""));
    }

    #[test]
    fn test_substring_match_either_direction() {
        let index = SynonymIndex::new();
        // viewer term contained in candidate term
        assert!(study_matches(&index, "genetics", "Genetics, Research"));
        assert!(study_matches(&index, "history", "World history"));
        // candidate term contained in viewer term
        assert!(study_matches(&index, "organic chemistry", "chemistry"));
        assert!(!study_matches(&index, "poetry", "physics"));
    }

    #[test]
    fn test_schools_and_major_abbreviated() {
        assert!(mutual_contains("Stanford University", "stanford"));
        assert!(mutual_contains("MIT", "mit"));
        assert!(!mutual_contains("Harvard", ""));
        assert!(!mutual_contains("Yale", "Princeton"));
    }

    #[test]
    fn test_weighted_score() {
        let index = SynonymIndex::interests();
        let me = viewer(
            Profile::new("John Doe")
                .with_schools("Stanford University", "MIT")
                .with_major("Computer Science")
                .with_interest("Programming, English literature")
                .with_timeframe("Evenings and weekends"),
        );
        let diana = Profile::new("Diana Martinez")
            .with_schools("Stanford University", "Harvard")
            .with_major("Computer Science")
            .with_interest("Programming, AI")
            .with_timeframe("Evenings and weekends");

        let breakdown = score(&index, &me, &diana);
        assert_eq!(
            breakdown.matched(),
            vec![
                Criterion::Study,
                Criterion::CurrentSchool,
                Criterion::Timeframe,
                Criterion::Major
            ]
        );
        assert!((breakdown.score - 600.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_is_deterministic() {
        let scorer = CompatibilityScorer::default();
        let me = viewer(Profile::new("Me").with_interest("Math").with_major("Physics"));
        let them = Profile::new("Them").with_interest("Calculus").with_major("physics");

        let first = scorer.score(&me, &them).unwrap();
        let second = scorer.score(&me, &them).unwrap();
        assert_eq!(first, second);
        assert!((0.0..=100.0).contains(&first.score));
    }

    #[test]
    fn test_unnamed_candidate_is_unscorable() {
        let scorer = CompatibilityScorer::default();
        let me = viewer(Profile::new("Me").with_interest("Math"));
        assert_eq!(
            scorer.score(&me, &Profile::new("  ").with_interest("Math")),
            Err(ScoreError::UnnamedCandidate)
        );
    }
}
