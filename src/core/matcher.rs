use crate::core::{location::Gazetteer, scoring::score_breakdown};
use crate::models::{Candidate, MatchResult, ServiceRequest};
use std::cmp::Ordering;

/// Maximum number of helpers returned for one request
pub const MAX_RESULTS: usize = 5;

/// Result of ranking a candidate pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankOutcome {
    pub matches: Vec<MatchResult>,
    pub total_candidates: usize,
    pub extracted_areas: Vec<String>,
}

/// Ranks helpers for a service request
///
/// # Pipeline Stages
/// 1. Resolve the request address against the gazetteer (once per request)
/// 2. Score every candidate
/// 3. Drop zero scores
/// 4. Sort and truncate to [`MAX_RESULTS`]
///
/// The matcher holds no mutable state; clones share the gazetteer.
#[derive(Debug, Clone)]
pub struct Matcher {
    gazetteer: Gazetteer,
}

impl Matcher {
    pub fn new(gazetteer: Gazetteer) -> Self {
        Self { gazetteer }
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    /// Rank a candidate pool for a request
    ///
    /// Ties are broken by experience (more first), then by candidate id.
    pub fn rank(&self, request: &ServiceRequest, candidates: Vec<Candidate>) -> RankOutcome {
        let total_candidates = candidates.len();
        let location = self.gazetteer.resolve(&request.address);

        let mut matches: Vec<MatchResult> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let breakdown = score_breakdown(&candidate, request, &location);
                let score = breakdown.total();

                if score > 0 {
                    Some(MatchResult {
                        candidate,
                        score,
                        breakdown,
                    })
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(compare_matches);
        matches.truncate(MAX_RESULTS);

        RankOutcome {
            matches,
            total_candidates,
            extracted_areas: location.areas,
        }
    }
}

fn compare_matches(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.candidate.experience().cmp(&a.candidate.experience()))
        .then_with(|| a.candidate.id.cmp(&b.candidate.id))
}
