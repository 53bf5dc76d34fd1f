use crate::core::location::{normalize, ResolvedLocation};
use crate::models::{Candidate, ScoreBreakdown, ServiceRequest};

pub const SKILL_POINTS: u8 = 40;
pub const AVAILABILITY_POINTS: u8 = 20;
/// Availability credit when a helper has no working hours on record
pub const AVAILABILITY_UNKNOWN_POINTS: u8 = 8;
pub const LOCATION_POINTS: u8 = 30;
/// Address text names a preferred area that the gazetteer did not resolve
pub const LOCATION_ADDRESS_POINTS: u8 = 25;
/// Nothing resolved from the address and no preferred area mentioned in it
pub const LOCATION_UNRESOLVED_POINTS: u8 = 5;
/// Helper has no preferred areas and works anywhere
pub const LOCATION_ANYWHERE_POINTS: u8 = 10;

/// Calculate a match score (0-100) for a helper against a service request
///
/// Scoring formula:
/// score = (
///     skill          # 40 on exact skill match
///   + availability   # 20 compatible hours, 8 when hours unknown
///   + location       # up to 30, partial credit for sparse data
///   + experience     # up to 10
/// ).min(100)
pub fn calculate_match_score(
    candidate: &Candidate,
    request: &ServiceRequest,
    location: &ResolvedLocation,
) -> u8 {
    score_breakdown(candidate, request, location).total()
}

/// Per-component points for a helper, in scoring order
pub fn score_breakdown(
    candidate: &Candidate,
    request: &ServiceRequest,
    location: &ResolvedLocation,
) -> ScoreBreakdown {
    ScoreBreakdown {
        skill: calculate_skill_score(candidate, request),
        availability: calculate_availability_score(candidate, request),
        location: calculate_location_score(&candidate.preferred_areas, location),
        experience: calculate_experience_score(candidate.experience_years),
    }
}

#[inline]
fn calculate_skill_score(candidate: &Candidate, request: &ServiceRequest) -> u8 {
    if candidate.skill == request.skill {
        SKILL_POINTS
    } else {
        0
    }
}

#[inline]
fn calculate_availability_score(candidate: &Candidate, request: &ServiceRequest) -> u8 {
    match candidate.working_hours {
        Some(hours) if request.time_window.accepts(hours) => AVAILABILITY_POINTS,
        Some(_) => 0,
        None => AVAILABILITY_UNKNOWN_POINTS,
    }
}

/// Location score from the helper's preferred areas
///
/// Blank area entries are ignored.
fn calculate_location_score(preferred_areas: &[String], location: &ResolvedLocation) -> u8 {
    let areas: Vec<String> = preferred_areas
        .iter()
        .map(|area| normalize(area))
        .filter(|area| !area.is_empty())
        .collect();

    if areas.is_empty() {
        return LOCATION_ANYWHERE_POINTS;
    }

    let named_in_address = areas
        .iter()
        .any(|area| location.normalized_address.contains(area.as_str()));

    if location.has_areas() {
        let overlaps = areas.iter().any(|area| {
            location
                .areas
                .iter()
                .any(|token| area.contains(token.as_str()) || token.contains(area.as_str()))
        });

        if overlaps {
            LOCATION_POINTS
        } else if named_in_address {
            LOCATION_ADDRESS_POINTS
        } else {
            0
        }
    } else if named_in_address {
        LOCATION_ADDRESS_POINTS
    } else {
        LOCATION_UNRESOLVED_POINTS
    }
}

#[inline]
fn calculate_experience_score(experience_years: Option<u32>) -> u8 {
    match experience_years.unwrap_or(0) {
        years if years >= 5 => 10,
        years if years >= 3 => 7,
        years if years >= 1 => 4,
        _ => 0,
    }
}
