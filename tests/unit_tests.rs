// Unit tests for Helper Match scoring and location extraction

use helper_match::core::{calculate_match_score, score_breakdown, Gazetteer};
use helper_match::models::{Candidate, ServiceRequest, SkillCategory, TimeWindow, WorkingHours};

fn gazetteer() -> Gazetteer {
    Gazetteer::new(["bangalore", "koramangala", "indiranagar", "whitefield", "hsr layout"])
}

fn helper(
    skill: SkillCategory,
    working_hours: Option<WorkingHours>,
    preferred_areas: &[&str],
    experience_years: Option<u32>,
) -> Candidate {
    Candidate {
        id: "hlp".to_string(),
        name: "Helper".to_string(),
        contact_number: "+91 90000 00000".to_string(),
        skill,
        experience_years,
        languages: vec!["kannada".to_string()],
        preferred_areas: preferred_areas.iter().map(|a| a.to_string()).collect(),
        working_hours,
        gender: Some("female".to_string()),
        is_available: true,
        is_assigned: false,
    }
}

fn request(skill: SkillCategory, time_window: TimeWindow, address: &str) -> ServiceRequest {
    ServiceRequest {
        request_id: "req".to_string(),
        skill,
        time_window,
        address: address.to_string(),
    }
}

#[test]
fn test_score_bounds_and_skill_cap_over_all_combinations() {
    let addresses = [
        "123 MG Road, Koramangala, Bangalore",
        "Plot 7, Sarjapur Road",
        "Indiranagar",
        "",
    ];
    let area_sets: [&[&str]; 5] = [
        &[],
        &["koramangala"],
        &["Sarjapur"],
        &["whitefield", "hsr layout"],
        &["  "],
    ];
    let hours = [
        None,
        Some(WorkingHours::Morning),
        Some(WorkingHours::Afternoon),
        Some(WorkingHours::Evening),
        Some(WorkingHours::FullDay),
    ];
    let experience = [None, Some(0), Some(1), Some(3), Some(5), Some(30)];

    let gazetteer = gazetteer();

    for request_skill in SkillCategory::ALL {
        for window in TimeWindow::ALL {
            for address in addresses {
                let req = request(request_skill, window, address);
                let location = gazetteer.resolve(address);

                for helper_skill in SkillCategory::ALL {
                    for areas in area_sets {
                        for h in hours {
                            for years in experience {
                                let candidate = helper(helper_skill, h, areas, years);
                                let score = calculate_match_score(&candidate, &req, &location);

                                assert!(score <= 100, "score {} out of range", score);
                                if helper_skill != request_skill {
                                    assert!(score <= 60, "mismatched skill scored {}", score);
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_full_marks() {
    let req = request(SkillCategory::Gardening, TimeWindow::Morning, "12 3rd Cross, HSR Layout");
    let location = gazetteer().resolve(&req.address);
    let candidate = helper(
        SkillCategory::Gardening,
        Some(WorkingHours::FullDay),
        &["HSR"],
        Some(5),
    );

    assert_eq!(calculate_match_score(&candidate, &req, &location), 100);
}

#[test]
fn test_sparse_profile_keeps_partial_credit() {
    let req = request(SkillCategory::Cleaning, TimeWindow::Afternoon, "Koramangala");
    let location = gazetteer().resolve(&req.address);
    let candidate = helper(SkillCategory::Cleaning, None, &[], None);

    let breakdown = score_breakdown(&candidate, &req, &location);

    assert_eq!(breakdown.skill, 40);
    assert_eq!(breakdown.availability, 8);
    assert_eq!(breakdown.location, 10);
    assert_eq!(breakdown.experience, 0);
    assert_eq!(breakdown.total(), 58);
}

#[test]
fn test_location_zero_when_tokens_do_not_reach_helper_areas() {
    // "bangalore" resolves, but the helper only works in Whitefield
    let req = request(SkillCategory::Cooking, TimeWindow::Evening, "14 Church Street, Bangalore");
    let location = gazetteer().resolve(&req.address);
    let candidate = helper(
        SkillCategory::Cooking,
        Some(WorkingHours::Evening),
        &["Whitefield"],
        Some(2),
    );

    assert_eq!(score_breakdown(&candidate, &req, &location).location, 0);
}

#[test]
fn test_location_unresolved_address_partial_credit() {
    let req = request(SkillCategory::Cooking, TimeWindow::Evening, "Flat 2, Sarjapur Road");
    let location = gazetteer().resolve(&req.address);
    assert!(location.areas.is_empty());

    let named = helper(SkillCategory::Cooking, None, &["sarjapur"], None);
    let unnamed = helper(SkillCategory::Cooking, None, &["whitefield"], None);

    assert_eq!(score_breakdown(&named, &req, &location).location, 25);
    assert_eq!(score_breakdown(&unnamed, &req, &location).location, 5);
}

#[test]
fn test_extract_areas_substring_semantics() {
    let areas = gazetteer().extract_areas("No. 5, HSR LAYOUT sector 2, bangalore 560102");
    assert_eq!(areas, vec!["bangalore", "hsr layout"]);
}
