// Criterion benchmarks for Helper Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use helper_match::config::MatchingSettings;
use helper_match::core::{calculate_match_score, Matcher};
use helper_match::models::{Candidate, ServiceRequest, SkillCategory, TimeWindow, WorkingHours};

const AREAS: &[&str] = &[
    "koramangala",
    "indiranagar",
    "whitefield",
    "hsr layout",
    "jayanagar",
    "sarjapur",
];

fn create_candidate(id: usize) -> Candidate {
    let hours = [
        None,
        Some(WorkingHours::Morning),
        Some(WorkingHours::Afternoon),
        Some(WorkingHours::Evening),
        Some(WorkingHours::FullDay),
    ];

    Candidate {
        id: format!("hlp_{:05}", id),
        name: format!("Helper {}", id),
        contact_number: "+91 98450 00000".to_string(),
        skill: SkillCategory::ALL[id % SkillCategory::ALL.len()],
        experience_years: if id % 4 == 0 { None } else { Some((id % 12) as u32) },
        languages: vec!["kannada".to_string()],
        preferred_areas: (0..id % 3)
            .map(|offset| AREAS[(id + offset) % AREAS.len()].to_string())
            .collect(),
        working_hours: hours[id % hours.len()],
        gender: None,
        is_available: true,
        is_assigned: false,
    }
}

fn create_request() -> ServiceRequest {
    ServiceRequest {
        request_id: "bench".to_string(),
        skill: SkillCategory::Cooking,
        time_window: TimeWindow::Evening,
        address: "123 MG Road, Koramangala, Bangalore 560034".to_string(),
    }
}

fn bench_extract_areas(c: &mut Criterion) {
    let gazetteer = MatchingSettings::default().build_gazetteer();
    let address = "Flat 12B, 4th Cross, HSR Layout Sector 2, Bengaluru";

    c.bench_function("extract_areas", |b| {
        b.iter(|| gazetteer.extract_areas(black_box(address)));
    });
}

fn bench_score(c: &mut Criterion) {
    let gazetteer = MatchingSettings::default().build_gazetteer();
    let request = create_request();
    let location = gazetteer.resolve(&request.address);
    let candidate = create_candidate(7);

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| {
            calculate_match_score(black_box(&candidate), black_box(&request), black_box(&location))
        });
    });
}

fn bench_ranking(c: &mut Criterion) {
    let matcher = Matcher::new(MatchingSettings::default().build_gazetteer());
    let request = create_request();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 100, 1000, 5000].iter() {
        let candidates: Vec<Candidate> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| matcher.rank(black_box(&request), black_box(candidates.clone())));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_extract_areas, bench_score, bench_ranking);

criterion_main!(benches);
