use criterion::{black_box, criterion_group, criterion_main, Criterion};
use talent_match_engine::{
    core::{Availability, FilterState, Talent},
    recommend,
};

fn create_test_candidates(count: usize) -> Vec<Talent> {
    let skills = ["React", "Python", "AWS", "Figma", "Go", "Docker", "SQL", "Swift"];
    (0..count)
        .map(|i| {
            Talent::new(
                i.to_string(),
                format!("Freelancer {}", i),
                3.5 + (i % 15) as f64 / 10.0,
                30.0 + (i % 12) as f64 * 10.0,
                Availability::ALL[i % 4],
            )
            .with_skills((0..3).map(|k| skills[(i + k) % skills.len()]))
            .with_languages(["English"])
            .with_track_record((i % 120) as u32, 85.0 + (i % 15) as f64)
        })
        .collect()
}

fn bench_recommend(c: &mut Criterion) {
    let candidates_100 = create_test_candidates(100);
    let candidates_1000 = create_test_candidates(1000);

    let arbitrated = FilterState::new().with_rate_range(40.0, 120.0);
    let balanced = arbitrated.clone().with_skills(["Python", "AWS"]);
    let fallback = FilterState::new().with_min_rating(5.0).with_rate_range(0.0, 10.0);

    c.bench_function("arbitrated_100", |b| {
        b.iter(|| black_box(recommend(&candidates_100, &arbitrated)));
    });

    c.bench_function("arbitrated_1000", |b| {
        b.iter(|| black_box(recommend(&candidates_1000, &arbitrated)));
    });

    c.bench_function("balanced_1000", |b| {
        b.iter(|| black_box(recommend(&candidates_1000, &balanced)));
    });

    c.bench_function("fallback_1000", |b| {
        b.iter(|| black_box(recommend(&candidates_1000, &fallback)));
    });
}

criterion_group!(benches, bench_recommend);
criterion_main!(benches);
