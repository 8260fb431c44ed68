// Criterion benchmarks for the BuddyMe matching core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use buddyme_api::core::MatchResolver;
use buddyme_api::models::NewUser;
use buddyme_api::services::UserDirectory;

const INTERESTS: [&str; 8] = [
    "Yoga", "Climbing", "Chess", "Running", "Cycling", "Tennis", "Hiking", "Swimming",
];

fn seed_directory(user_count: usize) -> UserDirectory {
    let directory = UserDirectory::new();

    for i in 0..user_count {
        let user = directory.create_user(NewUser {
            email: format!("user{}@x.com", i),
            password: Some("secret1".to_string()),
            display_name: Some(format!("User {}", i)),
            provider: Some("email".to_string()),
            ..NewUser::default()
        });

        // Each user gets three interests, staggered across the pool
        for offset in 0..3 {
            directory.add_user_interest(user.id, INTERESTS[(i + offset) % INTERESTS.len()]);
        }
    }

    directory
}

fn bench_interest_scan(c: &mut Criterion) {
    let directory = seed_directory(1000);
    let wanted: Vec<String> = vec!["Yoga".to_string(), "Chess".to_string()];

    c.bench_function("interest_scan_1000_users", |b| {
        b.iter(|| directory.get_users_by_interests(black_box(&wanted)));
    });
}

fn bench_find_matches(c: &mut Criterion) {
    let resolver = MatchResolver::new();

    let mut group = c.benchmark_group("matching");

    for user_count in [10, 50, 100, 500, 1000].iter() {
        let directory = seed_directory(*user_count);

        group.bench_with_input(
            BenchmarkId::new("find_matches", user_count),
            user_count,
            |b, _| {
                b.iter(|| resolver.find_matches(black_box(&directory), black_box(1)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_interest_scan, bench_find_matches);
criterion_main!(benches);
