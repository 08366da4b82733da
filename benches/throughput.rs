use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use cadence::{is_match, parse, Frequency, Rule, RuleBuilder, Weekday};
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const STORED: &str = "FREQ=MONTHLY;INTERVAL=2;BYDAY=2FR,-1MO;BYMONTHDAY=1,15;UNTIL=20301231T000000Z;COUNT=20";

fn bench_parse_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    group.bench_function("parse", |b| b.iter(|| parse(black_box(STORED))));

    let rule = parse(STORED).unwrap();
    group.bench_function("generate", |b| b.iter(|| black_box(&rule).to_string()));

    group.bench_function("build_and_generate", |b| {
        b.iter(|| {
            RuleBuilder::new(Frequency::Weekly)
                .on(Weekday::Monday)
                .on(Weekday::Wednesday)
                .on(Weekday::Friday)
                .until(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap())
                .generate()
        });
    });

    group.finish();
}

/// Evaluate a shared rule from several threads at once, the way a scheduler
/// checks many users' rules for "today".
fn bench_throughput(c: &mut Criterion) {
    let thread_counts = [1, 2, 4, 8];
    let rule: Arc<Rule> = Arc::new(parse("FREQ=MONTHLY;BYDAY=2FR,-1FR").unwrap());
    let days: Arc<Vec<NaiveDate>> = Arc::new(
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .iter_days()
            .take(366)
            .collect(),
    );

    let mut group = c.benchmark_group("threaded_throughput");
    group.measurement_time(Duration::from_secs(5));

    for &n in &thread_counts {
        group.bench_function(format!("{n}_threads"), |b| {
            b.iter_custom(|iters| {
                let start = Instant::now();
                let handles: Vec<_> = (0..n)
                    .map(|_| {
                        let rule = Arc::clone(&rule);
                        let days = Arc::clone(&days);
                        thread::spawn(move || {
                            let mut hits = 0_usize;
                            for _ in 0..iters {
                                hits += days
                                    .iter()
                                    .filter(|d| is_match(&rule, **d, None))
                                    .count();
                            }
                            hits
                        })
                    })
                    .collect();
                for handle in handles {
                    black_box(handle.join().unwrap());
                }
                start.elapsed()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_generate, bench_throughput);
criterion_main!(benches);
