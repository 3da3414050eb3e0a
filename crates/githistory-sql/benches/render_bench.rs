use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use githistory_git::parse_log_output;
use githistory_sql::SqlRenderer;

/// Build `n` lines of history command output
fn sample_log(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "{:040x}\x1fauthor{}@example.com\x1fAuthor {}\x1f2024-01-{:02}\x1fCommit {} fixes O'Brien's \"bug\"",
                i,
                i % 10,
                i % 10,
                i % 28 + 1,
                i
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn decode_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [100, 1_000, 10_000] {
        let log = sample_log(size);
        group.bench_with_input(BenchmarkId::new("parse_log_output", size), &log, |b, log| {
            b.iter(|| parse_log_output(log))
        });
    }

    group.finish();
}

fn render_benchmarks(c: &mut Criterion) {
    let renderer = SqlRenderer::new("git_history", "bench-service", "bench-repo");
    let mut group = c.benchmark_group("render");

    for size in [100, 1_000, 10_000] {
        let commits = parse_log_output(&sample_log(size));
        group.bench_with_input(BenchmarkId::new("render", size), &commits, |b, commits| {
            b.iter(|| renderer.render(commits))
        });
    }

    group.finish();
}

criterion_group!(benches, decode_benchmarks, render_benchmarks);
criterion_main!(benches);
