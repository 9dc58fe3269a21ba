use criterion::{criterion_group, criterion_main, Criterion};
use peertally::{aggregate, Grid};
use std::hint::black_box;

const NAMES: [&str; 8] = [
    "Smith", "Smyth", "Okafor", "Jordan", "Jordyn", "Priya", "Kim", "N/A",
];
const SCORES: [&str; 5] = ["C", "D", "E", "c", "X"];

/// A full-width export: 21 score questions, 6 feedback questions, the
/// three score-only columns and the sentence column.
fn build_grid(rows: usize) -> Grid {
    let width = 61;
    let mut header = vec![String::new(); width];
    for col in (1..43).step_by(2) {
        header[col] = format!("Score question {} or NA", col);
    }
    for col in (44..57).step_by(2) {
        header[col] = format!("Feedback question {} or NA please", col);
    }
    for col in 57..=60 {
        header[col] = format!("Closing question {}", col);
    }

    let mut grid = vec![header];
    for r in 0..rows {
        let mut row = vec![String::new(); width];
        for col in (1..43).step_by(2) {
            row[col] = SCORES[(r + col) % SCORES.len()].to_string();
            row[col + 1] = NAMES[(r * 3 + col) % NAMES.len()].to_string();
        }
        for col in (44..57).step_by(2) {
            row[col - 1] = NAMES[(r + col) % NAMES.len()].to_string();
            row[col] = format!("Feedback {}", r % 17);
        }
        for col in 57..=60 {
            row[col] = format!("{}", r % 5);
        }
        grid.push(row);
    }
    grid
}

fn bench_aggregate(c: &mut Criterion) {
    let grid = build_grid(500);

    c.bench_function("aggregate_500_rows", |b| {
        b.iter(|| aggregate(black_box(&grid)).unwrap())
    });
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
