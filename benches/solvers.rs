use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridmaze::{
    algorithms::generate_backtrack,
    solver::{RandomWalk, Solver, Strategy},
};

const SIZE: i32 = 101;

pub fn solvers(c: &mut Criterion) {
    let maze = generate_backtrack(SIZE, SIZE, Some(42)).unwrap();

    for strategy in Strategy::ALL {
        c.bench_function(strategy.name(), |b| {
            b.iter(|| match strategy {
                Strategy::RandomWalk => RandomWalk::default()
                    .with_seed(42)
                    .solve_quiet(black_box(&maze)),
                _ => strategy.solve_quiet(black_box(&maze)),
            })
        });
    }
}

pub fn generation(c: &mut Criterion) {
    c.bench_function("backtrack", |b| {
        b.iter(|| generate_backtrack(black_box(SIZE), black_box(SIZE), Some(42)).unwrap())
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = solvers, generation}
criterion_main!(benches);
