criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        sampling_deals,
        solving_cfr,
        sweeping_best_response,
}

fn sampling_deals(c: &mut criterion::Criterion) {
    let rules = Rules::default();
    let ref mut rng = SmallRng::seed_from_u64(2024);
    c.bench_function("draw a Deal from the full deck", |b| {
        b.iter(|| Deal::draw(&rules, rng))
    });
}

fn solving_cfr(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(2024);
    c.bench_function("cfr solve the unconstrained game", |b| {
        b.iter(|| Solver::new(Rules::default()).solve(1 << 12, rng))
    });
}

fn sweeping_best_response(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(2024);
    let solver = Solver::new(Rules::default()).solve(1 << 10, rng);
    c.bench_function("sweep a best response against a trained Profile", |b| {
        b.iter(|| solver.exploitability())
    });
}

use nanopoker::game::Deal;
use nanopoker::game::Rules;
use nanopoker::solver::Solver;
use rand::SeedableRng;
use rand::rngs::SmallRng;
