use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cartpole::CartPole;

fn bench_step(c: &mut Criterion) {
    let mut env = CartPole::with_seed(0);
    env.reset();
    c.bench_function("cartpole_step", |b| {
        b.iter(|| {
            let obs = env.state();
            let action = (-10.0 * obs[2] - obs[3]).clamp(-1.0, 1.0);
            match env.step(black_box(action)) {
                Ok(step) if !step.done() => {}
                _ => {
                    env.reset();
                }
            }
        });
    });
}

fn bench_reset(c: &mut Criterion) {
    let mut env = CartPole::with_seed(0);
    c.bench_function("cartpole_reset", |b| b.iter(|| black_box(env.reset())));
}

criterion_group!(benches, bench_step, bench_reset);
criterion_main!(benches);
