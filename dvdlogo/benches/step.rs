use cgmath::Vector2;
use criterion::{criterion_group, criterion_main, Criterion};

use dvdlogo::{Bounds, Sprite};

pub fn bounce_step(c: &mut Criterion) {
    let bounds = Bounds::NDC;

    c.bench_function("step", |b| {
        let mut sprite = Sprite::new(
            Vector2::new(0.0, 0.0),
            Vector2::new(0.4, 0.25),
            Vector2::new(0.1, 0.1),
        );

        b.iter(|| sprite.step(1.0 / 60.0, &bounds))
    });
}

criterion_group!(benches, bounce_step);
criterion_main!(benches);
