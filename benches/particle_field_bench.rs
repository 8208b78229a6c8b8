use criterion::{criterion_group, criterion_main, Criterion};
use particle_field::physic_engine::{FieldConfigBuilder, ParticleField};
use particle_field::renderer_engine::{DrawList, Surface};
use std::hint::black_box;

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_field");

    for count in [50usize, 1_000, 10_000] {
        let config = FieldConfigBuilder::default()
            .particle_count(count)
            .build()
            .unwrap();
        let mut field = ParticleField::with_seed(&config, 1080.0, 1920.0, 42);
        group.bench_function(format!("tick/{}", count), |b| {
            b.iter(|| black_box(field.tick()))
        });

        let mut draw_list = DrawList::with_capacity(count);
        group.bench_function(format!("render/{}", count), |b| {
            b.iter(|| {
                draw_list.begin_frame();
                field.render(&mut draw_list);
                black_box(draw_list.circles().len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
