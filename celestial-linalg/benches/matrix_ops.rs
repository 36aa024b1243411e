use celestial_linalg::{Matrix4D, Matrix4F, Vector3D, Vector4D, Vector4F};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_matrix(rng: &mut StdRng) -> Matrix4D {
    let mut m = Matrix4D::identity().scale(4.0);
    for v in m.as_mut_slice() {
        *v += rng.gen_range(-1.0..1.0);
    }
    m
}

fn benchmark_multiply(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = random_matrix(&mut rng);
    let b = random_matrix(&mut rng);
    let af = Matrix4F::from_column_major(&a.as_slice().iter().map(|&x| x as f32).collect::<Vec<_>>())
        .unwrap_or_default();

    c.bench_function("matrix4d_multiply", |bench| {
        bench.iter(|| black_box(&a).multiply(black_box(&b)))
    });

    c.bench_function("matrix4d_multiply_in_place", |bench| {
        let mut m = a;
        bench.iter(|| {
            m.multiply_in_place(black_box(&b));
            m.set_identity();
        })
    });

    c.bench_function("matrix4f_multiply", |bench| {
        bench.iter(|| black_box(&af).multiply(black_box(&af)))
    });
}

fn benchmark_invert(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let m = random_matrix(&mut rng);
    let m3 = m.upper_left();

    c.bench_function("matrix4d_invert", |bench| bench.iter(|| black_box(&m).invert()));
    c.bench_function("matrix4d_determinant", |bench| {
        bench.iter(|| black_box(&m).determinant())
    });
    c.bench_function("matrix3d_invert", |bench| bench.iter(|| black_box(&m3).invert()));
}

fn benchmark_transform(c: &mut Criterion) {
    let view = Matrix4D::look_at(
        &Vector3D::new(3.0, 4.0, 5.0),
        &Vector3D::zeros(),
        &Vector3D::y_axis(),
    );
    let points: Vec<Vector4D> = (0..1000)
        .map(|i| {
            let t = i as f64 * 0.01;
            Vector4D::new(t, t.sin(), t.cos(), 1.0)
        })
        .collect();

    c.bench_function("matrix4d_multiply_vector_1000", |bench| {
        bench.iter(|| {
            let out: Vec<Vector4D> = points
                .iter()
                .map(|p| black_box(&view).multiply_vector(p))
                .collect();
            black_box(out);
        })
    });

    let viewf = Matrix4F::make_rotation_y(0.3);
    let pf = Vector4F::new(1.0, 2.0, 3.0, 1.0);
    c.bench_function("matrix4f_multiply_vector", |bench| {
        bench.iter(|| black_box(&viewf).multiply_vector(black_box(&pf)))
    });
}

criterion_group!(benches, benchmark_multiply, benchmark_invert, benchmark_transform);
criterion_main!(benches);
