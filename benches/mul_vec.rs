use criterion::{black_box, Criterion, criterion_group, criterion_main};
use colvec::{Dense, Matrix, SymDense, Vector};
use faer::Mat;

/// Element access only, to time the fallback path.
struct Opaque<'a>(&'a Mat<f64>);

impl Matrix for Opaque<'_> {
    fn dims(&self) -> (usize, usize) {
        (self.0.nrows(), self.0.ncols())
    }
    fn at(&self, i: usize, j: usize) -> f64 {
        self.0[(i, j)]
    }
}

fn bench_dispatch_paths(c: &mut Criterion) {
    let n = 200;
    let m = Mat::from_fn(n, n, |i, j| ((i * n + j) as f64).sin());
    let dense = Dense::from_faer(&m);
    let sym = SymDense::new(n, Some((0..n * n).map(|k| m[(k / n, k % n)]).collect())).unwrap();
    let opaque = Opaque(&m);
    let x = Vector::from((0..n).map(|i| (i as f64).cos()).collect::<Vec<_>>());
    let mut y = Vector::zeros(n).unwrap();

    c.bench_function("mul_vec dense", |ben| {
        ben.iter(|| y.mul_vec(black_box(&dense), black_box(&x)).unwrap())
    });

    c.bench_function("mul_vec symmetric", |ben| {
        ben.iter(|| y.mul_vec(black_box(&sym), black_box(&x)).unwrap())
    });

    c.bench_function("mul_vec faer stream", |ben| {
        ben.iter(|| y.mul_vec(black_box(&m), black_box(&x)).unwrap())
    });

    c.bench_function("mul_vec generic", |ben| {
        ben.iter(|| y.mul_vec(black_box(&opaque), black_box(&x)).unwrap())
    });

    c.bench_function("mul_vec dense aliased", |ben| {
        ben.iter(|| {
            let yb = y.shared();
            y.mul_vec(black_box(&dense), &yb).unwrap()
        })
    });
}

criterion_group!(benches, bench_dispatch_paths);
criterion_main!(benches);
