use criterion::*;

fn obtain_release(c: &mut Criterion) {
    c.bench_function("allocate 64", |b| {
        b.iter(|| {
            let ptr = minirt::allocate(black_box(64));
            unsafe { minirt::deallocate(black_box(ptr.as_ptr())) };
        })
    });

    c.bench_function("try_allocate 64", |b| {
        b.iter(|| {
            let ptr = minirt::try_allocate(black_box(64)).unwrap();
            unsafe { minirt::deallocate(black_box(ptr.as_ptr())) };
        })
    });

    c.bench_function("allocate_aligned 64@64", |b| {
        b.iter(|| {
            let ptr = minirt::allocate_aligned(black_box(64), 64);
            unsafe { minirt::deallocate_aligned(black_box(ptr.as_ptr()), 64) };
        })
    });

    c.bench_function("allocate zero-size", |b| {
        b.iter(|| {
            let ptr = minirt::allocate(black_box(0));
            unsafe { minirt::deallocate(black_box(ptr.as_ptr())) };
        })
    });
}

criterion_group!(benches, obtain_release);
criterion_main!(benches);
