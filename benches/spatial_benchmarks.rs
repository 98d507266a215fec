use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rstar::RTree;
use spatio_kdtree::{KdTree, Point, PointIndex, PointTable, Region};

/// Deterministic pseudo-random points in the unit square.
fn generate_points(count: usize, seed: u64) -> Vec<Point> {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        ((z ^ (z >> 31)) >> 11) as f64 / (1u64 << 53) as f64
    };
    (0..count).map(|_| Point::new(next(), next())).collect()
}

fn build<I: PointIndex<usize> + Default>(points: &[Point]) -> I {
    let mut index = I::default();
    for (i, p) in points.iter().enumerate() {
        index.insert(*p, i).unwrap();
    }
    index
}

fn benchmark_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [1_000, 10_000] {
        let points = generate_points(size, 1);

        group.bench_with_input(BenchmarkId::new("kdtree", size), &points, |b, points| {
            b.iter(|| build::<KdTree<usize>>(black_box(points)))
        });

        group.bench_with_input(BenchmarkId::new("point_table", size), &points, |b, points| {
            b.iter(|| build::<PointTable<usize>>(black_box(points)))
        });

        group.bench_with_input(BenchmarkId::new("rstar", size), &points, |b, points| {
            b.iter(|| {
                let mut tree = RTree::new();
                for p in black_box(points) {
                    tree.insert([p.x(), p.y()]);
                }
                tree
            })
        });
    }

    group.finish();
}

fn benchmark_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("range");

    let points = generate_points(10_000, 2);
    let kdtree: KdTree<usize> = build(&points);
    let table: PointTable<usize> = build(&points);
    let rtree = RTree::bulk_load(points.iter().map(|p| [p.x(), p.y()]).collect());

    for side in [0.01, 0.1] {
        let query = Region::new(0.4, 0.4, 0.4 + side, 0.4 + side);
        let envelope = rstar::AABB::from_corners([0.4, 0.4], [0.4 + side, 0.4 + side]);

        group.bench_with_input(BenchmarkId::new("kdtree", side), &query, |b, query| {
            b.iter(|| kdtree.range(black_box(query)).unwrap().count())
        });

        group.bench_with_input(BenchmarkId::new("point_table", side), &query, |b, query| {
            b.iter(|| table.range(black_box(query)).unwrap().len())
        });

        group.bench_with_input(BenchmarkId::new("rstar", side), &envelope, |b, envelope| {
            b.iter(|| {
                rtree
                    .locate_in_envelope(black_box(envelope))
                    .count()
            })
        });
    }

    group.finish();
}

fn benchmark_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");

    let points = generate_points(10_000, 3);
    let queries = generate_points(100, 4);
    let kdtree: KdTree<usize> = build(&points);
    let table: PointTable<usize> = build(&points);
    let rtree = RTree::bulk_load(points.iter().map(|p| [p.x(), p.y()]).collect());

    group.bench_function("kdtree", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(kdtree.nearest(q).unwrap());
            }
        })
    });

    group.bench_function("point_table", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(table.nearest(q).unwrap());
            }
        })
    });

    group.bench_function("rstar", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(rtree.nearest_neighbor(&[q.x(), q.y()]));
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_range,
    benchmark_nearest
);
criterion_main!(benches);
