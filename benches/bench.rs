use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use balanced_bst::Tree;

/// Helper to bench a function on a tree.
/// It creates a group for the given name and closure and runs tests against
/// fully balanced trees of various sizes before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3u32, 7, 11, 15] {
        let num_nodes = 2usize.pow(num_levels) - 1;
        let largest_element_in_tree = (num_nodes - 1) as i32;

        let tree = Tree::build(0..num_nodes as i32);

        let id = BenchmarkId::new("balanced", largest_element_in_tree);
        group.bench_function(id, |b| {
            b.iter_custom(|iters| {
                let mut time = std::time::Duration::ZERO;
                for _ in 0..iters {
                    let mut tree = black_box(tree.clone());
                    let instant = std::time::Instant::now();
                    f(&mut tree, black_box(largest_element_in_tree));
                    let elapsed = instant.elapsed();
                    time += elapsed;
                }
                time
            })
        });
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for num_levels in [3u32, 7, 11, 15] {
        let num_nodes = 2usize.pow(num_levels) - 1;

        group.bench_function(BenchmarkId::from_parameter(num_nodes), |b| {
            b.iter(|| Tree::build(black_box(0..num_nodes as i32)))
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_build(c);

    bench_helper(c, "find", |tree, i| {
        let _node = black_box(tree.find(&i));
    });
    bench_helper(c, "find-miss", |tree, i| {
        let _node = black_box(tree.find(&(i + 1)));
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });

    bench_helper(c, "delete", |tree, i| {
        tree.delete(&i);
    });
    bench_helper(c, "delete-miss", |tree, i| {
        tree.delete(&(i + 1));
    });

    bench_helper(c, "rebalance", |tree, _| {
        tree.rebalance();
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
