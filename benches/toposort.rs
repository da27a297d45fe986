mod common;

use common::{pathgraph_random, petgraph_random, RANDOM_SEED};
use fastrand::Rng;
use pathgraph::{
    algo::{StronglyConnected, TopoSort},
    core::marker::Directed,
};

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn pathgraph_toposort_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = pathgraph_random::<Directed>(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| TopoSort::on(&graph).run());
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn petgraph_toposort_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random::<petgraph::Directed>(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| petgraph::algo::toposort(&graph, None));
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn pathgraph_tarjan_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = pathgraph_random::<Directed>(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| StronglyConnected::on(&graph).run());
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn petgraph_tarjan_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random::<petgraph::Directed>(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| petgraph::algo::tarjan_scc(&graph));
}
