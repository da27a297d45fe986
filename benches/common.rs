#![allow(dead_code)]

use fastrand::Rng;
use pathgraph::{
    core::{id::NodeId, marker::EdgeType, GraphAdd},
    storage::AdjList,
};
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(node_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: node_bound,
            p,
        }
    }

    // Geometric skipping over the lower triangle of the adjacency matrix, so
    // the edges always go from a higher node to a lower one.
    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

pub fn pathgraph_random<Ty: EdgeType>(node_count: usize, density: f32, rng: &mut Rng) -> AdjList<f32, Ty> {
    let mut graph = AdjList::new();

    for id in 0..node_count {
        graph.add_node(NodeId(id as u64));
    }

    let mut edges = RandomEdges::new(node_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeId(u as u64), NodeId(v as u64), rng.f32());
    }

    graph
}

pub fn petgraph_random<Ty: petgraph::EdgeType>(
    node_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<(), f32, Ty> {
    let mut graph = petgraph::Graph::with_capacity(node_count, 0);

    for _ in 0..node_count {
        graph.add_node(());
    }

    let mut edges = RandomEdges::new(node_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), rng.f32());
    }

    graph
}
