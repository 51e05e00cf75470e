use crate::algorithm::traits::check_source;
use crate::algorithm::{DistanceVector, ShortestPathAlgorithm};
use crate::data_structures::{LazyHeap, INFINITY};
use crate::graph::Graph;
use crate::{Distance, Result};

/// Classic sequential Dijkstra, the reference the parallel engines are checked against
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<G> ShortestPathAlgorithm<G> for Dijkstra
where
    G: Graph,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<DistanceVector> {
        check_source(graph, source)?;

        let n = graph.vertex_count();
        let mut distances: Vec<Distance> = vec![INFINITY; n];
        distances[source] = 0;

        let mut queue: LazyHeap<usize, Distance> = LazyHeap::seeded(source, 0);

        while let Some((u, dist_u)) = queue.pop_current(|v| distances[v]) {
            for edge in graph.outgoing_edges(u) {
                let new_dist = dist_u.saturating_add(edge.weight);
                if new_dist < distances[edge.to] {
                    distances[edge.to] = new_dist;
                    queue.push(edge.to, new_dist);
                }
            }
        }

        let distances = distances
            .into_iter()
            .map(|d| (d != INFINITY).then_some(d))
            .collect();
        Ok(DistanceVector::new(source, distances))
    }
}
