//! Path-finding trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The session calls routing through the [`PathFinder`] trait, so hosts can
//! swap in another algorithm (A*, a precomputed table) without touching the
//! rest of the engine.
//!
//! # Determinism
//!
//! Distances never depend on road entry order, but the *path* chosen among
//! equal-length alternatives does.  [`DijkstraPathFinder`] fixes it:
//!
//! - the frontier pops the lowest cumulative distance, and among equal
//!   distances the lowest `NodeId` (i.e. the earliest-inserted node);
//! - relaxation is strict (`<`), so the first predecessor to reach a node at
//!   a given distance keeps it.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;

use relief_core::NodeId;

use crate::network::NetworkModel;
use crate::{NetworkError, NetworkResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a path query: node names from source to target and the
/// summed road distance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub path:     Vec<String>,
    pub total_km: f64,
}

impl Route {
    /// Number of roads traversed.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// `true` if the source and target are the same node.
    pub fn is_trivial(&self) -> bool {
        self.path.len() <= 1
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// Implementations must be `Send + Sync` so a host can share one finder
/// across read-only query threads once the model stops changing.
pub trait PathFinder: Send + Sync {
    /// Shortest route between two named nodes.
    ///
    /// `from == to` yields a one-node route of length 0.  Unregistered names
    /// give [`NetworkError::UnknownNode`]; disconnected nodes give
    /// [`NetworkError::NoPathFound`].
    fn shortest_path(&self, network: &NetworkModel, from: &str, to: &str) -> NetworkResult<Route>;

    /// Routes from one source to many targets, in `targets` order.
    ///
    /// An unknown source fails the whole call; per-target failures are
    /// reported next to the target name.
    fn shortest_paths_from(
        &self,
        network: &NetworkModel,
        from: &str,
        targets: &[&str],
    ) -> NetworkResult<Vec<(String, NetworkResult<Route>)>> {
        if !network.contains(from) {
            return Err(NetworkError::UnknownNode(from.to_owned()));
        }
        Ok(targets
            .iter()
            .map(|&to| (to.to_owned(), self.shortest_path(network, from, to)))
            .collect())
    }
}

// ── DijkstraPathFinder ────────────────────────────────────────────────────────

/// Classic Dijkstra over the model's adjacency list.
///
/// Road weights are non-negative by construction (`add_road` rejects
/// anything else), which Dijkstra requires.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraPathFinder;

impl PathFinder for DijkstraPathFinder {
    fn shortest_path(&self, network: &NetworkModel, from: &str, to: &str) -> NetworkResult<Route> {
        let source = resolve(network, from)?;
        let target = resolve(network, to)?;

        let tree = ShortestPathTree::grow(network, source, Some(target));
        tree.route_to(network, target).ok_or_else(|| NetworkError::NoPathFound {
            from: from.to_owned(),
            to:   to.to_owned(),
        })
    }

    /// One Dijkstra run serves every target.
    fn shortest_paths_from(
        &self,
        network: &NetworkModel,
        from: &str,
        targets: &[&str],
    ) -> NetworkResult<Vec<(String, NetworkResult<Route>)>> {
        let source = resolve(network, from)?;
        let tree = ShortestPathTree::grow(network, source, None);

        Ok(targets
            .iter()
            .map(|&to| {
                let route = resolve(network, to).and_then(|target| {
                    tree.route_to(network, target).ok_or_else(|| NetworkError::NoPathFound {
                        from: from.to_owned(),
                        to:   to.to_owned(),
                    })
                });
                (to.to_owned(), route)
            })
            .collect())
    }
}

fn resolve(network: &NetworkModel, name: &str) -> NetworkResult<NodeId> {
    network
        .node_id(name)
        .ok_or_else(|| NetworkError::UnknownNode(name.to_owned()))
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Heap entry ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// distance first, then the smallest `NodeId`.
#[derive(Copy, Clone, Debug)]
struct Frontier {
    cost: f64,
    node: NodeId,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

/// Distances and predecessors from one source.
struct ShortestPathTree {
    source: NodeId,
    /// `dist[v]` = best known distance (km) to reach v.
    dist:   Vec<f64>,
    /// `prev[v]` = node that reached v; `NodeId::INVALID` for the source and
    /// unreached nodes.
    prev:   Vec<NodeId>,
}

impl ShortestPathTree {
    /// Run Dijkstra from `source`, stopping early once `stop_at` is settled.
    fn grow(network: &NetworkModel, source: NodeId, stop_at: Option<NodeId>) -> Self {
        let n = network.node_count();
        let mut dist = vec![f64::INFINITY; n];
        let mut prev = vec![NodeId::INVALID; n];
        let mut settled = 0usize;

        dist[source.index()] = 0.0;

        let mut heap = BinaryHeap::new();
        heap.push(Frontier { cost: 0.0, node: source });

        while let Some(Frontier { cost, node }) = heap.pop() {
            // Skip stale heap entries.
            if cost > dist[node.index()] {
                continue;
            }
            settled += 1;

            if Some(node) == stop_at {
                break;
            }

            for link in network.links(node) {
                let next = cost + link.distance_km;
                if next < dist[link.to.index()] {
                    dist[link.to.index()] = next;
                    prev[link.to.index()] = node;
                    heap.push(Frontier { cost: next, node: link.to });
                }
            }
        }

        debug!(
            "dijkstra from {:?}: settled {settled} of {n} nodes",
            network.node_name(source)
        );
        Self { source, dist, prev }
    }

    fn route_to(&self, network: &NetworkModel, target: NodeId) -> Option<Route> {
        let total_km = self.dist[target.index()];
        if !total_km.is_finite() {
            return None;
        }

        let mut nodes = vec![target];
        let mut cur = target;
        while cur != self.source {
            cur = self.prev[cur.index()];
            nodes.push(cur);
        }
        nodes.reverse();

        Some(Route {
            path: nodes.iter().map(|&id| network.node_name(id).to_owned()).collect(),
            total_km,
        })
    }
}
