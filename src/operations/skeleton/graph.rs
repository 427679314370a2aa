use std::collections::HashSet;

use slotmap::SlotMap;

use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a node in a skeleton graph.
    pub struct NodeId;
}

/// Data associated with a skeleton graph node.
#[derive(Debug, Clone)]
pub struct NodeData {
    pub point: Point2,
    pub neighbors: Vec<NodeId>,
}

/// Undirected graph of skeleton vertices, owned in an arena.
///
/// Nodes reference each other by ID; iteration follows insertion order, so
/// chaining is deterministic.
#[derive(Debug, Default)]
pub struct SkeletonGraph {
    nodes: SlotMap<NodeId, NodeData>,
}

impl SkeletonGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an isolated node and returns its ID.
    pub fn add_node(&mut self, point: Point2) -> NodeId {
        self.nodes.insert(NodeData {
            point,
            neighbors: Vec::new(),
        })
    }

    /// Connects two nodes. Self-loops and repeated edges are ignored.
    pub fn connect(&mut self, a: NodeId, b: NodeId) {
        if a == b || !self.nodes.contains_key(a) || !self.nodes.contains_key(b) {
            return;
        }
        if self.nodes[a].neighbors.contains(&b) {
            return;
        }
        self.nodes[a].neighbors.push(b);
        self.nodes[b].neighbors.push(a);
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|n| n.neighbors.len()).sum::<usize>() / 2
    }

    /// Splits the graph into maximal paths.
    ///
    /// Paths run between nodes whose degree is not 2 (ends and junctions).
    /// Closed loops made only of degree-2 nodes come out as one path that
    /// starts and ends on the same point. Every edge is used exactly once.
    #[must_use]
    pub fn chain_paths(&self) -> Vec<Vec<Point2>> {
        let mut visited: HashSet<(NodeId, NodeId)> = HashSet::new();
        let mut paths = Vec::new();

        for (id, node) in &self.nodes {
            if node.neighbors.len() == 2 {
                continue;
            }
            for &next in &node.neighbors {
                if !visited.contains(&edge_key(id, next)) {
                    paths.push(self.walk(id, next, &mut visited));
                }
            }
        }

        // Whatever is left is closed loops.
        for (id, node) in &self.nodes {
            for &next in &node.neighbors {
                if !visited.contains(&edge_key(id, next)) {
                    paths.push(self.walk(id, next, &mut visited));
                }
            }
        }

        paths
    }

    fn walk(
        &self,
        start: NodeId,
        first: NodeId,
        visited: &mut HashSet<(NodeId, NodeId)>,
    ) -> Vec<Point2> {
        let mut points: Vec<Point2> = self.node(start).map(|n| n.point).into_iter().collect();
        visited.insert(edge_key(start, first));
        let mut prev = start;
        let mut current = first;

        while let Some(node) = self.node(current) {
            points.push(node.point);
            if current == start || node.neighbors.len() != 2 {
                break;
            }
            let following = if node.neighbors[0] == prev {
                node.neighbors[1]
            } else {
                node.neighbors[0]
            };
            if !visited.insert(edge_key(current, following)) {
                break;
            }
            prev = current;
            current = following;
        }

        points
    }
}

fn edge_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
