use std::collections::HashMap;

use spade::handles::{FixedFaceHandle, InnerTag};
use spade::{ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation};

use crate::config::require_positive;
use crate::error::{OperationError, Result};
use crate::geometry::{Polygon, Polyline};
use crate::math::{Point2, TOLERANCE};

use super::graph::{NodeId, SkeletonGraph};
use super::Skeletonizer;

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Approximate medial axis from a constrained Delaunay triangulation.
///
/// # Algorithm
///
/// 1. Densify every ring so boundary edges are at most `densify_distance`
/// 2. Triangulate with the rings as constraints and mark the faces inside the
///    road ([`RoadMesh`])
/// 3. Link the midpoints of the interior (non-boundary) edges of each inside
///    triangle: two such edges give one skeleton edge, three meet at the
///    triangle's centroid, fewer contribute nothing
/// 4. Chain the graph into maximal paths and simplify each with
///    `simplify_tolerance`
#[derive(Debug, Clone, Copy, Default)]
pub struct ChordalAxis;

impl ChordalAxis {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Skeletonizer for ChordalAxis {
    fn centerline(
        &self,
        polygons: &[Polygon],
        densify_distance: f64,
        simplify_tolerance: f64,
    ) -> Result<Vec<Polyline>> {
        require_positive("densify_distance", densify_distance)?;
        if !simplify_tolerance.is_finite() || simplify_tolerance < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "simplify_tolerance must be finite and >= 0, got {simplify_tolerance}"
            ))
            .into());
        }

        let mut lines = Vec::new();
        for polygon in polygons {
            let graph = RoadMesh::build(&polygon.densified(densify_distance))?.midpoint_graph();
            let before = lines.len();
            for points in graph.chain_paths() {
                let line = Polyline::new(points)?.simplify(simplify_tolerance);
                if line.length() > TOLERANCE {
                    lines.push(line);
                }
            }
            tracing::debug!(
                nodes = graph.node_count(),
                edges = graph.edge_count(),
                paths = lines.len() - before,
                "built chordal axis"
            );
        }
        Ok(lines)
    }
}

/// A polygon triangulated with its rings as constraint edges, each face
/// marked inside or outside the road.
struct RoadMesh {
    cdt: Cdt,
    /// Indexed by fixed face index; the outer face is never inside.
    inside: Vec<bool>,
}

impl RoadMesh {
    fn build(polygon: &Polygon) -> Result<Self> {
        let mut cdt = Cdt::new();
        for ring in polygon.rings() {
            let handles = ring
                .iter()
                .map(|q| cdt.insert(SpadePoint2::new(q.x, q.y)))
                .collect::<std::result::Result<Vec<_>, InsertionError>>()
                .map_err(|e| OperationError::Failed(format!("triangulation rejected a vertex: {e}")))?;

            for (&from, &to) in handles.iter().zip(handles.iter().cycle().skip(1)) {
                if from == to {
                    continue;
                }
                if !cdt.can_add_constraint(from, to) {
                    return Err(
                        OperationError::Failed("polygon boundary intersects itself".to_owned()).into(),
                    );
                }
                cdt.add_constraint(from, to);
            }
        }

        let inside = mark_inside(&cdt);
        Ok(Self { cdt, inside })
    }

    fn is_inside(&self, face: FixedFaceHandle<InnerTag>) -> bool {
        self.inside.get(face.index()).copied().unwrap_or(false)
    }

    /// Joins the midpoints of interior edges through every inside triangle.
    fn midpoint_graph(&self) -> SkeletonGraph {
        let mut graph = SkeletonGraph::new();
        let mut midpoints: HashMap<usize, NodeId> = HashMap::new();

        for face in self.cdt.inner_faces().filter(|f| self.is_inside(f.fix())) {
            let mut links = Vec::with_capacity(3);
            for edge in face.adjacent_edges() {
                let undirected = edge.as_undirected().fix();
                let shared_with_inside = !self.cdt.is_constraint_edge(undirected)
                    && edge
                        .rev()
                        .face()
                        .as_inner()
                        .is_some_and(|f| self.is_inside(f.fix()));
                if !shared_with_inside {
                    continue;
                }
                let id = *midpoints.entry(undirected.index()).or_insert_with(|| {
                    let (a, b) = (edge.from().position(), edge.to().position());
                    graph.add_node(Point2::new(0.5 * (a.x + b.x), 0.5 * (a.y + b.y)))
                });
                links.push(id);
            }

            match links[..] {
                [a, b] => graph.connect(a, b),
                [a, b, c] => {
                    let [u, v, w] = face.vertices().map(|vertex| vertex.position());
                    let hub = graph.add_node(Point2::new(
                        (u.x + v.x + w.x) / 3.0,
                        (u.y + v.y + w.y) / 3.0,
                    ));
                    for m in [a, b, c] {
                        graph.connect(hub, m);
                    }
                }
                _ => {}
            }
        }

        graph
    }
}

/// Marks faces by boundary-crossing parity.
///
/// Walks outward-in from the faces on the convex hull, which border the
/// unbounded outside; every constraint edge crossed flips inside/outside, so
/// hole interiors come out as outside.
fn mark_inside(cdt: &Cdt) -> Vec<bool> {
    let mut state: Vec<Option<bool>> = vec![None; cdt.num_all_faces()];
    let mut pending: Vec<FixedFaceHandle<InnerTag>> = Vec::new();

    for edge in cdt.convex_hull() {
        for side in [edge, edge.rev()] {
            let Some(face) = side.face().as_inner() else {
                continue;
            };
            let slot = &mut state[face.fix().index()];
            if slot.is_none() {
                *slot = Some(cdt.is_constraint_edge(edge.as_undirected().fix()));
                pending.push(face.fix());
            }
        }
    }

    while let Some(current) = pending.pop() {
        let here = state[current.index()].unwrap_or(false);
        for edge in cdt.face(current).adjacent_edges() {
            let Some(next) = edge.rev().face().as_inner() else {
                continue;
            };
            let slot = &mut state[next.fix().index()];
            if slot.is_none() {
                *slot = Some(here ^ cdt.is_constraint_edge(edge.as_undirected().fix()));
                pending.push(next.fix());
            }
        }
    }

    state.into_iter().map(|s| s == Some(true)).collect()
}
