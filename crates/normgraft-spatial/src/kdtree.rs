//! Balanced k-d tree over a fixed point set.
//!
//! Built once per transfer call (median split, O(n log n)), queried many
//! times (expected O(log n) per lookup). Immutable after build — there
//! is no insertion or removal. Equidistant candidates tie-break to the
//! lowest original index, which keeps repeated transfers bit-identical.

use normgraft_math::Vec3;
use normgraft_types::{NormgraftError, NormgraftResult};

/// Sentinel for "no child".
const NONE: i32 = -1;

#[derive(Debug, Clone)]
struct Node {
    point: Vec3,
    /// Index into the point sequence the tree was built from.
    index: u32,
    /// Split axis: 0 = x, 1 = y, 2 = z.
    axis: u8,
    left: i32,
    right: i32,
}

/// Static nearest-neighbor index over source triangle centroids.
///
/// The sole query is [`nearest`](Self::nearest): the index of the point
/// with minimum Euclidean distance to a query position.
#[derive(Debug, Clone)]
pub struct CentroidIndex {
    nodes: Vec<Node>,
}

#[inline]
fn axis_value(p: Vec3, axis: usize) -> f32 {
    match axis {
        0 => p.x,
        1 => p.y,
        _ => p.z,
    }
}

impl CentroidIndex {
    /// Builds a balanced tree over `points`. An empty slice is allowed;
    /// querying the resulting index fails with `NoSourceGeometry`.
    pub fn build(points: &[Vec3]) -> Self {
        let mut items: Vec<(Vec3, u32)> = points
            .iter()
            .enumerate()
            .map(|(i, &p)| (p, i as u32))
            .collect();

        let mut nodes = Vec::with_capacity(items.len());
        Self::build_recursive(&mut items, 0, &mut nodes);
        Self { nodes }
    }

    fn build_recursive(items: &mut [(Vec3, u32)], depth: usize, nodes: &mut Vec<Node>) -> i32 {
        if items.is_empty() {
            return NONE;
        }

        let axis = depth % 3;
        let mid = items.len() / 2;
        // Median split; original index as the secondary key keeps the
        // build deterministic for duplicate coordinates.
        items.select_nth_unstable_by(mid, |a, b| {
            axis_value(a.0, axis)
                .total_cmp(&axis_value(b.0, axis))
                .then(a.1.cmp(&b.1))
        });

        let (point, index) = items[mid];
        let id = nodes.len() as i32;
        nodes.push(Node {
            point,
            index,
            axis: axis as u8,
            left: NONE,
            right: NONE,
        });

        let (lower, rest) = items.split_at_mut(mid);
        let upper = &mut rest[1..];
        let left = Self::build_recursive(lower, depth + 1, nodes);
        let right = Self::build_recursive(upper, depth + 1, nodes);
        nodes[id as usize].left = left;
        nodes[id as usize].right = right;

        id
    }

    /// Returns the number of indexed points.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when the index holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the index (into the build-time point sequence) of the
    /// point closest to `query`. Equidistant points resolve to the
    /// lowest index.
    ///
    /// Fails with `NoSourceGeometry` when the index was built from zero
    /// points.
    pub fn nearest(&self, query: Vec3) -> NormgraftResult<usize> {
        if self.nodes.is_empty() {
            return Err(NormgraftError::NoSourceGeometry);
        }

        let mut best = Best {
            dist_sq: f32::INFINITY,
            index: u32::MAX,
        };
        self.search(0, query, &mut best);
        Ok(best.index as usize)
    }

    fn search(&self, node: i32, query: Vec3, best: &mut Best) {
        if node == NONE {
            return;
        }
        let n = &self.nodes[node as usize];

        let dist_sq = query.distance_squared(n.point);
        if dist_sq < best.dist_sq || (dist_sq == best.dist_sq && n.index < best.index) {
            best.dist_sq = dist_sq;
            best.index = n.index;
        }

        let delta = axis_value(query, n.axis as usize) - axis_value(n.point, n.axis as usize);
        let (near, far) = if delta < 0.0 {
            (n.left, n.right)
        } else {
            (n.right, n.left)
        };

        self.search(near, query, best);
        // <= keeps equidistant far-side candidates reachable so the
        // lowest-index tie-break holds regardless of traversal order.
        if delta * delta <= best.dist_sq {
            self.search(far, query, best);
        }
    }
}

#[derive(Clone, Copy)]
struct Best {
    dist_sq: f32,
    index: u32,
}
