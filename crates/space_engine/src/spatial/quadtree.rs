//! Region quadtree over the asteroid field
//!
//! The tree is built once from a static field. A node splits into four
//! quadrants while more than one asteroid disc touches its square, so every
//! leaf normally holds zero or one asteroid. Both queries then walk only the
//! part of the tree their region reaches:
//!
//! - [`Quadtree::draw_visible`] prunes subtrees whose square misses the
//!   projected view frustum and hands leaf residents to a [`RenderSink`].
//! - [`Quadtree::gather_within`] prunes subtrees whose square misses a query
//!   disc and returns leaf residents as collision candidates.
//!
//! Membership is a disc-vs-square test, so an asteroid straddling a
//! quadrant boundary lands in every leaf it touches. The tree is a covering
//! of the field, not a partition: queries may report an asteroid more than
//! once.

use serde::{Deserialize, Serialize};

use crate::field::{GeneratedField, ObstacleField, ObstacleRecord};
use crate::foundation::math::Point2;
use crate::physics::{Quad, disc_intersects_rect, quad_intersects_quad};
use crate::render::RenderSink;
use crate::spatial::Square;

/// Index of a node in the tree's node arena
pub type NodeId = usize;

/// The root node's id
pub const ROOT: NodeId = 0;

/// Configuration for quadtree behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadtreeConfig {
    /// Maximum subdivision depth (root is depth 0)
    pub max_depth: u32,

    /// Minimum child side length; a node whose children would be smaller stays a leaf
    pub min_node_size: f32,

    /// Radius of the disc used by [`Quadtree::gather_near`]
    pub query_radius: f32,
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 16,
            min_node_size: 0.05,
            query_radius: 5.0,
        }
    }
}

/// Single node in the quadtree hierarchy
#[derive(Debug, Clone)]
pub struct QuadNode {
    square: Square,
    depth: u32,
    /// SW, NW, NE, SE children; all four or none
    children: Option<[NodeId; 4]>,
    /// Field slots whose disc touches this square (leaves only)
    residents: Vec<usize>,
}

impl QuadNode {
    fn new(square: Square, depth: u32) -> Self {
        Self {
            square,
            depth,
            children: None,
            residents: Vec::new(),
        }
    }

    /// Region covered by this node
    pub fn square(&self) -> Square {
        self.square
    }

    /// Depth in the tree (0 = root)
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Child ids in SW, NW, NE, SE order, `None` for a leaf
    pub fn children(&self) -> Option<[NodeId; 4]> {
        self.children
    }

    /// Check if this node is a leaf (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Field slots held by this node; always empty for internal nodes
    pub fn residents(&self) -> &[usize] {
        &self.residents
    }
}

/// Shape summary of a built tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuadtreeStats {
    /// Total nodes
    pub nodes: usize,
    /// Leaf nodes
    pub leaves: usize,
    /// Leaves with no resident
    pub empty_leaves: usize,
    /// Leaves that hit the subdivision bound with more than one resident
    pub degenerate_leaves: usize,
    /// Deepest node depth
    pub max_depth: u32,
    /// Sum of resident counts over all leaves (exceeds the asteroid count
    /// when discs straddle quadrant boundaries)
    pub resident_refs: usize,
}

/// Quadtree spatial index over a static asteroid field
///
/// Nodes live in a flat arena; node [`ROOT`] is the root and every internal
/// node owns exactly four children. The tree owns its field snapshot, so
/// query results stay valid for the tree's lifetime. Any change to the
/// field requires building a new tree.
#[derive(Debug, Clone)]
pub struct Quadtree {
    nodes: Vec<QuadNode>,
    field: ObstacleField,
    obstacle_count: usize,
    config: QuadtreeConfig,
}

impl Quadtree {
    /// Build a tree with the default configuration
    ///
    /// See [`Quadtree::build`].
    pub fn initialize(
        corner_x: f32,
        corner_z: f32,
        size: f32,
        obstacle_count: usize,
        field: ObstacleField,
    ) -> Self {
        Self::build(corner_x, corner_z, size, obstacle_count, field, QuadtreeConfig::default())
    }

    /// Build a tree over the first `obstacle_count` slots of `field`
    ///
    /// The root square has its southwest corner at (`corner_x`, `corner_z`)
    /// and side `size`, and must cover the whole field. A zero count or an
    /// unusable root square yields a single empty leaf, so every query on
    /// the result is empty.
    pub fn build(
        corner_x: f32,
        corner_z: f32,
        size: f32,
        obstacle_count: usize,
        field: ObstacleField,
        config: QuadtreeConfig,
    ) -> Self {
        let root_square = Square::new(corner_x, corner_z, size);

        if obstacle_count > field.capacity() {
            log::warn!(
                "Quadtree asked for {} obstacles but the field holds {} slots; clamping",
                obstacle_count,
                field.capacity()
            );
        }
        let obstacle_count = obstacle_count.min(field.capacity());

        let mut tree = Self {
            nodes: vec![QuadNode::new(root_square, 0)],
            field,
            obstacle_count,
            config,
        };

        if obstacle_count == 0 || !root_square.is_valid() {
            log::warn!(
                "Quadtree build skipped (count {}, root size {}); tree is a single empty leaf",
                obstacle_count,
                size
            );
            tree.obstacle_count = 0;
            return tree;
        }

        // radius <= 0 slots ride along and are dropped by the root's intersection pass
        let candidates: Vec<usize> = (0..obstacle_count).collect();
        tree.build_node(ROOT, &candidates);

        let stats = tree.stats();
        log::info!(
            "Quadtree built: {} nodes, {} leaves, depth {}, {} resident refs for {} slots",
            stats.nodes,
            stats.leaves,
            stats.max_depth,
            stats.resident_refs,
            obstacle_count
        );
        if stats.degenerate_leaves > 0 {
            log::warn!(
                "{} leaves hit the subdivision bound holding overlapping or coincident asteroids",
                stats.degenerate_leaves
            );
        }

        tree
    }

    /// Build a tree over a generated field using its layout's root square
    pub fn from_generated(generated: GeneratedField, config: QuadtreeConfig) -> Self {
        let root = generated.root_square();
        let count = generated.slot_count();
        Self::build(root.corner.x, root.corner.y, root.size, count, generated.field, config)
    }

    /// Recursively split `id` until it touches at most one candidate
    fn build_node(&mut self, id: NodeId, candidates: &[usize]) {
        let square = self.nodes[id].square;
        let mut residents = Vec::new();
        let count = self.intersection_count(&square, candidates, &mut residents);

        if count > 1 {
            if self.can_subdivide(&self.nodes[id]) {
                let [sw, nw, ne, se] = self.subdivide(id);
                // Children scan only what survived this node's filter
                self.build_node(sw, &residents);
                self.build_node(nw, &residents);
                self.build_node(ne, &residents);
                self.build_node(se, &residents);
                return;
            }
            log::debug!(
                "Subdivision bound reached at depth {} (size {}): keeping {} residents",
                self.nodes[id].depth,
                square.size,
                count
            );
        }

        self.nodes[id].residents = residents;
    }

    /// Append every existing candidate whose disc touches `square` to `out`
    /// and return how many matched
    fn intersection_count(
        &self,
        square: &Square,
        candidates: &[usize],
        out: &mut Vec<usize>,
    ) -> usize {
        let rect = square.rect();
        let before = out.len();
        for &slot in candidates {
            let radius = self.field.radius(slot);
            if radius > 0.0 && disc_intersects_rect(&rect, self.field.ground_center(slot), radius) {
                out.push(slot);
            }
        }
        out.len() - before
    }

    fn can_subdivide(&self, node: &QuadNode) -> bool {
        let half = node.square.size / 2.0;
        node.depth < self.config.max_depth && half > 0.0 && half >= self.config.min_node_size
    }

    /// Push four children for `id` and link them
    fn subdivide(&mut self, id: NodeId) -> [NodeId; 4] {
        let parent = &self.nodes[id];
        let depth = parent.depth + 1;
        let quadrants = parent.square.quadrants();

        let first = self.nodes.len();
        let children = [first, first + 1, first + 2, first + 3];
        self.nodes.extend(quadrants.into_iter().map(|square| QuadNode::new(square, depth)));
        self.nodes[id].children = Some(children);
        children
    }

    /// Draw every resident of every leaf whose square overlaps `frustum`
    ///
    /// Subtrees whose square misses the frustum are skipped without any
    /// draw call.
    pub fn draw_visible<S: RenderSink + ?Sized>(&self, frustum: &Quad, sink: &mut S) {
        self.draw_node(ROOT, frustum, sink);
    }

    /// [`Quadtree::draw_visible`] taking the frustum as four flat (x, z) pairs
    pub fn draw_visible_corners<S: RenderSink + ?Sized>(
        &self,
        x1: f32,
        z1: f32,
        x2: f32,
        z2: f32,
        x3: f32,
        z3: f32,
        x4: f32,
        z4: f32,
        sink: &mut S,
    ) {
        let frustum = Quad::from_corners(x1, z1, x2, z2, x3, z3, x4, z4);
        self.draw_visible(&frustum, sink);
    }

    fn draw_node<S: RenderSink + ?Sized>(&self, id: NodeId, frustum: &Quad, sink: &mut S) {
        let node = &self.nodes[id];
        if !quad_intersects_quad(frustum, &node.square.to_quad()) {
            return;
        }

        match node.children {
            None => {
                for &slot in &node.residents {
                    sink.draw_obstacle(self.field.render_index(slot));
                }
            }
            Some(children) => {
                for child in children {
                    self.draw_node(child, frustum, sink);
                }
            }
        }
    }

    /// Gather collision candidates around (`x`, `z`) using the configured query radius
    pub fn gather_near(&self, x: f32, z: f32) -> Vec<ObstacleRecord> {
        self.gather_within(x, z, self.config.query_radius)
    }

    /// Gather the residents of every leaf whose square touches the disc at
    /// (`x`, `z`) with `radius`
    ///
    /// Every asteroid whose own disc touches the query disc is included.
    /// The result is a broad phase: it may also hold asteroids that merely
    /// share a leaf with the query, and duplicates for straddling discs.
    /// A negative radius gathers nothing.
    pub fn gather_within(&self, x: f32, z: f32, radius: f32) -> Vec<ObstacleRecord> {
        let mut results = Vec::new();
        self.gather_node(ROOT, Point2::new(x, z), radius, &mut results);
        results
    }

    fn gather_node(
        &self,
        id: NodeId,
        center: Point2,
        radius: f32,
        results: &mut Vec<ObstacleRecord>,
    ) {
        let node = &self.nodes[id];
        if !disc_intersects_rect(&node.square.rect(), center, radius) {
            return;
        }

        match node.children {
            None => {
                results.extend(node.residents.iter().filter_map(|&slot| self.field.record(slot)));
            }
            Some(children) => {
                for child in children {
                    self.gather_node(child, center, radius, results);
                }
            }
        }
    }

    /// The root node
    pub fn root(&self) -> &QuadNode {
        &self.nodes[ROOT]
    }

    /// A node by id
    pub fn node(&self, id: NodeId) -> Option<&QuadNode> {
        self.nodes.get(id)
    }

    /// All nodes, root first
    pub fn nodes(&self) -> &[QuadNode] {
        &self.nodes
    }

    /// Total node count
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All leaf nodes (for visualization)
    pub fn leaves(&self) -> Vec<&QuadNode> {
        self.nodes.iter().filter(|node| node.is_leaf()).collect()
    }

    /// Number of field slots the tree was built over
    pub fn obstacle_count(&self) -> usize {
        self.obstacle_count
    }

    /// The field snapshot the tree was built from
    pub fn field(&self) -> &ObstacleField {
        &self.field
    }

    /// Configuration used for the build
    pub fn config(&self) -> &QuadtreeConfig {
        &self.config
    }

    /// Collect shape statistics
    pub fn stats(&self) -> QuadtreeStats {
        let mut stats = QuadtreeStats {
            nodes: self.nodes.len(),
            ..QuadtreeStats::default()
        };
        for node in &self.nodes {
            stats.max_depth = stats.max_depth.max(node.depth);
            if !node.is_leaf() {
                continue;
            }
            stats.leaves += 1;
            stats.resident_refs += node.residents.len();
            match node.residents.len() {
                0 => stats.empty_leaves += 1,
                1 => {}
                _ => stats.degenerate_leaves += 1,
            }
        }
        stats
    }
}
