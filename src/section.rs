//! Cross-section property engine
//!
//! All properties are piecewise-linear line integrals folded over the
//! `(node, parent)` edges of a depth-first walk of the contour tree. The
//! cheap geometric quantities (area, gravity center, inertia moments) use a
//! fixed reference root; the sectorial quantities depend on the chosen
//! (root, pole) pair and recompute the sectorial-area field from scratch on
//! every evaluation.

use serde::{Deserialize, Serialize};

use crate::contour::{walk, ContourTree, Node, NodeId, Traversal};
use crate::error::{SectionError, SectionResult};
use crate::geometry;
use crate::Point;

/// Threshold below which a divisor (area, inertia moment) is treated as
/// degenerate instead of producing ±inf.
const DEGENERATE_EPS: f64 = 1e-12;

/// Cached derived quantities; `None` means not yet computed.
#[derive(Debug, Clone, Copy, Default)]
struct PropertyCache {
    section_area: Option<f64>,
    gravity_center: Option<Point>,
    inertia_moment: Option<Point>,
    rigidity_center: Option<Point>,
    sectorial_inertia_moment: Option<f64>,
}

/// All summary properties of a section in one serializable record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PropertySummary {
    /// Section area F
    pub section_area: f64,
    /// Gravity center
    pub gravity_center: Point,
    /// Rigidity (shear) center
    pub rigidity_center: Point,
    /// Centroidal principal inertia moments (Ix, Iy)
    pub inertia_moment: Point,
    /// Polar inertia moment Ip = Ix + Iy
    pub polar_inertia_moment: f64,
    /// Sectorial (warping) inertia moment Iw
    pub sectorial_inertia_moment: f64,
}

/// An open thin-walled cross-section and its derived properties.
///
/// Construction connects the samples into a minimum spanning tree and leaves
/// every derived quantity uncomputed. Queries cache their results; the
/// `*_with(false)` forms force recomputation. The sample set is immutable
/// after construction, so cached and recomputed values always agree.
///
/// A section is a single-owner working set: queries take `&mut self` for the
/// cache and instances are not meant to be shared across threads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossSection {
    tree: ContourTree,
    #[serde(skip)]
    cache: PropertyCache,
}

impl CrossSection {
    /// Build a cross-section from wall-centerline samples.
    ///
    /// The samples may arrive in any order; they are connected into a
    /// minimum spanning tree. At least one sample is required.
    pub fn new(nodes: Vec<Node>) -> SectionResult<Self> {
        Ok(Self {
            tree: ContourTree::connect(nodes)?,
            cache: PropertyCache::default(),
        })
    }

    /// The connected contour tree.
    pub fn tree(&self) -> &ContourTree {
        &self.tree
    }

    /// The samples, in input order.
    pub fn nodes(&self) -> &[Node] {
        self.tree.nodes()
    }

    /// Root used by the fixed-root integrals (the contour seed).
    pub fn reference_root(&self) -> NodeId {
        self.tree.reference_root()
    }

    /// Section area F = Σ t·ds over the tree edges.
    pub fn section_area(&mut self) -> f64 {
        self.section_area_with(true)
    }

    /// Section area; `lazy = false` forces recomputation.
    pub fn section_area_with(&mut self, lazy: bool) -> f64 {
        if lazy {
            if let Some(area) = self.cache.section_area {
                return area;
            }
        }

        let traversal = self.reference_walk();
        let mut area = 0.0;
        for (node, parent) in traversal.edges() {
            let (ds, t) = self.edge_weight(node, parent);
            area += t * ds;
        }

        self.cache.section_area = Some(area);
        area
    }

    /// Gravity center of the section.
    pub fn gravity_center(&mut self) -> SectionResult<Point> {
        self.gravity_center_with(true)
    }

    /// Gravity center; `lazy = false` forces recomputation.
    ///
    /// Fails with [`SectionError::DegenerateArea`] when the section area is
    /// too small to divide by (e.g. a single-sample section).
    pub fn gravity_center_with(&mut self, lazy: bool) -> SectionResult<Point> {
        if lazy {
            if let Some(gc) = self.cache.gravity_center {
                return Ok(gc);
            }
        }

        let traversal = self.reference_walk();
        let mut sx = 0.0;
        let mut sy = 0.0;
        for (node, parent) in traversal.edges() {
            let (ds, t) = self.edge_weight(node, parent);
            let p = self.tree.node(node).point;
            let q = self.tree.node(parent).point;
            sx += 0.5 * (p.x + q.x) * t * ds;
            sy += 0.5 * (p.y + q.y) * t * ds;
        }

        let area = self.section_area();
        if area.abs() <= DEGENERATE_EPS {
            return Err(SectionError::DegenerateArea(area));
        }

        let gc = Point::new(sx / area, sy / area);
        self.cache.gravity_center = Some(gc);
        Ok(gc)
    }

    /// Centroidal principal inertia moments as a point (Ix, Iy).
    pub fn inertia_moment(&mut self) -> SectionResult<Point> {
        self.inertia_moment_with(true)
    }

    /// Inertia moments; `lazy = false` forces recomputation.
    ///
    /// Raw second moments are accumulated about the global axes, then moved
    /// to the centroidal axes with the parallel-axis theorem.
    pub fn inertia_moment_with(&mut self, lazy: bool) -> SectionResult<Point> {
        if lazy {
            if let Some(inertia) = self.cache.inertia_moment {
                return Ok(inertia);
            }
        }

        let traversal = self.reference_walk();
        let mut ix = 0.0;
        let mut iy = 0.0;
        for (node, parent) in traversal.edges() {
            let (ds, t) = self.edge_weight(node, parent);
            let p = self.tree.node(node).point;
            let q = self.tree.node(parent).point;
            ix += 0.5 * (p.y * p.y + q.y * q.y) * t * ds;
            iy += 0.5 * (p.x * p.x + q.x * q.x) * t * ds;
        }

        let area = self.section_area();
        let gc = self.gravity_center()?;
        ix -= area * gc.y * gc.y;
        iy -= area * gc.x * gc.x;

        let inertia = Point::new(ix, iy);
        self.cache.inertia_moment = Some(inertia);
        Ok(inertia)
    }

    /// Polar inertia moment Ip = Ix + Iy.
    pub fn polar_inertia_moment(&mut self) -> SectionResult<f64> {
        self.polar_inertia_moment_with(true)
    }

    /// Polar inertia moment; `lazy = false` forces recomputation of Ix, Iy.
    pub fn polar_inertia_moment_with(&mut self, lazy: bool) -> SectionResult<f64> {
        let inertia = self.inertia_moment_with(lazy)?;
        Ok(inertia.x + inertia.y)
    }

    /// Sectorial static moment Sw for the given contour root and pole.
    ///
    /// Always recomputed: the sectorial-area field is rebuilt for the
    /// (root, pole) pair before integrating.
    pub fn sectorial_static_moment(&mut self, root: NodeId, pole: Point) -> SectionResult<f64> {
        self.ensure_node(root)?;

        let traversal = walk(&self.tree, root);
        let field = self.sectorial_area_field(&traversal, &pole);

        let mut sw = 0.0;
        for (node, parent) in traversal.edges() {
            let np = geometry::relative_to(&self.tree.node(node).point, &pole);
            let pp = geometry::relative_to(&self.tree.node(parent).point, &pole);
            let ds = geometry::distance(&np, &pp);
            let t = self.avg_thickness(node, parent);
            sw += 0.5 * (field[node] + field[parent]) * t * ds;
        }

        Ok(sw)
    }

    /// Sectorial linear static moment (Swx, Swy) for the given root and pole.
    ///
    /// The sectorial-area field is taken about the pole while the lever arms
    /// are measured from the gravity center; always recomputed.
    pub fn sectorial_linear_static_moment(
        &mut self,
        root: NodeId,
        pole: Point,
    ) -> SectionResult<Point> {
        self.ensure_node(root)?;
        let gc = self.gravity_center()?;

        let traversal = walk(&self.tree, root);
        let field = self.sectorial_area_field(&traversal, &pole);

        let mut swx = 0.0;
        let mut swy = 0.0;
        for (node, parent) in traversal.edges() {
            let np = geometry::relative_to(&self.tree.node(node).point, &gc);
            let pp = geometry::relative_to(&self.tree.node(parent).point, &gc);
            let ds = geometry::distance(&np, &pp);
            let t = self.avg_thickness(node, parent);
            swx += 0.5 * (np.y * field[node] + pp.y * field[parent]) * t * ds;
            swy += 0.5 * (np.x * field[node] + pp.x * field[parent]) * t * ds;
        }

        Ok(Point::new(swx, swy))
    }

    /// Rigidity (shear) center of the section.
    pub fn rigidity_center(&mut self) -> SectionResult<Point> {
        self.rigidity_center_with(true)
    }

    /// Rigidity center; `lazy = false` forces recomputation.
    ///
    /// Evaluated from the sectorial linear static moment with the pole at the
    /// global origin and the contour seed as root:
    /// `x = Swx / Ix`, `y = -Swy / Iy`.
    pub fn rigidity_center_with(&mut self, lazy: bool) -> SectionResult<Point> {
        if lazy {
            if let Some(rc) = self.cache.rigidity_center {
                return Ok(rc);
            }
        }

        let pole = Point::origin();
        let inertia = self.inertia_moment()?;
        if inertia.x.abs() <= DEGENERATE_EPS {
            return Err(SectionError::DegenerateInertia {
                axis: 'x',
                value: inertia.x,
            });
        }
        if inertia.y.abs() <= DEGENERATE_EPS {
            return Err(SectionError::DegenerateInertia {
                axis: 'y',
                value: inertia.y,
            });
        }

        let root = self.tree.reference_root();
        let slsm = self.sectorial_linear_static_moment(root, pole)?;

        let rc = Point::new(pole.x + slsm.x / inertia.x, pole.y - slsm.y / inertia.y);
        self.cache.rigidity_center = Some(rc);
        Ok(rc)
    }

    /// Sectorial (warping) inertia moment Iw.
    pub fn sectorial_inertia_moment(&mut self) -> SectionResult<f64> {
        self.sectorial_inertia_moment_with(true)
    }

    /// Sectorial inertia moment; `lazy = false` forces recomputation.
    ///
    /// With the pole fixed at the rigidity center, every node is tried as
    /// candidate root and scored by the residual `|Sw| + |Swx| + |Swy|`; the
    /// first minimum in contour storage order wins. The sectorial-area field
    /// is then rebuilt at the winning root and integrated as
    /// `Iw = Σ 0.5 (ω² + ω_parent²) t ds`. O(N²) in the node count.
    pub fn sectorial_inertia_moment_with(&mut self, lazy: bool) -> SectionResult<f64> {
        if lazy {
            if let Some(iw) = self.cache.sectorial_inertia_moment {
                return Ok(iw);
            }
        }

        let pole = self.rigidity_center()?;

        let candidates = self.tree.order().to_vec();
        let mut best_root = self.tree.reference_root();
        let mut best_score = f64::INFINITY;
        for candidate in candidates {
            let sw = self.sectorial_static_moment(candidate, pole)?;
            let slsm = self.sectorial_linear_static_moment(candidate, pole)?;
            let score = sw.abs() + slsm.x.abs() + slsm.y.abs();
            if score < best_score {
                best_score = score;
                best_root = candidate;
            }
        }
        log::debug!(
            "warping root search: node {} selected with residual {:.3e}",
            best_root,
            best_score
        );

        let traversal = walk(&self.tree, best_root);
        let field = self.sectorial_area_field(&traversal, &pole);

        let mut iw = 0.0;
        for (node, parent) in traversal.edges() {
            let np = geometry::relative_to(&self.tree.node(node).point, &pole);
            let pp = geometry::relative_to(&self.tree.node(parent).point, &pole);
            let ds = geometry::distance(&np, &pp);
            let t = self.avg_thickness(node, parent);
            iw += 0.5 * (field[node] * field[node] + field[parent] * field[parent]) * t * ds;
        }

        self.cache.sectorial_inertia_moment = Some(iw);
        Ok(iw)
    }

    /// All summary properties in one record.
    pub fn summary(&mut self) -> SectionResult<PropertySummary> {
        Ok(PropertySummary {
            section_area: self.section_area(),
            gravity_center: self.gravity_center()?,
            rigidity_center: self.rigidity_center()?,
            inertia_moment: self.inertia_moment()?,
            polar_inertia_moment: self.polar_inertia_moment()?,
            sectorial_inertia_moment: self.sectorial_inertia_moment()?,
        })
    }

    /// Sectorial-area field ω about `pole` for the walk's root: twice the
    /// signed area swept by the radius vector from the pole along the contour.
    ///
    /// Edges arrive in visitation order, so a parent's value is final before
    /// any of its children are evaluated. Rebuilt wholesale on every call;
    /// never updated incrementally.
    fn sectorial_area_field(&self, traversal: &Traversal, pole: &Point) -> Vec<f64> {
        let origin = Point::origin();
        let mut field = vec![0.0; self.tree.len()];

        for (node, parent) in traversal.edges() {
            let np = geometry::relative_to(&self.tree.node(node).point, pole);
            let pp = geometry::relative_to(&self.tree.node(parent).point, pole);
            let sign = geometry::sweep_sign(&pp, &np);
            let area = geometry::triangle_area(&pp, &np, &origin);
            field[node] = field[parent] + sign * area * 2.0;
        }

        field
    }

    fn reference_walk(&self) -> Traversal {
        walk(&self.tree, self.tree.reference_root())
    }

    fn ensure_node(&self, id: NodeId) -> SectionResult<()> {
        if self.tree.contains(id) {
            Ok(())
        } else {
            Err(SectionError::NodeNotFound(id))
        }
    }

    fn avg_thickness(&self, node: NodeId, parent: NodeId) -> f64 {
        0.5 * (self.tree.node(node).thickness + self.tree.node(parent).thickness)
    }

    fn edge_weight(&self, node: NodeId, parent: NodeId) -> (f64, f64) {
        let ds = self.tree.node(node).distance_to(self.tree.node(parent));
        (ds, self.avg_thickness(node, parent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn horizontal_segment(length: f64, thickness: f64) -> CrossSection {
        CrossSection::new(vec![
            Node::new(0.0, 0.0, thickness),
            Node::new(length, 0.0, thickness),
        ])
        .unwrap()
    }

    #[test]
    fn test_segment_area_and_centroid() {
        let mut section = horizontal_segment(10.0, 2.0);
        assert_abs_diff_eq!(section.section_area(), 20.0, epsilon = 1e-10);

        let gc = section.gravity_center().unwrap();
        assert_abs_diff_eq!(gc.x, 5.0, epsilon = 1e-10);
        assert_abs_diff_eq!(gc.y, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_segment_inertia_moments() {
        // Two-sample trapezoidal quadrature of x^2 over a segment of length L
        // gives t*L^3/2 about the origin, t*L^3/4 after the parallel-axis
        // shift to the centroid.
        let (l, t) = (10.0, 2.0);
        let mut section = horizontal_segment(l, t);
        let inertia = section.inertia_moment().unwrap();
        assert_abs_diff_eq!(inertia.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(inertia.y, t * l.powi(3) / 4.0, epsilon = 1e-10);

        // Same segment rotated onto the Y-axis swaps the roles of Ix and Iy.
        let mut vertical = CrossSection::new(vec![
            Node::new(0.0, -l / 2.0, t),
            Node::new(0.0, l / 2.0, t),
        ])
        .unwrap();
        let inertia = vertical.inertia_moment().unwrap();
        assert_relative_eq!(inertia.x, t * l.powi(3) / 4.0, epsilon = 1e-10);
        assert_abs_diff_eq!(inertia.y, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_polar_moment_is_sum_of_principal_moments() {
        let mut section = CrossSection::new(vec![
            Node::new(0.0, 0.0, 1.0),
            Node::new(4.0, 1.0, 1.5),
            Node::new(2.0, 5.0, 2.0),
            Node::new(-1.0, 3.0, 1.0),
        ])
        .unwrap();

        let inertia = section.inertia_moment().unwrap();
        let ip = section.polar_inertia_moment().unwrap();
        assert_relative_eq!(ip, inertia.x + inertia.y, epsilon = 1e-12);
    }

    #[test]
    fn test_single_node_section() {
        let mut section = CrossSection::new(vec![Node::new(1.0, 2.0, 3.0)]).unwrap();
        assert_eq!(section.section_area(), 0.0);
        assert!(matches!(
            section.gravity_center(),
            Err(SectionError::DegenerateArea(_))
        ));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            CrossSection::new(Vec::new()),
            Err(SectionError::EmptyInput)
        ));
    }

    #[test]
    fn test_unknown_root_rejected() {
        let mut section = horizontal_segment(5.0, 1.0);
        assert!(matches!(
            section.sectorial_static_moment(17, Point::origin()),
            Err(SectionError::NodeNotFound(17))
        ));
    }

    #[test]
    fn test_sectorial_field_vanishes_through_pole() {
        // A contour collinear with the pole sweeps no area: every triangle
        // degenerates and the field stays zero.
        let mut section = CrossSection::new(vec![
            Node::new(1.0, 0.0, 1.0),
            Node::new(2.0, 0.0, 1.0),
            Node::new(3.0, 0.0, 1.0),
        ])
        .unwrap();
        let sw = section.sectorial_static_moment(0, Point::origin()).unwrap();
        assert_abs_diff_eq!(sw, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_sectorial_static_moment_unit_sweep() {
        // Edge from (1, 0) to (1, 1) about the origin: triangle area 0.5,
        // counter-clockwise sweep, so the far node carries omega = +1 and
        // Sw = 0.5 * (0 + 1) * t * ds = 0.5.
        let mut section = CrossSection::new(vec![
            Node::new(1.0, 0.0, 1.0),
            Node::new(1.0, 1.0, 1.0),
        ])
        .unwrap();
        let sw = section.sectorial_static_moment(0, Point::origin()).unwrap();
        assert_relative_eq!(sw, 0.5, epsilon = 1e-10);

        // Walking the same edge the other way sweeps clockwise.
        let sw = section.sectorial_static_moment(1, Point::origin()).unwrap();
        assert_relative_eq!(sw, -0.5, epsilon = 1e-10);
    }

    #[test]
    fn test_cached_queries_are_idempotent() {
        let mut section = CrossSection::new(vec![
            Node::new(0.0, 0.0, 1.0),
            Node::new(3.0, 0.0, 1.0),
            Node::new(3.0, 4.0, 1.0),
        ])
        .unwrap();

        let a1 = section.section_area();
        let a2 = section.section_area();
        assert_eq!(a1.to_bits(), a2.to_bits());

        let gc1 = section.gravity_center().unwrap();
        let gc2 = section.gravity_center().unwrap();
        assert_eq!(gc1.x.to_bits(), gc2.x.to_bits());
        assert_eq!(gc1.y.to_bits(), gc2.y.to_bits());
    }

    #[test]
    fn test_forced_recomputation_is_deterministic() {
        let mut section = CrossSection::new(vec![
            Node::new(0.0, 0.0, 1.0),
            Node::new(3.0, 0.0, 1.0),
            Node::new(3.0, 4.0, 1.0),
        ])
        .unwrap();

        let cached = section.inertia_moment().unwrap();
        let forced = section.inertia_moment_with(false).unwrap();
        assert_eq!(cached.x.to_bits(), forced.x.to_bits());
        assert_eq!(cached.y.to_bits(), forced.y.to_bits());
    }
}
