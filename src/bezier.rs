//! CSS-like cubic Bézier easing, evaluated in closed form.
//!
//! Control points are (0,0), (x1,y1), (x2,y2), (1,1).  Fixing the endpoints
//! reduces each axis to a cubic without constant term,
//! `a·t³ + b·t² + c·t`, so mapping progress `x` to output `y` means solving
//! one cubic for `t` and evaluating another.
//!
//! [`EasingCurve::new`] precomputes every quantity that does not depend on
//! the queried `x`; [`EasingCurve::sample`] is then a fixed, allocation-free
//! sequence of arithmetic operations (Cardano's formula), with no iterative
//! root search.

use log::debug;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_3, FRAC_PI_6};
use std::fmt;

/// Below this magnitude the cubic term of `x(t)` is dropped and the reduced
/// quadratic is solved instead.
///
/// Near zero, Cardano's formula divides by `a`, `a²` and `a³`.  Dropping the
/// term moves `x(t)` by at most `|a|` on `t ∈ [0, 1]`.
pub const DEGENERATE_EPSILON: f64 = 1e-7;

/// How far outside `[0, 1]` a single-root solution may land from rounding
/// before the three-root solver is consulted instead.
const ROOT_SLACK: f64 = 1e-6;

/// Errors from [`EasingCurve::try_new`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// The x coordinate of a control point lies outside `[0, 1]`, which
    /// would make `x(t)` non-monotonic.
    #[error("x coordinate of control point p{point} is {value}, expected a value in [0, 1]")]
    ControlPointOutOfRange { point: u8, value: f64 },
    /// A control point has a `NaN` or infinite coordinate.
    #[error("control point p{point} has a non-finite coordinate")]
    NonFinite { point: u8 },
}

/// Real cube root that keeps the sign of its argument.
///
/// `sign(v) · |v|^(1/3)`, so `signed_cbrt(-8.0) == -2.0`.
pub fn signed_cbrt(v: f64) -> f64 {
    v.abs().cbrt().copysign(v)
}

/// `a·t³ + b·t² + c·t` for one axis of a curve anchored at 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cubic {
    a: f64,
    b: f64,
    c: f64,
}

impl Cubic {
    /// Power-basis coefficients for interior control values `p1`, `p2`.
    fn from_controls(p1: f64, p2: f64) -> Self {
        Self {
            a: 3.0 * p1 - 3.0 * p2 + 1.0,
            b: -6.0 * p1 + 3.0 * p2,
            c: 3.0 * p1,
        }
    }

    #[inline]
    fn eval(&self, t: f64) -> f64 {
        ((self.a * t + self.b) * t + self.c) * t
    }
}

/// How `x(t) = x` is solved for `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Solver {
    Cardano(Cardano),
    /// `a ≈ 0`: `b·t² + c·t = x`.
    Quadratic { b: f64, c: f64 },
}

impl Solver {
    fn for_cubic(x: Cubic) -> Self {
        if x.a.abs() < DEGENERATE_EPSILON {
            Solver::Quadratic { b: x.b, c: x.c }
        } else {
            Solver::Cardano(Cardano::new(x))
        }
    }

    /// Parameter `t ∈ [0, 1]` with `x(t) = x`.
    #[inline]
    fn solve(&self, x: f64) -> f64 {
        let t = match *self {
            Solver::Cardano(ref cardano) => cardano.solve(x),
            Solver::Quadratic { b, c } => {
                // c ≥ 0 and c² + 4bx ≥ 0 for clamped control points and x ∈ [0, 1].
                let root = (c * c + 4.0 * b * x).max(0.0).sqrt();
                2.0 * x / (c + root)
            }
        };
        t.clamp(0.0, 1.0)
    }
}

/// Invariants of `a·t³ + b·t² + c·t − x = 0` that do not depend on `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cardano {
    /// Depressed-cubic parameter `(3ac − b²) / (9a²)`.
    p: f64,
    p_cubed: f64,
    /// `(9abc − 2b³) / (54a³)`; `q = q_base + q_per_x · x`.
    q_base: f64,
    /// `27a² / (54a³)`, i.e. `1 / (2a)`.
    q_per_x: f64,
    /// `b / (3a)`.
    shift: f64,
    c_over_a: f64,
}

impl Cardano {
    fn new(Cubic { a, b, c }: Cubic) -> Self {
        let p = (3.0 * a * c - b * b) / (9.0 * a * a);
        Self {
            p,
            p_cubed: p * p * p,
            q_base: (9.0 * a * b * c - 2.0 * b * b * b) / (54.0 * a * a * a),
            q_per_x: 1.0 / (2.0 * a),
            shift: b / (3.0 * a),
            c_over_a: c / a,
        }
    }

    #[inline]
    fn solve(&self, x: f64) -> f64 {
        let q = self.q_base + self.q_per_x * x;
        let discriminant = self.p_cubed + q * q;
        if self.p >= 0.0 {
            // x(t) is monotonic on the whole real line: one real root.
            return self.single_real_root(q, discriminant);
        }

        // p³ and q² nearly cancel around a near-double root, so the sign of
        // their sum is only trusted outside rounding noise.
        if discriminant <= 8.0 * f64::EPSILON * -self.p_cubed {
            return self.three_real_roots(q, x);
        }
        let t = self.single_real_root(q, discriminant);
        if distance_to_unit(t) > ROOT_SLACK {
            // The sign was still wrong: the pair of roots that merged into a
            // complex pair holds the one in [0, 1].
            self.three_real_roots(q, x)
        } else {
            t
        }
    }

    /// Cardano's formula.  Takes the cube root of the larger term; the other
    /// follows from r·s = −p.
    fn single_real_root(&self, q: f64, discriminant: f64) -> f64 {
        let r = signed_cbrt(q + discriminant.max(0.0).sqrt().copysign(q));
        let s = if r == 0.0 { 0.0 } else { -self.p / r };
        r + s - self.shift
    }

    /// Root nearest to `[0, 1]` when the cubic has three real roots.
    ///
    /// Only the largest-magnitude root of the depressed cubic is taken from
    /// the trigonometric formula.  The other two come from the quadratic
    /// left after dividing it out, which keeps them accurate when `a` is
    /// small and the roots are far apart.
    fn three_real_roots(&self, q: f64, x: f64) -> f64 {
        let m = 2.0 * (-self.p).sqrt();
        let phi = (q / (-self.p_cubed).sqrt()).clamp(-1.0, 1.0).acos() / 3.0;
        let u = if phi <= FRAC_PI_6 {
            m * phi.cos()
        } else {
            m * (phi + 2.0 * FRAC_PI_3).cos()
        };
        let far = u - self.shift;

        // t³ + (b/a)·t² + (c/a)·t − x/a = (t − far)(t² + β·t + γ)
        let beta = 3.0 * self.shift + far;
        let gamma = if far.abs() > 1.0 {
            2.0 * self.q_per_x * x / far
        } else {
            self.c_over_a + far * beta
        };
        let root = (beta * beta - 4.0 * gamma).max(0.0).sqrt();
        let h = -0.5 * (beta + root.copysign(beta));
        let other = if h == 0.0 { 0.0 } else { gamma / h };

        [h, other].into_iter().fold(far, |best, t| {
            if distance_to_unit(t) < distance_to_unit(best) {
                t
            } else {
                best
            }
        })
    }
}

fn distance_to_unit(t: f64) -> f64 {
    (t - t.clamp(0.0, 1.0)).abs()
}

/// A cubic Bézier easing curve through (0,0) and (1,1).
///
/// Immutable once built: construct it once and call [`sample`](Self::sample)
/// as often as needed, from any thread.
///
/// ```
/// use cubic_ease::bezier::EasingCurve;
///
/// let ease_in_out = EasingCurve::new(0.42, 0.0, 0.58, 1.0);
/// assert!((ease_in_out.sample(0.5) - 0.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct EasingCurve {
    p1: (f64, f64),
    p2: (f64, f64),
    x: Cubic,
    y: Cubic,
    solver: Solver,
}

impl EasingCurve {
    /// Build a curve from its two interior control points.
    ///
    /// `p1x` and `p2x` are clamped to `[0, 1]`, which keeps `x(t)`
    /// monotonic.  `p1y` and `p2y` are unrestricted, so overshooting and
    /// anticipating curves are allowed.  Use [`try_new`](Self::try_new) to
    /// reject out-of-range input instead.
    pub fn new(p1x: f64, p1y: f64, p2x: f64, p2y: f64) -> Self {
        let x1 = p1x.clamp(0.0, 1.0);
        let x2 = p2x.clamp(0.0, 1.0);
        if x1 != p1x || x2 != p2x {
            debug!(
                "clamped control point x coordinates ({}, {}) to ({}, {})",
                p1x, p2x, x1, x2
            );
        }

        let x = Cubic::from_controls(x1, x2);
        let y = Cubic::from_controls(p1y, p2y);
        let solver = Solver::for_cubic(x);
        if let Solver::Quadratic { .. } = solver {
            debug!(
                "cubic term vanishes for x1={} x2={}, solving the reduced quadratic",
                x1, x2
            );
        }

        Self {
            p1: (x1, p1y),
            p2: (x2, p2y),
            x,
            y,
            solver,
        }
    }

    /// Build a curve, rejecting non-finite coordinates and x coordinates
    /// outside `[0, 1]`.
    pub fn try_new(p1x: f64, p1y: f64, p2x: f64, p2y: f64) -> Result<Self, CurveError> {
        for (point, coords) in [(1, [p1x, p1y]), (2, [p2x, p2y])] {
            if coords.iter().any(|v| !v.is_finite()) {
                return Err(CurveError::NonFinite { point });
            }
            if !(0.0..=1.0).contains(&coords[0]) {
                return Err(CurveError::ControlPointOutOfRange {
                    point,
                    value: coords[0],
                });
            }
        }
        Ok(Self::new(p1x, p1y, p2x, p2y))
    }

    /// The straight line `y = x`.
    pub fn linear() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    /// Eased output for progress `x`.
    ///
    /// `x` is clamped to `[0, 1]`: anything at or below 0 returns exactly
    /// `0.0`, anything at or above 1 returns exactly `1.0`.  `NaN` in gives
    /// `NaN` out.
    #[inline]
    pub fn sample(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        self.y.eval(self.solver.solve(x))
    }

    /// The point `(x(t), y(t))` on the curve for parameter `t`.
    pub fn point_at(&self, t: f64) -> (f64, f64) {
        (self.x.eval(t), self.y.eval(t))
    }

    /// First interior control point, after clamping.
    pub fn p1(&self) -> (f64, f64) {
        self.p1
    }

    /// Second interior control point, after clamping.
    pub fn p2(&self) -> (f64, f64) {
        self.p2
    }

    /// `[x1, y1, x2, y2]`.
    pub fn control_points(&self) -> [f64; 4] {
        [self.p1.0, self.p1.1, self.p2.0, self.p2.1]
    }

    /// Whether `x(t)` has no cubic term and is solved as a quadratic.
    pub fn is_degenerate(&self) -> bool {
        matches!(self.solver, Solver::Quadratic { .. })
    }
}

impl Default for EasingCurve {
    fn default() -> Self {
        Self::linear()
    }
}

impl From<[f64; 4]> for EasingCurve {
    fn from([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

impl From<EasingCurve> for [f64; 4] {
    fn from(curve: EasingCurve) -> Self {
        curve.control_points()
    }
}

impl fmt::Display for EasingCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x1, y1, x2, y2] = self.control_points();
        write!(f, "cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
    }
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;

    /// Bisection on the Bernstein form, independent of the power-basis
    /// coefficients used by [`EasingCurve`].
    fn reference(p1x: f64, p1y: f64, p2x: f64, p2y: f64, x: f64) -> f64 {
        let bernstein = |p1: f64, p2: f64, t: f64| {
            let mt = 1.0 - t;
            3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
        };
        let (mut lo, mut hi) = (0.0, 1.0);
        for _ in 0..100 {
            let mid = 0.5 * (lo + hi);
            if bernstein(p1x, p2x, mid) < x {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        bernstein(p1y, p2y, 0.5 * (lo + hi))
    }

    fn unit_steps(n: usize) -> impl Iterator<Item = f64> {
        (0..=n).map(move |i| i as f64 / n as f64)
    }

    const CURVES: [[f64; 4]; 9] = [
        [0.42, 0.0, 0.58, 1.0],
        [0.25, 0.1, 0.25, 1.0],
        [0.42, 0.0, 1.0, 1.0],
        [0.0, 0.0, 0.58, 1.0],
        [0.0, 0.0, 1.0, 1.0],
        [0.1, 0.2, 0.9, 0.8],
        [1.0, 0.0, 0.0, 1.0],
        [0.68, -0.55, 0.265, 1.55],
        [0.0, 1.0, 1.0, 0.0],
    ];

    #[test]
    fn endpoints_are_fixed() {
        let xs = [-0.5, 0.0, 0.2, 0.5, 0.8, 1.0, 1.5];
        for &p1x in &xs {
            for &p2x in &xs {
                let c = EasingCurve::new(p1x, 0.3, p2x, 0.7);
                assert!(c.sample(0.0).abs() <= 1e-6, "{c}: sample(0)");
                assert!((c.sample(1.0) - 1.0).abs() <= 1e-6, "{c}: sample(1)");
            }
        }
    }

    #[test]
    fn linear_control_points_give_identity() {
        let c = EasingCurve::new(0.0, 0.0, 1.0, 1.0);
        for x in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert!((c.sample(x) - x).abs() < 1e-6, "sample({x}) = {}", c.sample(x));
        }
    }

    #[test]
    fn point_symmetric_curves_are_odd_about_center() {
        for (p1x, p1y) in [(0.1, 0.2), (0.42, 0.0), (0.25, 0.1), (1.0 / 3.0, 0.4), (0.9, -0.3)] {
            let c = EasingCurve::new(p1x, p1y, 1.0 - p1x, 1.0 - p1y);
            for x in unit_steps(100) {
                let sum = c.sample(x) + c.sample(1.0 - x);
                assert!((sum - 1.0).abs() < 1e-9, "{c} at {x}: {sum}");
            }
        }
    }

    #[test]
    fn ease_in_out_matches_reference() {
        let c = EasingCurve::new(0.42, 0.0, 0.58, 1.0);
        for x in [0.1, 0.3, 0.5, 0.7, 0.9] {
            let expected = reference(0.42, 0.0, 0.58, 1.0, x);
            assert!((c.sample(x) - expected).abs() < 1e-4, "x={x}");
        }
    }

    #[test]
    fn all_curves_match_reference_closely() {
        for [x1, y1, x2, y2] in CURVES {
            let c = EasingCurve::new(x1, y1, x2, y2);
            for x in unit_steps(50) {
                let expected = reference(x1, y1, x2, y2, x);
                let got = c.sample(x);
                assert!((got - expected).abs() < 2e-5, "{c} at {x}: {got} vs {expected}");
            }
        }
    }

    #[test]
    fn monotonic_for_unit_square_controls() {
        for [x1, y1, x2, y2] in CURVES {
            if ![y1, y2].iter().all(|y| (0.0..=1.0).contains(y)) {
                continue;
            }
            let c = EasingCurve::new(x1, y1, x2, y2);
            let mut prev = c.sample(0.0);
            for x in unit_steps(100).skip(1) {
                let y = c.sample(x);
                assert!(y >= prev - 1e-12, "{c} decreased at {x}: {prev} -> {y}");
                prev = y;
            }
        }
    }

    #[test]
    fn overshooting_curve_leaves_unit_range() {
        let c = EasingCurve::new(0.68, -0.55, 0.265, 1.55);
        let ys: Vec<f64> = unit_steps(100).map(|x| c.sample(x)).collect();
        assert!(ys.iter().any(|&y| y < 0.0));
        assert!(ys.iter().any(|&y| y > 1.0));
    }

    #[test]
    fn equal_x_controls_stay_finite() {
        for px in [0.0, 0.3, 0.5, 1.0] {
            let c = EasingCurve::new(px, 0.2, px, 0.9);
            for x in unit_steps(20) {
                assert!(c.sample(x).is_finite(), "{c} at {x}");
            }
        }
    }

    #[test]
    fn vanishing_cubic_term_uses_quadratic() {
        // a = 3·x1 − 3·x2 + 1 = 0
        let c = EasingCurve::new(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        assert!(c.is_degenerate());
        for x in unit_steps(20) {
            assert!((c.sample(x) - x).abs() < 1e-9, "x={x}");
        }

        // x(t) = t², y(t) = t²
        let c = EasingCurve::new(0.0, 0.0, 1.0 / 3.0, 1.0 / 3.0);
        assert!(c.is_degenerate());
        for x in unit_steps(20) {
            assert!((c.sample(x) - x).abs() < 1e-9, "x={x}");
        }

        let c = EasingCurve::new(0.2, 0.9, 0.2 + 1.0 / 3.0, 0.1);
        assert!(c.is_degenerate());
        for x in unit_steps(20) {
            let expected = reference(0.2, 0.9, 0.2 + 1.0 / 3.0, 0.1, x);
            assert!((c.sample(x) - expected).abs() < 1e-6, "x={x}");
        }
    }

    #[test]
    fn nearly_vanishing_cubic_term_stays_accurate() {
        for a in [1e-6, -1e-6, 1e-4, -1e-3] {
            let (x1, y1, y2) = (0.1, 0.8, 0.3);
            let x2 = x1 + (1.0 - a) / 3.0;
            let c = EasingCurve::new(x1, y1, x2, y2);
            assert!(!c.is_degenerate());
            for x in unit_steps(40) {
                let expected = reference(x1, y1, x2, y2, x);
                let got = c.sample(x);
                assert!((got - expected).abs() < 1e-6, "a={a} x={x}: {got} vs {expected}");
            }
        }
    }

    #[test]
    fn tiny_progress_with_flat_start_stays_near_zero() {
        // x1 = 0 gives a double root of x(t) = 0 at t = 0.
        let c = EasingCurve::new(0.0, 0.0, 0.5, 1.0);
        for x in [1e-17, 0.1 + 0.2 - 0.3, 1e-12] {
            let y = c.sample(x);
            assert!((0.0..1e-6).contains(&y), "sample({x}) = {y}");
        }
    }

    #[test]
    fn tiny_progress_across_control_grid_stays_near_zero() {
        for i in 0..=100 {
            for j in 0..=100 {
                let (x1, x2) = (i as f64 / 100.0, j as f64 / 100.0);
                let c = EasingCurve::new(x1, 0.3, x2, 0.7);
                for x in [1e-17, 0.1 + 0.2 - 0.3, 1e-16] {
                    let y = c.sample(x);
                    assert!(y.abs() < 1e-4, "{c}: sample({x}) = {y}");
                }
            }
        }
    }

    #[test]
    fn flat_start_near_vanishing_cubic_term_matches_reference() {
        for a in [-1.01e-7, -1.1e-7, -1.25e-7] {
            let (x1, y1, y2) = (0.0, 0.8, 0.3);
            let x2 = x1 + (1.0 - a) / 3.0;
            let c = EasingCurve::new(x1, y1, x2, y2);
            assert!(!c.is_degenerate());
            for x in [0.0005, 0.001, 0.002] {
                let expected = reference(x1, y1, x2, y2, x);
                let got = c.sample(x);
                assert!((got - expected).abs() < 1e-6, "a={a} x={x}: {got} vs {expected}");
            }
        }
    }

    #[test]
    fn monotonic_from_tiny_progress() {
        let tiny = [1e-17, 1e-14, 1e-12, 1e-9, 1e-6, 1e-4, 1e-3];
        for x2 in [0.0, 0.2, 1.0 / 3.0, 0.34, 0.5, 0.8, 1.0] {
            for x1 in [0.0, 1e-3, 0.2] {
                let c = EasingCurve::new(x1, 0.0, x2, 1.0);
                let xs = tiny.iter().copied().chain(unit_steps(100).skip(1));
                let mut prev = c.sample(0.0);
                for x in xs {
                    let y = c.sample(x);
                    assert!(y >= prev - 1e-12, "{c} decreased at {x}: {prev} -> {y}");
                    prev = y;
                }
            }
        }
    }

    #[test]
    fn progress_outside_unit_range_is_clamped() {
        let c = EasingCurve::new(0.42, 0.0, 0.58, 1.0);
        assert_eq!(c.sample(-0.5), 0.0);
        assert_eq!(c.sample(f64::NEG_INFINITY), 0.0);
        assert_eq!(c.sample(1.5), 1.0);
        assert_eq!(c.sample(f64::INFINITY), 1.0);
        assert!(c.sample(f64::NAN).is_nan());
    }

    #[test]
    fn new_clamps_x_coordinates_only() {
        let c = EasingCurve::new(-0.5, -2.0, 1.5, 3.0);
        assert_eq!(c.p1(), (0.0, -2.0));
        assert_eq!(c.p2(), (1.0, 3.0));
        assert_eq!(c.control_points(), [0.0, -2.0, 1.0, 3.0]);
    }

    #[test]
    fn try_new_rejects_out_of_range_and_non_finite() {
        assert!(EasingCurve::try_new(0.25, -1.0, 0.75, 2.0).is_ok());
        assert_eq!(
            EasingCurve::try_new(1.2, 0.0, 0.5, 1.0),
            Err(CurveError::ControlPointOutOfRange { point: 1, value: 1.2 })
        );
        assert_eq!(
            EasingCurve::try_new(0.2, 0.0, -0.1, 1.0),
            Err(CurveError::ControlPointOutOfRange { point: 2, value: -0.1 })
        );
        assert_eq!(
            EasingCurve::try_new(0.2, f64::NAN, 0.5, 1.0),
            Err(CurveError::NonFinite { point: 1 })
        );
        assert_eq!(
            EasingCurve::try_new(0.2, 0.0, f64::INFINITY, 1.0),
            Err(CurveError::NonFinite { point: 2 })
        );
    }

    #[test]
    fn signed_cbrt_keeps_sign() {
        assert_eq!(signed_cbrt(8.0), 2.0);
        assert_eq!(signed_cbrt(-8.0), -2.0);
        assert_eq!(signed_cbrt(0.0), 0.0);
        assert!((signed_cbrt(-0.001) + 0.1).abs() < 1e-15);
    }

    #[test]
    fn point_at_hits_endpoints() {
        let c = EasingCurve::new(0.25, 0.1, 0.25, 1.0);
        assert_eq!(c.point_at(0.0), (0.0, 0.0));
        let (x, y) = c.point_at(1.0);
        assert!((x - 1.0).abs() < 1e-12 && (y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn display_uses_css_syntax() {
        let c = EasingCurve::new(0.42, 0.0, 0.58, 1.0);
        assert_eq!(c.to_string(), "cubic-bezier(0.42, 0, 0.58, 1)");
    }

    #[test]
    fn serializes_as_control_point_array() {
        let c = EasingCurve::new(0.42, 0.0, 0.58, 1.0);
        assert_eq!(serde_json::to_string(&c).unwrap(), "[0.42,0.0,0.58,1.0]");

        let back: EasingCurve = serde_json::from_str("[-1, 0, 2, 1]").unwrap();
        assert_eq!(back, EasingCurve::linear());
    }

    #[test]
    fn shared_across_threads() {
        let c = EasingCurve::new(0.25, 0.1, 0.25, 1.0);
        let expected: Vec<f64> = unit_steps(64).map(|x| c.sample(x)).collect();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    let got: Vec<f64> = unit_steps(64).map(|x| c.sample(x)).collect();
                    assert_eq!(got, expected);
                });
            }
        });
    }
}
