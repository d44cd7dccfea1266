//! **cubic-ease** — closed-form cubic Bézier easing.
//!
//! An easing curve maps normalised elapsed time `x ∈ [0, 1]` to animated
//! progress `y`, the same way CSS `cubic-bezier(x1, y1, x2, y2)` timing
//! functions do.  The endpoints are fixed at (0,0) and (1,1); only the two
//! interior control points are free.
//!
//! # Architecture
//!
//! * [`bezier::EasingCurve`] — the numeric core.  Built once from four
//!   numbers, then sampled in O(1) with Cardano's formula: no iteration,
//!   no allocation, no locking.  It is an immutable `Copy` value, so it can
//!   be shared across threads as is.
//! * [`timing`] — the CSS keywords (`ease`, `ease-in-out`, …) and the
//!   `cubic-bezier(...)` text form, with serde support.
//! * [`traits::Easing`] — abstracts "progress in, eased progress out" so
//!   animation code is not coupled to a specific curve type.
//! * [`config`] — JSON configuration for named curves, used by the
//!   `cubic-ease` binary.
//!
//! ```
//! use cubic_ease::timing::Preset;
//! use cubic_ease::traits::Easing;
//!
//! let curve = Preset::EaseInOut.curve();
//! let left = curve.interpolate(0.0, 300.0, 0.25);
//! assert!(left > 0.0 && left < 75.0);
//! ```

pub mod bezier;
pub mod config;
pub mod timing;
pub mod traits;
