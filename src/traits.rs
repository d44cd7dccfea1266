//! The trait that decouples consumers of easing from any specific curve.
//!
//! An animation only needs to map normalised progress to eased progress.
//! [`EasingCurve`], the CSS [`Preset`]s and plain closures all implement
//! [`Easing`], so code that drives an animation can take `impl Easing` and
//! stay independent of how the mapping is computed.

use crate::bezier::EasingCurve;
use crate::timing::Preset;

/// Maps normalised progress in `[0, 1]` to eased progress.
///
/// # Contract
///
/// * `ease(0.0)` is `0.0` and `ease(1.0)` is `1.0`.
/// * `ease` is pure: the same input always gives the same output, and it
///   can be called from any thread the implementor can be shared with.
pub trait Easing {
    /// Eased progress for normalised `progress`.
    fn ease(&self, progress: f64) -> f64;

    /// Interpolate between `from` and `to` at eased `progress`.
    fn interpolate(&self, from: f64, to: f64, progress: f64) -> f64 {
        from + (to - from) * self.ease(progress)
    }
}

impl Easing for EasingCurve {
    #[inline]
    fn ease(&self, progress: f64) -> f64 {
        self.sample(progress)
    }
}

/// Builds the preset's curve on every call.  Hold an [`EasingCurve`] instead
/// when sampling every frame.
impl Easing for Preset {
    fn ease(&self, progress: f64) -> f64 {
        self.curve().sample(progress)
    }
}

impl<F> Easing for F
where
    F: Fn(f64) -> f64,
{
    fn ease(&self, progress: f64) -> f64 {
        self(progress)
    }
}
