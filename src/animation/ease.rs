use std::{fmt, sync::Arc};

use crate::{
    animation::catalog::EaseDir,
    foundation::error::{SegueError, SegueResult},
};

/// Shared ease curve mapping normalized progress to eased progress.
///
/// Curves take `p` in `[0, 1]` and do not clamp. Overshooting curves (back, elastic) may return
/// values outside `[0, 1]`.
pub type EaseFn = Arc<dyn Fn(f32) -> f32 + Send + Sync>;

/// Wrap a plain function or closure as an [`EaseFn`].
pub fn ease_fn(f: impl Fn(f32) -> f32 + Send + Sync + 'static) -> EaseFn {
    Arc::new(f)
}

/// Identity curve.
pub fn linear(p: f32) -> f32 {
    p
}

/// Mirror a curve: turns an `Out` into an `In` and vice versa.
///
/// `reverse(p, f) = 1 - f(1 - p)`
pub fn reverse<F>(p: f32, f: F) -> f32
where
    F: Fn(f32) -> f32,
{
    1.0 - f(1.0 - p)
}

/// Build an `InOut` sample from an `Out` curve.
///
/// The first half is the mirrored `Out` squeezed into `[0, 0.5]`, the second half is `Out`
/// shifted into `[0.5, 1]`. Both halves meet at `0.5` when `out(0) == 0`.
pub fn in_out<F>(p: f32, out: F) -> f32
where
    F: Fn(f32) -> f32,
{
    if p < 0.5 {
        return reverse(p * 2.0, out) / 2.0;
    }
    out(p * 2.0 - 1.0) / 2.0 + 0.5
}

fn reversed(f: EaseFn) -> EaseFn {
    Arc::new(move |p| reverse(p, &*f))
}

fn mirrored(out: EaseFn) -> EaseFn {
    Arc::new(move |p| in_out(p, &*out))
}

/// A complete `{In, Out, InOut}` curve triple.
///
/// Only one of `In`/`Out` has to be written by hand; the missing members are derived with
/// [`reverse`] and [`in_out`]. `InOut` is always derived from `Out` unless overridden.
#[derive(Clone)]
pub struct EaseSet {
    ease_in: EaseFn,
    ease_out: EaseFn,
    ease_in_out: EaseFn,
}

impl EaseSet {
    /// Build a set from an `In` curve and an optional `InOut` override.
    pub fn from_in(ease_in: EaseFn, ease_in_out: Option<EaseFn>) -> Self {
        let ease_out = reversed(ease_in.clone());
        let ease_in_out = ease_in_out.unwrap_or_else(|| mirrored(ease_out.clone()));
        Self {
            ease_in,
            ease_out,
            ease_in_out,
        }
    }

    /// Build a set from an `Out` curve and an optional `InOut` override.
    pub fn from_out(ease_out: EaseFn, ease_in_out: Option<EaseFn>) -> Self {
        let ease_in = reversed(ease_out.clone());
        let ease_in_out = ease_in_out.unwrap_or_else(|| mirrored(ease_out.clone()));
        Self {
            ease_in,
            ease_out,
            ease_in_out,
        }
    }

    /// Build a set from explicit `In` and `Out` curves and an optional `InOut` override.
    pub fn new(ease_in: EaseFn, ease_out: EaseFn, ease_in_out: Option<EaseFn>) -> Self {
        let ease_in_out = ease_in_out.unwrap_or_else(|| mirrored(ease_out.clone()));
        Self {
            ease_in,
            ease_out,
            ease_in_out,
        }
    }

    /// Build a set from whichever members are available.
    ///
    /// Fails when neither `In` nor `Out` is supplied: an `InOut` alone cannot be split back
    /// into its halves.
    pub fn from_parts(
        ease_in: Option<EaseFn>,
        ease_out: Option<EaseFn>,
        ease_in_out: Option<EaseFn>,
    ) -> SegueResult<Self> {
        match (ease_in, ease_out) {
            (Some(i), Some(o)) => Ok(Self::new(i, o, ease_in_out)),
            (Some(i), None) => Ok(Self::from_in(i, ease_in_out)),
            (None, Some(o)) => Ok(Self::from_out(o, ease_in_out)),
            (None, None) => Err(SegueError::ease(
                "ease set needs an In or an Out curve to derive the rest",
            )),
        }
    }

    /// Sample the `In` curve.
    pub fn ease_in(&self, p: f32) -> f32 {
        (self.ease_in)(p)
    }

    /// Sample the `Out` curve.
    pub fn ease_out(&self, p: f32) -> f32 {
        (self.ease_out)(p)
    }

    /// Sample the `InOut` curve.
    pub fn ease_in_out(&self, p: f32) -> f32 {
        (self.ease_in_out)(p)
    }

    /// Sample the member selected by `dir`.
    pub fn apply(&self, dir: EaseDir, p: f32) -> f32 {
        (self.get(dir))(p)
    }

    /// Borrow the member selected by `dir`.
    pub fn get(&self, dir: EaseDir) -> &EaseFn {
        match dir {
            EaseDir::In => &self.ease_in,
            EaseDir::Out => &self.ease_out,
            EaseDir::InOut => &self.ease_in_out,
        }
    }
}

impl fmt::Debug for EaseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EaseSet")
            .field("in(0.5)", &self.ease_in(0.5))
            .field("out(0.5)", &self.ease_out(0.5))
            .field("in_out(0.5)", &self.ease_in_out(0.5))
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
