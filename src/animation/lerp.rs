use std::{
    ops::{Add, Mul, Sub},
    sync::Arc,
};

/// Interpolation contract for tweened value types.
///
/// Implemented for every type with `+`, `-` and scaling by an `f32` progress factor: `f32`,
/// caller vector and color types, and so on. Types without those operators (including `f64`,
/// which has no `Mul<f32>`) supply a [`LerpFn`] instead.
pub trait Lerp: Clone {
    /// Interpolate from `start` to `end` with eased factor `t` (usually in `[0, 1]`).
    fn lerp(start: &Self, end: &Self, t: f32) -> Self;
}

impl<T> Lerp for T
where
    T: Clone + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    fn lerp(start: &Self, end: &Self, t: f32) -> Self {
        start.clone() + (end.clone() - start.clone()) * t
    }
}

/// Shared interpolation function `(start, end, t) -> value`.
pub type LerpFn<T> = Arc<dyn Fn(&T, &T, f32) -> T + Send + Sync>;

/// [`Lerp`] as a [`LerpFn`].
pub fn lerp_fn<T: Lerp + 'static>() -> LerpFn<T> {
    Arc::new(|start: &T, end: &T, t| T::lerp(start, end, t))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/lerp.rs"]
mod tests;
