//! segue interpolates values over time through easing curves.
//!
//! Two pieces do the work:
//!
//! 1. **Ease sets**: an [`EaseSet`] bundles the `In`, `Out` and `InOut` members of a curve
//!    family. Only one of `In`/`Out` has to be written; the rest is derived by mirroring
//!    ([`reverse`]) and by stitching a mirrored and a shifted `Out` together ([`in_out`]). The
//!    [`curves`] module holds the built-in families (quad through bounce).
//! 2. **Tweens**: a [`Tween`] owns a start value, an end value and a duration. Every
//!    [`Tween::advance`] moves time forward, eases `elapsed / duration` and interpolates the
//!    value. Any type with `+`, `-` and `* f32` interpolates out of the box through [`Lerp`];
//!    other types pass their own function through [`TweenOpts::with_lerp`].
//!
//! ```
//! use segue::{Ease, EaseDir, EaseKind, Tween, TweenOpts};
//!
//! let opts = TweenOpts::default().curve(Ease::new(EaseKind::Quad, EaseDir::In));
//! let mut tween = Tween::with_opts(0.0f32, 10.0, 2.0, opts)?;
//! tween.advance(1.0);
//! assert_eq!(*tween.value(), 2.5);
//! tween.advance(1.0);
//! assert!(!tween.is_running());
//! # Ok::<(), segue::SegueError>(())
//! ```
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Synchronous**: no threads, timers or I/O in the core; the caller owns the clock.
//! - **Pure curves**: ease functions are stateless and built once per family.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;

/// Built-in ease families, each a lazily built, shared [`EaseSet`].
pub mod curves {
    pub use crate::animation::catalog::{
        BACK, BOUNCE, CIRC, CUBIC, ELASTIC, EXPO, LINEAR, QUAD, QUART, QUINT, SINE,
    };
}

pub use animation::catalog::{Ease, EaseDir, EaseKind};
pub use animation::ease::{EaseFn, EaseSet, ease_fn, in_out, linear, reverse};
pub use animation::lerp::{Lerp, LerpFn, lerp_fn};
pub use animation::spec::TweenSpec;
pub use animation::tween::{ListenerId, Tween, TweenOpts, TweenState};
pub use foundation::error::{SegueError, SegueResult};
