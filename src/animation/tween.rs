use std::{fmt, sync::Arc};

use smallvec::SmallVec;

use crate::{
    animation::{
        catalog::Ease,
        ease::{EaseFn, linear},
        lerp::{Lerp, LerpFn, lerp_fn},
    },
    foundation::error::{SegueError, SegueResult},
};

/// Optional overrides applied when constructing a [`Tween`].
pub struct TweenOpts<T> {
    /// Curve mapping linear progress to eased progress. Defaults to linear.
    pub ease: EaseFn,
    /// Interpolation between start and end. Defaults to [`Lerp`] arithmetic.
    pub lerp: LerpFn<T>,
}

impl<T: Lerp + 'static> Default for TweenOpts<T> {
    fn default() -> Self {
        Self {
            ease: Arc::new(linear),
            lerp: lerp_fn(),
        }
    }
}

impl<T> TweenOpts<T> {
    /// Options with a caller-provided interpolation and a linear curve.
    ///
    /// This is the entry point for value types that do not implement [`Lerp`].
    pub fn with_lerp(lerp: impl Fn(&T, &T, f32) -> T + Send + Sync + 'static) -> Self {
        Self {
            ease: Arc::new(linear),
            lerp: Arc::new(lerp),
        }
    }

    /// Replace the curve.
    pub fn ease(mut self, ease: EaseFn) -> Self {
        self.ease = ease;
        self
    }

    /// Replace the curve with a catalog entry.
    pub fn curve(self, ease: Ease) -> Self {
        self.ease(ease.curve())
    }
}

impl<T> Clone for TweenOpts<T> {
    fn clone(&self) -> Self {
        Self {
            ease: self.ease.clone(),
            lerp: self.lerp.clone(),
        }
    }
}

impl<T> fmt::Debug for TweenOpts<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TweenOpts").finish_non_exhaustive()
    }
}

/// Run state of a [`Tween`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TweenState {
    /// `advance` moves time forward.
    #[default]
    Running,
    /// `advance` is a no-op.
    Stopped,
}

/// Handle returned by [`Tween::on_complete`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<T> = Box<dyn FnMut(&T) + Send>;

/// Time-driven interpolation between two values.
///
/// The tween starts running on construction. Each [`Tween::advance`] adds a time step,
/// eases `elapsed / duration` through the configured curve and interpolates the value. When
/// elapsed time reaches the duration the value is pinned to the curve's end, the tween stops
/// and completion listeners fire once.
///
/// A tween is owned and driven by a single caller; it performs no locking.
pub struct Tween<T> {
    start: T,
    end: T,
    value: T,
    elapsed: f64,
    duration: f64,
    ease: EaseFn,
    lerp: LerpFn<T>,
    state: TweenState,
    listeners: SmallVec<[(ListenerId, Listener<T>); 2]>,
    next_listener: u64,
}

impl<T: Lerp + 'static> Tween<T> {
    /// Linear tween from `start` to `end` over `duration` seconds.
    pub fn new(start: T, end: T, duration: f64) -> SegueResult<Self> {
        Self::with_opts(start, end, duration, TweenOpts::default())
    }
}

impl<T: Clone> Tween<T> {
    /// Tween from `start` to `end` over `duration` seconds with explicit options.
    ///
    /// `duration` must be finite and strictly positive.
    pub fn with_opts(start: T, end: T, duration: f64, opts: TweenOpts<T>) -> SegueResult<Self> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(SegueError::validation(format!(
                "tween duration must be a positive number of seconds, got {duration}"
            )));
        }
        tracing::debug!(duration, "tween created");

        Ok(Self {
            value: start.clone(),
            start,
            end,
            elapsed: 0.0,
            duration,
            ease: opts.ease,
            lerp: opts.lerp,
            state: TweenState::Running,
            listeners: SmallVec::new(),
            next_listener: 0,
        })
    }

    /// Move time forward by `dt` seconds.
    ///
    /// Does nothing while stopped. Negative or non-finite steps are ignored. Returns `true`
    /// only on the call that completes the tween.
    pub fn advance(&mut self, dt: f64) -> bool {
        if self.state == TweenState::Stopped {
            return false;
        }
        if !dt.is_finite() || dt < 0.0 {
            tracing::warn!(dt, "ignoring invalid tween time step");
            return false;
        }

        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.value = self.sample(1.0);
            self.state = TweenState::Stopped;
            tracing::debug!(
                duration = self.duration,
                listeners = self.listeners.len(),
                "tween completed"
            );
            for (_, listener) in self.listeners.iter_mut() {
                listener(&self.value);
            }
            return true;
        }

        let t = (self.elapsed / self.duration) as f32;
        self.value = self.sample(t);
        tracing::trace!(elapsed = self.elapsed, t, "tween advanced");
        false
    }

    fn sample(&self, t: f32) -> T {
        (self.lerp)(&self.start, &self.end, (self.ease)(t))
    }

    /// Resume advancing. Idempotent.
    pub fn start(&mut self) {
        self.state = TweenState::Running;
    }

    /// Pause advancing. Idempotent; never fires completion listeners.
    pub fn stop(&mut self) {
        self.state = TweenState::Stopped;
    }

    /// Rewind to the start value. The run state is left as is.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.value = self.start.clone();
    }

    /// Retarget toward `end`, starting from the current value.
    pub fn reset_to(&mut self, end: T) {
        self.elapsed = 0.0;
        self.start = self.value.clone();
        self.end = end;
    }

    /// Swap start and end and rewind. Curve and run state are left as is.
    pub fn reverse(&mut self) {
        self.elapsed = 0.0;
        std::mem::swap(&mut self.start, &mut self.end);
    }

    /// Register a completion listener.
    ///
    /// Listeners receive the final value and run synchronously inside the [`Tween::advance`]
    /// call that completes the tween, in registration order. [`Tween::stop`] never triggers
    /// them.
    pub fn on_complete(&mut self, listener: impl FnMut(&T) + Send + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a completion listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        match self.listeners.iter().position(|(l, _)| *l == id) {
            Some(idx) => {
                self.listeners.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Current interpolated value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Whether `advance` currently moves time forward.
    pub fn is_running(&self) -> bool {
        self.state == TweenState::Running
    }

    /// Current run state.
    pub fn state(&self) -> TweenState {
        self.state
    }

    /// Whether elapsed time has reached the duration.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Seconds advanced since construction or the last rewind.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Total duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Linear progress `elapsed / duration` in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.elapsed / self.duration
    }

    /// Value the tween moves away from.
    pub fn start_value(&self) -> &T {
        &self.start
    }

    /// Value the tween moves toward.
    pub fn end_value(&self) -> &T {
        &self.end
    }
}

impl<T: fmt::Debug> fmt::Debug for Tween<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("value", &self.value)
            .field("elapsed", &self.elapsed)
            .field("duration", &self.duration)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl<T: fmt::Debug> fmt::Display for Tween<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tween {:?} -> {:?} in {}s (elapsed {:.2}s)",
            self.start, self.end, self.duration, self.elapsed
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
