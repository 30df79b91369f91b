pub(crate) mod catalog;
pub(crate) mod ease;
pub(crate) mod lerp;
pub(crate) mod spec;
pub(crate) mod tween;
