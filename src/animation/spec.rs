use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;
use serde::de::DeserializeOwned;

use crate::{
    animation::{
        catalog::Ease,
        lerp::Lerp,
        tween::{Tween, TweenOpts},
    },
    foundation::error::{SegueError, SegueResult},
};

/// Serializable description of a tween.
///
/// ```json
/// { "from": 0.0, "to": 10.0, "duration": 2.0, "ease": "elastic-out" }
/// ```
///
/// `ease` defaults to linear when omitted.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TweenSpec<T> {
    /// Start value.
    pub from: T,
    /// End value.
    pub to: T,
    /// Duration in seconds (`> 0`).
    pub duration: f64,
    /// Catalog curve.
    #[serde(default)]
    pub ease: Ease,
}

impl<T: DeserializeOwned> TweenSpec<T> {
    /// Parse a spec from a JSON string.
    pub fn from_json(s: &str) -> SegueResult<Self> {
        serde_json::from_str(s).map_err(|e| SegueError::serde(format!("parse tween spec: {e}")))
    }

    /// Parse a spec from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SegueResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SegueError::serde(format!("parse tween spec: {e}")))
    }

    /// Parse a spec from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SegueResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open tween spec '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }
}

impl<T: Lerp + 'static> TweenSpec<T> {
    /// Build a running tween from this spec.
    pub fn build(&self) -> SegueResult<Tween<T>> {
        Tween::with_opts(
            self.from.clone(),
            self.to.clone(),
            self.duration,
            TweenOpts::default().curve(self.ease),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spec.rs"]
mod tests;
