//! Named ease families.
//!
//! Each family is written once as its simplest member and expanded through
//! [`EaseSet::from_in`] / [`EaseSet::from_out`]. The sets are built lazily on first use and
//! shared read-only afterwards.

use std::{
    f32::consts::{FRAC_PI_2, TAU},
    fmt,
    str::FromStr,
    sync::{Arc, LazyLock},
};

use crate::{
    animation::ease::{EaseFn, EaseSet, linear},
    foundation::error::{SegueError, SegueResult},
};

fn quad_in(p: f32) -> f32 {
    p.powi(2)
}

fn cubic_in(p: f32) -> f32 {
    p.powi(3)
}

fn quart_in(p: f32) -> f32 {
    p.powi(4)
}

fn quint_in(p: f32) -> f32 {
    p.powi(5)
}

fn sine_out(p: f32) -> f32 {
    (p * FRAC_PI_2).sin()
}

// Raw formula misses both endpoints by ~2^-10; pin them.
fn expo_out(p: f32) -> f32 {
    if p <= 0.0 {
        return 0.0;
    }
    if p >= 1.0 {
        return 1.0;
    }
    2f32.powf(10.0 * (p - 1.0))
}

fn circ_out(p: f32) -> f32 {
    (1.0 - (p - 1.0).powi(2)).sqrt()
}

fn back_in(p: f32) -> f32 {
    const S: f32 = 1.70158;
    p.powi(2) * ((S + 1.0) * p - S)
}

fn elastic_out(p: f32) -> f32 {
    if p <= 0.0 {
        return 0.0;
    }
    if p >= 1.0 {
        return 1.0;
    }
    1.0 + 2f32.powf(-10.0 * p) * ((p - 0.075) * TAU / 0.3).sin()
}

fn bounce_out(p: f32) -> f32 {
    const S: f32 = 7.5625;
    const D: f32 = 2.75;

    if p < 1.0 / D {
        return S * p.powi(2);
    }
    if p < 2.0 / D {
        let p = p - 1.5 / D;
        return S * p.powi(2) + 0.75;
    }
    if p < 2.5 / D {
        let p = p - 2.25 / D;
        return S * p.powi(2) + 0.9375;
    }
    let p = p - 2.625 / D;
    S * p.powi(2) + 0.984375
}

/// Quadratic family (`p^2`).
pub static QUAD: LazyLock<EaseSet> = LazyLock::new(|| EaseSet::from_in(Arc::new(quad_in), None));
/// Cubic family (`p^3`).
pub static CUBIC: LazyLock<EaseSet> =
    LazyLock::new(|| EaseSet::from_in(Arc::new(cubic_in), None));
/// Quartic family (`p^4`).
pub static QUART: LazyLock<EaseSet> =
    LazyLock::new(|| EaseSet::from_in(Arc::new(quart_in), None));
/// Quintic family (`p^5`).
pub static QUINT: LazyLock<EaseSet> =
    LazyLock::new(|| EaseSet::from_in(Arc::new(quint_in), None));
/// Sine family.
pub static SINE: LazyLock<EaseSet> =
    LazyLock::new(|| EaseSet::from_out(Arc::new(sine_out), None));
/// Exponential family.
pub static EXPO: LazyLock<EaseSet> =
    LazyLock::new(|| EaseSet::from_out(Arc::new(expo_out), None));
/// Circular family.
pub static CIRC: LazyLock<EaseSet> =
    LazyLock::new(|| EaseSet::from_out(Arc::new(circ_out), None));
/// Back family; overshoots below 0 on `In`.
pub static BACK: LazyLock<EaseSet> = LazyLock::new(|| EaseSet::from_in(Arc::new(back_in), None));
/// Elastic family; oscillates around 1 on `Out`.
pub static ELASTIC: LazyLock<EaseSet> =
    LazyLock::new(|| EaseSet::from_out(Arc::new(elastic_out), None));
/// Bounce family.
pub static BOUNCE: LazyLock<EaseSet> =
    LazyLock::new(|| EaseSet::from_out(Arc::new(bounce_out), None));
/// Identity in every direction.
pub static LINEAR: LazyLock<EaseSet> = LazyLock::new(|| {
    EaseSet::new(Arc::new(linear), Arc::new(linear), Some(Arc::new(linear)))
});

/// Ease family selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EaseKind {
    /// Identity.
    #[default]
    Linear,
    /// Quadratic.
    Quad,
    /// Cubic.
    Cubic,
    /// Quartic.
    Quart,
    /// Quintic.
    Quint,
    /// Sine.
    Sine,
    /// Exponential.
    Expo,
    /// Circular.
    Circ,
    /// Back (overshoot).
    Back,
    /// Elastic.
    Elastic,
    /// Bounce.
    Bounce,
}

impl EaseKind {
    /// Every family, in catalog order.
    pub const ALL: [EaseKind; 11] = [
        Self::Linear,
        Self::Quad,
        Self::Cubic,
        Self::Quart,
        Self::Quint,
        Self::Sine,
        Self::Expo,
        Self::Circ,
        Self::Back,
        Self::Elastic,
        Self::Bounce,
    ];

    /// Shared curve triple for this family.
    pub fn set(self) -> &'static EaseSet {
        match self {
            Self::Linear => &*LINEAR,
            Self::Quad => &*QUAD,
            Self::Cubic => &*CUBIC,
            Self::Quart => &*QUART,
            Self::Quint => &*QUINT,
            Self::Sine => &*SINE,
            Self::Expo => &*EXPO,
            Self::Circ => &*CIRC,
            Self::Back => &*BACK,
            Self::Elastic => &*ELASTIC,
            Self::Bounce => &*BOUNCE,
        }
    }

    /// Lowercase name used in configs and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Quad => "quad",
            Self::Cubic => "cubic",
            Self::Quart => "quart",
            Self::Quint => "quint",
            Self::Sine => "sine",
            Self::Expo => "expo",
            Self::Circ => "circ",
            Self::Back => "back",
            Self::Elastic => "elastic",
            Self::Bounce => "bounce",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

/// Member of a curve triple.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EaseDir {
    /// Accelerate from rest.
    #[default]
    In,
    /// Decelerate into rest.
    Out,
    /// Accelerate, then decelerate.
    InOut,
}

impl EaseDir {
    /// Suffix used in ease names (`"in"`, `"out"`, `"in-out"`).
    pub fn name(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "in-out",
        }
    }
}

/// Catalog curve reference: a family plus a direction.
///
/// Serialized as a single string such as `"quad-in-out"`, `"elastic-out"` or `"linear"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ease {
    /// Curve family.
    pub kind: EaseKind,
    /// Member of the family's triple.
    pub dir: EaseDir,
}

impl Ease {
    /// Identity curve.
    pub const LINEAR: Ease = Ease {
        kind: EaseKind::Linear,
        dir: EaseDir::In,
    };

    /// Build a selector for `kind` in direction `dir`.
    pub const fn new(kind: EaseKind, dir: EaseDir) -> Self {
        Self { kind, dir }
    }

    /// Shared curve triple of this family.
    pub fn set(self) -> &'static EaseSet {
        self.kind.set()
    }

    /// Selected curve as a standalone [`EaseFn`].
    pub fn curve(self) -> EaseFn {
        self.set().get(self.dir).clone()
    }

    /// Sample the selected curve.
    pub fn apply(self, p: f32) -> f32 {
        self.set().apply(self.dir, p)
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == EaseKind::Linear {
            return f.write_str(EaseKind::Linear.name());
        }
        write!(f, "{}-{}", self.kind.name(), self.dir.name())
    }
}

impl FromStr for Ease {
    type Err = SegueError;

    fn from_str(s: &str) -> SegueResult<Self> {
        let s = s.trim().to_ascii_lowercase();
        if s == EaseKind::Linear.name() {
            return Ok(Self::LINEAR);
        }

        // `-in-out` must be tried before `-out`.
        let (family, dir) = [EaseDir::InOut, EaseDir::Out, EaseDir::In]
            .into_iter()
            .find_map(|dir| {
                s.strip_suffix(dir.name())
                    .and_then(|rest| rest.strip_suffix('-'))
                    .map(|family| (family, dir))
            })
            .ok_or_else(|| {
                SegueError::ease(format!(
                    "unknown ease '{s}': expected '<family>-in', '<family>-out', \
                     '<family>-in-out' or 'linear'"
                ))
            })?;

        let kind = EaseKind::from_name(family)
            .ok_or_else(|| SegueError::ease(format!("unknown ease family '{family}'")))?;
        Ok(Self::new(kind, dir))
    }
}

impl TryFrom<String> for Ease {
    type Error = SegueError;

    fn try_from(s: String) -> SegueResult<Self> {
        s.parse()
    }
}

impl From<Ease> for String {
    fn from(ease: Ease) -> Self {
        ease.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/catalog.rs"]
mod tests;
