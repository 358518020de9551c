use std::f64::consts::PI;
use std::str::FromStr;

use crate::foundation::error::PenlineError;

/// Easing functions used to map normalized animation progress.
///
/// The formulas follow the classic Penner catalogue in the exact arithmetic form used by
/// Kivy's `AnimationTransition`, so numeric output matches that reference. Inputs are not
/// clamped here; callers clamp progress before easing. Elastic and back variants overshoot
/// `[0, 1]` mid-range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Linear interpolation.
    #[default]
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Quartic ease-in.
    InQuart,
    /// Quartic ease-out.
    OutQuart,
    /// Quartic ease-in/out.
    InOutQuart,
    /// Quintic ease-in.
    InQuint,
    /// Quintic ease-out.
    OutQuint,
    /// Quintic ease-in/out.
    InOutQuint,
    /// Sinusoidal ease-in.
    InSine,
    /// Sinusoidal ease-out.
    OutSine,
    /// Sinusoidal ease-in/out.
    InOutSine,
    /// Exponential ease-in.
    InExpo,
    /// Exponential ease-out.
    OutExpo,
    /// Exponential ease-in/out.
    InOutExpo,
    /// Circular ease-in.
    InCirc,
    /// Circular ease-out.
    OutCirc,
    /// Circular ease-in/out.
    InOutCirc,
    /// Elastic ease-in.
    InElastic,
    /// Elastic ease-out.
    OutElastic,
    /// Elastic ease-in/out.
    InOutElastic,
    /// Back ease-in (pulls back before moving forward).
    InBack,
    /// Back ease-out (overshoots then settles).
    OutBack,
    /// Back ease-in/out.
    InOutBack,
    /// Bounce ease-in.
    InBounce,
    /// Bounce ease-out.
    OutBounce,
    /// Bounce ease-in/out.
    InOutBounce,
}

const BACK_S: f64 = 1.70158;

impl Ease {
    /// Every easing function, in catalogue order.
    pub const ALL: [Ease; 31] = [
        Self::Linear,
        Self::InQuad,
        Self::OutQuad,
        Self::InOutQuad,
        Self::InCubic,
        Self::OutCubic,
        Self::InOutCubic,
        Self::InQuart,
        Self::OutQuart,
        Self::InOutQuart,
        Self::InQuint,
        Self::OutQuint,
        Self::InOutQuint,
        Self::InSine,
        Self::OutSine,
        Self::InOutSine,
        Self::InExpo,
        Self::OutExpo,
        Self::InOutExpo,
        Self::InCirc,
        Self::OutCirc,
        Self::InOutCirc,
        Self::InElastic,
        Self::OutElastic,
        Self::InOutElastic,
        Self::InBack,
        Self::OutBack,
        Self::InOutBack,
        Self::InBounce,
        Self::OutBounce,
        Self::InOutBounce,
    ];

    /// Stable snake_case name (`"in_out_quad"`), matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::InQuad => "in_quad",
            Self::OutQuad => "out_quad",
            Self::InOutQuad => "in_out_quad",
            Self::InCubic => "in_cubic",
            Self::OutCubic => "out_cubic",
            Self::InOutCubic => "in_out_cubic",
            Self::InQuart => "in_quart",
            Self::OutQuart => "out_quart",
            Self::InOutQuart => "in_out_quart",
            Self::InQuint => "in_quint",
            Self::OutQuint => "out_quint",
            Self::InOutQuint => "in_out_quint",
            Self::InSine => "in_sine",
            Self::OutSine => "out_sine",
            Self::InOutSine => "in_out_sine",
            Self::InExpo => "in_expo",
            Self::OutExpo => "out_expo",
            Self::InOutExpo => "in_out_expo",
            Self::InCirc => "in_circ",
            Self::OutCirc => "out_circ",
            Self::InOutCirc => "in_out_circ",
            Self::InElastic => "in_elastic",
            Self::OutElastic => "out_elastic",
            Self::InOutElastic => "in_out_elastic",
            Self::InBack => "in_back",
            Self::OutBack => "out_back",
            Self::InOutBack => "in_out_back",
            Self::InBounce => "in_bounce",
            Self::OutBounce => "out_bounce",
            Self::InOutBounce => "in_out_bounce",
        }
    }

    /// Apply this easing function to normalized progress `p`.
    pub fn apply(self, p: f64) -> f64 {
        match self {
            Self::Linear => p,
            Self::InQuad => p * p,
            Self::OutQuad => -1.0 * p * (p - 2.0),
            Self::InOutQuad => {
                let p = p * 2.0;
                if p < 1.0 {
                    return 0.5 * p * p;
                }
                let p = p - 1.0;
                -0.5 * (p * (p - 2.0) - 1.0)
            }
            Self::InCubic => p * p * p,
            Self::OutCubic => {
                let p = p - 1.0;
                p * p * p + 1.0
            }
            Self::InOutCubic => {
                let p = p * 2.0;
                if p < 1.0 {
                    return 0.5 * p * p * p;
                }
                let p = p - 2.0;
                0.5 * (p * p * p + 2.0)
            }
            Self::InQuart => p * p * p * p,
            Self::OutQuart => {
                let p = p - 1.0;
                -1.0 * (p * p * p * p - 1.0)
            }
            Self::InOutQuart => {
                let p = p * 2.0;
                if p < 1.0 {
                    return 0.5 * p * p * p * p;
                }
                let p = p - 2.0;
                -0.5 * (p * p * p * p - 2.0)
            }
            Self::InQuint => p * p * p * p * p,
            Self::OutQuint => {
                let p = p - 1.0;
                p * p * p * p * p + 1.0
            }
            Self::InOutQuint => {
                let p = p * 2.0;
                if p < 1.0 {
                    return 0.5 * p * p * p * p * p;
                }
                let p = p - 2.0;
                0.5 * (p * p * p * p * p + 2.0)
            }
            Self::InSine => -1.0 * (p * (PI / 2.0)).cos() + 1.0,
            Self::OutSine => (p * (PI / 2.0)).sin(),
            Self::InOutSine => -0.5 * ((PI * p).cos() - 1.0),
            Self::InExpo => {
                if p == 0.0 {
                    return 0.0;
                }
                2f64.powf(10.0 * (p - 1.0))
            }
            Self::OutExpo => {
                if p == 1.0 {
                    return 1.0;
                }
                -(2f64.powf(-10.0 * p)) + 1.0
            }
            Self::InOutExpo => {
                if p == 0.0 {
                    return 0.0;
                }
                if p == 1.0 {
                    return 1.0;
                }
                let p = p * 2.0;
                if p < 1.0 {
                    return 0.5 * 2f64.powf(10.0 * (p - 1.0));
                }
                let p = p - 1.0;
                0.5 * (-(2f64.powf(-10.0 * p)) + 2.0)
            }
            Self::InCirc => -1.0 * ((1.0 - p * p).sqrt() - 1.0),
            Self::OutCirc => {
                let p = p - 1.0;
                (1.0 - p * p).sqrt()
            }
            Self::InOutCirc => {
                let p = p * 2.0;
                if p < 1.0 {
                    return -0.5 * ((1.0 - p * p).sqrt() - 1.0);
                }
                let p = p - 2.0;
                0.5 * ((1.0 - p * p).sqrt() + 1.0)
            }
            Self::InElastic => {
                let period = 0.3;
                let s = period / 4.0;
                if p == 1.0 {
                    return 1.0;
                }
                let q = p - 1.0;
                -(2f64.powf(10.0 * q) * ((q - s) * (2.0 * PI) / period).sin())
            }
            Self::OutElastic => {
                let period = 0.3;
                let s = period / 4.0;
                if p == 1.0 {
                    return 1.0;
                }
                2f64.powf(-10.0 * p) * ((p - s) * (2.0 * PI) / period).sin() + 1.0
            }
            Self::InOutElastic => {
                let period = 0.3 * 1.5;
                let s = period / 4.0;
                let q = p * 2.0;
                if q == 2.0 {
                    return 1.0;
                }
                let q = q - 1.0;
                if q < 0.0 {
                    -0.5 * (2f64.powf(10.0 * q) * ((q - s) * (2.0 * PI) / period).sin())
                } else {
                    2f64.powf(-10.0 * q) * ((q - s) * (2.0 * PI) / period).sin() * 0.5 + 1.0
                }
            }
            Self::InBack => p * p * ((BACK_S + 1.0) * p - BACK_S),
            Self::OutBack => {
                let p = p - 1.0;
                p * p * ((BACK_S + 1.0) * p + BACK_S) + 1.0
            }
            Self::InOutBack => {
                let p = p * 2.0;
                let s = BACK_S * 1.525;
                if p < 1.0 {
                    return 0.5 * (p * p * ((s + 1.0) * p - s));
                }
                let p = p - 2.0;
                0.5 * (p * p * ((s + 1.0) * p + s) + 2.0)
            }
            Self::InBounce => in_bounce_internal(p, 1.0),
            Self::OutBounce => out_bounce_internal(p, 1.0),
            Self::InOutBounce => {
                let p = p * 2.0;
                if p < 1.0 {
                    return in_bounce_internal(p, 1.0) * 0.5;
                }
                out_bounce_internal(p - 1.0, 1.0) * 0.5 + 0.5
            }
        }
    }
}

fn out_bounce_internal(t: f64, d: f64) -> f64 {
    let p = t / d;
    if p < 1.0 / 2.75 {
        7.5625 * p * p
    } else if p < 2.0 / 2.75 {
        let p = p - 1.5 / 2.75;
        7.5625 * p * p + 0.75
    } else if p < 2.5 / 2.75 {
        let p = p - 2.25 / 2.75;
        7.5625 * p * p + 0.9375
    } else {
        let p = p - 2.625 / 2.75;
        7.5625 * p * p + 0.984375
    }
}

fn in_bounce_internal(t: f64, d: f64) -> f64 {
    1.0 - out_bounce_internal(d - t, d)
}

impl FromStr for Ease {
    type Err = PenlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|e| e.name() == wanted)
            .ok_or_else(|| PenlineError::validation(format!("unknown easing function \"{s}\"")))
    }
}

impl std::fmt::Display for Ease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
