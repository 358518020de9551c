use std::collections::BTreeMap;

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// A value an animation can drive: a scalar, an ordered numeric sequence, or a mapping.
///
/// `List` and `Tuple` are both ordered sequences; they are kept apart so interpolation
/// returns the same concrete shape it was given.
#[derive(Clone, Debug, PartialEq)]
pub enum AnimValue {
    Scalar(f64),
    List(Vec<AnimValue>),
    Tuple(Vec<AnimValue>),
    Map(BTreeMap<String, AnimValue>),
}

pub(crate) static ZERO: AnimValue = AnimValue::Scalar(0.0);

impl AnimValue {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    /// Interpolate `start -> end` at eased progress `t`.
    ///
    /// Sequences interpolate element-wise over `start`'s length; mappings interpolate over
    /// `start`'s keys. Missing `end` entries count as zero. Values of different kinds hold
    /// `start` until `t >= 1` and then jump to `end`.
    pub fn interpolate(start: &AnimValue, end: &AnimValue, t: f64) -> AnimValue {
        match (start, end) {
            (Self::Scalar(a), Self::Scalar(b)) => Self::Scalar(<f64 as Lerp>::lerp(a, b, t)),
            (Self::List(a), Self::List(b) | Self::Tuple(b)) => Self::List(lerp_seq(a, b, t)),
            (Self::Tuple(a), Self::List(b) | Self::Tuple(b)) => Self::Tuple(lerp_seq(a, b, t)),
            (Self::Map(a), Self::Map(b)) => Self::Map(
                a.iter()
                    .map(|(k, av)| {
                        let bv = b.get(k).unwrap_or(&ZERO);
                        (k.clone(), Self::interpolate(av, bv, t))
                    })
                    .collect(),
            ),
            _ => {
                if t >= 1.0 {
                    end.clone()
                } else {
                    start.clone()
                }
            }
        }
    }
}

fn lerp_seq(a: &[AnimValue], b: &[AnimValue], t: f64) -> Vec<AnimValue> {
    a.iter()
        .enumerate()
        .map(|(i, av)| AnimValue::interpolate(av, b.get(i).unwrap_or(&ZERO), t))
        .collect()
}

impl Lerp for AnimValue {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self::interpolate(a, b, t)
    }
}

impl From<f64> for AnimValue {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<kurbo::Point> for AnimValue {
    fn from(p: kurbo::Point) -> Self {
        Self::Tuple(vec![Self::Scalar(p.x), Self::Scalar(p.y)])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/value.rs"]
mod tests;
