use std::collections::{BTreeMap, BTreeSet};
use std::ops::{Add, BitAnd};

use crate::animation::ease::Ease;
use crate::animation::value::AnimValue;
use crate::foundation::error::{PenlineError, PenlineResult};
use crate::timeline::keys::PropKey;

/// Anything that exposes animatable properties by key.
pub trait PropertyTarget {
    fn property(&self, key: &PropKey) -> Option<&AnimValue>;
    fn set_property(&mut self, key: PropKey, value: AnimValue);
}

/// One property-interpolation task: target values, a duration and an easing function.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimUnit {
    duration: f64,
    ease: Ease,
    targets: BTreeMap<PropKey, AnimValue>,
}

impl AnimUnit {
    /// Build a unit. A zero duration is allowed and completes instantly.
    pub fn new(
        duration: f64,
        ease: Ease,
        targets: impl IntoIterator<Item = (PropKey, AnimValue)>,
    ) -> PenlineResult<Self> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(PenlineError::animation(format!(
                "duration must be finite and non-negative, got {duration}"
            )));
        }
        Ok(Self {
            duration,
            ease,
            targets: targets.into_iter().collect(),
        })
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }

    pub fn targets(&self) -> &BTreeMap<PropKey, AnimValue> {
        &self.targets
    }

    /// Local progress after `elapsed` seconds, clamped to `[0, 1]`.
    pub fn progress(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Value between `start` and `end` at clamped progress `raw`.
    ///
    /// Completion returns `end` exactly instead of relying on the easing curve to land on 1.
    pub fn sample(&self, start: &AnimValue, end: &AnimValue, raw: f64) -> AnimValue {
        if raw >= 1.0 {
            return end.clone();
        }
        AnimValue::interpolate(start, end, self.ease.apply(raw.max(0.0)))
    }

    /// Snapshot the current value of every targeted property as interpolation start points.
    pub fn initialize(
        &self,
        target: &dyn PropertyTarget,
    ) -> PenlineResult<BTreeMap<PropKey, AnimValue>> {
        self.targets
            .keys()
            .map(|k| {
                target
                    .property(k)
                    .cloned()
                    .map(|v| (k.clone(), v))
                    .ok_or_else(|| {
                        PenlineError::animation(format!("target has no property \"{k}\""))
                    })
            })
            .collect()
    }

    /// Write the interpolated value of every property present in `starts`.
    pub fn apply(
        &self,
        starts: &BTreeMap<PropKey, AnimValue>,
        raw: f64,
        target: &mut dyn PropertyTarget,
    ) {
        for (k, start) in starts {
            if let Some(end) = self.targets.get(k) {
                target.set_property(k.clone(), self.sample(start, end, raw));
            }
        }
    }
}

/// A unit or a composition of two subtrees.
#[derive(Clone, Debug, PartialEq)]
pub enum AnimTree {
    Leaf(AnimUnit),
    /// Right side starts when the left side completes.
    Sequence(Box<AnimTree>, Box<AnimTree>),
    /// Both sides start together; the shorter one holds its final value.
    Parallel(Box<AnimTree>, Box<AnimTree>),
}

impl AnimTree {
    pub fn sequence(a: impl Into<AnimTree>, b: impl Into<AnimTree>) -> Self {
        Self::Sequence(Box::new(a.into()), Box::new(b.into()))
    }

    pub fn parallel(a: impl Into<AnimTree>, b: impl Into<AnimTree>) -> Self {
        Self::Parallel(Box::new(a.into()), Box::new(b.into()))
    }

    /// Left-associative sequence of every item; `None` for an empty input.
    pub fn sequence_all<I, T>(items: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<AnimTree>,
    {
        items
            .into_iter()
            .map(Into::<AnimTree>::into)
            .reduce(|acc, next| Self::sequence(acc, next))
    }

    /// Left-associative parallel of every item; `None` for an empty input.
    pub fn parallel_all<I, T>(items: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<AnimTree>,
    {
        items
            .into_iter()
            .map(Into::<AnimTree>::into)
            .reduce(|acc, next| Self::parallel(acc, next))
    }

    /// Duration derived from the children on every call.
    pub fn duration(&self) -> f64 {
        match self {
            Self::Leaf(u) => u.duration(),
            Self::Sequence(a, b) => a.duration() + b.duration(),
            Self::Parallel(a, b) => a.duration().max(b.duration()),
        }
    }

    /// Union of every property the tree animates.
    pub fn animated_properties(&self) -> BTreeSet<PropKey> {
        let mut out = BTreeSet::new();
        self.collect_properties(&mut out);
        out
    }

    fn collect_properties(&self, out: &mut BTreeSet<PropKey>) {
        match self {
            Self::Leaf(u) => out.extend(u.targets().keys().cloned()),
            Self::Sequence(a, b) | Self::Parallel(a, b) => {
                a.collect_properties(out);
                b.collect_properties(out);
            }
        }
    }

    /// Leaf units in depth-first, left-to-right order.
    pub fn leaves(&self) -> Vec<&AnimUnit> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Self::Leaf(u) => out.push(u),
                Self::Sequence(a, b) | Self::Parallel(a, b) => {
                    stack.push(b);
                    stack.push(a);
                }
            }
        }
        out
    }
}

impl From<AnimUnit> for AnimTree {
    fn from(u: AnimUnit) -> Self {
        Self::Leaf(u)
    }
}

impl<T: Into<AnimTree>> Add<T> for AnimTree {
    type Output = AnimTree;

    fn add(self, rhs: T) -> AnimTree {
        AnimTree::sequence(self, rhs)
    }
}

impl<T: Into<AnimTree>> BitAnd<T> for AnimTree {
    type Output = AnimTree;

    fn bitand(self, rhs: T) -> AnimTree {
        AnimTree::parallel(self, rhs)
    }
}

impl<T: Into<AnimTree>> Add<T> for AnimUnit {
    type Output = AnimTree;

    fn add(self, rhs: T) -> AnimTree {
        AnimTree::sequence(self, rhs)
    }
}

impl<T: Into<AnimTree>> BitAnd<T> for AnimUnit {
    type Output = AnimTree;

    fn bitand(self, rhs: T) -> AnimTree {
        AnimTree::parallel(self, rhs)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/unit.rs"]
mod tests;
