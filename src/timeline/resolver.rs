use std::collections::BTreeMap;
use std::str::FromStr;

use crate::animation::unit::AnimUnit;
use crate::animation::value::{AnimValue, ZERO};
use crate::foundation::error::PenlineError;
use crate::timeline::holder::PropertyHolder;
use crate::timeline::keys::PropKey;

/// How the units of an animation list are combined over time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CompositionMode {
    /// Each unit starts when the previous one completes.
    #[default]
    #[serde(rename = "seq", alias = "sequential")]
    Sequential,
    /// Every unit starts at time zero.
    #[serde(rename = "par", alias = "parallel")]
    Parallel,
}

impl FromStr for CompositionMode {
    type Err = PenlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seq" | "sequential" => Ok(Self::Sequential),
            "par" | "parallel" => Ok(Self::Parallel),
            _ => Err(PenlineError::validation(format!(
                "unknown composition mode \"{s}\" (expected seq or par)"
            ))),
        }
    }
}

/// Sum (sequential) or max (parallel) of unit durations; zero for an empty list.
pub fn total_duration(units: &[AnimUnit], mode: CompositionMode) -> f64 {
    match mode {
        CompositionMode::Sequential => units.iter().map(AnimUnit::duration).sum(),
        CompositionMode::Parallel => units.iter().map(AnimUnit::duration).fold(0.0, f64::max),
    }
}

/// An animation list bound to the property values it starts from.
#[derive(Clone, Debug)]
pub struct Timeline {
    units: Vec<AnimUnit>,
    mode: CompositionMode,
    initial: BTreeMap<PropKey, AnimValue>,
    duration: f64,
}

impl Timeline {
    /// Capture the pre-animation value of every animated property from `holder`.
    pub fn new(units: Vec<AnimUnit>, mode: CompositionMode, holder: &PropertyHolder) -> Self {
        let initial = holder.snapshot(units.iter().flat_map(|u| u.targets().keys()));
        let duration = total_duration(&units, mode);
        Self {
            units,
            mode,
            initial,
            duration,
        }
    }

    pub fn units(&self) -> &[AnimUnit] {
        &self.units
    }

    pub fn mode(&self) -> CompositionMode {
        self.mode
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn initial(&self, key: &PropKey) -> Option<&AnimValue> {
        self.initial.get(key)
    }

    /// Write every animated property's value at time `t` into `holder`.
    ///
    /// Returns the index of the active unit, or `None` once every unit is complete.
    pub fn resolve(&self, t: f64, holder: &mut PropertyHolder) -> Option<usize> {
        let t = if t.is_nan() { 0.0 } else { t.max(0.0) };
        match self.mode {
            CompositionMode::Sequential => self.resolve_sequential(t, holder),
            CompositionMode::Parallel => self.resolve_parallel(t, holder),
        }
    }

    fn resolve_sequential(&self, t: f64, holder: &mut PropertyHolder) -> Option<usize> {
        // Values left behind by completed units; later units interpolate from these.
        let mut settled: BTreeMap<&PropKey, &AnimValue> = BTreeMap::new();
        let mut before = 0.0;

        for (i, unit) in self.units.iter().enumerate() {
            let end_at = before + unit.duration();
            if t < end_at {
                let raw = unit.progress(t - before);
                for (k, end) in unit.targets() {
                    let start = settled
                        .get(k)
                        .copied()
                        .or_else(|| self.initial.get(k))
                        .unwrap_or(&ZERO);
                    holder.set(k.clone(), unit.sample(start, end, raw));
                }
                return Some(i);
            }

            for (k, end) in unit.targets() {
                holder.set(k.clone(), end.clone());
                settled.insert(k, end);
            }
            before = end_at;
        }
        None
    }

    fn resolve_parallel(&self, t: f64, holder: &mut PropertyHolder) -> Option<usize> {
        let mut active = None;
        for (i, unit) in self.units.iter().enumerate() {
            let raw = unit.progress(t);
            for (k, end) in unit.targets() {
                let start = self.initial.get(k).unwrap_or(&ZERO);
                holder.set(k.clone(), unit.sample(start, end, raw));
            }
            if raw < 1.0 {
                active = Some(i);
            }
        }
        active
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/resolver.rs"]
mod tests;
