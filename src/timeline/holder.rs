use std::collections::BTreeMap;
use std::sync::Arc;

use crate::animation::unit::PropertyTarget;
use crate::animation::value::AnimValue;
use crate::foundation::core::Point;
use crate::timeline::keys::{ElementKind, PointAttr, PropKey};

/// Current animated state of the canvas: element coordinates and mesh opacity.
///
/// Written by the timeline once per frame and read by the renderers right after.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyHolder {
    values: BTreeMap<PropKey, AnimValue>,
}

impl PropertyHolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &PropKey) -> Option<&AnimValue> {
        self.values.get(key)
    }

    pub fn set(&mut self, key: PropKey, value: impl Into<AnimValue>) {
        self.values.insert(key, value.into());
    }

    pub fn contains(&self, key: &PropKey) -> bool {
        self.values.contains_key(key)
    }

    pub fn scalar(&self, key: &PropKey) -> Option<f64> {
        self.values.get(key).and_then(AnimValue::as_scalar)
    }

    /// Read an x/y pair of one element as a point; `None` if either coordinate is missing.
    pub fn point(
        &self,
        shape: &Arc<str>,
        kind: ElementKind,
        index: usize,
        which: PointAttr,
    ) -> Option<Point> {
        let x = self.scalar(&PropKey::element(shape, kind, index, which.x()))?;
        let y = self.scalar(&PropKey::element(shape, kind, index, which.y()))?;
        Some(Point::new(x, y))
    }

    pub fn set_point(
        &mut self,
        shape: &Arc<str>,
        kind: ElementKind,
        index: usize,
        which: PointAttr,
        p: Point,
    ) {
        self.set(PropKey::element(shape, kind, index, which.x()), p.x);
        self.set(PropKey::element(shape, kind, index, which.y()), p.y);
    }

    /// Mesh opacity, zero when unset.
    pub fn mesh_opacity(&self) -> f64 {
        self.scalar(&PropKey::MeshOpacity).unwrap_or(0.0)
    }

    /// Copy the current value of each key, defaulting missing ones to zero.
    pub fn snapshot<'a>(
        &self,
        keys: impl IntoIterator<Item = &'a PropKey>,
    ) -> BTreeMap<PropKey, AnimValue> {
        keys.into_iter()
            .map(|k| {
                let v = self
                    .values
                    .get(k)
                    .cloned()
                    .unwrap_or(AnimValue::Scalar(0.0));
                (k.clone(), v)
            })
            .collect()
    }

    pub fn reset(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PropKey, &AnimValue)> {
        self.values.iter()
    }
}

impl PropertyTarget for PropertyHolder {
    fn property(&self, key: &PropKey) -> Option<&AnimValue> {
        self.get(key)
    }

    fn set_property(&mut self, key: PropKey, value: AnimValue) {
        self.values.insert(key, value);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/holder.rs"]
mod tests;
