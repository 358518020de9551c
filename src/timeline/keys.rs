use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::foundation::error::PenlineError;

/// Kind of drawable path element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementKind {
    Line,
    Bezier,
}

impl ElementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bezier => "bezier",
        }
    }
}

/// One coordinate of a path element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attr {
    StartX,
    StartY,
    Control1X,
    Control1Y,
    Control2X,
    Control2Y,
    EndX,
    EndY,
}

impl Attr {
    pub const ALL: [Attr; 8] = [
        Self::StartX,
        Self::StartY,
        Self::Control1X,
        Self::Control1Y,
        Self::Control2X,
        Self::Control2Y,
        Self::EndX,
        Self::EndY,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::StartX => "start_x",
            Self::StartY => "start_y",
            Self::Control1X => "control1_x",
            Self::Control1Y => "control1_y",
            Self::Control2X => "control2_x",
            Self::Control2Y => "control2_y",
            Self::EndX => "end_x",
            Self::EndY => "end_y",
        }
    }
}

/// A named point of a path element, expanding to an x/y attribute pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointAttr {
    Start,
    Control1,
    Control2,
    End,
}

impl PointAttr {
    pub fn x(self) -> Attr {
        match self {
            Self::Start => Attr::StartX,
            Self::Control1 => Attr::Control1X,
            Self::Control2 => Attr::Control2X,
            Self::End => Attr::EndX,
        }
    }

    pub fn y(self) -> Attr {
        match self {
            Self::Start => Attr::StartY,
            Self::Control1 => Attr::Control1Y,
            Self::Control2 => Attr::Control2Y,
            Self::End => Attr::EndY,
        }
    }
}

/// Address of one animated coordinate: `<shape>_<kind><index>_<attr>`.
///
/// `index` counts elements of the same kind in document order, across all shapes.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementKey {
    pub shape: Arc<str>,
    pub kind: ElementKind,
    pub index: usize,
    pub attr: Attr,
}

impl ElementKey {
    pub fn new(shape: Arc<str>, kind: ElementKind, index: usize, attr: Attr) -> Self {
        Self {
            shape,
            kind,
            index,
            attr,
        }
    }

    /// Same element, different coordinate.
    pub fn with_attr(&self, attr: Attr) -> Self {
        Self {
            attr,
            ..self.clone()
        }
    }
}

/// Key into the property holder.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PropKey {
    Element(ElementKey),
    /// Global opacity of the filled shapes.
    MeshOpacity,
}

impl PropKey {
    pub fn element(shape: &Arc<str>, kind: ElementKind, index: usize, attr: Attr) -> Self {
        Self::Element(ElementKey::new(Arc::clone(shape), kind, index, attr))
    }

    pub fn as_element(&self) -> Option<&ElementKey> {
        match self {
            Self::Element(k) => Some(k),
            Self::MeshOpacity => None,
        }
    }

    /// Whether this key names an end-position coordinate (usable as a hand anchor).
    pub fn is_end_position(&self) -> bool {
        matches!(
            self.as_element().map(|k| k.attr),
            Some(Attr::EndX | Attr::EndY)
        )
    }
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}{}_{}",
            self.shape,
            self.kind.as_str(),
            self.index,
            self.attr.as_str()
        )
    }
}

impl fmt::Display for PropKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(k) => fmt::Display::fmt(k, f),
            Self::MeshOpacity => f.write_str("mesh_opacity"),
        }
    }
}

impl FromStr for PropKey {
    type Err = PenlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "mesh_opacity" {
            return Ok(Self::MeshOpacity);
        }
        let bad = || PenlineError::validation(format!("malformed property key \"{s}\""));

        let (head, attr) = Attr::ALL
            .into_iter()
            .find_map(|a| {
                s.strip_suffix(a.as_str())
                    .and_then(|h| h.strip_suffix('_'))
                    .map(|h| (h, a))
            })
            .ok_or_else(bad)?;
        let (shape, element) = head.rsplit_once('_').ok_or_else(bad)?;
        if shape.is_empty() {
            return Err(bad());
        }

        let (kind, digits) = if let Some(d) = element.strip_prefix("bezier") {
            (ElementKind::Bezier, d)
        } else if let Some(d) = element.strip_prefix("line") {
            (ElementKind::Line, d)
        } else {
            return Err(bad());
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
        let index = digits.parse::<usize>().map_err(|_| bad())?;

        Ok(Self::Element(ElementKey::new(
            Arc::from(shape),
            kind,
            index,
            attr,
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/keys.rs"]
mod tests;
