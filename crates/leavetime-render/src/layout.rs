use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A 24-bit color, serialized as `#rrggbb` so the host envelope and the
/// snapshot files stay human-readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RgbVisitor;

        impl Visitor<'_> for RgbVisitor {
            type Value = Rgb;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a color in #rrggbb form")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Rgb, E> {
                let hex = value
                    .strip_prefix('#')
                    .ok_or_else(|| E::custom("missing '#' prefix"))?;
                if hex.len() != 6 {
                    return Err(E::custom("expected 6 hex digits"));
                }
                let parse = |s: &str| u8::from_str_radix(s, 16).map_err(E::custom);
                Ok(Rgb(parse(&hex[0..2])?, parse(&hex[2..4])?, parse(&hex[4..6])?))
            }
        }

        deserializer.deserialize_str(RgbVisitor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Bold,
    Regular,
    Italic,
}

/// One node of the layout tree handed to the rendering host.
///
/// The tree is shallow on purpose: a `Row` groups leaves horizontally and
/// never nests another `Row`; every `Text` and `Spacer` is a leaf. Vertical
/// stacking is the ordering of the top-level node list, which the host must
/// preserve exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutNode {
    Text {
        content: String,
        weight: FontWeight,
        size_pt: u32,
        color: Rgb,
    },
    Spacer {
        size_pt: u32,
    },
    Row {
        children: Vec<LayoutNode>,
    },
}

impl LayoutNode {
    pub fn text(content: impl Into<String>, weight: FontWeight, size_pt: u32, color: Rgb) -> Self {
        LayoutNode::Text {
            content: content.into(),
            weight,
            size_pt,
            color,
        }
    }

    pub fn spacer(size_pt: u32) -> Self {
        LayoutNode::Spacer { size_pt }
    }

    /// Group leaves horizontally. Rows are one level deep by construction;
    /// debug builds assert it.
    pub fn row(children: Vec<LayoutNode>) -> Self {
        debug_assert!(
            children
                .iter()
                .all(|c| !matches!(c, LayoutNode::Row { .. })),
            "rows must not nest"
        );
        LayoutNode::Row { children }
    }
}
