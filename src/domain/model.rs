use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::utils::error::Result;
use crate::utils::validation::parse_dimension;

/// Which attribute of a shape a [`Dimension`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DimensionKind {
    Length,
    Width,
}

impl DimensionKind {
    /// Iteration order of a shape's dimensions.
    pub const ORDER: [DimensionKind; 2] = [DimensionKind::Length, DimensionKind::Width];

    pub fn as_str(&self) -> &'static str {
        match self {
            DimensionKind::Length => "length",
            DimensionKind::Width => "width",
        }
    }
}

impl fmt::Display for DimensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single-key mapping such as `{"length": 10}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    pub kind: DimensionKind,
    pub value: i64,
}

impl Dimension {
    pub fn new(kind: DimensionKind, value: i64) -> Self {
        Self { kind, value }
    }

    pub fn key(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn to_map(&self) -> BTreeMap<String, i64> {
        BTreeMap::from([(self.key().to_string(), self.value)])
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ self.key(): self.value })
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key(), self.value)
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key(), &self.value)?;
        map.end()
    }
}

/// Rectangle-like value holding a length and a width.
///
/// Fields are fixed at construction. Iterating yields `{"length": ..}` and then
/// `{"width": ..}`, computed one at a time; every call to
/// [`Rectangle::dimensions`] starts again from the length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    length: i64,
    width: i64,
}

impl Rectangle {
    pub fn new(length: i64, width: i64) -> Self {
        Self { length, width }
    }

    /// Builds a rectangle from user-supplied text, rejecting anything that is
    /// not a whole number.
    pub fn parse(length: &str, width: &str) -> Result<Self> {
        let length = parse_dimension("length", length)?;
        let width = parse_dimension("width", width)?;
        Ok(Self::new(length, width))
    }

    pub fn length(&self) -> i64 {
        self.length
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn get(&self, kind: DimensionKind) -> i64 {
        match kind {
            DimensionKind::Length => self.length,
            DimensionKind::Width => self.width,
        }
    }
}
