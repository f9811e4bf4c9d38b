use std::iter::FusedIterator;

use crate::domain::model::{Dimension, DimensionKind, Rectangle};
use crate::domain::ports::Dimensioned;

/// Lazy iterator over a rectangle's dimensions.
///
/// Holds only the shape and a cursor; each [`Dimension`] is built when
/// `next` asks for it.
#[derive(Debug, Clone)]
pub struct Dimensions {
    shape: Rectangle,
    index: usize,
}

impl Dimensions {
    pub fn new(shape: Rectangle) -> Self {
        Self { shape, index: 0 }
    }
}

impl Iterator for Dimensions {
    type Item = Dimension;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let kind = *DimensionKind::ORDER.get(self.index)?;
        self.index += 1;
        Some(Dimension::new(kind, self.shape.get(kind)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = DimensionKind::ORDER.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Dimensions {}

impl FusedIterator for Dimensions {}

impl Dimensioned for Rectangle {
    type Iter = Dimensions;

    fn dimensions(&self) -> Dimensions {
        Dimensions::new(*self)
    }
}

impl Rectangle {
    pub fn iter(&self) -> Dimensions {
        self.dimensions()
    }
}

impl IntoIterator for Rectangle {
    type Item = Dimension;
    type IntoIter = Dimensions;

    fn into_iter(self) -> Self::IntoIter {
        Dimensions::new(self)
    }
}

impl IntoIterator for &Rectangle {
    type Item = Dimension;
    type IntoIter = Dimensions;

    fn into_iter(self) -> Self::IntoIter {
        self.dimensions()
    }
}
