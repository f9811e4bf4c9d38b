use crate::domain::model::Dimension;

/// Anything that can hand out its dimensions as a lazy, restartable sequence
/// of single-key mappings.
pub trait Dimensioned {
    type Iter: Iterator<Item = Dimension>;

    /// Starts a fresh pass over the dimensions, in their fixed order.
    fn dimensions(&self) -> Self::Iter;
}
