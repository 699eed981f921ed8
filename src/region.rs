//! A target rectangle together with the number of required instances of each
//! shape that must fit inside it.

use crate::shape::Shape;

/// One region to fill: a `width` × `height` rectangle and a required-count
/// vector indexed like the shape list.
///
/// Built once per puzzle region line and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    width: usize,
    height: usize,
    counts: Vec<usize>,
}

impl Region {
    /// Create a new region.
    pub fn new(width: usize, height: usize, counts: Vec<usize>) -> Self {
        assert!(
            width > 0 && height > 0,
            "Region dimensions must be positive."
        );

        Self {
            width,
            height,
            counts,
        }
    }

    /// Width of the region in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the region in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Required instance count per shape, indexed like the shape list.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Total number of cells in the region.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Total area occupied by all required shape instances.
    pub fn required_area(&self, shapes: &[Shape]) -> usize {
        self.counts
            .iter()
            .zip(shapes)
            .map(|(count, shape)| count * shape.area())
            .sum()
    }

    /// Total number of required shape instances.
    pub fn required_instances(&self) -> usize {
        self.counts.iter().sum()
    }
}
