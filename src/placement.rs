//! Enumeration of every legal position a shape orientation can take inside a
//! region.

use crate::{
    region::Region,
    shape::{Cell, Shape},
};

/// One candidate placement: a shape orientation translated to a specific
/// origin, occupying a set of absolute in-bounds cells.
///
/// Placements are derived data, recomputed per region; region dimensions
/// vary, so they are never cached across regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Index of the shape in the shape list.
    pub shape_index: usize,
    /// Absolute cells occupied inside the region.
    pub cells: Vec<Cell>,
}

/// Enumerate all legal placements for every shape the region requires at
/// least one instance of.
///
/// For each orientation, the origin ranges over every offset that keeps the
/// orientation's bounding box inside `[0, width) × [0, height)`.
pub fn enumerate(shapes: &[Shape], region: &Region) -> Vec<Placement> {
    let width = region.width() as i32;
    let height = region.height() as i32;

    let mut placements = Vec::new();
    for (shape_index, shape) in shapes.iter().enumerate() {
        if region.counts().get(shape_index).copied().unwrap_or(0) == 0 {
            continue;
        }

        for orientation in shape.orientations() {
            let max_x = orientation.iter().map(|&(x, _)| x).max().unwrap_or(0);
            let max_y = orientation.iter().map(|&(_, y)| y).max().unwrap_or(0);
            if max_x >= width || max_y >= height {
                continue;
            }

            for origin_y in 0..height - max_y {
                for origin_x in 0..width - max_x {
                    let cells = orientation
                        .iter()
                        .map(|&(x, y)| (origin_x + x, origin_y + y))
                        .collect();
                    placements.push(Placement { shape_index, cells });
                }
            }
        }
    }

    placements
}
