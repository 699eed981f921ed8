#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use region_fit::{backtrack, cover::Model, Region, Shape};

/// A small generated instance: up to four shapes drawn on 3x3 masks, with a
/// region of at most 4x4 cells.
#[derive(Debug, Arbitrary)]
struct Instance {
    masks: Vec<u16>,
    width: u8,
    height: u8,
    counts: Vec<u8>,
}

fuzz_target!(|instance: Instance| {
    if instance.masks.is_empty() || instance.masks.len() > 4 {
        return;
    }

    let shapes: Vec<Shape> = instance
        .masks
        .iter()
        .map(|&mask| {
            let cells = (0..9)
                .filter(|bit| mask & (1 << bit) != 0)
                .map(|bit| (bit % 3, bit / 3))
                .collect();
            Shape::new(cells)
        })
        .collect();

    let width = usize::from(instance.width % 4) + 1;
    let height = usize::from(instance.height % 4) + 1;
    let counts: Vec<usize> = (0..shapes.len())
        .map(|i| usize::from(instance.counts.get(i).copied().unwrap_or(0) % 3))
        .collect();
    let region = Region::new(width, height, counts);

    let exact_cover = Model::build(&shapes, &region).has_exact_cover();
    let backtracking = backtrack::can_place_all(&shapes, &region);
    assert_eq!(
        exact_cover, backtracking,
        "solver disagreement on {:?}",
        region
    );
});
