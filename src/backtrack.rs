//! Naive backtracking placer, independent of the exact-cover machinery.
//!
//! The exact-cover bookkeeping is easy to get subtly wrong, so every
//! "does not fit" verdict from the fast path is re-checked by this placer
//! and its answer wins. Redundancy by intent: two independent
//! implementations turn a silent wrong answer into a detectable
//! disagreement.

use crate::{region::Region, shape::Shape};

/// Return true if every required shape instance can be placed in the region
/// without overlaps, by exhaustive search over a mutable occupancy grid.
pub fn can_place_all(shapes: &[Shape], region: &Region) -> bool {
    // Place large instances first; they fail fast and prune the most.
    let mut instances: Vec<usize> = region
        .counts()
        .iter()
        .enumerate()
        .flat_map(|(shape_index, &count)| std::iter::repeat(shape_index).take(count))
        .collect();
    instances.sort_by_key(|&shape_index| {
        (std::cmp::Reverse(shapes[shape_index].area()), shape_index)
    });

    if instances.is_empty() {
        return true;
    }

    let mut occupied = vec![false; region.cell_count()];
    place(shapes, region, &instances, 0, &mut occupied)
}

fn place(
    shapes: &[Shape],
    region: &Region,
    instances: &[usize],
    position: usize,
    occupied: &mut [bool],
) -> bool {
    if position == instances.len() {
        return true;
    }

    let width = region.width() as i32;
    let height = region.height() as i32;
    let shape = &shapes[instances[position]];

    for orientation in shape.orientations() {
        let max_x = orientation.iter().map(|&(x, _)| x).max().unwrap_or(0);
        let max_y = orientation.iter().map(|&(_, y)| y).max().unwrap_or(0);
        if max_x >= width || max_y >= height {
            continue;
        }

        for origin_y in 0..height - max_y {
            for origin_x in 0..width - max_x {
                let index = |&(x, y): &(i32, i32)| {
                    (origin_y + y) as usize * width as usize + (origin_x + x) as usize
                };

                if orientation.iter().any(|cell| occupied[index(cell)]) {
                    continue;
                }

                for cell in orientation {
                    occupied[index(cell)] = true;
                }
                if place(shapes, region, instances, position + 1, occupied) {
                    return true;
                }
                for cell in orientation {
                    occupied[index(cell)] = false;
                }
            }
        }
    }

    false
}
