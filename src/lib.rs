#![deny(missing_docs)]

//! Decide whether required counts of [polyomino](https://en.wikipedia.org/wiki/Polyomino)
//! shapes fit into rectangular regions, by modeling each region as an
//! [exact cover](https://en.wikipedia.org/wiki/Exact_cover) problem and
//! solving it with an [Algorithm X](https://en.wikipedia.org/wiki/Knuth%27s_Algorithm_X)
//! style search.
//!
//! The pipeline per region is: build the shape library ([`shape`]), enumerate
//! legal placements ([`placement`]), and search the resulting cover matrix
//! ([`cover`]). Any "does not fit" from the cover search is re-checked by an
//! independent backtracking placer ([`backtrack`]) whose verdict wins, so a
//! bookkeeping bug in the optimized solver cannot silently flip an answer.

pub mod backtrack;
pub mod cover;
pub mod parse;
pub mod placement;
pub mod region;
pub mod shape;

pub use region::Region;
pub use shape::Shape;

use cover::Model;

/// Return true if all required shape instances fit into the region without
/// overlapping.
///
/// Runs the full pipeline once for this region; no state is carried over to
/// other regions. Infeasibility is a normal negative result, not an error.
///
/// # Panics
///
/// Panics if the region's count vector is not indexed like `shapes`.
pub fn region_fits(shapes: &[Shape], region: &Region) -> bool {
    assert_eq!(
        shapes.len(),
        region.counts().len(),
        "Region counts must have one entry per shape."
    );

    // More required cells than the region holds can never fit; skipping the
    // search keeps the common negative case cheap.
    let required_area = region.required_area(shapes);
    if required_area > region.cell_count() {
        return false;
    }

    // Nothing required at all fits trivially.
    if region.required_instances() == 0 {
        return true;
    }

    if Model::build(shapes, region).has_exact_cover() {
        return true;
    }

    // Cross-check every negative verdict with the independent placer; its
    // answer overrides the fast path.
    let fits = backtrack::can_place_all(shapes, region);
    if fits {
        log::warn!(
            "Exact-cover search reported infeasible for a [{}x{}] region but \
             the backtracking placer found a packing.",
            region.width(),
            region.height()
        );
    }
    fits
}

/// Count how many of the given regions fit all of their required shape
/// instances.
pub fn count_fitting(shapes: &[Shape], regions: &[Region]) -> usize {
    regions
        .iter()
        .filter(|region| region_fits(shapes, region))
        .count()
}
