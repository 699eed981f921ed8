use region_fit::{backtrack, cover::Model, region_fits, Region, Shape};

/// The five free tetrominoes (I, O, T, S, L), a convenient stress catalog
/// since they cover symmetry orders from 1 up to 8 orientations.
#[allow(dead_code)]
pub fn tetrominoes() -> Vec<Shape> {
    vec![
        Shape::from([[1, 1, 1, 1]]),
        Shape::from([[1, 1], [1, 1]]),
        Shape::from([[1, 1, 1], [0, 1, 0]]),
        Shape::from([[0, 1, 1], [1, 1, 0]]),
        Shape::from([[1, 0], [1, 0], [1, 1]]),
    ]
}

/// Solve a region with the exact-cover path and the backtracking placer
/// independently and assert that all verdicts line up.
///
/// Returns the agreed verdict for further assertions.
#[allow(dead_code)]
pub fn assert_solvers_agree(shapes: &[Shape], region: &Region) -> bool {
    let exact_cover = Model::build(shapes, region).has_exact_cover();
    let backtracking = backtrack::can_place_all(shapes, region);
    assert_eq!(
        exact_cover,
        backtracking,
        "solver disagreement on [{}x{}] region with counts {:?}",
        region.width(),
        region.height(),
        region.counts()
    );

    let combined = region_fits(shapes, region);
    assert_eq!(combined, backtracking);
    combined
}
