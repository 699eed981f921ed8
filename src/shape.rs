//! Shapes are [polyominoes](https://en.wikipedia.org/wiki/Polyomino) described
//! by the set of grid cells they occupy, expanded at construction time into
//! every distinct rotation and reflection.

/// A single grid cell, as an `(x, y)` coordinate pair.
///
/// Cells have no identity beyond their coordinates; equality is structural.
pub type Cell = (i32, i32);

/// One polyomino, stored as the full set of its distinct orientations.
///
/// Built once from raw cells or a glyph grid and immutable afterwards. Every
/// orientation is normalized (bounding-box minimum at the origin, cells in
/// row-major order), so two orientations with the same normalized coordinate
/// sequence are stored once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    orientations: Vec<Vec<Cell>>,
    area: usize,
}

impl Shape {
    /// Create a new shape from the cells it occupies.
    ///
    /// The cells are normalized and then expanded into all distinct
    /// symmetries: the four reflections (identity, flip-x, flip-y, flip-both)
    /// each composed with the four 90° rotations. Shapes with symmetry keep
    /// fewer than 16 orientations, down to a single one for a shape with full
    /// 8-fold symmetry.
    ///
    /// An empty cell list is accepted: the shape has zero area and a single
    /// trivial orientation.
    pub fn new(cells: Vec<Cell>) -> Self {
        let base = normalize(cells);
        let area = base.len();

        let reflections: [fn(Cell) -> Cell; 4] = [
            |(x, y)| (x, y),
            |(x, y)| (-x, y),
            |(x, y)| (x, -y),
            |(x, y)| (-x, -y),
        ];

        let mut orientations = Vec::with_capacity(16);
        for reflect in reflections {
            let mut current: Vec<Cell> = base.iter().copied().map(reflect).collect();
            orientations.push(normalize(current.clone()));
            for _ in 0..3 {
                current = current.into_iter().map(|(x, y)| (-y, x)).collect();
                orientations.push(normalize(current.clone()));
            }
        }
        orientations.sort();
        orientations.dedup();

        Self { orientations, area }
    }

    /// Create a shape from a glyph grid, where `#` marks a filled cell and
    /// any other character an empty one.
    ///
    /// Rows may have differing lengths; only the filled cells matter.
    pub fn from_glyphs<'a>(rows: impl IntoIterator<Item = &'a str>) -> Self {
        let cells = rows
            .into_iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.char_indices()
                    .filter(|&(_, ch)| ch == '#')
                    .map(move |(x, _)| (x as i32, y as i32))
            })
            .collect();

        Self::new(cells)
    }

    /// The distinct normalized orientations of this shape.
    pub fn orientations(&self) -> &[Vec<Cell>] {
        &self.orientations
    }

    /// The number of cells this shape occupies, the same in every
    /// orientation.
    pub fn area(&self) -> usize {
        self.area
    }
}

impl<const W: usize, const H: usize> From<[[u8; W]; H]> for Shape {
    fn from(arr: [[u8; W]; H]) -> Self {
        let mut cells = Vec::new();
        for (y, row) in arr.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if value != 0 {
                    cells.push((x as i32, y as i32));
                }
            }
        }

        Self::new(cells)
    }
}

/// Translate cells so the bounding-box minimum lands on `(0, 0)` and sort
/// them in row-major order (by `y`, then `x`).
pub(crate) fn normalize(mut cells: Vec<Cell>) -> Vec<Cell> {
    if cells.is_empty() {
        return cells;
    }

    let min_x = cells.iter().map(|&(x, _)| x).min().unwrap();
    let min_y = cells.iter().map(|&(_, y)| y).min().unwrap();

    for (x, y) in &mut cells {
        *x -= min_x;
        *y -= min_y;
    }
    cells.sort_by_key(|&(x, y)| (y, x));
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_translates_and_sorts() {
        let cells = normalize(vec![(3, 5), (2, 4), (3, 4)]);
        assert_eq!(cells, vec![(0, 0), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_single_cell_has_one_orientation() {
        let shape = Shape::new(vec![(7, 9)]);
        assert_eq!(shape.area(), 1);
        assert_eq!(shape.orientations(), &[vec![(0, 0)]]);
    }

    #[test]
    fn test_square_has_one_orientation() {
        let shape = Shape::from([[1, 1], [1, 1]]);
        assert_eq!(shape.area(), 4);
        assert_eq!(shape.orientations().len(), 1);
    }

    #[test]
    fn test_domino_has_two_orientations() {
        let shape = Shape::from([[1, 1]]);
        assert_eq!(shape.area(), 2);
        assert_eq!(
            shape.orientations(),
            &[vec![(0, 0), (0, 1)], vec![(0, 0), (1, 0)]][..]
        );
    }

    #[test]
    fn test_l_tetromino_has_eight_orientations() {
        let shape = Shape::from([[1, 0], [1, 0], [1, 1]]);
        assert_eq!(shape.area(), 4);
        assert_eq!(shape.orientations().len(), 8);
    }

    #[test]
    fn test_s_and_t_tetromino_have_four_orientations() {
        let s = Shape::from([[0, 1, 1], [1, 1, 0]]);
        assert_eq!(s.orientations().len(), 4);

        let t = Shape::from([[1, 1, 1], [0, 1, 0]]);
        assert_eq!(t.orientations().len(), 4);
    }

    #[test]
    fn test_empty_shape() {
        let shape = Shape::new(vec![]);
        assert_eq!(shape.area(), 0);
        assert_eq!(shape.orientations(), &[Vec::<Cell>::new()]);
    }

    #[test]
    fn test_orientation_generation_is_deterministic() {
        let glyphs = ["##.", ".##", ".#."];
        let first = Shape::from_glyphs(glyphs);
        let second = Shape::from_glyphs(glyphs);
        assert_eq!(first, second);

        // Same shape drawn with a translated offset and shuffled cell order.
        let translated = Shape::new(vec![(11, 4), (12, 4), (11, 5), (10, 3), (11, 3)]);
        assert_eq!(first, translated);
    }

    #[test]
    fn test_glyph_grid_with_ragged_rows() {
        let shape = Shape::from_glyphs(["##", "#"]);
        assert_eq!(shape.area(), 3);
        assert_eq!(shape, Shape::from([[1, 1], [1, 0]]));
    }

    #[test]
    fn test_orientations_are_normalized() {
        let shape = Shape::from([[1, 1, 1], [1, 0, 0]]);
        for orientation in shape.orientations() {
            assert!(orientation.iter().all(|&(x, y)| x >= 0 && y >= 0));
            assert!(orientation.iter().any(|&(x, _)| x == 0));
            assert!(orientation.iter().any(|&(_, y)| y == 0));

            let mut sorted = orientation.clone();
            sorted.sort_by_key(|&(x, y)| (y, x));
            assert_eq!(&sorted, orientation);
        }
    }
}
