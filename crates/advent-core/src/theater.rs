//! Red and green floor tiles in the movie theater.
//!
//! Red tiles are listed in loop order. Straight runs of green tiles join
//! each red tile to the next, wrapping around, and everything enclosed by
//! that loop is green as well.

use std::{collections::VecDeque, fmt};

use log::debug;

use crate::SolveError;

/// A red tile at column `x`, row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RedTile {
    x: u64,
    y: u64,
}

impl RedTile {
    pub fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> u64 {
        self.x
    }

    pub fn y(&self) -> u64 {
        self.y
    }

    /// Tiles covered by the rectangle with `self` and `other` as opposite
    /// corners, corners included.
    ///
    /// Two tiles sharing a row or a column do not span a rectangle and
    /// score 0.
    pub fn area_with(&self, other: &Self) -> u128 {
        if self.x == other.x || self.y == other.y {
            return 0;
        }
        let width = u128::from(self.x.abs_diff(other.x)) + 1;
        let height = u128::from(self.y.abs_diff(other.y)) + 1;
        width * height
    }
}

impl fmt::Display for RedTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// One axis of the floor cut into bands.
///
/// Every red tile coordinate is a band of its own, and each run of
/// coordinates strictly between two of them is one more band. A padding
/// band sits at either end so the outside always surrounds the loop.
#[derive(Debug)]
struct Axis {
    coords: Vec<u64>,
    bands: Vec<usize>,
    len: usize,
}

impl Axis {
    fn new(mut coords: Vec<u64>) -> Self {
        coords.sort_unstable();
        coords.dedup();

        let mut bands = Vec::with_capacity(coords.len());
        let mut band = 1;
        for (idx, coord) in coords.iter().enumerate() {
            if idx > 0 && coord - coords[idx - 1] > 1 {
                band += 1;
            }
            bands.push(band);
            band += 1;
        }
        Self {
            coords,
            bands,
            len: band + 1,
        }
    }

    /// Band holding a red tile coordinate.
    fn band(&self, coord: u64) -> usize {
        self.bands[self.coords.partition_point(|c| *c < coord)]
    }
}

/// The floor in compressed coordinates, knowing which blocks of tiles lie
/// outside the loop.
#[derive(Debug)]
struct FloorMap {
    columns: Axis,
    rows: Axis,
    /// Outside blocks above and left of each corner, `(columns + 1) * (rows + 1)`.
    outside_before: Vec<usize>,
}

impl FloorMap {
    fn new(tiles: &[RedTile], edges: &[(RedTile, RedTile)]) -> Self {
        let columns = Axis::new(tiles.iter().map(RedTile::x).collect());
        let rows = Axis::new(tiles.iter().map(RedTile::y).collect());
        let width = columns.len;
        let height = rows.len;

        let mut on_loop = vec![false; width * height];
        for (from, to) in edges {
            let (x0, x1) = ordered(columns.band(from.x), columns.band(to.x));
            let (y0, y1) = ordered(rows.band(from.y), rows.band(to.y));
            for y in y0..=y1 {
                for x in x0..=x1 {
                    on_loop[y * width + x] = true;
                }
            }
        }

        // flood the outside in from the padding corner
        let mut outside = vec![false; width * height];
        let mut queue = VecDeque::from([(0_usize, 0_usize)]);
        outside[0] = true;
        while let Some((x, y)) = queue.pop_front() {
            let neighbours = [
                (x.wrapping_sub(1), y),
                (x + 1, y),
                (x, y.wrapping_sub(1)),
                (x, y + 1),
            ];
            for (nx, ny) in neighbours {
                if nx >= width || ny >= height {
                    continue;
                }
                let cell = ny * width + nx;
                if !on_loop[cell] && !outside[cell] {
                    outside[cell] = true;
                    queue.push_back((nx, ny));
                }
            }
        }

        let stride = width + 1;
        let mut outside_before = vec![0; stride * (height + 1)];
        for y in 0..height {
            for x in 0..width {
                outside_before[(y + 1) * stride + x + 1] = usize::from(outside[y * width + x])
                    + outside_before[y * stride + x + 1]
                    + outside_before[(y + 1) * stride + x]
                    - outside_before[y * stride + x];
            }
        }

        Self {
            columns,
            rows,
            outside_before,
        }
    }

    /// Whether every tile of the rectangle spanned by `a` and `b` is red or
    /// green.
    fn encloses(&self, a: RedTile, b: RedTile) -> bool {
        let (x0, x1) = ordered(self.columns.band(a.x), self.columns.band(b.x));
        let (y0, y1) = ordered(self.rows.band(a.y), self.rows.band(b.y));
        let stride = self.columns.len + 1;
        let at = |x: usize, y: usize| self.outside_before[y * stride + x];
        at(x1 + 1, y1 + 1) + at(x0, y0) == at(x0, y1 + 1) + at(x1 + 1, y0)
    }
}

fn ordered(a: usize, b: usize) -> (usize, usize) {
    (a.min(b), a.max(b))
}

/// The loop of red tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLoop {
    tiles: Vec<RedTile>,
}

impl TileLoop {
    pub fn new(tiles: Vec<RedTile>) -> Self {
        Self { tiles }
    }

    pub fn tiles(&self) -> &[RedTile] {
        &self.tiles
    }

    /// Every corner pair with its area, largest area first.
    fn ranked_rectangles(&self) -> Result<Vec<(u128, RedTile, RedTile)>, SolveError> {
        if self.tiles.len() < 2 {
            return Err(SolveError::NotEnoughTiles {
                required: 2,
                available: self.tiles.len(),
            });
        }

        let mut ranked = Vec::new();
        for (idx, a) in self.tiles.iter().enumerate() {
            for b in &self.tiles[idx + 1..] {
                ranked.push((a.area_with(b), *a, *b));
            }
        }
        ranked.sort_unstable_by(|left, right| right.0.cmp(&left.0));
        Ok(ranked)
    }

    /// Largest rectangle using two red tiles as opposite corners.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NotEnoughTiles`] for fewer than two tiles, or
    /// [`SolveError::Overflow`] when the area exceeds `u64`.
    pub fn largest_rectangle(&self) -> Result<u64, SolveError> {
        let ranked = self.ranked_rectangles()?;
        let area = ranked.first().map_or(0, |(area, a, b)| {
            debug!(area, a:% = a, b:% = b; "Largest red-cornered rectangle");
            *area
        });
        u64::try_from(area).map_err(|_| SolveError::Overflow)
    }

    /// Largest red-cornered rectangle made only of red and green tiles.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::DiagonalEdge`] when consecutive red tiles share
    /// neither a row nor a column, plus the errors of
    /// [`TileLoop::largest_rectangle`].
    pub fn largest_enclosed_rectangle(&self) -> Result<u64, SolveError> {
        let ranked = self.ranked_rectangles()?;
        let floor = FloorMap::new(&self.tiles, &self.edges()?);

        let area = ranked
            .into_iter()
            .find(|(area, a, b)| *area == 0 || floor.encloses(*a, *b))
            .map_or(0, |(area, a, b)| {
                debug!(area, a:% = a, b:% = b; "Largest enclosed rectangle");
                area
            });
        u64::try_from(area).map_err(|_| SolveError::Overflow)
    }

    /// The straight green runs between consecutive red tiles.
    fn edges(&self) -> Result<Vec<(RedTile, RedTile)>, SolveError> {
        let count = self.tiles.len();
        (0..count)
            .map(|idx| {
                let from = self.tiles[idx];
                let to = self.tiles[(idx + 1) % count];
                if from.x != to.x && from.y != to.y {
                    return Err(SolveError::DiagonalEdge {
                        from: idx + 1,
                        to: (idx + 1) % count + 1,
                    });
                }
                Ok((from, to))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles(coords: &[(u64, u64)]) -> TileLoop {
        TileLoop::new(coords.iter().map(|(x, y)| RedTile::new(*x, *y)).collect())
    }

    fn example() -> TileLoop {
        tiles(&[
            (7, 1),
            (11, 1),
            (11, 7),
            (9, 7),
            (9, 5),
            (2, 5),
            (2, 3),
            (7, 3),
        ])
    }

    #[test]
    fn test_area_on_same_row() {
        assert_eq!(RedTile::new(2, 3).area_with(&RedTile::new(7, 3)), 0);
    }

    #[test]
    fn test_area_on_same_column() {
        assert_eq!(RedTile::new(11, 1).area_with(&RedTile::new(11, 7)), 0);
    }

    #[test]
    fn test_area_any_corner_order() {
        let ul = RedTile::new(2, 5);
        let br = RedTile::new(11, 1);
        assert_eq!(ul.area_with(&br), 50);
        assert_eq!(br.area_with(&ul), 50);

        let ur = RedTile::new(9, 7);
        let bl = RedTile::new(7, 1);
        assert_eq!(ur.area_with(&bl), 21);
        assert_eq!(bl.area_with(&ur), 21);
    }

    #[test]
    fn test_worked_example_largest() {
        assert_eq!(example().largest_rectangle(), Ok(50));
    }

    #[test]
    fn test_worked_example_enclosed() {
        assert_eq!(example().largest_enclosed_rectangle(), Ok(24));
    }

    #[test]
    fn test_square_loop_encloses_itself() {
        let square = tiles(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
        assert_eq!(square.largest_enclosed_rectangle(), Ok(25));
    }

    #[test]
    fn test_l_shape_excludes_notch() {
        // ####
        // #..#
        // #..####
        // #.....#
        // #######
        let shape = tiles(&[(0, 0), (3, 0), (3, 2), (6, 2), (6, 4), (0, 4)]);
        assert_eq!(shape.largest_rectangle(), Ok(35));
        assert_eq!(shape.largest_enclosed_rectangle(), Ok(21));
    }

    #[test]
    fn test_narrow_slot_stays_enclosed() {
        // the two runs at x=2 and x=3 leave no tile between them
        let shape = tiles(&[
            (0, 0),
            (2, 0),
            (2, 4),
            (3, 4),
            (3, 0),
            (6, 0),
            (6, 6),
            (0, 6),
        ]);
        assert_eq!(shape.largest_enclosed_rectangle(), Ok(49));
    }

    #[test]
    fn test_wide_slot_is_outside() {
        // x=4 is outside the loop for rows 0 to 3
        let shape = tiles(&[
            (0, 0),
            (3, 0),
            (3, 4),
            (5, 4),
            (5, 0),
            (8, 0),
            (8, 6),
            (0, 6),
        ]);
        assert_eq!(shape.largest_rectangle(), Ok(63));
        // (0,6) to (3,0), left of the slot
        assert_eq!(shape.largest_enclosed_rectangle(), Ok(28));
    }

    #[test]
    fn test_tiles_in_a_line_span_nothing() {
        let line = tiles(&[(1, 1), (5, 1)]);
        assert_eq!(line.largest_rectangle(), Ok(0));
        assert_eq!(line.largest_enclosed_rectangle(), Ok(0));
    }

    #[test]
    fn test_too_few_tiles() {
        assert_eq!(
            tiles(&[(1, 1)]).largest_rectangle(),
            Err(SolveError::NotEnoughTiles {
                required: 2,
                available: 1
            })
        );
    }

    #[test]
    fn test_diagonal_edge_rejected() {
        let bent = tiles(&[(0, 0), (3, 0), (5, 5), (0, 5)]);
        assert_eq!(
            bent.largest_enclosed_rectangle(),
            Err(SolveError::DiagonalEdge { from: 2, to: 3 })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(RedTile::new(7, 1).to_string(), "7,1");
    }
}
