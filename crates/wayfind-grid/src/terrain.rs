//! Walkable terrain with per-cell step costs.

use crate::{GridError, Point};

/// A rectangular map. Every cell is either a wall or walkable with a
/// positive cost for stepping onto it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Terrain {
    width: i32,
    height: i32,
    cells: Vec<Option<i32>>,
}

impl Terrain {
    /// Create an open map where every cell costs 1. Negative sizes are
    /// treated as 0.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![Some(1); cell_count(width, height)],
        }
    }

    /// Parse a map drawn with `#` for walls, `.` for floor (cost 1) and
    /// `1`-`9` for floor of that cost.
    ///
    /// Blank lines and surrounding whitespace are ignored; all remaining
    /// rows must have the same width.
    pub fn from_ascii(map: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = map
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(GridError::EmptyMap);
        };
        let width = first.chars().count();

        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '#' => None,
                    '.' => Some(1),
                    '1'..='9' => ch.to_digit(10).map(|d| d as i32),
                    _ => {
                        return Err(GridError::InvalidCell {
                            ch,
                            at: Point::new(x as i32, y as i32),
                        });
                    }
                };
                cells.push(cell);
            }
        }

        Ok(Self {
            width: width as i32,
            height: rows.len() as i32,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point` (width, height).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        self.contains(p).then(|| cell_index(self.width, p))
    }

    /// Cost of stepping onto `p`, or `None` for walls and points outside
    /// the map.
    #[inline]
    pub fn cost_at(&self, p: Point) -> Option<i32> {
        self.idx(p).and_then(|i| self.cells[i])
    }

    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.cost_at(p).is_some()
    }

    pub fn set_wall(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.idx(p).ok_or(GridError::OutOfBounds(p))?;
        self.cells[i] = None;
        Ok(())
    }

    /// Make `p` walkable with the given step cost.
    pub fn set_cost(&mut self, p: Point, cost: i32) -> Result<(), GridError> {
        if cost <= 0 {
            return Err(GridError::NonPositiveCost(cost));
        }
        let i = self.idx(p).ok_or(GridError::OutOfBounds(p))?;
        self.cells[i] = Some(cost);
        Ok(())
    }

    /// Cheapest step cost on the map, 1 if nothing is walkable.
    pub fn min_cost(&self) -> i32 {
        self.cells.iter().flatten().copied().min().unwrap_or(1)
    }

    /// Walkable points in row-major order.
    pub fn walkable(&self) -> impl Iterator<Item = Point> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().filter_map(move |(i, c)| {
            c.map(|_| Point::new((i % width) as i32, (i / width) as i32))
        })
    }
}

// Sizes are non-negative i32s whose product may not fit in an i32.
fn cell_count(width: i32, height: i32) -> usize {
    width as usize * height as usize
}

fn cell_index(width: i32, p: Point) -> usize {
    p.y as usize * width as usize + p.x as usize
}
