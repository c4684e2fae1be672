use wayfind::Request;

use crate::distance::{chebyshev, manhattan};
use crate::{Point, Terrain};

/// Which moves are allowed between cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movement {
    /// Up, right, down, left.
    #[default]
    Cardinal,
    /// Cardinal moves plus diagonals. A diagonal move needs both cells it
    /// squeezes between to be walkable.
    Diagonal,
}

/// Cost charged by [`GridRequest::cost`] for stepping onto a wall or off
/// the map. Never produced for positions returned by `neighbors`.
pub const IMPASSABLE: i32 = i32::MAX / 4;

/// A path query on a [`Terrain`] towards a fixed goal.
///
/// Each step costs the terrain cost of the cell being entered. The
/// heuristic is the Manhattan (cardinal) or Chebyshev (diagonal) distance
/// scaled by the map's cheapest cell, which keeps it admissible and
/// consistent.
#[derive(Debug, Clone, Copy)]
pub struct GridRequest<'a> {
    terrain: &'a Terrain,
    goal: Point,
    movement: Movement,
    min_cost: i32,
}

impl<'a> GridRequest<'a> {
    pub fn new(terrain: &'a Terrain, goal: Point) -> Self {
        Self {
            terrain,
            goal,
            movement: Movement::Cardinal,
            min_cost: terrain.min_cost(),
        }
    }

    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    #[inline]
    pub fn movement(&self) -> Movement {
        self.movement
    }

    #[inline]
    pub fn terrain(&self) -> &'a Terrain {
        self.terrain
    }
}

impl Request for GridRequest<'_> {
    type Position = Point;
    type Cost = i32;

    fn neighbors(&self, p: &Point, buf: &mut Vec<Point>) {
        let t = self.terrain;
        buf.extend(p.neighbors_4().into_iter().filter(|&n| t.is_walkable(n)));
        if self.movement == Movement::Diagonal {
            buf.extend(p.diagonals().into_iter().filter(|&n| {
                t.is_walkable(n)
                    && t.is_walkable(Point::new(n.x, p.y))
                    && t.is_walkable(Point::new(p.x, n.y))
            }));
        }
    }

    fn cost(&self, _from: &Point, to: &Point) -> i32 {
        self.terrain.cost_at(*to).unwrap_or(IMPASSABLE)
    }

    fn heuristic(&self, p: &Point) -> i32 {
        let d = match self.movement {
            Movement::Cardinal => manhattan(*p, self.goal),
            Movement::Diagonal => chebyshev(*p, self.goal),
        };
        d * self.min_cost
    }
}
