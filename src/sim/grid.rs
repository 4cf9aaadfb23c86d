//! Static level terrain
//!
//! The grid is indexed `[row][column]`. Rows may have different lengths;
//! the grid is as wide as its longest row and missing cells are empty.

use serde::{Deserialize, Serialize};

use super::geometry::{Bounds, Vector};

/// Static obstacle kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Obstacle {
    /// Solid terrain (also every world edge except the bottom)
    Wall,
    /// Deadly terrain (also the space below the grid)
    Lava,
}

impl Obstacle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Obstacle::Wall => "wall",
            Obstacle::Lava => "lava",
        }
    }
}

/// Fixed grid of static cells, `None` meaning empty
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Vec<Option<Obstacle>>>,
    width: usize,
}

impl Grid {
    pub fn new(cells: Vec<Vec<Option<Obstacle>>>) -> Self {
        let width = cells.iter().map(Vec::len).max().unwrap_or(0);
        Self { cells, width }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// Cell at column `x`, row `y` (out-of-range cells are empty)
    pub fn cell(&self, x: usize, y: usize) -> Option<Obstacle> {
        self.cells.get(y).and_then(|row| row.get(x)).copied().flatten()
    }

    /// Whether a box at `pos` with `size` touches any `obstacle` at all.
    ///
    /// Unlike [`Grid::obstacle_at`] an earlier obstacle of another kind
    /// never hides this one. World edges count as for `obstacle_at`.
    pub fn touches(&self, pos: Vector, size: Vector, obstacle: Obstacle) -> bool {
        let bounds = Bounds::new(pos, size);

        let past_edge = match obstacle {
            Obstacle::Lava => bounds.bottom > self.height() as f32,
            Obstacle::Wall => {
                bounds.left < 0.0 || bounds.top < 0.0 || bounds.right > self.width as f32
            }
        };
        if past_edge {
            return true;
        }

        let (cols, rows) = bounds.tile_span();
        let cols = cols.start.max(0)..cols.end.min(self.width as i32);
        let rows = rows.start.max(0)..rows.end.min(self.height() as i32);
        rows.flat_map(|y| cols.clone().map(move |x| (x as usize, y as usize)))
            .any(|(x, y)| self.cell(x, y) == Some(obstacle))
    }

    /// Terrain a box at `pos` with `size` would intersect.
    ///
    /// Evaluated against a proposed position before it is committed. The
    /// bottom edge of the world is lava, the other three edges are walls,
    /// and inside the grid the first non-empty covered cell wins
    /// (row-major scan).
    pub fn obstacle_at(&self, pos: Vector, size: Vector) -> Option<Obstacle> {
        let bounds = Bounds::new(pos, size);

        if bounds.bottom > self.height() as f32 {
            return Some(Obstacle::Lava);
        }
        if bounds.left < 0.0 || bounds.top < 0.0 || bounds.right > self.width as f32 {
            return Some(Obstacle::Wall);
        }

        let (cols, rows) = bounds.tile_span();
        for y in rows {
            for x in cols.clone() {
                if let Some(obstacle) = self.cell(x as usize, y as usize) {
                    return Some(obstacle);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const W: Option<Obstacle> = Some(Obstacle::Wall);
    const L: Option<Obstacle> = Some(Obstacle::Lava);

    fn open_grid(width: usize, height: usize) -> Grid {
        Grid::new(vec![vec![None; width]; height])
    }

    #[test]
    fn test_dimensions_use_longest_row() {
        let grid = Grid::new(vec![vec![None; 2], vec![None; 5], vec![]]);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.cell(4, 0), None);
        assert_eq!(grid.cell(9, 9), None);
    }

    #[test]
    fn test_open_space_has_no_obstacle() {
        let grid = open_grid(5, 5);
        assert_eq!(grid.obstacle_at(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0)), None);
        assert_eq!(grid.obstacle_at(Vec2::new(3.5, 2.2), Vec2::new(0.8, 1.5)), None);
        // Flush against the right and bottom edges is still inside
        assert_eq!(grid.obstacle_at(Vec2::new(4.0, 4.0), Vec2::new(1.0, 1.0)), None);
    }

    #[test]
    fn test_below_grid_is_lava() {
        let grid = open_grid(5, 5);
        assert_eq!(
            grid.obstacle_at(Vec2::new(1.0, 4.5), Vec2::new(1.0, 1.0)),
            Some(Obstacle::Lava)
        );
    }

    #[test]
    fn test_bottom_check_wins_over_side_walls() {
        let grid = open_grid(5, 5);
        assert_eq!(
            grid.obstacle_at(Vec2::new(-1.0, 4.5), Vec2::new(1.0, 1.0)),
            Some(Obstacle::Lava)
        );
    }

    #[test]
    fn test_world_edges_are_walls() {
        let grid = open_grid(5, 5);
        let size = Vec2::new(1.0, 1.0);
        assert_eq!(grid.obstacle_at(Vec2::new(-0.1, 1.0), size), Some(Obstacle::Wall));
        assert_eq!(grid.obstacle_at(Vec2::new(1.0, -0.1), size), Some(Obstacle::Wall));
        assert_eq!(grid.obstacle_at(Vec2::new(4.1, 1.0), size), Some(Obstacle::Wall));
    }

    #[test]
    fn test_first_covered_cell_wins() {
        let grid = Grid::new(vec![
            vec![None, None, None],
            vec![None, L, W],
            vec![None, None, None],
        ]);
        // Box straddling both obstacle cells reports the row-major first one
        assert_eq!(
            grid.obstacle_at(Vec2::new(1.5, 1.0), Vec2::new(1.0, 1.0)),
            Some(Obstacle::Lava)
        );
        assert_eq!(
            grid.obstacle_at(Vec2::new(2.0, 0.5), Vec2::new(1.0, 1.0)),
            Some(Obstacle::Wall)
        );
        // Resting exactly on top of the wall does not touch it
        assert_eq!(grid.obstacle_at(Vec2::new(2.0, 0.0), Vec2::new(1.0, 1.0)), None);
    }

    #[test]
    fn test_short_rows_are_open() {
        let grid = Grid::new(vec![vec![None, None, None], vec![W]]);
        assert_eq!(grid.obstacle_at(Vec2::new(2.0, 1.0), Vec2::new(1.0, 1.0)), None);
        assert_eq!(
            grid.obstacle_at(Vec2::new(0.5, 1.0), Vec2::new(1.0, 1.0)),
            Some(Obstacle::Wall)
        );
    }

    #[test]
    fn test_touches_sees_lava_behind_walls() {
        // Player box poking above the top edge, lava to its right
        let grid = Grid::new(vec![vec![None, L], vec![W, W]]);
        let (pos, size) = (Vec2::new(0.5, -0.5), Vec2::new(0.8, 1.5));
        assert_eq!(grid.obstacle_at(pos, size), Some(Obstacle::Wall));
        assert!(grid.touches(pos, size, Obstacle::Lava));
        assert!(grid.touches(pos, size, Obstacle::Wall));

        // Wall cell scanned before the lava row below it
        let grid = Grid::new(vec![vec![W, None], vec![L, L], vec![None, None]]);
        let (pos, size) = (Vec2::new(0.5, 0.2), Vec2::new(0.8, 1.5));
        assert_eq!(grid.obstacle_at(pos, size), Some(Obstacle::Wall));
        assert!(grid.touches(pos, size, Obstacle::Lava));
    }

    #[test]
    fn test_touches_world_edges() {
        let grid = open_grid(3, 3);
        let size = Vec2::new(1.0, 1.0);
        assert!(grid.touches(Vec2::new(1.0, 2.5), size, Obstacle::Lava));
        assert!(!grid.touches(Vec2::new(1.0, 2.0), size, Obstacle::Lava));
        assert!(grid.touches(Vec2::new(-0.5, 1.0), size, Obstacle::Wall));
        assert!(!grid.touches(Vec2::new(-0.5, 1.0), size, Obstacle::Lava));
        assert!(!grid.touches(Vec2::new(1.0, 1.0), size, Obstacle::Wall));
    }

    #[test]
    fn test_obstacle_names() {
        assert_eq!(Obstacle::Wall.as_str(), "wall");
        assert_eq!(Obstacle::Lava.as_str(), "lava");
    }
}
