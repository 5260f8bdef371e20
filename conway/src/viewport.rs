// viewport.rs - Mapping between grid cells and the pixel rectangle a renderer draws into
//
// Nothing here draws. Callers pass the viewport on every call and paint
// the returned rectangles with whatever toolkit they use.

use crate::grid::Grid;

pub type Rgb = [u8; 3];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Pixel rectangle the grid is drawn into: upper-left corner plus size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A cell picked from pixel space. Signed, because a point can map to a
/// column or row outside the grid when the viewport origin is not zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellAddress {
    pub col: i32,
    pub row: i32,
}

impl CellAddress {
    /// `(col, row)` as grid indices, if the address lies inside `grid`.
    pub fn in_grid(self, grid: &Grid) -> Option<(usize, usize)> {
        let col = usize::try_from(self.col).ok()?;
        let row = usize::try_from(self.row).ok()?;
        (col < grid.cols() && row < grid.rows()).then_some((col, row))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub live: Rgb,
    pub dead: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            live: [255, 255, 0],
            dead: [100, 100, 100],
        }
    }
}

/// One filled rectangle to draw for one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellRect {
    pub row: usize,
    pub col: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Rgb,
}

impl Viewport {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    fn cell_size(&self, grid: &Grid) -> (f32, f32) {
        (
            self.width / grid.cols() as f32,
            self.height / grid.rows() as f32,
        )
    }

    /// Finds the cell under `p`.
    ///
    /// The bounds test and the boundary snap use `p` as-is, while the
    /// cell index is measured from the viewport origin. With the origin
    /// at (0, 0) both agree. A point on the right or lower edge of a
    /// cell belongs to that cell only when the cell size divides it
    /// exactly in `f32`; otherwise the far edge of the grid maps one past
    /// the last column or row.
    pub fn pixel_to_cell(&self, grid: &Grid, p: Point) -> Option<CellAddress> {
        if grid.rows() == 0 || grid.cols() == 0 || self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }

        let (cell_w, cell_h) = self.cell_size(grid);
        let max_x = grid.cols() as f32 * cell_w;
        let max_y = grid.rows() as f32 * cell_h;
        if !(0.0..=max_x).contains(&p.x) || !(0.0..=max_y).contains(&p.y) {
            return None;
        }

        let mut col = ((p.x - self.x) / cell_w).floor() as i32;
        let mut row = ((p.y - self.y) / cell_h).floor() as i32;
        if p.x != 0.0 && p.x % cell_w == 0.0 {
            col -= 1;
        }
        if p.y != 0.0 && p.y % cell_h == 0.0 {
            row -= 1;
        }

        Some(CellAddress { col, row })
    }

    /// Yields one rectangle per cell, row by row, coloured from `palette`.
    pub fn render_hints<'a>(
        &self,
        grid: &'a Grid,
        palette: Palette,
    ) -> impl Iterator<Item = CellRect> + 'a {
        let view = *self;
        let (cell_w, cell_h) = self.cell_size(grid);

        (0..grid.rows()).flat_map(move |row| {
            (0..grid.cols()).map(move |col| CellRect {
                row,
                col,
                x: view.x + col as f32 * cell_w,
                y: view.y + row as f32 * cell_h,
                width: cell_w,
                height: cell_h,
                color: if grid.is_alive(row, col) == Some(true) {
                    palette.live
                } else {
                    palette.dead
                },
            })
        })
    }
}
