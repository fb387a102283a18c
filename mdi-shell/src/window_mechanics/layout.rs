// mdi-shell/src/window_mechanics/layout.rs

//! The workspace's built-in arrangement algorithms.
//!
//! Tile and cascade belong to the workspace container, not to the window
//! manager: the manager only decides *when* they run and on which windows.
//! The fixed four-quadrant geometry used at startup and by reset lives here
//! too, since it is plain layout arithmetic.

use mdi_core::types::geometry::{PointInt, RectInt, SizeInt};
use mdi_core::WorkspaceConfig;

/// Trait for the workspace's arrangement algorithms.
pub trait LayoutAlgorithm: std::fmt::Debug + Send + Sync {
    /// Computes new geometry for a run of windows inside `area`.
    ///
    /// `current` holds the windows' present geometry in container order. The
    /// result has exactly one rect per input rect, in the same order. When
    /// `area` is empty the current geometry is returned unchanged.
    fn arrange(&self, current: &[RectInt], area: RectInt) -> Vec<RectInt>;

    /// Returns the name of the layout algorithm.
    fn name(&self) -> &'static str;
}

/// Grid tiling that partitions the area into non-overlapping cells.
///
/// `ncols = ceil(sqrt(n))`, `nrows = ceil(n / ncols)`. If the last row is
/// short by `k` cells, the first `k` windows of the top row span two rows so
/// no hole is left. The last column and row absorb the division remainder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegularTiler;

impl LayoutAlgorithm for RegularTiler {
    fn name(&self) -> &'static str {
        "RegularTiler"
    }

    fn arrange(&self, current: &[RectInt], area: RectInt) -> Vec<RectInt> {
        let n = current.len();
        if n == 0 || area.is_empty() {
            return current.to_vec();
        }

        let mut ncols = 1usize;
        while ncols * ncols < n {
            ncols += 1;
        }
        let nrows = (n + ncols - 1) / ncols;
        let nspecial = if n % ncols == 0 { 0 } else { ncols - n % ncols };

        let width = area.width();
        let height = area.height();
        let dx = width / ncols as u32;
        let dy = height / nrows as u32;

        let mut rects = Vec::with_capacity(n);
        for row in 0..nrows {
            for col in 0..ncols {
                if row == 1 && col < nspecial {
                    continue;
                }
                if rects.len() == n {
                    break;
                }
                let col_offset = dx * col as u32;
                let row_offset = dy * row as u32;

                let cell_width = if col == ncols - 1 { width - col_offset } else { dx };
                let cell_height = if row == 0 && col < nspecial {
                    if nrows == 2 { height } else { dy * 2 }
                } else if row == nrows - 1 {
                    height - row_offset
                } else {
                    dy
                };

                rects.push(RectInt::new(
                    area.origin.offset_by(col_offset, row_offset),
                    SizeInt::new(cell_width, cell_height),
                ));
            }
        }
        rects
    }
}

/// Diagonal cascade that keeps each window's size.
///
/// Window `i` is offset by `(step_x, step_y)` from the previous one. As many
/// rows fit as `(height - bottom_reserve) / step_y` allows; beyond that,
/// windows spread over additional columns spaced
/// `(width - right_reserve) / ncols` apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleCascader {
    pub step_x: u32,
    pub step_y: u32,
    pub bottom_reserve: u32,
    pub right_reserve: u32,
}

impl SimpleCascader {
    pub fn from_config(config: &WorkspaceConfig) -> Self {
        SimpleCascader {
            step_x: config.cascade_step_x,
            step_y: config.cascade_step_y,
            bottom_reserve: config.cascade_bottom_reserve,
            right_reserve: config.cascade_right_reserve,
        }
    }
}

impl Default for SimpleCascader {
    fn default() -> Self {
        Self::from_config(&WorkspaceConfig::default())
    }
}

impl LayoutAlgorithm for SimpleCascader {
    fn name(&self) -> &'static str {
        "SimpleCascader"
    }

    fn arrange(&self, current: &[RectInt], area: RectInt) -> Vec<RectInt> {
        let n = current.len();
        if n == 0 || area.is_empty() {
            return current.to_vec();
        }

        let step_y = self.step_y.max(1);
        let nrows = ((area.height().saturating_sub(self.bottom_reserve) / step_y) as usize).max(1);
        let ncols = ((n + nrows - 1) / nrows).max(1);
        let dcol = area.width().saturating_sub(self.right_reserve) / ncols as u32;

        current
            .iter()
            .enumerate()
            .map(|(i, rect)| {
                let row = (i / ncols) as u32;
                let col = (i % ncols) as u32;
                let dx = row.saturating_mul(self.step_x).saturating_add(col.saturating_mul(dcol));
                let dy = row.saturating_mul(step_y);
                RectInt::new(area.origin.offset_by(dx, dy), rect.size)
            })
            .collect()
    }
}

/// The four fixed quadrants for a workspace of `size`.
///
/// With `w = width / 2` and `h = height / 2` the origins are
/// `(0,0), (w,0), (0,h), (w,h)`; every quadrant is `(w - margin, h - margin)`.
pub fn quadrant_geometry(size: SizeInt, margin: u32) -> [RectInt; 4] {
    let half = size.half();
    let origin = PointInt::ZERO;
    let window_size = half.shrink(margin);
    [
        RectInt::new(origin, window_size),
        RectInt::new(origin.offset_by(half.width, 0), window_size),
        RectInt::new(origin.offset_by(0, half.height), window_size),
        RectInt::new(origin.offset_by(half.width, half.height), window_size),
    ]
}
