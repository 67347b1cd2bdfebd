//! Auto-fit focus height.
//!
//! In focused mode the secondary grid is usually narrower or shorter than its
//! band, which leaves an empty strip between the focus tile and the grid. The
//! solver packs the secondary tiles below a hypothetical focus band, measures
//! the height they actually use and gives everything else to the focus band.
//!
//! Packing N-1 tiles into a band exactly as tall as the measured mosaic
//! yields the same mosaic, so a single pass reaches a fixed point.

use super::grid::{self, RowPolicy};
use super::helpers::clamp_percent;
use crate::config::{FocusHeight, ViewMode};
use crate::mosaic::constants::layout::DEFAULT_FOCUS_HEIGHT_PERCENT;
use crate::mosaic::geometry::{Rect, Size};

/// Computes the focus height percentage that removes the gap above the
/// secondary grid.
///
/// `base_focus_percent` is the focus band assumed while measuring.
///
/// Returns `None` when there are fewer than two secondary tiles or the
/// container size is unusable.
#[must_use]
pub fn auto_fit_focus_height(count: usize, container: Size, base_focus_percent: f64) -> Option<f64> {
    let secondary_count = count.checked_sub(1).filter(|n| *n >= 2)?;
    if !container.is_usable() {
        return None;
    }

    let base = clamp_percent(base_focus_percent, DEFAULT_FOCUS_HEIGHT_PERCENT);
    let band_height = container.height * (100.0 - base) / 100.0;
    let band = Rect::new(0.0, 0.0, container.width, band_height);

    let packing = grid::pack(secondary_count, &band, RowPolicy::TopRowLight);
    if packing.cells.len() != secondary_count {
        return None;
    }

    let used = packing.bounds.height / container.height * 100.0;
    Some((100.0 - used).clamp(0.0, 100.0))
}

/// Inputs the solved height depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SolverInputs {
    view_mode: ViewMode,
    count: usize,
    size: Size,
}

/// Keeps the auto-fit height current for one layout surface.
///
/// Recomputes only when the view mode, tile count or container size changes.
#[derive(Debug, Clone)]
pub struct AutoFitSolver {
    base_focus_percent: f64,
    last_inputs: Option<SolverInputs>,
    solved: Option<f64>,
}

impl Default for AutoFitSolver {
    fn default() -> Self { Self::new(DEFAULT_FOCUS_HEIGHT_PERCENT) }
}

impl AutoFitSolver {
    /// Creates a solver measuring below a focus band of `base_focus_percent`.
    #[must_use]
    pub const fn new(base_focus_percent: f64) -> Self {
        Self { base_focus_percent, last_inputs: None, solved: None }
    }

    /// Last solved height, if any.
    #[must_use]
    pub const fn solved(&self) -> Option<f64> { self.solved }

    /// Observes the current inputs and returns the focus height to use.
    ///
    /// Only acts in focused mode with an automatic preference. Returns `None`
    /// when the solver has nothing to contribute, in which case the caller
    /// keeps its current height.
    pub fn observe(
        &mut self,
        view_mode: ViewMode,
        count: usize,
        size: Size,
        preference: FocusHeight,
    ) -> Option<f64> {
        if view_mode != ViewMode::Focused || !preference.is_auto() {
            return None;
        }

        let inputs = SolverInputs { view_mode, count, size };
        if self.last_inputs == Some(inputs) {
            return self.solved;
        }

        self.last_inputs = Some(inputs);
        self.solved = auto_fit_focus_height(count, size, self.base_focus_percent);
        tracing::debug!(count, width = size.width, height = size.height, solved = ?self.solved, "auto-fit focus height");
        self.solved
    }

    /// Forgets the last inputs so the next observation recomputes.
    pub const fn invalidate(&mut self) { self.last_inputs = None; }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Size = Size::new(1600.0, 900.0);

    #[test]
    fn test_needs_two_secondary_tiles() {
        assert_eq!(auto_fit_focus_height(0, SIZE, 70.0), None);
        assert_eq!(auto_fit_focus_height(1, SIZE, 70.0), None);
        assert_eq!(auto_fit_focus_height(2, SIZE, 70.0), None);
        assert!(auto_fit_focus_height(3, SIZE, 70.0).is_some());
    }

    #[test]
    fn test_unknown_size_is_noop() {
        assert_eq!(auto_fit_focus_height(5, Size::default(), 70.0), None);
        assert_eq!(auto_fit_focus_height(5, Size::new(f64::NAN, 900.0), 70.0), None);
    }

    #[test]
    fn test_height_limited_band_keeps_base() {
        // Two secondary tiles fill a 1600×270 band as one 480×270 row
        let height = auto_fit_focus_height(3, SIZE, 70.0).unwrap();
        assert!((height - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_row_grows_focus() {
        // Four secondary tiles in a 1600×270 band form a 400×225 row
        let height = auto_fit_focus_height(5, SIZE, 70.0).unwrap();
        assert!((height - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_width_limited_band_grows_focus() {
        // Two secondary tiles in a 400×540 band stack vertically at 400×225
        let size = Size::new(400.0, 900.0);
        let height = auto_fit_focus_height(3, size, 40.0).unwrap();
        assert!((height - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_solution_is_a_fixed_point() {
        let size = Size::new(1280.0, 1024.0);
        for count in 3..10 {
            let first = auto_fit_focus_height(count, size, 70.0).unwrap();
            let again = auto_fit_focus_height(count, size, first).unwrap();
            assert!((first - again).abs() < 1e-6, "count {count}: {first} vs {again}");
        }
    }

    #[test]
    fn test_solver_only_acts_when_auto_and_focused() {
        let mut solver = AutoFitSolver::new(70.0);
        assert_eq!(solver.observe(ViewMode::Grid, 5, SIZE, FocusHeight::AUTO), None);
        assert_eq!(solver.observe(ViewMode::Focused, 5, SIZE, FocusHeight::Percent(60.0)), None);
        assert!(solver.observe(ViewMode::Focused, 5, SIZE, FocusHeight::AUTO).is_some());
    }

    #[test]
    fn test_solver_recomputes_on_change() {
        let mut solver = AutoFitSolver::new(40.0);
        let wide = solver.observe(ViewMode::Focused, 3, SIZE, FocusHeight::AUTO);
        assert_eq!(solver.observe(ViewMode::Focused, 3, SIZE, FocusHeight::AUTO), wide);

        let narrow = solver.observe(ViewMode::Focused, 3, Size::new(400.0, 1200.0), FocusHeight::AUTO);
        assert_ne!(wide, narrow);
        assert_eq!(solver.solved(), narrow);

        assert_eq!(solver.observe(ViewMode::Focused, 2, SIZE, FocusHeight::AUTO), None);
    }
}
