use crate::error::{ChartError, ChartResult, ensure_positive};

/// Ascending list of candles-shown values with a cursor on the active one.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomLevels {
    levels: Vec<f64>,
    current: usize,
}

impl ZoomLevels {
    pub fn new(levels: Vec<f64>, starting_index: usize) -> ChartResult<Self> {
        if levels.is_empty() {
            return Err(ChartError::invalid_parameter(
                "zoom_levels",
                "at least one zoom level is required",
            ));
        }
        for level in &levels {
            ensure_positive("zoom_levels", *level)?;
        }
        if levels.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ChartError::invalid_parameter(
                "zoom_levels",
                "zoom levels must be strictly ascending",
            ));
        }
        if starting_index >= levels.len() {
            return Err(ChartError::invalid_parameter(
                "starting_zoom_index",
                format!(
                    "index {starting_index} is out of bounds for {} zoom levels",
                    levels.len()
                ),
            ));
        }

        Ok(Self {
            levels,
            current: starting_index,
        })
    }

    #[must_use]
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current(&self) -> f64 {
        self.levels[self.current]
    }

    /// Moves to the next wider level. Returns `None` at the last level.
    pub fn zoom_out(&mut self) -> Option<f64> {
        if self.current + 1 >= self.levels.len() {
            return None;
        }
        self.current += 1;
        Some(self.current())
    }

    /// Moves to the previous narrower level. Returns `None` at the first level.
    pub fn zoom_in(&mut self) -> Option<f64> {
        self.current = self.current.checked_sub(1)?;
        Some(self.current())
    }
}
