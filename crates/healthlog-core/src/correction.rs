//! Known-data-quality workaround for the step-detail series.
//!
//! In the exported data the first readings logged under the second date
//! still carry the previous day's cumulative count. [`BoundaryCorrection`]
//! zeroes them after aggregation. It is positional: it only touches the
//! group at `group_ordinal`, never every day boundary.

use serde::Deserialize;

use crate::types::DailySeries;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BoundaryCorrection {
    /// 0-based position of the date group in ascending-date order.
    pub group_ordinal: usize,
    /// How many leading entries of that group are forced to zero.
    pub entries: usize,
}

impl Default for BoundaryCorrection {
    fn default() -> Self {
        Self {
            group_ordinal: 1,
            entries: 2,
        }
    }
}

impl BoundaryCorrection {
    /// Zero the leading entries of the configured group. Returns how many
    /// values were overwritten.
    pub fn apply<T: Default>(&self, series: &mut DailySeries<T>) -> usize {
        let Some(group) = series.get_mut(self.group_ordinal) else {
            tracing::debug!(
                groups = series.len(),
                group_ordinal = self.group_ordinal,
                "boundary correction skipped: group not present"
            );
            return 0;
        };

        let touched = group.points.len().min(self.entries);
        if touched < self.entries {
            tracing::debug!(
                date = %group.date,
                available = group.points.len(),
                requested = self.entries,
                "boundary correction applied to a short group"
            );
        }
        for point in group.points.iter_mut().take(touched) {
            point.value = T::default();
        }
        touched
    }
}
