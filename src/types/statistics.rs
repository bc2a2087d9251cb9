use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive min/max of one coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

/// Descriptive summary of a loaded dataset.
///
/// The axis ranges are `None` when the dataset is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStatistics {
    pub total_stations: usize,
    pub unique_areas: usize,
    pub latitude: Option<AxisRange>,
    pub longitude: Option<AxisRange>,
    pub generated_at: DateTime<Utc>,
}

impl AxisRange {
    /// Folds `values` into a range, ignoring non-finite entries.
    pub(crate) fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<AxisRange>, v| match acc {
                None => Some(AxisRange { min: v, max: v }),
                Some(r) => Some(AxisRange {
                    min: r.min.min(v),
                    max: r.max.max(v),
                }),
            })
    }
}
