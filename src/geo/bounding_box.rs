use crate::types::station::StationRecord;

/// Stations whose latitude and longitude both differ from the center by less
/// than `threshold_deg`, in dataset order.
///
/// If nothing falls inside the box the whole dataset is returned instead, so a
/// query from a remote point still sees every station. The result is empty only
/// when `stations` is.
///
/// # Examples
///
/// ```
/// use police_locator::{bounding_box_candidates, StationRecord};
///
/// let stations = vec![
///     StationRecord::new("Fort", 6.9344, 79.8428, "Colombo"),
///     StationRecord::new("Kandy", 7.2906, 80.6337, "Kandy"),
/// ];
/// let near_colombo = bounding_box_candidates(&stations, 6.9271, 79.8612, 0.5);
/// assert_eq!(near_colombo.len(), 1);
///
/// // Nothing within 0.5° of Jaffna: fall back to everything.
/// let remote = bounding_box_candidates(&stations, 9.6615, 80.0255, 0.5);
/// assert_eq!(remote.len(), 2);
/// ```
pub fn bounding_box_candidates(
    stations: &[StationRecord],
    center_lat: f64,
    center_lng: f64,
    threshold_deg: f64,
) -> Vec<&StationRecord> {
    let in_box: Vec<&StationRecord> = stations
        .iter()
        .filter(|s| {
            within_box(
                s.latitude,
                s.longitude,
                center_lat,
                center_lng,
                threshold_deg,
                threshold_deg,
            )
        })
        .collect();

    if in_box.is_empty() {
        stations.iter().collect()
    } else {
        in_box
    }
}

/// Strict on both axes. The half-widths may differ so a box can be wider in
/// longitude than in latitude.
#[inline]
pub(crate) fn within_box(
    lat: f64,
    lng: f64,
    center_lat: f64,
    center_lng: f64,
    lat_half_width: f64,
    lng_half_width: f64,
) -> bool {
    (lat - center_lat).abs() < lat_half_width && (lng - center_lng).abs() < lng_half_width
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn stations() -> Vec<StationRecord> {
        vec![
            StationRecord::new("A", 7.0, 80.0, "North"),
            StationRecord::new("B", 7.4, 80.0, "North"),
            StationRecord::new("C", 7.0, 80.5, "East"),
            StationRecord::new("D", 9.0, 81.0, "Far"),
        ]
    }

    #[test]
    fn keeps_dataset_order() {
        let data = stations();
        let names: Vec<_> = bounding_box_candidates(&data, 7.1, 80.1, 0.5)
            .into_iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn threshold_is_exclusive() {
        let data = stations();
        // C sits exactly 0.5° east of A; it must not be in the box around A.
        let names: Vec<_> = bounding_box_candidates(&data, 7.0, 80.0, 0.5)
            .into_iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn falls_back_to_full_dataset() {
        let data = stations();
        let result = bounding_box_candidates(&data, 5.95, 79.6, 0.5);
        assert_eq!(result.len(), data.len());
    }

    #[test]
    fn empty_dataset_stays_empty() {
        assert!(bounding_box_candidates(&[], 7.0, 80.0, 0.5).is_empty());
    }

    proptest! {
        #[test]
        fn never_empty_for_non_empty_dataset(
            points in prop::collection::vec((-90.0f64..=90.0, -180.0f64..=180.0), 1..40),
            center in (-90.0f64..=90.0, -180.0f64..=180.0),
            threshold in 0.0f64..5.0,
        ) {
            let data: Vec<StationRecord> = points
                .iter()
                .enumerate()
                .map(|(i, (lat, lng))| StationRecord::new(format!("S{i}"), *lat, *lng, "Area"))
                .collect();
            let result = bounding_box_candidates(&data, center.0, center.1, threshold);
            prop_assert!(!result.is_empty());
        }
    }
}
