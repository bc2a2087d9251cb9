//! R-tree backed version of the bounding-box prefilter.
//!
//! The tree answers "which stations are near this point" without scanning the
//! whole dataset. It stores dataset positions rather than records, so callers
//! can restore dataset order and borrow the records from the dataset itself.

use crate::geo::bounding_box::within_box;
use crate::types::station::StationRecord;
use log::warn;
use rstar::{PointDistance, RTree, RTreeObject, AABB};

/// A station's position in the tree, tagged with its index in the dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
struct StationNode {
    index: usize,
    point: [f64; 2],
}

impl RTreeObject for StationNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for StationNode {
    /// Squared Euclidean distance in degree space, `[lat, lng]`.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

#[derive(Debug, Clone)]
pub struct SpatialIndex {
    rtree: RTree<StationNode>,
    len: usize,
}

impl SpatialIndex {
    /// Builds the tree. Records with non-finite coordinates are left out of
    /// the tree but still count towards the fallback set.
    pub fn new(stations: &[StationRecord]) -> Self {
        let nodes: Vec<StationNode> = stations
            .iter()
            .enumerate()
            .filter_map(|(index, station)| {
                if station.latitude.is_finite() && station.longitude.is_finite() {
                    Some(StationNode {
                        index,
                        point: [station.latitude, station.longitude],
                    })
                } else {
                    warn!(
                        "Station '{}' has non-finite coordinates and is not spatially indexed",
                        station.name
                    );
                    None
                }
            })
            .collect();

        Self {
            rtree: RTree::bulk_load(nodes),
            len: stations.len(),
        }
    }

    /// Dataset indices of the stations inside the `threshold_deg` box around
    /// the center, ascending. Same selection and fallback as
    /// [`crate::bounding_box_candidates`].
    pub fn candidates(&self, center_lat: f64, center_lng: f64, threshold_deg: f64) -> Vec<usize> {
        self.candidates_in_box(center_lat, center_lng, threshold_deg, threshold_deg)
    }

    /// Like [`SpatialIndex::candidates`], with separate latitude and longitude
    /// half-widths.
    pub fn candidates_in_box(
        &self,
        center_lat: f64,
        center_lng: f64,
        lat_half_width: f64,
        lng_half_width: f64,
    ) -> Vec<usize> {
        // Every point of the rectangle lies within the circle through its corners.
        let max_squared_radius = lat_half_width * lat_half_width + lng_half_width * lng_half_width;
        let mut indices: Vec<usize> = self
            .rtree
            .locate_within_distance([center_lat, center_lng], max_squared_radius)
            .filter(|node| {
                within_box(
                    node.point[0],
                    node.point[1],
                    center_lat,
                    center_lng,
                    lat_half_width,
                    lng_half_width,
                )
            })
            .map(|node| node.index)
            .collect();

        if indices.is_empty() {
            return (0..self.len).collect();
        }
        indices.sort_unstable();
        indices
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
