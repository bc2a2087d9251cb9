pub mod bounding_box;
pub mod distance;
pub mod error;
pub mod spatial_index;
