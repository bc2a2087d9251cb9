pub mod search_params;
pub mod station;
pub mod statistics;
