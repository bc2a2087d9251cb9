//! Accepts both call shapes of the nearest-station search.
//!
//! New callers pass a [`SearchParams`]; older callers pass positional
//! `(lat, lng)` or `(lat, lng, limit)` tuples. Both end up as the same
//! [`SearchParams`] before anything else happens, so sanitizing and validation
//! run once, the same way, for either shape.

use crate::types::search_params::SearchParams;
use log::warn;

#[derive(Debug, Clone, PartialEq)]
pub enum NearestRequest {
    Structured(SearchParams),
    /// Deprecated positional form. Still accepted; logged on use.
    Positional {
        lat: f64,
        lng: f64,
        limit: Option<f64>,
    },
}

impl NearestRequest {
    /// Collapses either shape into a [`SearchParams`].
    ///
    /// # Examples
    ///
    /// ```
    /// use police_locator::{NearestRequest, SearchParams};
    ///
    /// let positional = NearestRequest::from((6.9271, 79.8612, 3.0)).into_params();
    /// let structured = NearestRequest::from(SearchParams::nearest(6.9271, 79.8612, Some(3.0)))
    ///     .into_params();
    /// assert_eq!(positional, structured);
    /// ```
    pub fn into_params(self) -> SearchParams {
        match self {
            NearestRequest::Structured(params) => params,
            NearestRequest::Positional { lat, lng, limit } => {
                warn!(
                    "Positional nearest-station arguments ({}, {}, {:?}) are deprecated; pass SearchParams instead",
                    lat, lng, limit
                );
                SearchParams::nearest(lat, lng, limit)
            }
        }
    }

    pub fn is_positional(&self) -> bool {
        matches!(self, NearestRequest::Positional { .. })
    }
}

impl From<SearchParams> for NearestRequest {
    fn from(params: SearchParams) -> Self {
        NearestRequest::Structured(params)
    }
}

impl From<(f64, f64)> for NearestRequest {
    fn from((lat, lng): (f64, f64)) -> Self {
        NearestRequest::Positional {
            lat,
            lng,
            limit: None,
        }
    }
}

impl From<(f64, f64, f64)> for NearestRequest {
    fn from((lat, lng, limit): (f64, f64, f64)) -> Self {
        NearestRequest::Positional {
            lat,
            lng,
            limit: Some(limit),
        }
    }
}

impl From<(f64, f64, Option<f64>)> for NearestRequest {
    fn from((lat, lng, limit): (f64, f64, Option<f64>)) -> Self {
        NearestRequest::Positional { lat, lng, limit }
    }
}
