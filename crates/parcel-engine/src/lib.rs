pub mod error;
pub mod extract;
pub mod index;
pub mod markers;
pub mod patterns;
pub mod route;
pub mod search;
pub mod session;

use parcel_types::{LatLng, PropertyMarker, RouteRequest, SearchQuery};

use crate::index::PropertyIndex;

/// ParcelEngine entry point
pub struct ParcelEngine {
    index: PropertyIndex,
}

impl ParcelEngine {
    pub fn new(index: PropertyIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &PropertyIndex {
        &self.index
    }

    /// Run the whole query pipeline in one call: match the index, project
    /// markers, decide routing. Pure in (query, origin) — calling it twice
    /// with the same inputs yields the same outputs.
    pub fn evaluate(
        &self,
        query: &SearchQuery,
        origin: Option<LatLng>,
    ) -> (Vec<PropertyMarker>, Option<RouteRequest>) {
        let matched = search::match_features(&self.index, query);
        let markers = markers::project_markers(&matched);
        let route = route::decide_route(&markers, origin);
        (markers, route)
    }
}
