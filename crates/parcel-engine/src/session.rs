//! Viewer session state
//!
//! Owns the live overlay state for one map view: the loaded index, the
//! incrementally-edited query, the origin once the location provider
//! delivers it, and the current marker/route outputs. Created when the view
//! loads and dropped when it is disposed; nothing here is process-global.

use parcel_types::{LatLng, PropertyMarker, RouteRequest, SearchQuery};

use crate::index::PropertyIndex;
use crate::{markers, route, search};

pub struct ViewerSession {
    index: PropertyIndex,
    query: SearchQuery,
    origin: Option<LatLng>,
    markers: Vec<PropertyMarker>,
    route: Option<RouteRequest>,
}

impl ViewerSession {
    pub fn new(index: PropertyIndex) -> Self {
        Self {
            index,
            query: SearchQuery::default(),
            origin: None,
            markers: Vec::new(),
            route: None,
        }
    }

    /// Edit one search field. The empty string clears the field. Each edit
    /// runs the full pipeline before returning, so the outputs never lag
    /// the query.
    pub fn set_lot(&mut self, value: impl Into<String>) {
        self.query.lot = value.into();
        self.recompute();
    }

    pub fn set_block(&mut self, value: impl Into<String>) {
        self.query.block = value.into();
        self.recompute();
    }

    pub fn set_section(&mut self, value: impl Into<String>) {
        self.query.section = value.into();
        self.recompute();
    }

    /// Origin arrival from the location provider. It may land before or
    /// after any number of query edits; either way the route decision is
    /// simply re-run with the origin now known.
    pub fn set_origin(&mut self, origin: LatLng) {
        self.origin = Some(origin);
        self.recompute();
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn origin(&self) -> Option<LatLng> {
        self.origin
    }

    /// The current marker set, replaced wholesale on every recompute.
    pub fn markers(&self) -> &[PropertyMarker] {
        &self.markers
    }

    /// The active route request, if the match is unambiguous and the origin
    /// is known.
    pub fn route(&self) -> Option<RouteRequest> {
        self.route
    }

    fn recompute(&mut self) {
        let matched = search::match_features(&self.index, &self.query);
        let markers = markers::project_markers(&matched);
        let route = route::decide_route(&markers, self.origin);
        // atomic replace: the old overlay state is gone before the new set
        // is installed, and a stale route never survives an edit
        self.markers = markers;
        self.route = route;
    }
}
