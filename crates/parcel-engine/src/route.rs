//! Route triggering

use parcel_types::{LatLng, PropertyMarker, RouteRequest};

/// Request a route only for an unambiguous result: exactly one marker and a
/// known origin. Zero markers, several markers, or an unknown origin all
/// yield no-route; the caller retracts any route still showing. Several
/// candidates must never silently collapse to one destination.
pub fn decide_route(markers: &[PropertyMarker], origin: Option<LatLng>) -> Option<RouteRequest> {
    if markers.len() != 1 {
        return None;
    }
    let origin = origin?;
    let destination = LatLng::new(markers[0].lat, markers[0].lng);
    Some(RouteRequest {
        origin,
        destination,
    })
}
