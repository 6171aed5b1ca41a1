//! Marker projection for matched properties

use parcel_types::{PropertyFeature, PropertyMarker};

/// One marker per matched feature, order preserved. The label is the legal
/// description, prefixed with the owner name when the record has one; the
/// special-location flag is carried straight through for icon selection by
/// the renderer.
pub fn project_markers(features: &[&PropertyFeature]) -> Vec<PropertyMarker> {
    features
        .iter()
        .map(|feature| PropertyMarker {
            lat: feature.location.lat,
            lng: feature.location.lng,
            label: match &feature.owner {
                Some(owner) => format!("{} ({})", owner, feature.legal_desc),
                None => feature.legal_desc.clone(),
            },
            is_special_location: feature.special_location,
        })
        .collect()
}
