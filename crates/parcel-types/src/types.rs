/// Geographic point, degrees. Stored lat-first; the dataset wire format is
/// lng-first and gets swapped at load.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// One extracted lot/block/section record from an assessor text export.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParcelTriple {
    pub lot_type: String, // "LT" or "LOT", as matched
    pub lot: String,
    pub block: String,
    pub section: String,
    pub raw_text: String, // the full matched span
}

/// A property record from the tax-lot dataset.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropertyFeature {
    pub legal_desc: String, // empty when the source record had none
    pub owner: Option<String>,
    pub location: LatLng,
    pub special_location: bool,
}

/// The three lot/block/section search fields. Edited independently; a field
/// holding the empty string counts as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SearchQuery {
    pub lot: String,
    pub block: String,
    pub section: String,
}

impl SearchQuery {
    pub fn new(lot: impl Into<String>, block: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            lot: lot.into(),
            block: block.into(),
            section: section.into(),
        }
    }

    /// All three fields populated. Incomplete queries never filter.
    pub fn is_complete(&self) -> bool {
        !self.lot.is_empty() && !self.block.is_empty() && !self.section.is_empty()
    }
}

/// A renderable map marker derived from a matched property.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMarker {
    pub lat: f64,
    pub lng: f64,
    pub label: String,
    pub is_special_location: bool,
}

/// A request for the routing collaborator: draw a path origin → destination.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RouteRequest {
    pub origin: LatLng,
    pub destination: LatLng,
}
