pub mod types;

pub use types::{LatLng, ParcelTriple, PropertyFeature, PropertyMarker, RouteRequest, SearchQuery};
