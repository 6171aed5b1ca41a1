//! Tax-lot dataset loading
//!
//! The dataset is a GeoJSON-style feature collection: point geometry in
//! `[longitude, latitude]` order plus a `legaldesc` property, an optional
//! `owner`, and an optional special-location flag. It is read once at
//! startup and never written afterwards.

use std::fs;
use std::path::Path;

use parcel_types::{LatLng, PropertyFeature};
use serde::Deserialize;

use crate::error::EngineError;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
    #[serde(default)]
    properties: FeatureProperties,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    coordinates: [f64; 2], // [lng, lat]
}

#[derive(Debug, Default, Deserialize)]
struct FeatureProperties {
    #[serde(default)]
    legaldesc: Option<String>,
    #[serde(default)]
    owner: Option<String>,
    #[serde(default, rename = "isSpecialLocation")]
    is_special_location: bool,
}

/// In-memory collection of property features. Constant after load;
/// iteration follows file order.
#[derive(Debug, Clone)]
pub struct PropertyIndex {
    features: Vec<PropertyFeature>,
    loaded_at: i64,
}

impl PropertyIndex {
    /// Load the dataset from disk. A missing or unreadable file is fatal.
    pub fn load_from_path(path: &Path) -> Result<Self, EngineError> {
        let raw = fs::read_to_string(path)?;
        Self::load_from_json(&raw)
    }

    /// Parse a feature collection. A record without a `legaldesc` is kept
    /// with an empty description — it simply never matches a complete
    /// query — so partial records cannot fail the load.
    pub fn load_from_json(raw: &str) -> Result<Self, EngineError> {
        let collection: FeatureCollection = serde_json::from_str(raw)?;
        let features = collection
            .features
            .into_iter()
            .map(|feature| {
                let [lng, lat] = feature.geometry.coordinates;
                PropertyFeature {
                    legal_desc: feature.properties.legaldesc.unwrap_or_default(),
                    owner: feature.properties.owner,
                    location: LatLng::new(lat, lng),
                    special_location: feature.properties.is_special_location,
                }
            })
            .collect();
        Ok(Self::from_features(features))
    }

    /// Build an index from already-materialized features.
    pub fn from_features(features: Vec<PropertyFeature>) -> Self {
        tracing::info!("Loaded {} tax-lot features", features.len());
        Self {
            features,
            loaded_at: chrono::Utc::now().timestamp(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyFeature> {
        self.features.iter()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Unix timestamp of when this index was materialized.
    pub fn loaded_at(&self) -> i64 {
        self.loaded_at
    }
}
