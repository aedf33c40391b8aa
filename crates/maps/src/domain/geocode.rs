use crate::domain::{DirectionsStatus, LatLng};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct GeocodeGeometry {
    pub location: Option<LatLng>,
    pub location_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct GeocodeResult {
    pub formatted_address: String,
    pub place_id: String,
    pub geometry: GeocodeGeometry,
    pub types: Vec<String>,
}

/// What the provider hands back for one address lookup. The status literal
/// shares the directions set; geocoding-only literals land in `Other`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeReply {
    pub status: DirectionsStatus,
    pub results: Vec<GeocodeResult>,
}

impl GeocodeReply {
    pub fn failed(status: DirectionsStatus) -> Self {
        Self {
            status,
            results: Vec::new(),
        }
    }

    pub fn first_location(&self) -> Option<LatLng> {
        self.results.first().and_then(|r| r.geometry.location)
    }
}
