use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `lat,lng`, the form the directions endpoint takes for coordinates.
    pub fn to_query(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum TravelMode {
    Driving,
}

impl TravelMode {
    pub fn as_query(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DirectionsRequest {
    pub origin: LatLng,
    pub destination: LatLng,
    pub travel_mode: TravelMode,
    pub provide_route_alternatives: bool,
}

impl DirectionsRequest {
    pub fn driving(origin: LatLng, destination: LatLng) -> Self {
        Self {
            origin,
            destination,
            travel_mode: TravelMode::Driving,
            provide_route_alternatives: true,
        }
    }
}

/// Outcome literal of a route or geocode request. Literals outside the known
/// set are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DirectionsStatus {
    Ok,
    NotFound,
    ZeroResults,
    MaxWaypointsExceeded,
    MaxRouteLengthExceeded,
    InvalidRequest,
    OverQueryLimit,
    RequestDenied,
    UnknownError,
    Other(String),
}

impl DirectionsStatus {
    pub fn as_str(&self) -> &str {
        match self {
            DirectionsStatus::Ok => "OK",
            DirectionsStatus::NotFound => "NOT_FOUND",
            DirectionsStatus::ZeroResults => "ZERO_RESULTS",
            DirectionsStatus::MaxWaypointsExceeded => "MAX_WAYPOINTS_EXCEEDED",
            DirectionsStatus::MaxRouteLengthExceeded => "MAX_ROUTE_LENGTH_EXCEEDED",
            DirectionsStatus::InvalidRequest => "INVALID_REQUEST",
            DirectionsStatus::OverQueryLimit => "OVER_QUERY_LIMIT",
            DirectionsStatus::RequestDenied => "REQUEST_DENIED",
            DirectionsStatus::UnknownError => "UNKNOWN_ERROR",
            DirectionsStatus::Other(literal) => literal,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, DirectionsStatus::Ok)
    }
}

impl From<String> for DirectionsStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "OK" => DirectionsStatus::Ok,
            "NOT_FOUND" => DirectionsStatus::NotFound,
            "ZERO_RESULTS" => DirectionsStatus::ZeroResults,
            "MAX_WAYPOINTS_EXCEEDED" => DirectionsStatus::MaxWaypointsExceeded,
            "MAX_ROUTE_LENGTH_EXCEEDED" => DirectionsStatus::MaxRouteLengthExceeded,
            "INVALID_REQUEST" => DirectionsStatus::InvalidRequest,
            "OVER_QUERY_LIMIT" => DirectionsStatus::OverQueryLimit,
            "REQUEST_DENIED" => DirectionsStatus::RequestDenied,
            "UNKNOWN_ERROR" => DirectionsStatus::UnknownError,
            _ => DirectionsStatus::Other(value),
        }
    }
}

impl From<DirectionsStatus> for String {
    fn from(value: DirectionsStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for DirectionsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TextValue {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub value: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Polyline {
    #[serde(default)]
    pub points: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Leg {
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
    pub start_address: String,
    pub end_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Route {
    pub summary: String,
    pub legs: Vec<Leg>,
    pub overview_polyline: Polyline,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct DirectionsResult {
    pub routes: Vec<Route>,
}

/// What the provider hands back for one route request.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteReply {
    pub status: DirectionsStatus,
    pub result: Option<DirectionsResult>,
}

impl RouteReply {
    pub fn failed(status: DirectionsStatus) -> Self {
        Self {
            status,
            result: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RouteSummary {
    pub route_count: usize,
    pub distance: Option<String>,
    pub duration: Option<String>,
    pub start_address: Option<String>,
    pub end_address: Option<String>,
}

impl From<&DirectionsResult> for RouteSummary {
    fn from(result: &DirectionsResult) -> Self {
        let leg = result.routes.first().and_then(|route| route.legs.first());

        RouteSummary {
            route_count: result.routes.len(),
            distance: leg.and_then(|l| l.distance.as_ref()).map(|d| d.text.clone()),
            duration: leg.and_then(|l| l.duration.as_ref()).map(|d| d.text.clone()),
            start_address: leg.map(|l| l.start_address.clone()),
            end_address: leg.map(|l| l.end_address.clone()),
        }
    }
}
