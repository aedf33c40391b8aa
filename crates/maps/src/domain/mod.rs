pub mod directions;
pub mod geocode;
pub mod map;

pub use self::directions::{
    DirectionsRequest, DirectionsResult, DirectionsStatus, LatLng, Leg, Polyline, Route,
    RouteReply, RouteSummary, TextValue, TravelMode,
};
pub use self::geocode::{GeocodeGeometry, GeocodeReply, GeocodeResult};
pub use self::map::{MapOptions, MapSurface, PolylineOptions, RenderedRoute};
