mod directions;
mod geocode;

pub use self::directions::DirectionsService;
pub use self::geocode::GeocodeService;
