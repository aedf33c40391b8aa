pub mod directions;
pub mod geocode;
