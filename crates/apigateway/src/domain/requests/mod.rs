pub mod directions;
pub mod geocode;
pub mod order;
