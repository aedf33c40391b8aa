use maps::domain::LatLng;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate, IntoParams)]
pub struct DirectionsQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub origin_lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub origin_lng: f64,

    #[validate(range(min = -90.0, max = 90.0))]
    pub destination_lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub destination_lng: f64,
}

impl DirectionsQuery {
    pub fn origin(&self) -> LatLng {
        LatLng::new(self.origin_lat, self.origin_lng)
    }

    pub fn destination(&self) -> LatLng {
        LatLng::new(self.destination_lat, self.destination_lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_latitude_is_rejected() {
        let query = DirectionsQuery {
            origin_lat: 91.0,
            origin_lng: 121.0,
            destination_lat: 14.5,
            destination_lng: 121.0,
        };

        let errors = query.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("origin_lat"));
    }

    #[test]
    fn coordinates_map_to_points() {
        let query = DirectionsQuery {
            origin_lat: 14.55,
            origin_lng: 121.02,
            destination_lat: 14.51,
            destination_lng: 121.05,
        };

        assert!(query.validate().is_ok());
        assert_eq!(query.origin(), LatLng::new(14.55, 121.02));
        assert_eq!(query.destination(), LatLng::new(14.51, 121.05));
    }
}
