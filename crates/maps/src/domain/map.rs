use crate::domain::directions::{DirectionsResult, LatLng};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MapOptions {
    pub zoom: u8,
    pub map_type_control: bool,
    pub street_view_control: bool,
    pub fullscreen_control: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            zoom: 12,
            map_type_control: true,
            street_view_control: false,
            fullscreen_control: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PolylineOptions {
    pub stroke_color: String,
    pub stroke_weight: u8,
    pub suppress_markers: bool,
}

impl Default for PolylineOptions {
    fn default() -> Self {
        Self {
            stroke_color: "#4285F4".to_string(),
            stroke_weight: 5,
            suppress_markers: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RenderedRoute {
    pub result: DirectionsResult,
    pub polyline: PolylineOptions,
}

/// A map bound to one container, with at most one route drawn on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MapSurface {
    pub container: String,
    pub center: LatLng,
    pub options: MapOptions,
    pub route: Option<RenderedRoute>,
}

impl MapSurface {
    pub fn new(container: impl Into<String>, center: LatLng, options: MapOptions) -> Self {
        Self {
            container: container.into(),
            center,
            options,
            route: None,
        }
    }

    pub fn set_directions(&mut self, result: DirectionsResult, polyline: PolylineOptions) {
        self.route = Some(RenderedRoute { result, polyline });
    }

    pub fn detach_route(&mut self) -> Option<RenderedRoute> {
        self.route.take()
    }

    pub fn has_route(&self) -> bool {
        self.route.is_some()
    }
}
