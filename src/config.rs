use std::rc::Rc;

use crate::{
    api::ApiClient,
    map_view::{icons::MarkerIcon, layers::TileSource, Viewport},
    models::Coordinates,
};

pub const API_URL: &str = "http://localhost:5026/api";

/// Everything the screens need from outside, handed down as a context.
#[derive(Clone)]
pub struct AppConfig {
    pub api: Rc<ApiClient>,
    pub viewport: Viewport,
    pub marker_icon: MarkerIcon,
    pub tiles: TileSource,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: Rc::new(ApiClient::new(API_URL)),
            viewport: Viewport {
                center: Coordinates {
                    lat: -23.55,
                    lng: -46.63,
                },
                zoom: 12.0,
            },
            marker_icon: MarkerIcon::default(),
            tiles: TileSource::default(),
        }
    }
}

impl PartialEq for AppConfig {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.api, &other.api)
            && self.viewport == other.viewport
            && self.marker_icon == other.marker_icon
            && self.tiles == other.tiles
    }
}
