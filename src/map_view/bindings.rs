//! Leaflet calls the `leaflet` crate doesn't cover.

use leaflet::{Icon, LatLng, Map};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// A `L.Map` seen through its event and lifecycle methods.
    pub type MapSurface;

    #[wasm_bindgen(method)]
    pub fn on(this: &MapSurface, kind: &str, handler: &JsValue);

    #[wasm_bindgen(method, js_name = invalidateSize)]
    pub fn invalidate_size(this: &MapSurface);

    #[wasm_bindgen(method, js_name = remove)]
    pub fn destroy(this: &MapSurface);

    /// Payload of a `click` event on the map.
    pub type ClickEvent;

    #[wasm_bindgen(method, getter)]
    pub fn latlng(this: &ClickEvent) -> ClickPosition;

    pub type ClickPosition;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &ClickPosition) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &ClickPosition) -> f64;

    pub type PointMarker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn point_marker(at: &LatLng) -> PointMarker;

    #[wasm_bindgen(method, js_name = setIcon)]
    pub fn set_icon(this: &PointMarker, icon: &Icon);

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &PointMarker, content: &str);

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &PointMarker, map: &Map);

    #[wasm_bindgen(method, js_name = remove)]
    pub fn detach(this: &PointMarker);
}
