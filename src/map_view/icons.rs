use leaflet::Icon;

#[derive(serde::Serialize)]
#[allow(non_snake_case)]
struct IconOptions {
    iconUrl: String,
    shadowUrl: String,
    iconSize: Vec<u32>,
    iconAnchor: Vec<u32>,
}

/// Marker icon handed to every map view explicitly, instead of patching
/// Leaflet's global default icon.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerIcon {
    pub icon_url: String,
    pub shadow_url: String,
    pub size: [u32; 2],
    pub anchor: [u32; 2],
}

impl Default for MarkerIcon {
    fn default() -> Self {
        Self {
            icon_url: "https://unpkg.com/leaflet@1.9.4/dist/images/marker-icon.png".to_string(),
            shadow_url: "https://unpkg.com/leaflet@1.9.4/dist/images/marker-shadow.png".to_string(),
            size: [25, 41],
            anchor: [12, 41],
        }
    }
}

impl MarkerIcon {
    fn options(&self) -> IconOptions {
        IconOptions {
            iconUrl: self.icon_url.clone(),
            shadowUrl: self.shadow_url.clone(),
            iconSize: self.size.to_vec(),
            iconAnchor: self.anchor.to_vec(),
        }
    }

    pub fn load(&self) -> Result<Icon, serde_wasm_bindgen::Error> {
        let options = serde_wasm_bindgen::to_value(&self.options())?;
        Ok(Icon::new(&options))
    }
}
