use leaflet::TileLayer;

#[derive(serde::Serialize)]
struct LayerOptions {
    attribution: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TileSource {
    pub url_template: String,
    pub attribution: String,
}

impl Default for TileSource {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#.to_string(),
        }
    }
}

impl TileSource {
    pub fn layer(&self) -> Result<TileLayer, serde_wasm_bindgen::Error> {
        let options = LayerOptions {
            attribution: self.attribution.clone(),
        };
        let options = serde_wasm_bindgen::to_value(&options)?;
        Ok(TileLayer::new(&self.url_template, &options))
    }
}
