use serde::{Deserialize, Deserializer, Serialize};

pub type MapId = u64;
pub type PointId = u64;

/// A named collection of points, as listed by `GET /mapas`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Map {
    pub id: MapId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "data_criacao", default)]
    pub created_at: Option<String>,
    /// Only present in the listing; the detail endpoint leaves it out.
    #[serde(rename = "totalPontos", default)]
    pub point_count: u64,
}

impl Map {
    /// Creation date as `dd/mm/yyyy`, or the raw backend text when it can't be parsed.
    pub fn created_on(&self) -> String {
        let Some(raw) = self.created_at.as_deref() else {
            return String::new();
        };
        chrono::DateTime::parse_from_rfc2822(raw)
            .or_else(|_| chrono::DateTime::parse_from_rfc3339(raw))
            .map(|date| date.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|_| raw.to_string())
    }

    pub fn point_count_label(&self) -> String {
        point_count_label(self.point_count)
    }
}

pub fn point_count_label(count: u64) -> String {
    if count == 1 {
        "1 ponto".to_string()
    } else {
        format!("{count} pontos")
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Point {
    pub id: PointId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(deserialize_with = "number_or_text")]
    pub latitude: f64,
    #[serde(deserialize_with = "number_or_text")]
    pub longitude: f64,
    #[serde(rename = "mapa_id", default)]
    pub map_id: Option<MapId>,
}

impl Point {
    pub fn position(&self) -> Coordinates {
        Coordinates {
            lat: self.latitude,
            lng: self.longitude,
        }
    }
}

/// Response of `GET /mapas/{id}`. `mapa` is `null` when the id is unknown.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MapDetail {
    #[serde(rename = "mapa", default)]
    pub map: Option<Map>,
    #[serde(rename = "pontos", default)]
    pub points: Vec<Point>,
}

/// A latitude/longitude pair kept at six decimal places.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn rounded(lat: f64, lng: f64) -> Self {
        Self {
            lat: round6(lat),
            lng: round6(lng),
        }
    }

    pub fn lat_text(&self) -> String {
        format!("{:.6}", self.lat)
    }

    pub fn lng_text(&self) -> String {
        format!("{:.6}", self.lng)
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.lat_text(), self.lng_text())
    }
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

// MySQL DECIMAL columns reach us as strings like "-23.550000".
fn number_or_text<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[derive(Serialize)]
pub struct NewMap<'a> {
    #[serde(rename = "nome")]
    pub name: &'a str,
}

#[derive(Serialize)]
pub struct NewPoint<'a> {
    #[serde(rename = "nome")]
    pub name: &'a str,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "mapa_id")]
    pub map_id: MapId,
}

#[derive(Serialize)]
pub struct RenamePoint<'a> {
    #[serde(rename = "nome")]
    pub name: &'a str,
}
