use serde::{de::Error, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// a user-authored trip plan: an ordered list of legs, each ridden on one
/// scheduled trip. leg order is travel order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    #[serde(default = "default_itinerary_name")]
    pub name: String,
    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// one ride within an [`Itinerary`]. stop ids and route names are often
/// numeric in GTFS feeds, so they may be written as JSON numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leg {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(deserialize_with = "deserialize_identifier")]
    pub route_short_name: String,
    #[serde(deserialize_with = "deserialize_identifier")]
    pub origin_stop_id: String,
    #[serde(deserialize_with = "deserialize_identifier")]
    pub dest_stop_id: String,
    /// desired departure from the origin stop, H:M:S
    pub dep_time_str: String,
}

impl Leg {
    /// the leg's label, or `leg_{index}` when the author did not name it.
    pub fn label_or_default(&self, leg_index: usize) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("leg_{leg_index}"))
    }
}

fn default_itinerary_name() -> String {
    String::from("unnamed")
}

fn deserialize_identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s.trim().to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected string or number identifier, found {other}"
        ))),
    }
}
