use serde::Deserialize;
use serde_json::{Map, Value};

const NOT_APPLICABLE: &str = "-99";

const CODE2_KEYS: &[&str] = &["ISO_A2", "WB_A2", "iso_a2", "wb_a2"];
const CODE3_KEYS: &[&str] = &["ISO_A3", "ADM0_A3", "iso_a3", "adm0_a3"];
const NAME_KEYS: &[&str] = &[
    "NAME",
    "NAME_LONG",
    "ADMIN",
    "BRK_NAME",
    "FORMAL_EN",
    "name",
    "name_long",
];

/// One shape from a world topology. Different datasets name the same property
/// differently, so the property bag is kept as-is and probed per attribute.
#[cfg_attr(test, derive(PartialEq))]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Geography {
    #[serde(default, deserialize_with = "id_as_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

fn id_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_string))
}

fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl Geography {
    #[must_use]
    pub fn new(properties: Map<String, Value>) -> Self {
        Self {
            id: None,
            properties,
        }
    }

    fn probe(&self, keys: &[&str]) -> Option<String> {
        keys.iter()
            .filter_map(|key| self.properties.get(*key))
            .filter_map(value_as_string)
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty() && value != NOT_APPLICABLE)
    }

    /// ISO alpha-2 code, uppercased.
    #[must_use]
    pub fn code2(&self) -> Option<String> {
        self.probe(CODE2_KEYS).map(|code| code.to_uppercase())
    }

    /// ISO alpha-3 code, uppercased.
    #[must_use]
    pub fn code3(&self) -> Option<String> {
        self.probe(CODE3_KEYS).map(|code| code.to_uppercase())
    }

    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        self.probe(NAME_KEYS)
    }

    /// Best human label for reports, falling back to the shape id.
    #[must_use]
    pub fn label(&self) -> String {
        self.display_name()
            .or_else(|| self.id.clone())
            .unwrap_or_else(|| String::from("UNKNOWN"))
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_code2_candidates_in_order() {
        let geo = geography(json!({ "WB_A2": "FR", "iso_a2": "XX" }));
        assert_eq!(geo.code2(), Some(String::from("FR")));

        let geo = geography(json!({ "ISO_A2": "DE", "WB_A2": "FR" }));
        assert_eq!(geo.code2(), Some(String::from("DE")));
    }

    #[test]
    fn test_code2_uppercases() {
        let geo = geography(json!({ "iso_a2": "fr" }));
        assert_eq!(geo.code2(), Some(String::from("FR")));
    }

    #[test]
    fn test_sentinel_is_absent() {
        let geo = geography(json!({ "ISO_A2": "-99", "ISO_A3": -99 }));
        assert_eq!(geo.code2(), None);
        assert_eq!(geo.code3(), None);
    }

    #[test]
    fn test_sentinel_falls_through_to_next_candidate() {
        let geo = geography(json!({ "ISO_A2": "-99", "WB_A2": "NO" }));
        assert_eq!(geo.code2(), Some(String::from("NO")));
    }

    #[test]
    fn test_code3_candidates() {
        let geo = geography(json!({ "ADM0_A3": "KOS" }));
        assert_eq!(geo.code3(), Some(String::from("KOS")));
        let geo = geography(json!({ "adm0_a3": "fra" }));
        assert_eq!(geo.code3(), Some(String::from("FRA")));
    }

    #[test]
    fn test_display_name_skips_empty() {
        let geo = geography(json!({ "NAME": "", "NAME_LONG": null, "ADMIN": "Somaliland" }));
        assert_eq!(geo.display_name(), Some(String::from("Somaliland")));
    }

    #[test]
    fn test_display_name_lowercase_key() {
        let geo = geography(json!({ "name": "Bhutan" }));
        assert_eq!(geo.display_name(), Some(String::from("Bhutan")));
    }

    #[test]
    fn test_missing_everything() {
        let geo = geography(json!({ "scalerank": 1 }));
        assert_eq!(geo.code2(), None);
        assert_eq!(geo.code3(), None);
        assert_eq!(geo.display_name(), None);
        assert_eq!(geo.label(), "UNKNOWN");
    }

    #[test]
    fn test_deserialise_topojson_geometry() {
        let geo: Geography = serde_json::from_value(json!({
            "type": "Polygon",
            "arcs": [[0, 1, 2]],
            "id": 250,
            "properties": { "name": "France" }
        }))
        .unwrap();
        assert_eq!(geo.id, Some(String::from("250")));
        assert_eq!(geo.display_name(), Some(String::from("France")));
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let geo: Geography = serde_json::from_value(json!({ "id": "-99" })).unwrap();
        assert_eq!(geo.label(), "-99");
    }
}
