use crate::domain::geography::Geography;
use crate::ports::outbound::geography_store::{GeographyStore, GeographyStoreError};
use async_trait::async_trait;
use serde_json::Value;
use std::env;

const DEFAULT_TOPOLOGY_PATH: &str = "data/countries-110m.json";
const COUNTRIES_OBJECT: &str = "countries";

/// Reads a world-atlas TopoJSON file, or a GeoJSON feature collection.
pub struct FileSystem {
    path: String,
}

fn shapes(document: &Value) -> Option<&Vec<Value>> {
    if document.get("type").and_then(Value::as_str) == Some("FeatureCollection") {
        return document.get("features")?.as_array();
    }

    let objects = document.get("objects")?.as_object()?;
    let object = objects
        .get(COUNTRIES_OBJECT)
        .or_else(|| objects.values().next())?;
    object.get("geometries")?.as_array()
}

fn parse_topology(json: &str) -> Result<Vec<Geography>, GeographyStoreError> {
    let document: Value = serde_json::from_str(json).map_err(|why| {
        log::warn!("Error parsing topology {why:?}");
        GeographyStoreError::new(format!("invalid topology: {why}"))
    })?;

    let Some(shapes) = shapes(&document) else {
        return Err(GeographyStoreError::new(String::from(
            "topology has no geometries",
        )));
    };

    shapes
        .iter()
        .map(|shape| {
            serde_json::from_value::<Geography>(shape.clone()).map_err(|why| {
                GeographyStoreError::new(format!("invalid geometry: {why}"))
            })
        })
        .collect()
}

#[async_trait]
impl GeographyStore for FileSystem {
    fn create() -> Self {
        let path = env::var("TOPOLOGY_PATH").unwrap_or_else(|_| {
            log::info!("TOPOLOGY_PATH not set, using {DEFAULT_TOPOLOGY_PATH}");
            String::from(DEFAULT_TOPOLOGY_PATH)
        });
        Self { path }
    }

    async fn fetch_all(&self) -> Result<Vec<Geography>, GeographyStoreError> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|why| {
                log::warn!("Error reading topology {why:?}");
                GeographyStoreError::new(format!("couldn't read {}", self.path))
            })?;

        let geographies = parse_topology(&json)?;
        log::info!(
            "Loaded {} geographies from {}",
            geographies.len(),
            self.path
        );
        Ok(geographies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPOLOGY: &str = r#"{
        "type": "Topology",
        "objects": {
            "land": { "type": "GeometryCollection", "geometries": [] },
            "countries": {
                "type": "GeometryCollection",
                "geometries": [
                    { "type": "Polygon", "arcs": [[0]], "id": "242", "properties": { "name": "Fiji" } },
                    { "type": "MultiPolygon", "arcs": [[[1]]], "id": "250", "properties": { "name": "France" } },
                    { "type": "Polygon", "arcs": [[2]], "properties": { "name": "N. Cyprus" } }
                ]
            }
        },
        "arcs": []
    }"#;

    const FEATURES: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            { "type": "Feature", "properties": { "ISO_A2": "-99", "ISO_A3": "FRA", "NAME": "France" }, "geometry": null }
        ]
    }"#;

    #[test]
    fn test_parse_topology() {
        let geographies = parse_topology(TOPOLOGY).unwrap();
        assert_eq!(geographies.len(), 3);
        assert_eq!(geographies[0].id, Some(String::from("242")));
        assert_eq!(geographies[1].display_name(), Some(String::from("France")));
        assert_eq!(geographies[2].id, None);
    }

    #[test]
    fn test_parse_topology_first_object_fallback() {
        let json = r#"{ "objects": { "ne_110m_admin_0_countries": { "geometries": [
            { "properties": { "ADMIN": "Somaliland" } }
        ] } } }"#;
        let geographies = parse_topology(json).unwrap();
        assert_eq!(geographies.len(), 1);
        assert_eq!(geographies[0].label(), "Somaliland");
    }

    #[test]
    fn test_parse_feature_collection() {
        let geographies = parse_topology(FEATURES).unwrap();
        assert_eq!(geographies.len(), 1);
        assert_eq!(geographies[0].code2(), None);
        assert_eq!(geographies[0].code3(), Some(String::from("FRA")));
    }

    #[test]
    fn test_parse_topology_without_geometries() {
        let error = parse_topology(r#"{ "type": "Topology", "objects": {} }"#).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Error loading map geographies: topology has no geometries"
        );
    }

    #[test]
    fn test_parse_topology_invalid_json() {
        assert!(parse_topology("not json").is_err());
    }

    #[tokio::test]
    async fn test_fetch_all_missing_file() {
        let store = FileSystem {
            path: String::from("/definitely/not/here/topology.json"),
        };
        assert!(store.fetch_all().await.is_err());
    }
}
