//! GeoJSON export
//!
//! Serializes the site catalog, the equator, and computed great-circle
//! arcs into a single RFC 7946 FeatureCollection. Display metadata uses
//! simplestyle property names (`marker-color`, `stroke`, `stroke-width`)
//! so common viewers pick it up directly.
//!
//! This layer performs no geometric checks of its own; callers hand it
//! already-validated, unwrapped coordinate sequences.

use std::fs;
use std::path::Path;

use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value};
use log::info;
use serde_json::json;

use crate::sites::SiteCatalog;
use crate::Result;

/// Stroke styling for an exported line feature
#[derive(Debug, Clone, Copy)]
pub struct LineStyle {
    /// Stroke color as a hex string
    pub stroke: &'static str,
    /// Stroke width in display units
    pub width: f64,
}

/// Style of the equator line
pub const EQUATOR_STYLE: LineStyle = LineStyle {
    stroke: "#0000ff",
    width: 2.0,
};

/// Style of the computed great-circle route
pub const ROUTE_STYLE: LineStyle = LineStyle {
    stroke: "#008000",
    width: 2.0,
};

/// Marker color applied to every site placemark
pub const SITE_MARKER_COLOR: &str = "#ff0000";

/// One Point feature per catalog site
///
/// Each feature carries the site name and its marker styling.
pub fn site_features(catalog: &SiteCatalog) -> Vec<Feature> {
    catalog
        .iter()
        .map(|site| {
            let mut properties = JsonObject::new();
            properties.insert("name".to_string(), json!(site.name));
            properties.insert("marker-color".to_string(), json!(SITE_MARKER_COLOR));
            properties.insert("marker-symbol".to_string(), json!("circle"));

            Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Point(vec![
                    site.position.lon_degrees(),
                    site.position.lat_degrees(),
                ]))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect()
}

/// A named LineString feature from parallel degree arrays
///
/// Longitudes are written as given; passing unwrapped values keeps the
/// exported line continuous across the antimeridian.
pub fn line_feature(name: &str, lats_deg: &[f64], lons_deg: &[f64], style: LineStyle) -> Feature {
    let positions = lats_deg
        .iter()
        .zip(lons_deg.iter())
        .map(|(&lat, &lon)| vec![lon, lat])
        .collect();

    let mut properties = JsonObject::new();
    properties.insert("name".to_string(), json!(name));
    properties.insert("stroke".to_string(), json!(style.stroke));
    properties.insert("stroke-width".to_string(), json!(style.width));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::LineString(positions))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Assemble a FeatureCollection from site placemarks and line features
pub fn document(catalog: &SiteCatalog, lines: Vec<Feature>) -> FeatureCollection {
    let mut features = site_features(catalog);
    features.extend(lines);
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Serialize a FeatureCollection to a file
pub fn write_document(collection: &FeatureCollection, path: &Path) -> Result<()> {
    let geojson = GeoJson::FeatureCollection(collection.clone());
    fs::write(path, geojson.to_string())?;
    info!(
        "wrote {} features to {}",
        collection.features.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesic;

    fn property<'a>(feature: &'a Feature, key: &str) -> &'a serde_json::Value {
        feature
            .properties
            .as_ref()
            .and_then(|p| p.get(key))
            .unwrap()
    }

    #[test]
    fn test_one_placemark_per_site() {
        let catalog = SiteCatalog::default();
        let features = site_features(&catalog);
        assert_eq!(features.len(), catalog.len());

        let stonehenge = &features[0];
        assert_eq!(property(stonehenge, "name"), &json!("Stonehenge"));
        assert_eq!(property(stonehenge, "marker-color"), &json!(SITE_MARKER_COLOR));
        match &stonehenge.geometry.as_ref().unwrap().value {
            Value::Point(position) => {
                // GeoJSON positions are lon, lat
                assert!((position[0] - (-1.8262)).abs() < 1e-9);
                assert!((position[1] - 51.1789).abs() < 1e-9);
            }
            other => panic!("expected Point, got {:?}", other),
        }
    }

    #[test]
    fn test_line_feature_carries_style() {
        let lats = vec![0.0, 0.0, 0.0];
        let lons = vec![-10.0, 0.0, 10.0];
        let feature = line_feature("Test Line", &lats, &lons, EQUATOR_STYLE);

        assert_eq!(property(&feature, "name"), &json!("Test Line"));
        assert_eq!(property(&feature, "stroke"), &json!("#0000ff"));
        assert_eq!(property(&feature, "stroke-width"), &json!(2.0));

        match &feature.geometry.as_ref().unwrap().value {
            Value::LineString(positions) => {
                assert_eq!(positions.len(), 3);
                assert_eq!(positions[0], vec![-10.0, 0.0]);
            }
            other => panic!("expected LineString, got {:?}", other),
        }
    }

    #[test]
    fn test_document_structure() {
        let catalog = SiteCatalog::default();
        let equator = geodesic::equator(360).unwrap();
        let eq_lats: Vec<f64> = equator.iter().map(|p| p.lat_degrees()).collect();
        let eq_lons: Vec<f64> = equator.iter().map(|p| p.lon_degrees()).collect();

        let collection = document(
            &catalog,
            vec![line_feature(
                "Earth's Equator",
                &eq_lats,
                &eq_lons,
                EQUATOR_STYLE,
            )],
        );

        assert_eq!(collection.features.len(), catalog.len() + 1);

        // The document is valid GeoJSON end to end
        let text = GeoJson::FeatureCollection(collection).to_string();
        let reparsed: GeoJson = text.parse().unwrap();
        match reparsed {
            GeoJson::FeatureCollection(fc) => assert_eq!(fc.features.len(), 50),
            other => panic!("expected FeatureCollection, got {:?}", other),
        }
    }

    #[test]
    fn test_exported_route_longitudes_are_continuous() {
        let start = crate::coordinates::GeoPoint::from_degrees(0.0, 170.0).unwrap();
        let end = crate::coordinates::GeoPoint::from_degrees(0.0, -170.0).unwrap();
        let arc = geodesic::great_circle(start, end, 40).unwrap();
        let (lats, lons) = arc.unwrapped_degrees();

        let feature = line_feature("Seam Crossing", &lats, &lons, ROUTE_STYLE);
        match &feature.geometry.as_ref().unwrap().value {
            Value::LineString(positions) => {
                for pair in positions.windows(2) {
                    let jump = (pair[1][0] - pair[0][0]).abs();
                    assert!(jump < 1.0, "exported longitude jump {}", jump);
                }
            }
            other => panic!("expected LineString, got {:?}", other),
        }
    }
}
