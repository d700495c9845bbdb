//! GeoJSON conversion for boundaries, elements and zones.
//!
//! Only the subset of GeoJSON the design tool exchanges is supported:
//! `Point` and single-polygon `Polygon` geometries, bare or wrapped in a
//! `Feature` / `FeatureCollection`.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use geo::{Coord, LineString, Point, Polygon};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::types::{Boundary, Element, Shape, Zone};

/// Wire shape of a GeoJSON geometry object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub(crate) enum GeometryJson {
    Point(Vec<f64>),
    Polygon(Vec<Vec<Vec<f64>>>),
}

fn position_to_coord(position: &[f64]) -> Result<Coord<f64>, String> {
    match position {
        [x, y, ..] => Ok(Coord { x: *x, y: *y }),
        _ => Err(format!("position needs at least 2 values, got {}", position.len())),
    }
}

fn ring_to_json(ring: &LineString<f64>) -> Vec<Vec<f64>> {
    ring.coords().map(|c| vec![c.x, c.y]).collect()
}

fn polygon_from_rings(rings: &[Vec<Vec<f64>>]) -> Result<Polygon<f64>, String> {
    let mut rings = rings.iter().map(|ring| {
        ring.iter().map(|p| position_to_coord(p)).collect::<Result<Vec<_>, _>>().map(LineString)
    });

    let exterior = rings.next().ok_or_else(|| "polygon has no rings".to_string())??;
    let interiors = rings.collect::<Result<Vec<_>, _>>()?;

    Ok(Polygon::new(exterior, interiors))
}

fn polygon_to_json(polygon: &Polygon<f64>) -> Vec<Vec<Vec<f64>>> {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(ring_to_json)
        .collect()
}

impl From<Shape> for GeometryJson {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Point(point) => GeometryJson::Point(vec![point.x(), point.y()]),
            Shape::Polygon(polygon) => GeometryJson::Polygon(polygon_to_json(&polygon)),
        }
    }
}

impl TryFrom<GeometryJson> for Shape {
    type Error = String;

    fn try_from(geometry: GeometryJson) -> Result<Self, Self::Error> {
        match geometry {
            GeometryJson::Point(position) => Ok(Shape::Point(position_to_coord(&position)?.into())),
            GeometryJson::Polygon(rings) => Ok(Shape::Polygon(polygon_from_rings(&rings)?)),
        }
    }
}

/// `#[serde(with = ...)]` adapter storing a `geo::Polygon` as a GeoJSON Polygon geometry.
pub(crate) mod polygon {
    use geo::Polygon;
    use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

    use super::GeometryJson;

    pub(crate) fn serialize<S: Serializer>(polygon: &Polygon<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        GeometryJson::Polygon(super::polygon_to_json(polygon)).serialize(serializer)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Polygon<f64>, D::Error> {
        match GeometryJson::deserialize(deserializer)? {
            GeometryJson::Polygon(rings) => super::polygon_from_rings(&rings).map_err(D::Error::custom),
            GeometryJson::Point(_) => Err(D::Error::custom("expected a Polygon geometry, found a Point")),
        }
    }
}

/// `#[serde(with = ...)]` adapter storing a `geo::Point` as a bare `[lng, lat]` position.
pub(crate) mod position {
    use geo::Point;
    use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

    pub(crate) fn serialize<S: Serializer>(point: &Point<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        [point.x(), point.y()].serialize(serializer)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Point<f64>, D::Error> {
        let position = Vec::<f64>::deserialize(deserializer)?;
        super::position_to_coord(&position).map(Point::from).map_err(D::Error::custom)
    }
}

/// Extract a polygon from a GeoJSON value: a Polygon geometry, a Feature, or
/// the first polygon Feature of a FeatureCollection.
pub fn parse_polygon(value: &Value) -> Result<Polygon<f64>> {
    let kind = value.get("type").and_then(Value::as_str)
        .ok_or_else(|| anyhow!("[parse_polygon] GeoJSON object has no 'type'"))?;

    match kind {
        "Polygon" => {
            let geometry: GeometryJson = serde_json::from_value(value.clone())
                .context("[parse_polygon] malformed Polygon geometry")?;
            match geometry {
                GeometryJson::Polygon(rings) => polygon_from_rings(&rings).map_err(|e| anyhow!("[parse_polygon] {e}")),
                GeometryJson::Point(_) => bail!("[parse_polygon] expected Polygon geometry"),
            }
        }
        "Feature" => {
            let geometry = value.get("geometry")
                .ok_or_else(|| anyhow!("[parse_polygon] Feature has no geometry"))?;
            parse_polygon(geometry)
        }
        "FeatureCollection" => {
            let features = value.get("features").and_then(Value::as_array)
                .ok_or_else(|| anyhow!("[parse_polygon] FeatureCollection has no features"))?;
            features.iter()
                .find(|f| f.pointer("/geometry/type").and_then(Value::as_str) == Some("Polygon"))
                .ok_or_else(|| anyhow!("[parse_polygon] FeatureCollection contains no Polygon feature"))
                .and_then(parse_polygon)
        }
        other => bail!("[parse_polygon] unsupported GeoJSON type '{other}'"),
    }
}

/// Read the first polygon from a GeoJSON file without validating it.
pub fn read_polygon(path: &Path) -> Result<Polygon<f64>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("[read_polygon] failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("[read_polygon] {} is not valid JSON", path.display()))?;
    parse_polygon(&value)
}

/// Read and validate a property boundary from a GeoJSON file.
pub fn read_boundary(path: &Path) -> Result<Boundary> {
    let polygon = read_polygon(path)?;
    Boundary::new(polygon).with_context(|| format!("[read_boundary] invalid boundary in {}", path.display()))
}

/// Parse a `lng,lat` pair.
pub fn parse_position(text: &str) -> Result<Point<f64>> {
    let (lng, lat) = text.split_once(',')
        .ok_or_else(|| anyhow!("[parse_position] expected 'lng,lat', got '{text}'"))?;
    let lng: f64 = lng.trim().parse().with_context(|| format!("[parse_position] bad longitude '{lng}'"))?;
    let lat: f64 = lat.trim().parse().with_context(|| format!("[parse_position] bad latitude '{lat}'"))?;
    Ok(Point::new(lng, lat))
}

/// Export zones as a GeoJSON FeatureCollection, one feature per zone.
pub fn zones_to_geojson(zones: &[Zone]) -> Value {
    let features = zones.iter()
        .map(|zone| {
            let mut properties = Map::new();
            properties.insert("id".to_string(), json!(zone.id));
            properties.insert("level".to_string(), json!(zone.level.get()));
            properties.insert("color".to_string(), json!(zone.color));
            properties.insert("description".to_string(), json!(zone.description));
            properties.insert("area_m2".to_string(), json!(zone.area().round()));

            json!({
                "type": "Feature",
                "geometry": GeometryJson::Polygon(polygon_to_json(&zone.geometry)),
                "properties": properties,
            })
        })
        .collect::<Vec<_>>();

    json!({ "type": "FeatureCollection", "features": features })
}

/// Export placed elements as a GeoJSON FeatureCollection.
pub fn elements_to_geojson(elements: &[Element]) -> Value {
    let features = elements.iter()
        .map(|element| {
            let mut properties = Map::new();
            properties.insert("id".to_string(), json!(element.id));
            properties.insert("type_id".to_string(), json!(element.type_id));
            properties.insert("layer".to_string(), json!(element.properties.layer));
            if let Some(zone) = element.zone() {
                properties.insert("zone".to_string(), json!(zone.get()));
            }
            if let Some(label) = &element.properties.label {
                properties.insert("label".to_string(), json!(label));
            }

            json!({
                "type": "Feature",
                "geometry": GeometryJson::from(element.geometry.clone()),
                "properties": properties,
            })
        })
        .collect::<Vec<_>>();

    json!({ "type": "FeatureCollection", "features": features })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Value {
        json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [0.001, 0.0], [0.001, 0.001], [0.0, 0.001], [0.0, 0.0]]]
        })
    }

    #[test]
    fn parses_bare_feature_and_collection() {
        let bare = parse_polygon(&square()).unwrap();
        let feature = parse_polygon(&json!({ "type": "Feature", "geometry": square(), "properties": {} })).unwrap();
        let collection = parse_polygon(&json!({
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "geometry": { "type": "Point", "coordinates": [0.0, 0.0] }, "properties": {} },
                { "type": "Feature", "geometry": square(), "properties": {} },
            ]
        })).unwrap();

        assert_eq!(bare, feature);
        assert_eq!(bare, collection);
        assert_eq!(bare.exterior().0.len(), 5);
    }

    #[test]
    fn accepts_three_dimensional_positions() {
        let value = json!({ "type": "Polygon", "coordinates": [[[0.0, 0.0, 12.0], [1.0, 0.0, 12.0], [1.0, 1.0, 12.0], [0.0, 0.0, 12.0]]] });
        assert!(parse_polygon(&value).is_ok());
    }

    #[test]
    fn rejects_unsupported_types() {
        assert!(parse_polygon(&json!({ "type": "LineString", "coordinates": [] })).is_err());
        assert!(parse_polygon(&json!({ "coordinates": [] })).is_err());
    }

    #[test]
    fn parses_positions() {
        let p = parse_position("151.2, -33.9").unwrap();
        assert_eq!((p.x(), p.y()), (151.2, -33.9));
        assert!(parse_position("151.2").is_err());
        assert!(parse_position("east,-33.9").is_err());
    }

    #[test]
    fn polygon_adapter_round_trips_holes() {
        #[derive(Serialize, Deserialize, PartialEq, Debug)]
        struct Wrapper {
            #[serde(with = "super::polygon")]
            geometry: Polygon<f64>,
        }

        let polygon = polygon_from_rings(&[
            vec![vec![0.0, 0.0], vec![4.0, 0.0], vec![4.0, 4.0], vec![0.0, 4.0], vec![0.0, 0.0]],
            vec![vec![1.0, 1.0], vec![2.0, 1.0], vec![2.0, 2.0], vec![1.0, 1.0]],
        ]).unwrap();
        let wrapped = Wrapper { geometry: polygon };

        let json = serde_json::to_value(&wrapped).unwrap();
        assert_eq!(json["geometry"]["coordinates"].as_array().unwrap().len(), 2);
        assert_eq!(serde_json::from_value::<Wrapper>(json).unwrap(), wrapped);
    }
}
