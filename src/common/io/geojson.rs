use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::Value;

use crate::locality::Neighborhood;

/// Read a neighborhood boundary from GeoJSON bytes.
///
/// Accepts a `FeatureCollection` (the first feature is used), a single
/// `Feature`, or a bare `Polygon`/`MultiPolygon` geometry.
pub fn read_neighborhood_from_bytes(bytes: &[u8]) -> Result<Neighborhood> {
    let value: Value = serde_json::from_slice(bytes).context("Failed to parse GeoJSON bytes")?;
    let geometry = boundary_geometry(&value)?;
    let shape = parse_geometry(geometry)?;
    Ok(Neighborhood::from_multi_polygon(shape)?)
}

/// Read a neighborhood boundary from a GeoJSON file at `path`.
pub fn read_neighborhood(path: &Path) -> Result<Neighborhood> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read GeoJSON file: {}", path.display()))?;
    read_neighborhood_from_bytes(&bytes)
        .with_context(|| format!("Invalid neighborhood boundary: {}", path.display()))
}

/// Locate the geometry object describing the boundary.
fn boundary_geometry(value: &Value) -> Result<&Value> {
    match value["type"].as_str() {
        Some("FeatureCollection") => {
            let feature = value["features"].as_array()
                .and_then(|features| features.first())
                .ok_or_else(|| anyhow!("FeatureCollection has no features"))?;
            boundary_geometry(feature)
        }
        Some("Feature") => {
            let geometry = &value["geometry"];
            if !geometry.is_object() {
                bail!("Feature has no geometry");
            }
            Ok(geometry)
        }
        Some("Polygon") | Some("MultiPolygon") => Ok(value),
        Some(other) => bail!("Unsupported GeoJSON type for a boundary: {other}"),
        None => bail!("GeoJSON object has no \"type\""),
    }
}

fn parse_geometry(geometry: &Value) -> Result<MultiPolygon<f64>> {
    let coords = geometry["coordinates"].as_array()
        .ok_or_else(|| anyhow!("Geometry has no coordinates array"))?;
    match geometry["type"].as_str() {
        Some("Polygon") => Ok(MultiPolygon(vec![parse_polygon_coords(coords)?])),
        Some("MultiPolygon") => {
            let polygons = coords.iter()
                .map(|polygon| {
                    let rings = polygon.as_array()
                        .ok_or_else(|| anyhow!("Invalid MultiPolygon: polygon is not an array"))?;
                    parse_polygon_coords(rings)
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(MultiPolygon(polygons))
        }
        Some(other) => bail!("Boundary geometry must be a Polygon or MultiPolygon, got {other}"),
        None => bail!("Geometry has no \"type\""),
    }
}

/// Parse GeoJSON Polygon coordinates: `[exterior, hole, hole, ...]`.
fn parse_polygon_coords(rings: &[Value]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter().map(|ring| {
        ring.as_array()
            .ok_or_else(|| anyhow!("Invalid Polygon: ring is not an array"))
            .and_then(|coords| parse_ring_coords(coords))
    });
    let exterior = rings.next()
        .ok_or_else(|| anyhow!("Invalid Polygon: missing exterior ring"))??;
    let interiors = rings.collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, interiors))
}

/// Parse a ring from GeoJSON coordinates: `[[lon, lat], [lon, lat], ...]`.
/// Any third (altitude) ordinate is ignored.
fn parse_ring_coords(coords: &[Value]) -> Result<LineString<f64>> {
    let points = coords.iter()
        .map(|pair| {
            let pair = pair.as_array()
                .filter(|pair| pair.len() >= 2)
                .ok_or_else(|| anyhow!("Invalid coordinate: expected [lon, lat]"))?;
            let x = pair[0].as_f64()
                .ok_or_else(|| anyhow!("Invalid coordinate: longitude must be a number"))?;
            let y = pair[1].as_f64()
                .ok_or_else(|| anyhow!("Invalid coordinate: latitude must be a number"))?;
            Ok(Coord { x, y })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(LineString(points))
}
