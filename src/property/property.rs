use std::fmt;

use chrono::NaiveDate;
use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

use crate::error::{AppraisalError, Result};

/// Identifies a property record.  Unique within a `PropertySet`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(pub i64);

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<i64> for PropertyId {
    fn from(id: i64) -> Self { Self(id) }
}

/// A single parcel with its last recorded sale.
///
/// Field names on the wire follow the `properties.json` layout
/// (`long`, `squarefeet`, `lastSalePrice`, `lastSaleDate`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub long: f64,
    /// Finished area in square feet.
    #[serde(rename = "squarefeet")]
    pub square_feet: f64,
    #[serde(rename = "lastSalePrice")]
    pub last_sale_price: f64,
    /// Serialized as `YYYY-MM-DD`.
    #[serde(rename = "lastSaleDate")]
    pub last_sale_date: NaiveDate,
}

impl Property {
    pub fn new(
        id: impl Into<PropertyId>,
        name: impl Into<String>,
        lat: f64,
        long: f64,
        square_feet: f64,
        last_sale_price: f64,
        last_sale_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lat,
            long,
            square_feet,
            last_sale_price,
            last_sale_date,
        }
    }

    /// Position as a planar coordinate: `x` = longitude, `y` = latitude.
    #[inline] pub fn position(&self) -> Coord<f64> { Coord { x: self.long, y: self.lat } }

    /// Position as a `geo` point (lon, lat).
    #[inline] pub fn point(&self) -> Point<f64> { Point::from(self.position()) }

    /// Last sale price divided by area, without any weighting.
    #[inline] pub fn price_per_square_foot(&self) -> f64 { self.last_sale_price / self.square_feet }

    /// Check the record against the data model: finite coordinates within
    /// lon/lat range, positive area, non-negative price.
    pub fn validate(&self) -> Result<()> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(AppraisalError::InvalidInput(
                format!("property {} has latitude {} outside [-90, 90]", self.id, self.lat)));
        }
        if !self.long.is_finite() || !(-180.0..=180.0).contains(&self.long) {
            return Err(AppraisalError::InvalidInput(
                format!("property {} has longitude {} outside [-180, 180]", self.id, self.long)));
        }
        if !self.square_feet.is_finite() || self.square_feet <= 0.0 {
            return Err(AppraisalError::InvalidInput(
                format!("property {} has non-positive area {}", self.id, self.square_feet)));
        }
        if !self.last_sale_price.is_finite() || self.last_sale_price < 0.0 {
            return Err(AppraisalError::InvalidInput(
                format!("property {} has negative sale price {}", self.id, self.last_sale_price)));
        }
        Ok(())
    }
}
