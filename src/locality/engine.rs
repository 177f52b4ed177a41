use geo::Coord;
use parcelgeo::{distance_miles, Containment, DistanceMetric};
use serde::{Deserialize, Serialize};

use crate::error::{AppraisalError, Result};
use crate::locality::Neighborhood;
use crate::property::{Property, PropertyId, PropertySet};

/// Radius used when the caller does not supply one.
pub const DEFAULT_RADIUS_MILES: f64 = 1.0;

/// Where a candidate property sits relative to a target and its neighborhood.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locality {
    /// Inside the neighborhood polygon.
    Neighborhood,
    /// Outside the polygon but within the search radius of the target.
    Radius,
    /// Neither of the above.
    Neither,
}

/// Locality queries with a fixed distance model and boundary convention.
///
/// The free functions in this module use `LocalityEngine::default()`:
/// WGS-84 geodesic distance and closed (boundary-inclusive) containment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalityEngine {
    pub metric: DistanceMetric,
    pub containment: Containment,
}

impl LocalityEngine {
    pub fn new(metric: DistanceMetric, containment: Containment) -> Self {
        Self { metric, containment }
    }

    /// Returns `true` if `property` lies in `neighborhood`.
    #[inline]
    pub fn is_inside(&self, property: &Property, neighborhood: &Neighborhood) -> bool {
        neighborhood.contains_with(property.position(), self.containment)
    }

    /// Every property other than the target that lies in `neighborhood`, in
    /// insertion order.
    ///
    /// Fails with `NotFound` if the target is absent and `NotInRegion` if the
    /// target itself lies outside the neighborhood.
    pub fn properties_in_neighborhood<'a>(
        &self,
        target_id: PropertyId,
        properties: &'a PropertySet,
        neighborhood: &Neighborhood,
    ) -> Result<Vec<&'a Property>> {
        let target = properties.find(target_id)?;
        if !self.is_inside(target, neighborhood) {
            return Err(AppraisalError::NotInRegion(target_id));
        }

        Ok(properties.iter()
            .filter(|p| p.id != target_id && self.is_inside(p, neighborhood))
            .collect())
    }

    /// Every property other than the target that lies outside `exclusion` and
    /// within `radius_miles` of the target, in insertion order.
    ///
    /// The target does not need to be inside `exclusion`.
    pub fn properties_within_radius<'a>(
        &self,
        target_id: PropertyId,
        properties: &'a PropertySet,
        exclusion: &Neighborhood,
        radius_miles: f64,
    ) -> Result<Vec<&'a Property>> {
        let target = properties.find(target_id)?;
        check_radius(radius_miles)?;

        let origin = target.point();
        Ok(properties.spatial_index()
            .candidates_within(target.position(), radius_miles)
            .into_iter()
            .filter_map(|idx| properties.get_index(idx))
            .filter(|p| p.id != target_id)
            .filter(|p| !self.is_inside(p, exclusion))
            .filter(|p| distance_miles(origin, p.point(), self.metric) <= radius_miles)
            .collect())
    }

    /// Classify every property other than the target, in insertion order.
    ///
    /// Unlike `properties_in_neighborhood`, the target may lie outside the
    /// neighborhood; properties inside it are still `Neighborhood`.
    pub fn classify(
        &self,
        target_id: PropertyId,
        properties: &PropertySet,
        neighborhood: &Neighborhood,
        radius_miles: f64,
    ) -> Result<Vec<(PropertyId, Locality)>> {
        let target = properties.find(target_id)?;
        check_radius(radius_miles)?;

        let origin = target.point();
        Ok(properties.iter()
            .filter(|p| p.id != target_id)
            .map(|p| {
                let locality = if self.is_inside(p, neighborhood) {
                    Locality::Neighborhood
                } else if distance_miles(origin, p.point(), self.metric) <= radius_miles {
                    Locality::Radius
                } else {
                    Locality::Neither
                };
                (p.id, locality)
            })
            .collect())
    }
}

fn check_radius(radius_miles: f64) -> Result<()> {
    if !radius_miles.is_finite() || radius_miles < 0.0 {
        return Err(AppraisalError::InvalidInput(
            format!("radius must be a finite, non-negative number of miles, got {radius_miles}")));
    }
    Ok(())
}

/// Planar point-in-polygon test with longitude as `x` and latitude as `y`.
///
/// Boundary convention: closed.  A point exactly on an edge or vertex of the
/// neighborhood is inside.
pub fn is_inside(point: Coord<f64>, neighborhood: &Neighborhood) -> bool {
    neighborhood.contains(point)
}

/// See [`LocalityEngine::properties_in_neighborhood`].
pub fn properties_in_neighborhood<'a>(
    target_id: PropertyId,
    properties: &'a PropertySet,
    neighborhood: &Neighborhood,
) -> Result<Vec<&'a Property>> {
    LocalityEngine::default().properties_in_neighborhood(target_id, properties, neighborhood)
}

/// See [`LocalityEngine::properties_within_radius`].  Pass
/// [`DEFAULT_RADIUS_MILES`] for the customary one-mile search.
pub fn properties_within_radius<'a>(
    target_id: PropertyId,
    properties: &'a PropertySet,
    exclusion: &Neighborhood,
    radius_miles: f64,
) -> Result<Vec<&'a Property>> {
    LocalityEngine::default().properties_within_radius(target_id, properties, exclusion, radius_miles)
}

/// See [`LocalityEngine::classify`].
pub fn classify(
    target_id: PropertyId,
    properties: &PropertySet,
    neighborhood: &Neighborhood,
    radius_miles: f64,
) -> Result<Vec<(PropertyId, Locality)>> {
    LocalityEngine::default().classify(target_id, properties, neighborhood, radius_miles)
}
