use std::sync::OnceLock;

use ahash::AHashMap;
use parcelgeo::PointIndex;

use crate::error::{AppraisalError, Result};
use crate::property::{Property, PropertyId};

/// An ordered, read-only collection of properties.
///
/// Iteration follows insertion order.  Lookups by id go through a hash index;
/// radius queries go through an R-tree that is built on first use.
#[derive(Debug, Clone, Default)]
pub struct PropertySet {
    properties: Vec<Property>,
    by_id: AHashMap<PropertyId, usize>,
    /// Point index over `properties`; built on first access.
    spatial: OnceLock<PointIndex>,
}

impl PropertySet {
    /// Build a set from `properties`, rejecting duplicate ids.
    pub fn new(properties: Vec<Property>) -> Result<Self> {
        let mut by_id = AHashMap::with_capacity(properties.len());
        for (i, property) in properties.iter().enumerate() {
            if by_id.insert(property.id, i).is_some() {
                return Err(AppraisalError::DuplicateProperty(property.id));
            }
        }
        Ok(Self { properties, by_id, spatial: OnceLock::new() })
    }

    /// Get the number of properties.
    #[inline] pub fn len(&self) -> usize { self.properties.len() }

    /// Check if the set is empty.
    #[inline] pub fn is_empty(&self) -> bool { self.properties.is_empty() }

    /// Properties in insertion order.
    #[inline] pub fn as_slice(&self) -> &[Property] { &self.properties }

    /// Iterate over properties in insertion order.
    #[inline] pub fn iter(&self) -> std::slice::Iter<'_, Property> { self.properties.iter() }

    /// The property at insertion position `idx`.
    #[inline] pub fn get_index(&self, idx: usize) -> Option<&Property> { self.properties.get(idx) }

    /// The property with id `id`, if present.
    pub fn get(&self, id: PropertyId) -> Option<&Property> {
        self.by_id.get(&id).map(|&i| &self.properties[i])
    }

    /// The property with id `id`, or `NotFound`.
    pub fn find(&self, id: PropertyId) -> Result<&Property> {
        self.get(id).ok_or(AppraisalError::NotFound(id))
    }

    #[inline] pub fn contains(&self, id: PropertyId) -> bool { self.by_id.contains_key(&id) }

    /// R-tree over property positions, keyed by insertion position.
    pub(crate) fn spatial_index(&self) -> &PointIndex {
        self.spatial.get_or_init(|| PointIndex::new(self.properties.iter().map(Property::position)))
    }
}

impl<'a> IntoIterator for &'a PropertySet {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter { self.properties.iter() }
}
