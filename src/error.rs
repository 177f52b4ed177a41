use parcelgeo::GeoError;

use crate::property::PropertyId;

/// Errors returned by the locality and valuation engines.
///
/// Every variant is a condition the caller is expected to branch on; none of
/// them is a panic in disguise.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppraisalError {
    /// The requested property id is absent from the supplied collection.
    #[error("property {0} not found")]
    NotFound(PropertyId),

    /// The target property lies outside the neighborhood it was required to be in.
    #[error("property {0} is not inside the neighborhood")]
    NotInRegion(PropertyId),

    /// Two records in one collection share an id.
    #[error("duplicate property id {0}")]
    DuplicateProperty(PropertyId),

    /// A neighborhood boundary could not be built.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A numeric parameter or record field is out of range.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<GeoError> for AppraisalError {
    fn from(e: GeoError) -> Self {
        AppraisalError::InvalidGeometry(e.to_string())
    }
}

pub type Result<T, E = AppraisalError> = std::result::Result<T, E>;
