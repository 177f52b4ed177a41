pub mod appraise;
pub mod classify;
pub mod neighborhood;
pub mod radius;

use anyhow::Result;
use log::{debug, info};
use openappraise::{read_neighborhood, read_properties, Neighborhood, PropertySet};

use crate::cli::InputArgs;

/// Load the property records and boundary named on the command line.
pub(crate) fn load(input: &InputArgs) -> Result<(PropertySet, Neighborhood)> {
    info!("[load] properties from {}", input.properties.display());
    let properties = read_properties(&input.properties)?;
    debug!("[load] {} properties", properties.len());

    info!("[load] boundary from {}", input.boundary.display());
    let neighborhood = read_neighborhood(&input.boundary)?;
    debug!("[load] boundary bounds {:?}", neighborhood.bounds());

    Ok((properties, neighborhood))
}

/// Print `value` to stdout as pretty JSON.
pub(crate) fn emit(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
