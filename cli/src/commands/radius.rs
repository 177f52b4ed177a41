use anyhow::Result;
use log::info;
use openappraise::{properties_within_radius, PropertyId};

use crate::cli::{Cli, RadiusArgs};
use crate::commands::{emit, load};

pub fn run(_cli: &Cli, args: &RadiusArgs) -> Result<()> {
    let (properties, neighborhood) = load(&args.input)?;
    let target = PropertyId(args.input.target);

    let found = properties_within_radius(target, &properties, &neighborhood, args.miles)?;
    info!("[radius] {} properties within {} mi of {target}, outside the neighborhood", found.len(), args.miles);

    emit(&found)
}
