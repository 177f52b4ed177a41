use anyhow::Result;
use log::info;
use openappraise::{properties_in_neighborhood, PropertyId};

use crate::cli::{Cli, SearchArgs};
use crate::commands::{emit, load};

pub fn run(_cli: &Cli, args: &SearchArgs) -> Result<()> {
    let (properties, neighborhood) = load(&args.input)?;
    let target = PropertyId(args.input.target);

    let found = properties_in_neighborhood(target, &properties, &neighborhood)?;
    info!("[neighborhood] {} properties share a neighborhood with {target}", found.len());

    emit(&found)
}
