use anyhow::Result;
use openappraise::PropertyId;
use serde_json::json;

use crate::cli::{Cli, RadiusArgs};
use crate::commands::{emit, load};

pub fn run(_cli: &Cli, args: &RadiusArgs) -> Result<()> {
    let (properties, neighborhood) = load(&args.input)?;
    let target = PropertyId(args.input.target);

    let classes = openappraise::classify(target, &properties, &neighborhood, args.miles)?;
    let rows: Vec<_> = classes.iter()
        .filter_map(|(id, locality)| properties.get(*id).map(|p| json!({
            "id": p.id,
            "name": p.name,
            "locality": locality,
        })))
        .collect();

    emit(&rows)
}
