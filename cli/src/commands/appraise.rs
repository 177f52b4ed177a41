use anyhow::Result;
use log::{debug, info};
use openappraise::{read_config, AppraisalConfig, PropertyId};

use crate::cli::{AppraiseArgs, Cli};
use crate::commands::{emit, load};

pub fn run(_cli: &Cli, args: &AppraiseArgs) -> Result<()> {
    let (properties, neighborhood) = load(&args.input)?;
    let target = PropertyId(args.input.target);

    let config = match &args.config {
        Some(path) => {
            info!("[appraise] config from {}", path.display());
            read_config(path)?
        }
        None => AppraisalConfig::default(),
    };
    let as_of = args.as_of.unwrap_or_else(|| chrono::Local::now().date_naive());
    info!("[appraise] valuing {target} as of {as_of}");

    let summary = openappraise::appraise(target, &properties, &neighborhood, &config, as_of)?;

    for comp in &summary.sales_comparison.comparables {
        debug!(
            "[appraise] {} ({:?}): {:.2}/sqft x weight {:.2} x recency {:.2} -> {:.2}/sqft",
            comp.property.name, comp.group, comp.property.price_per_square_foot(),
            comp.group_weight, comp.recency_factor, comp.weighted_value,
        );
    }
    for row in &summary.rows {
        info!("[appraise] {}: ${:.2}", row.method, row.value);
    }

    emit(&summary)
}
