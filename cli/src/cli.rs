use std::path::PathBuf;

/// Parcel locality and comparable-sales appraisal
#[derive(clap::Parser, Debug)]
#[command(name = "openappraise", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List properties inside the target's neighborhood
    Neighborhood(SearchArgs),

    /// List properties within a radius of the target, outside its neighborhood
    Radius(RadiusArgs),

    /// Classify every property relative to the target
    Classify(RadiusArgs),

    /// Value the target with every method the config supports
    Appraise(AppraiseArgs),
}

#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Property records (JSON array)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub properties: PathBuf,

    /// Neighborhood boundary (GeoJSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub boundary: PathBuf,

    /// Id of the property being appraised
    #[arg(short, long)]
    pub target: i64,
}

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(clap::Args, Debug)]
pub struct RadiusArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Search radius in miles
    #[arg(short, long, default_value_t = openappraise::DEFAULT_RADIUS_MILES)]
    pub miles: f64,
}

#[derive(clap::Args, Debug)]
pub struct AppraiseArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Appraisal config (JSON); defaults apply when omitted
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Valuation date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub as_of: Option<chrono::NaiveDate>,
}
