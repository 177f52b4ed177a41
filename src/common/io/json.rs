use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};

use crate::config::AppraisalConfig;
use crate::property::{Property, PropertySet};

/// Parse a JSON array of property records and build a validated set.
pub fn read_properties_from_bytes(bytes: &[u8]) -> Result<PropertySet> {
    let properties: Vec<Property> = serde_json::from_slice(bytes)
        .context("Failed to parse property records")?;
    for property in &properties {
        property.validate()?;
    }
    Ok(PropertySet::new(properties)?)
}

/// Read `properties.json` from `path`.
pub fn read_properties(path: &Path) -> Result<PropertySet> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read properties file: {}", path.display()))?;
    read_properties_from_bytes(&bytes)
        .with_context(|| format!("Invalid properties file: {}", path.display()))
}

/// Read and validate an appraisal configuration from a JSON file.
pub fn read_config(path: &Path) -> Result<AppraisalConfig> {
    let file = File::open(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: AppraisalConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate()
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    Ok(config)
}
