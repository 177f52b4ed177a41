mod geojson;
mod json;

pub use geojson::*;
pub use json::*;
