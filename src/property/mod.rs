mod property;
mod set;

pub use property::{Property, PropertyId};
pub use set::PropertySet;
