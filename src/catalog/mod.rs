mod error;
mod store;
mod types;

pub use error::CatalogError;
pub use store::{Catalog, JsonCatalog};
pub use types::{CapacityCurve, DeviceRecord, Equipment, Family, Mcs, Mount, RangeCurve};
