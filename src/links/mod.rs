mod builder;
mod error;
mod reader;
mod types;

pub use builder::{build_links, resolve_defaults, LinkBatch, RejectedLink};
pub use error::{BatchError, ReadError, RequirementError};
pub use reader::{read_rows, read_rows_from, Row};
pub use types::{
    link_label, Availability, Band, Bandwidth, ExclusionTag, Exclusions, Link, Requirements,
    Site,
};
