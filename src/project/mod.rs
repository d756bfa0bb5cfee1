mod assembler;
mod bands;
mod bom;
mod error;
mod export;
mod naming;
mod types;

pub use assembler::{Assembler, Assembly, SITE_ID_BASE};
pub use bands::{frequency_plan, FrequencyPlan, FREQUENCY_PLANS};
pub use bom::Bom;
pub use error::ExportError;
pub use export::{available_path, ProjectWriter, WrittenFiles};
pub use naming::{product_key, product_tag, regional_model};
pub use types::{
    Frequencies, Location, ProjectDocument, ProjectLink, ProjectSite, TransmissionType,
};
