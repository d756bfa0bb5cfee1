use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("link '{link}': there is no suitable equipment, please check the requirements")]
    NoSuitableEquipment { link: String },
    #[error("site '{site}': {reason}")]
    Coordinates { site: String, reason: String },
}
