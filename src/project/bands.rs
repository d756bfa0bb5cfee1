use crate::links::Band;

use super::types::Frequencies;

/// Frequency span and nominal band (MHz) of one band code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyPlan {
    pub band: Band,
    pub start: u32,
    pub end: u32,
    pub nominal: u32,
}

impl FrequencyPlan {
    pub const fn new(band: Band, start: u32, end: u32, nominal: u32) -> Self {
        Self {
            band,
            start,
            end,
            nominal,
        }
    }

    pub fn frequencies(&self) -> Frequencies {
        Frequencies {
            start: self.start,
            end: self.end,
        }
    }
}

/// One entry per band, in `Band` declaration order.
pub const FREQUENCY_PLANS: [FrequencyPlan; 6] = [
    FrequencyPlan::new(Band::Ghz3, 2_990, 4_010, 3_000),
    FrequencyPlan::new(Band::Ghz4, 3_990, 5_010, 4_000),
    FrequencyPlan::new(Band::Ghz5, 4_850, 6_050, 5_000),
    FrequencyPlan::new(Band::Ghz6, 6_000, 6_425, 6_000),
    FrequencyPlan::new(Band::Ghz28, 28_000, 29_000, 28_000),
    FrequencyPlan::new(Band::Ghz70, 70_500, 76_000, 70_500),
];

pub fn frequency_plan(band: Band) -> &'static FrequencyPlan {
    &FREQUENCY_PLANS[band as usize]
}
