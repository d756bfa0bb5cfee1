use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, IntoStaticStr};

use crate::links::{Availability, Bandwidth, ExclusionTag};

/// Product line. Drives weighting, exclusion lookup and product-key naming.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    IntoStaticStr,
)]
pub enum Family {
    #[serde(rename = "InfiLINK XG 1000")]
    #[strum(serialize = "InfiLINK XG 1000")]
    Xg1000,
    #[serde(rename = "InfiLINK XG 500")]
    #[strum(serialize = "InfiLINK XG 500")]
    Xg500,
    #[serde(rename = "Quanta 5")]
    #[strum(serialize = "Quanta 5")]
    Quanta5,
    #[serde(rename = "Quanta 6")]
    #[strum(serialize = "Quanta 6")]
    Quanta6,
    #[serde(rename = "Quanta 70")]
    #[strum(serialize = "Quanta 70")]
    Quanta70,
    #[serde(rename = "InfiLINK Evolution")]
    #[strum(serialize = "InfiLINK Evolution")]
    Evolution,
    #[serde(rename = "InfiLINK 2x2 PRO")]
    #[strum(serialize = "InfiLINK 2x2 PRO")]
    Pro2x2,
    #[serde(rename = "InfiLINK 2x2 LITE")]
    #[strum(serialize = "InfiLINK 2x2 LITE")]
    Lite2x2,
    #[serde(rename = "Axion 28")]
    #[strum(serialize = "Axion 28")]
    Axion28,
}

impl Family {
    pub fn exclusion_tag(self) -> Option<ExclusionTag> {
        match self {
            Family::Xg1000 => Some(ExclusionTag::Xg1000),
            Family::Xg500 => Some(ExclusionTag::Xg500),
            Family::Quanta5 | Family::Quanta6 | Family::Quanta70 => Some(ExclusionTag::Quanta),
            Family::Evolution => Some(ExclusionTag::E5000),
            Family::Pro2x2 => Some(ExclusionTag::R5000Pro),
            Family::Lite2x2 => Some(ExclusionTag::R5000Lite),
            Family::Axion28 => None,
        }
    }

    pub fn is_quanta(self) -> bool {
        matches!(self, Family::Quanta5 | Family::Quanta6 | Family::Quanta70)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mount {
    Internal,
    External,
}

/// Modulation step index, written `MCS<n>`. Orders numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mcs(pub u8);

impl fmt::Display for Mcs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MCS{}", self.0)
    }
}

impl FromStr for Mcs {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("MCS")
            .and_then(|n| n.parse().ok())
            .map(Mcs)
            .ok_or_else(|| format!("invalid modulation step: {}", s))
    }
}

impl Serialize for Mcs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Mcs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Throughput (Mbps) per modulation step for one bandwidth.
pub type CapacityCurve = BTreeMap<Mcs, u32>;
/// Maximum range (km) per modulation step for one bandwidth.
pub type RangeCurve = BTreeMap<Mcs, f64>;

/// Catalog entry. Curves are keyed by bandwidth text (see `Bandwidth::key`).
///
/// Field aliases accept documents written by the spreadsheet import job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    #[serde(alias = "Family")]
    pub family: Family,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Model")]
    pub model: String,
    #[serde(alias = "Type")]
    pub mount: Mount,
    #[serde(default, alias = "Antenna")]
    pub antenna: Option<String>,
    #[serde(default, alias = "RF Cable")]
    pub cable: Option<String>,
    #[serde(alias = "Capacity")]
    pub capacity: BTreeMap<String, CapacityCurve>,
    #[serde(alias = "Availability")]
    pub availability: BTreeMap<Availability, BTreeMap<String, RangeCurve>>,
}

impl DeviceRecord {
    pub fn capacity_curve(&self, bandwidth: Bandwidth) -> Option<&CapacityCurve> {
        self.capacity.get(&bandwidth.key())
    }

    pub fn max_range_km(
        &self,
        availability: Availability,
        bandwidth: Bandwidth,
        step: Mcs,
    ) -> Option<f64> {
        self.availability
            .get(&availability)?
            .get(&bandwidth.key())?
            .get(&step)
            .copied()
    }

    /// The record without its curves, as carried by a resolved link.
    pub fn equipment(&self) -> Equipment {
        Equipment {
            family: self.family,
            name: self.name.clone(),
            model: self.model.clone(),
            mount: self.mount,
            antenna: self.antenna.clone(),
            cable: self.cable.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equipment {
    pub family: Family,
    pub name: String,
    pub model: String,
    pub mount: Mount,
    pub antenna: Option<String>,
    pub cable: Option<String>,
}
