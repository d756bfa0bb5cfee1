use serde::{Deserialize, Serialize};
use strum_macros::{Display, IntoStaticStr};

use crate::catalog::Family;

/// Supported frequency bands, keyed by their GHz code.
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
pub enum Band {
    #[serde(rename = "3")]
    #[strum(serialize = "3")]
    Ghz3,
    #[serde(rename = "4")]
    #[strum(serialize = "4")]
    Ghz4,
    #[serde(rename = "5")]
    #[strum(serialize = "5")]
    Ghz5,
    #[serde(rename = "6")]
    #[strum(serialize = "6")]
    Ghz6,
    #[serde(rename = "28")]
    #[strum(serialize = "28")]
    Ghz28,
    #[serde(rename = "70")]
    #[strum(serialize = "70")]
    Ghz70,
}

impl Band {
    pub const ALL: [Band; 6] = [
        Band::Ghz3,
        Band::Ghz4,
        Band::Ghz5,
        Band::Ghz6,
        Band::Ghz28,
        Band::Ghz70,
    ];

    pub fn code(self) -> &'static str {
        self.into()
    }

    pub fn parse(code: &str) -> Option<Band> {
        Band::ALL.into_iter().find(|band| band.code() == code)
    }
}

/// Target service availability; selects the range curve of a device.
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
pub enum Availability {
    #[serde(rename = "99.90")]
    #[strum(serialize = "99.90")]
    Percent9990,
    #[serde(rename = "99.99")]
    #[strum(serialize = "99.99")]
    Percent9999,
}

impl Availability {
    pub fn parse(text: &str) -> Option<Availability> {
        [Availability::Percent9990, Availability::Percent9999]
            .into_iter()
            .find(|a| <&'static str>::from(*a) == text)
    }
}

/// Channel bandwidth in MHz. Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Bandwidth(f64);

impl Bandwidth {
    pub fn new(mhz: f64) -> Option<Self> {
        (mhz.is_finite() && mhz > 0.0).then_some(Self(mhz))
    }

    pub fn mhz(self) -> f64 {
        self.0
    }

    /// Key used by the catalog curves: `40` for whole numbers, `3.5` otherwise.
    pub fn key(self) -> String {
        if self.0.fract() == 0.0 {
            format!("{}", self.0 as u64)
        } else {
            format!("{}", self.0)
        }
    }
}

/// Exclusion directive tokens. Both Quanta bandplans share one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExclusionTag {
    Xg1000,
    Xg500,
    Quanta,
    E5000,
    R5000Pro,
    R5000Lite,
}

impl ExclusionTag {
    pub const ALL: [ExclusionTag; 6] = [
        ExclusionTag::Xg1000,
        ExclusionTag::Xg500,
        ExclusionTag::Quanta,
        ExclusionTag::E5000,
        ExclusionTag::R5000Pro,
        ExclusionTag::R5000Lite,
    ];

    pub fn token(self) -> &'static str {
        match self {
            ExclusionTag::Xg1000 => "xg1000",
            ExclusionTag::Xg500 => "xg500",
            ExclusionTag::Quanta => "quanta",
            ExclusionTag::E5000 => "e5000",
            ExclusionTag::R5000Pro => "r5000_pro",
            ExclusionTag::R5000Lite => "r5000_lite",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Families the link must avoid. All flags default to false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exclusions([bool; 6]);

impl Exclusions {
    /// Case-insensitive token search over free text. Unknown text excludes nothing.
    pub fn parse(text: &str) -> Self {
        let text = text.to_lowercase();
        let mut flags = [false; 6];
        for tag in ExclusionTag::ALL {
            flags[tag.index()] = text.contains(tag.token());
        }
        Self(flags)
    }

    pub fn is_set(&self, tag: ExclusionTag) -> bool {
        self.0[tag.index()]
    }

    pub fn excludes(&self, family: Family) -> bool {
        family.exclusion_tag().is_some_and(|tag| self.is_set(tag))
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|f| *f)
    }
}

/// Link endpoint. Coordinates and height are stored as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub name: String,
    pub latitude: String,
    pub longitude: String,
    pub height: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Requirements {
    pub band: Band,
    pub bandwidth: Bandwidth,
    /// Required capacity, Mbps.
    pub capacity: u32,
    pub availability: Availability,
    pub exclusions: Exclusions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub label: String,
    pub site_a: Site,
    pub site_b: Site,
    pub requirements: Requirements,
}

pub fn link_label(a: &str, b: &str) -> String {
    format!("From {} to {}", a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_codes_round_trip_through_text() {
        for band in Band::ALL {
            assert_eq!(Band::parse(band.code()), Some(band));
            assert_eq!(band.to_string(), band.code());
        }
        assert_eq!(Band::parse("7"), None);
        assert_eq!(Band::parse(" 5"), None);
    }

    #[test]
    fn availability_accepts_only_two_classes() {
        assert_eq!(Availability::parse("99.90"), Some(Availability::Percent9990));
        assert_eq!(Availability::parse("99.99"), Some(Availability::Percent9999));
        assert_eq!(Availability::parse("99.9"), None);
        assert_eq!(Availability::parse("99.95"), None);
    }

    #[test]
    fn bandwidth_key_drops_trailing_zero_fraction() {
        assert_eq!(Bandwidth::new(40.0).unwrap().key(), "40");
        assert_eq!(Bandwidth::new(3.5).unwrap().key(), "3.5");
        assert!(Bandwidth::new(0.0).is_none());
        assert!(Bandwidth::new(-20.0).is_none());
        assert!(Bandwidth::new(f64::NAN).is_none());
    }

    #[test]
    fn exclusions_match_tokens_case_insensitively() {
        let ex = Exclusions::parse("no XG1000, no Quanta please; R5000_Lite");
        assert!(ex.is_set(ExclusionTag::Xg1000));
        assert!(ex.is_set(ExclusionTag::Quanta));
        assert!(ex.is_set(ExclusionTag::R5000Lite));
        assert!(!ex.is_set(ExclusionTag::Xg500));
        assert!(!ex.is_set(ExclusionTag::E5000));
        assert!(!ex.is_set(ExclusionTag::R5000Pro));
    }

    #[test]
    fn quanta_token_covers_every_quanta_bandplan() {
        let ex = Exclusions::parse("quanta");
        assert!(ex.excludes(Family::Quanta5));
        assert!(ex.excludes(Family::Quanta6));
        assert!(ex.excludes(Family::Quanta70));
        assert!(!ex.excludes(Family::Axion28));
    }

    #[test]
    fn unrecognized_text_excludes_nothing() {
        assert_eq!(Exclusions::parse(""), Exclusions::default());
        assert!(!Exclusions::parse("anything goes").any());
    }
}
