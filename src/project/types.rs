use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::links::Bandwidth;

pub const APP_VERSION: &str = "609ef5b";

// Planning constants carried by every link and site of a generated project.
const LINK_TEMPERATURE_K: u32 = 293;
const AIR_PRESSURE_HPA: u32 = 800;
const HUMIDITY_PERCENT: u32 = 60;
const GOAL_DISTANCE_M: u32 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub latitude: String,
    pub longitude: String,
}

/// One endpoint of a planned link, with its device and parts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSite {
    pub id: u32,
    pub name: String,
    pub location: Location,
    pub antenna_height: String,
    pub device_product_key: String,
    pub antenna_part_number: Option<String>,
    pub rf_cable_part_number: Option<String>,
    pub relocation_locked: bool,
    pub interference: String,
    pub temperature: u32,
}

impl ProjectSite {
    pub fn new(id: u32, name: String, location: Location, antenna_height: String) -> Self {
        Self {
            id,
            name,
            location,
            antenna_height,
            device_product_key: String::new(),
            antenna_part_number: None,
            rf_cable_part_number: None,
            relocation_locked: true,
            interference: "-Infinity".to_string(),
            temperature: LINK_TEMPERATURE_K,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransmissionType {
    SingleCarrier,
    DualCarrier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TerrainType {
    Average,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClimateType {
    Normal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalType {
    Distance,
}

/// Frequency span in MHz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Frequencies {
    pub start: u32,
    pub end: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Goal {
    #[serde(rename = "type")]
    pub kind: GoalType,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLink {
    pub terrain_type: TerrainType,
    pub climate_type: ClimateType,
    pub frequencies: Frequencies,
    pub band: u32,
    pub transmission_type: TransmissionType,
    pub bandwidth: Bandwidth,
    pub goal: Goal,
    pub tx_power_limit: String,
    pub eirp_limit: Option<f64>,
    pub temperature: u32,
    pub total_air_pressure: u32,
    pub humidity: u32,
    pub start_site: ProjectSite,
    pub end_site: ProjectSite,
}

impl ProjectLink {
    pub fn new(
        frequencies: Frequencies,
        band: u32,
        transmission_type: TransmissionType,
        bandwidth: Bandwidth,
        start_site: ProjectSite,
        end_site: ProjectSite,
    ) -> Self {
        Self {
            terrain_type: TerrainType::Average,
            climate_type: ClimateType::Normal,
            frequencies,
            band,
            transmission_type,
            bandwidth,
            goal: Goal {
                kind: GoalType::Distance,
                value: GOAL_DISTANCE_M,
            },
            tx_power_limit: "Infinity".to_string(),
            eirp_limit: None,
            temperature: LINK_TEMPERATURE_K,
            total_air_pressure: AIR_PRESSURE_HPA,
            humidity: HUMIDITY_PERCENT,
            start_site,
            end_site,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PtmpSettings {
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectSettings {
    pub ptmp: PtmpSettings,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub regulation: String,
    pub unit_system: String,
    pub settings: ProjectSettings,
    pub updated_datetime: DateTime<Utc>,
    pub create_new: u8,
}

/// The planning project handed to the packaging step.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    pub app_version: String,
    pub app_version_full: String,
    pub links_array: Vec<ProjectLink>,
    pub sites_array: Vec<ProjectSite>,
    pub obstacles_array: Vec<serde_json::Value>,
    pub project: ProjectInfo,
}

impl ProjectDocument {
    pub fn new(name: &str, links: Vec<ProjectLink>, sites: Vec<ProjectSite>) -> Self {
        Self {
            app_version: APP_VERSION.to_string(),
            app_version_full: APP_VERSION.to_string(),
            links_array: links,
            sites_array: sites,
            obstacles_array: Vec::new(),
            project: ProjectInfo {
                id: uuid::Uuid::new_v4().to_string(),
                name: name.to_string(),
                kind: "PTP".to_string(),
                regulation: "WORLDWIDE".to_string(),
                unit_system: "METRIC".to_string(),
                settings: ProjectSettings {
                    ptmp: PtmpSettings { visible: true },
                },
                updated_datetime: Utc::now(),
                create_new: 0,
            },
        }
    }
}
