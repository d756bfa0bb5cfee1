use crate::config::ProjectDefaults;

use super::error::{BatchError, RequirementError};
use super::reader::Row;
use super::types::{
    link_label, Availability, Band, Bandwidth, Exclusions, Link, Requirements, Site,
};

const SITE_FIELDS: usize = 4;
const FULL_FIELDS: usize = 9;

/// A link that failed validation, tied to its label.
#[derive(Debug)]
pub struct RejectedLink {
    pub label: String,
    pub error: RequirementError,
}

#[derive(Debug, Default)]
pub struct LinkBatch {
    pub links: Vec<Link>,
    pub rejected: Vec<RejectedLink>,
}

/// Pair consecutive rows into links: row 2k is site A, row 2k+1 is site B.
///
/// Requirement overrides are read from the site A row; an empty override
/// falls back to the matching project default.
pub fn build_links(rows: &[Row], defaults: &ProjectDefaults) -> Result<LinkBatch, BatchError> {
    if rows.len() % 2 != 0 {
        return Err(BatchError::OddRowCount(rows.len()));
    }

    let mut batch = LinkBatch::default();
    for pair in rows.chunks_exact(2) {
        let (row_a, row_b) = (&pair[0], &pair[1]);
        let label = link_label(field(row_a, 0), field(row_b, 0));

        match build_link(&label, row_a, row_b, defaults) {
            Ok(link) => batch.links.push(link),
            Err(error) => batch.rejected.push(RejectedLink { label, error }),
        }
    }
    Ok(batch)
}

fn build_link(
    label: &str,
    row_a: &Row,
    row_b: &Row,
    defaults: &ProjectDefaults,
) -> Result<Link, RequirementError> {
    check_field_count(row_a)?;
    check_field_count(row_b)?;

    let requirements = if row_a.len() == FULL_FIELDS {
        Requirements {
            band: check_frequency(or_default(&row_a[4], &defaults.frequency))?,
            bandwidth: check_bandwidth(or_default(&row_a[5], &defaults.bandwidth))?,
            capacity: check_capacity(or_default(&row_a[6], &defaults.capacity))?,
            availability: check_availability(or_default(&row_a[7], &defaults.availability))?,
            exclusions: Exclusions::parse(or_default(&row_a[8], &defaults.exclude)),
        }
    } else {
        resolve_defaults(defaults)?
    };

    Ok(Link {
        label: label.to_string(),
        site_a: site(row_a),
        site_b: site(row_b),
        requirements,
    })
}

/// Validate the project defaults on their own.
pub fn resolve_defaults(defaults: &ProjectDefaults) -> Result<Requirements, RequirementError> {
    Ok(Requirements {
        band: check_frequency(&defaults.frequency)?,
        bandwidth: check_bandwidth(&defaults.bandwidth)?,
        capacity: check_capacity(&defaults.capacity)?,
        availability: check_availability(&defaults.availability)?,
        exclusions: Exclusions::parse(&defaults.exclude),
    })
}

fn check_field_count(row: &Row) -> Result<(), RequirementError> {
    match row.len() {
        SITE_FIELDS | FULL_FIELDS => Ok(()),
        count => Err(RequirementError::FieldCount {
            site: field(row, 0).to_string(),
            count,
        }),
    }
}

pub fn check_frequency(value: &str) -> Result<Band, RequirementError> {
    Band::parse(value).ok_or_else(|| RequirementError::Frequency(value.to_string()))
}

pub fn check_bandwidth(value: &str) -> Result<Bandwidth, RequirementError> {
    value
        .parse::<f64>()
        .ok()
        .and_then(Bandwidth::new)
        .ok_or_else(|| RequirementError::Bandwidth(value.to_string()))
}

pub fn check_capacity(value: &str) -> Result<u32, RequirementError> {
    match value.parse::<u32>() {
        Ok(capacity) if capacity > 0 => Ok(capacity),
        _ => Err(RequirementError::Capacity(value.to_string())),
    }
}

pub fn check_availability(value: &str) -> Result<Availability, RequirementError> {
    Availability::parse(value).ok_or_else(|| RequirementError::Availability(value.to_string()))
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

fn field(row: &Row, index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or_default()
}

fn site(row: &Row) -> Site {
    Site {
        name: row[0].clone(),
        latitude: row[1].clone(),
        longitude: row[2].clone(),
        height: row[3].clone(),
    }
}
