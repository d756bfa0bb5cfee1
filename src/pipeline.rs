use std::path::Path;
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError, Equipment};
use crate::config::Config;
use crate::links::{build_links, read_rows, BatchError, Link, ReadError, RequirementError, Row};
use crate::project::{Assembler, Assembly, Bom, ExportError, ProjectDocument, ProjectWriter, WrittenFiles};
use crate::recommend::{link_distance_km, recommend, Geodesic, RecommendError};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Batch(#[from] BatchError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("no link could be resolved ({skipped} skipped), nothing to assemble")]
    NoLinksResolved { skipped: usize },
}

/// Why a single link was left out of the project.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error(transparent)]
    Requirements(#[from] RequirementError),
    #[error(transparent)]
    Recommendation(#[from] RecommendError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug)]
pub struct SkippedLink {
    pub label: String,
    pub reason: SkipReason,
}

/// A link with its chosen device.
#[derive(Debug, Clone)]
pub struct ResolvedLink {
    pub label: String,
    pub distance_km: f64,
    pub weight: f64,
    pub equipment: Equipment,
}

#[derive(Debug)]
pub struct BatchOutcome {
    pub resolved: Vec<ResolvedLink>,
    pub skipped: Vec<SkippedLink>,
    pub assembly: Assembly,
    pub bom: Bom,
}

impl BatchOutcome {
    pub fn bom_lines(&self, config: &Config) -> Vec<String> {
        self.bom.lines(&config.settings.vendor)
    }
}

/// Pick the equipment for one link.
pub fn resolve_link(
    link: &Link,
    config: &Config,
    catalog: &dyn Catalog,
    geodesic: &dyn Geodesic,
) -> Result<ResolvedLink, SkipReason> {
    let band = link.requirements.band;
    let distance_km = link_distance_km(geodesic, &link.site_a, &link.site_b)?;
    let table = catalog.band_table(band)?;
    let winner = recommend(link, distance_km, table, &config.settings.weights)?;
    let record = catalog.device(band, &winner.device)?;

    Ok(ResolvedLink {
        label: link.label.clone(),
        distance_km,
        weight: winner.weight,
        equipment: record.equipment(),
    })
}

/// Build, recommend and assemble every link of one batch of rows.
///
/// Per-link failures are collected in `skipped`; the batch fails only on an
/// odd row count or when no link resolves.
pub fn run_batch(
    rows: &[Row],
    config: &Config,
    catalog: &dyn Catalog,
    geodesic: &dyn Geodesic,
) -> Result<BatchOutcome, PipelineError> {
    let batch = build_links(rows, &config.project)?;

    let mut skipped: Vec<SkippedLink> = batch
        .rejected
        .into_iter()
        .map(|rejected| SkippedLink {
            label: rejected.label,
            reason: rejected.error.into(),
        })
        .collect();

    let mut assembler = Assembler::new(config.settings.region);
    let mut resolved = Vec::new();
    for link in &batch.links {
        match resolve_link(link, config, catalog, geodesic) {
            Ok(choice) => {
                log::info!(
                    "{}: {} ({} km)",
                    choice.label,
                    choice.equipment.name,
                    choice.distance_km
                );
                assembler.add(link, &choice.equipment);
                resolved.push(choice);
            }
            Err(reason) => skipped.push(SkippedLink {
                label: link.label.clone(),
                reason,
            }),
        }
    }

    for skip in &skipped {
        log::warn!("{} skipped: {}", skip.label, skip.reason);
    }

    if assembler.is_empty() {
        return Err(PipelineError::NoLinksResolved {
            skipped: skipped.len(),
        });
    }

    let assembly = assembler.finish();
    let bom = Bom::from_sites(&assembly.sites);
    log::info!(
        "Batch done: {} links resolved, {} skipped",
        resolved.len(),
        skipped.len()
    );

    Ok(BatchOutcome {
        resolved,
        skipped,
        assembly,
        bom,
    })
}

/// Read the rows file, run the batch and write the project and BOM files.
pub fn run_file(
    input: &Path,
    config: &Config,
    catalog: &dyn Catalog,
    geodesic: &dyn Geodesic,
) -> Result<(BatchOutcome, WrittenFiles), PipelineError> {
    let rows = read_rows(input)?;
    let outcome = run_batch(&rows, config, catalog, geodesic)?;

    let project_name = config.output.project_name.clone().unwrap_or_else(|| {
        input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "project".to_string())
    });
    let bom_name = config
        .output
        .bom_name
        .clone()
        .unwrap_or_else(|| project_name.clone());

    let document = ProjectDocument::new(
        &project_name,
        outcome.assembly.links.clone(),
        outcome.assembly.sites.clone(),
    );
    let writer = ProjectWriter::new(config.output.folder.clone());
    let written = writer.write(&document, &bom_name, &outcome.bom_lines(config))?;

    Ok((outcome, written))
}
