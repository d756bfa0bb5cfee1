use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::error::CatalogError;
use super::types::DeviceRecord;
use crate::links::Band;

/// Read-only device catalog, partitioned by frequency band.
pub trait Catalog {
    /// Every device of one band. A band with no table yields an empty slice.
    fn band_table(&self, band: Band) -> Result<&[DeviceRecord], CatalogError>;

    /// Re-fetch a single record by display name, within one band only.
    fn device(&self, band: Band, name: &str) -> Result<&DeviceRecord, CatalogError>;

    /// Bands that have a table.
    fn bands(&self) -> Vec<Band>;
}

/// A band table is either a plain list, or the id-keyed document map
/// written by the spreadsheet import job.
#[derive(Deserialize)]
#[serde(untagged)]
enum TableDocument {
    List(Vec<DeviceRecord>),
    Documents(BTreeMap<String, DeviceRecord>),
}

impl TableDocument {
    fn into_records(self) -> Vec<DeviceRecord> {
        match self {
            TableDocument::List(records) => records,
            TableDocument::Documents(docs) => docs.into_values().collect(),
        }
    }
}

/// Catalog held in memory, loaded from a JSON document
/// `{ "<band code>": [DeviceRecord, ...], ... }`.
#[derive(Debug, Clone, Default)]
pub struct JsonCatalog {
    tables: BTreeMap<Band, Vec<DeviceRecord>>,
}

impl JsonCatalog {
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        log::info!(
            "Loaded catalog {} ({} devices in {} bands)",
            path.display(),
            catalog.len(),
            catalog.tables.len()
        );
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: BTreeMap<String, TableDocument> = serde_json::from_str(json)?;

        let mut tables = BTreeMap::new();
        for (key, table) in raw {
            let band = Band::parse(&key).ok_or(CatalogError::UnknownBand(key))?;
            tables.insert(band, table.into_records());
        }
        Ok(Self { tables })
    }

    pub fn from_tables(tables: impl IntoIterator<Item = (Band, Vec<DeviceRecord>)>) -> Self {
        Self {
            tables: tables.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tables.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Catalog for JsonCatalog {
    fn band_table(&self, band: Band) -> Result<&[DeviceRecord], CatalogError> {
        Ok(self.tables.get(&band).map(Vec::as_slice).unwrap_or_default())
    }

    fn device(&self, band: Band, name: &str) -> Result<&DeviceRecord, CatalogError> {
        self.band_table(band)?
            .iter()
            .find(|record| record.name == name)
            .ok_or_else(|| CatalogError::DeviceNotFound {
                band,
                name: name.to_string(),
            })
    }

    fn bands(&self) -> Vec<Band> {
        self.tables.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Family;

    fn record_json(family: &str, name: &str) -> String {
        format!(
            r#"{{"family": "{family}", "name": "{name}", "model": "{name}", "mount": "internal",
                "capacity": {{"20": {{"MCS0": 10, "MCS1": 30}}}},
                "availability": {{"99.90": {{"20": {{"MCS0": 9.0, "MCS1": 4.0}}}}}}}}"#
        )
    }

    #[test]
    fn loads_list_and_document_tables() {
        let json = format!(
            r#"{{"5": [{}, {}], "70": {{"1": {}}}}}"#,
            record_json("InfiLINK XG 1000", "XG-1000"),
            record_json("Quanta 5", "Q5"),
            record_json("Quanta 70", "Q70"),
        );
        let catalog = JsonCatalog::from_json(&json).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.bands(), vec![Band::Ghz5, Band::Ghz70]);
        assert_eq!(catalog.band_table(Band::Ghz5).unwrap().len(), 2);
        assert_eq!(
            catalog.device(Band::Ghz70, "Q70").unwrap().family,
            Family::Quanta70
        );
    }

    #[test]
    fn lookups_never_cross_bands() {
        let json = format!(r#"{{"5": [{}]}}"#, record_json("Quanta 5", "Q5"));
        let catalog = JsonCatalog::from_json(&json).unwrap();

        assert!(catalog.band_table(Band::Ghz6).unwrap().is_empty());
        let err = catalog.device(Band::Ghz6, "Q5").unwrap_err();
        assert!(matches!(err, CatalogError::DeviceNotFound { band: Band::Ghz6, .. }));
    }

    #[test]
    fn unknown_band_key_is_rejected() {
        let err = JsonCatalog::from_json(r#"{"11": []}"#).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownBand(key) if key == "11"));
    }
}
