use super::types::ProjectSite;

/// Part counts across the sites of one batch, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bom {
    entries: Vec<(String, u32)>,
}

impl Bom {
    /// Count the device (product key with `#` as a space), antenna and cable
    /// of every site.
    pub fn from_sites(sites: &[ProjectSite]) -> Self {
        let mut bom = Self::default();
        for site in sites {
            bom.add(&site.device_product_key.replace('#', " "));
            if let Some(antenna) = &site.antenna_part_number {
                bom.add(antenna);
            }
            if let Some(cable) = &site.rf_cable_part_number {
                bom.add(cable);
            }
        }
        bom
    }

    fn add(&mut self, part: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == part) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((part.to_string(), 1)),
        }
    }

    pub fn entries(&self) -> &[(String, u32)] {
        &self.entries
    }

    pub fn count(&self, part: &str) -> u32 {
        self.entries
            .iter()
            .find(|(name, _)| name == part)
            .map_or(0, |(_, count)| *count)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `{vendor} {part}: {count} pc.`, one line per part.
    pub fn lines(&self, vendor: &str) -> Vec<String> {
        self.entries
            .iter()
            .map(|(part, count)| format!("{} {}: {} pc.", vendor, part, count))
            .collect()
    }
}
