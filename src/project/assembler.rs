use crate::catalog::{Equipment, Family, Mount};
use crate::config::Region;
use crate::links::{Link, Site};

use super::bands::frequency_plan;
use super::naming::product_key;
use super::types::{Location, ProjectLink, ProjectSite, TransmissionType};

pub const SITE_ID_BASE: u32 = 400_000;

/// Links and sites assembled for one batch, in site-id order.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    pub links: Vec<ProjectLink>,
    pub sites: Vec<ProjectSite>,
}

/// Turns resolved links into planner records. Owns the site-id counter for
/// the duration of one batch.
#[derive(Debug)]
pub struct Assembler {
    region: Region,
    next_site_id: u32,
    assembly: Assembly,
}

impl Assembler {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            next_site_id: SITE_ID_BASE,
            assembly: Assembly::default(),
        }
    }

    pub fn add(&mut self, link: &Link, equipment: &Equipment) -> &ProjectLink {
        let id = self.next_site_id;
        self.next_site_id += 2;

        let start = self.site(id, &link.site_a, equipment);
        let end = self.site(id + 1, &link.site_b, equipment);

        let plan = frequency_plan(link.requirements.band);
        let transmission = match equipment.family {
            Family::Xg1000 => TransmissionType::DualCarrier,
            _ => TransmissionType::SingleCarrier,
        };

        self.assembly.sites.push(start.clone());
        self.assembly.sites.push(end.clone());
        let index = self.assembly.links.len();
        self.assembly.links.push(ProjectLink::new(
            plan.frequencies(),
            plan.nominal,
            transmission,
            link.requirements.bandwidth,
            start,
            end,
        ));
        &self.assembly.links[index]
    }

    fn site(&self, id: u32, site: &Site, equipment: &Equipment) -> ProjectSite {
        let mut record = ProjectSite::new(
            id,
            site.name.clone(),
            Location {
                latitude: site.latitude.clone(),
                longitude: site.longitude.clone(),
            },
            site.height.clone(),
        );
        record.device_product_key = product_key(equipment.family, &equipment.model, self.region);
        if equipment.mount == Mount::External {
            record.antenna_part_number = equipment.antenna.clone();
            record.rf_cable_part_number = equipment.cable.clone();
        }
        record
    }

    pub fn len(&self) -> usize {
        self.assembly.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assembly.links.is_empty()
    }

    pub fn finish(self) -> Assembly {
        self.assembly
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::{Availability, Band, Bandwidth, Exclusions, Requirements};

    fn link(a: &str, b: &str, band: Band) -> Link {
        let site = |name: &str| Site {
            name: name.to_string(),
            latitude: "55.75".to_string(),
            longitude: "37.61".to_string(),
            height: "25".to_string(),
        };
        Link {
            label: format!("From {} to {}", a, b),
            site_a: site(a),
            site_b: site(b),
            requirements: Requirements {
                band,
                bandwidth: Bandwidth::new(20.0).unwrap(),
                capacity: 100,
                availability: Availability::Percent9990,
                exclusions: Exclusions::default(),
            },
        }
    }

    fn equipment(family: Family, mount: Mount) -> Equipment {
        Equipment {
            family,
            name: "XG-1000 + ANT".to_string(),
            model: "XG-1000".to_string(),
            mount,
            antenna: Some("ANT-32".to_string()),
            cable: Some("CAB-RF-1M".to_string()),
        }
    }

    #[test]
    fn site_ids_step_by_two_across_the_batch() {
        let mut assembler = Assembler::new(Region::Worldwide);
        let eq = equipment(Family::Xg1000, Mount::Internal);
        assembler.add(&link("A", "B", Band::Ghz5), &eq);
        assembler.add(&link("C", "D", Band::Ghz5), &eq);

        let assembly = assembler.finish();
        let ids: Vec<u32> = assembly.sites.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![400000, 400001, 400002, 400003]);
        assert_eq!(assembly.links[1].start_site.id, 400002);
        assert_eq!(assembly.links[1].end_site.name, "D");
    }

    #[test]
    fn external_mount_carries_parts_to_both_ends() {
        let mut assembler = Assembler::new(Region::Worldwide);
        let link = assembler
            .add(&link("A", "B", Band::Ghz28), &equipment(Family::Pro2x2, Mount::External))
            .clone();

        for site in [&link.start_site, &link.end_site] {
            assert_eq!(site.antenna_part_number.as_deref(), Some("ANT-32"));
            assert_eq!(site.rf_cable_part_number.as_deref(), Some("CAB-RF-1M"));
            assert_eq!(site.device_product_key, "InfiLINK 2x2#XG-1000");
        }
        assert_eq!(link.band, 28_000);
        assert_eq!(link.transmission_type, TransmissionType::SingleCarrier);
    }

    #[test]
    fn internal_mount_leaves_parts_empty() {
        let mut assembler = Assembler::new(Region::Worldwide);
        let link = assembler
            .add(&link("A", "B", Band::Ghz6), &equipment(Family::Xg1000, Mount::Internal))
            .clone();

        assert_eq!(link.start_site.antenna_part_number, None);
        assert_eq!(link.end_site.rf_cable_part_number, None);
        assert_eq!(link.transmission_type, TransmissionType::DualCarrier);
        assert_eq!(link.frequencies.start, 6000);
        assert_eq!(link.bandwidth, Bandwidth::new(20.0).unwrap());
        assert_eq!(link.start_site.location.latitude, "55.75");
    }
}
