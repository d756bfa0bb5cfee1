use std::cmp::Ordering;

use super::error::RecommendError;
use crate::catalog::{CapacityCurve, DeviceRecord, Mcs};
use crate::config::FamilyWeights;
use crate::links::{Link, Requirements};

/// Scored device. Lowest weight wins; equal weights fall back to the name.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub weight: f64,
    pub device: String,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.device.cmp(&other.device))
    }
}

/// Operating point of a device for the requested capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkingPoint {
    pub step: Mcs,
    pub throughput: u32,
}

/// Pick the step whose throughput is closest to `capacity`.
///
/// Steps below the top one only qualify if they meet `capacity`; the top
/// step always qualifies. Equal distances keep the lower step.
pub fn working_point(curve: &CapacityCurve, capacity: u32) -> Option<WorkingPoint> {
    let (&top, &top_throughput) = curve.last_key_value()?;

    let eligible = curve
        .iter()
        .filter(|(step, throughput)| **step != top && **throughput >= capacity)
        .map(|(&step, &throughput)| WorkingPoint { step, throughput })
        .chain(std::iter::once(WorkingPoint {
            step: top,
            throughput: top_throughput,
        }));

    // min_by_key keeps the first of equal minima
    eligible.min_by_key(|p| (i64::from(p.throughput) - i64::from(capacity)).abs())
}

/// Family weight after the capacity and reach checks.
///
/// A capacity shortfall reverses the base weight. A reach shortfall sets it
/// to the reversed base weight whatever the capacity outcome was, so a
/// device that fails on reach scores the same with or without enough
/// capacity.
pub fn adjusted_weight(base: i64, required: u32, throughput: u32, overage_km: f64) -> f64 {
    let base = base as f64;
    let mut weight = if required > throughput { -base } else { base };
    if overage_km > 0.0 {
        weight = -base;
    }
    weight
}

/// Score one device, or `None` when it cannot be evaluated for this link.
pub fn score_device(
    device: &DeviceRecord,
    requirements: &Requirements,
    distance_km: f64,
    weights: &FamilyWeights,
) -> Option<Candidate> {
    let Some(curve) = device.capacity_curve(requirements.bandwidth) else {
        log::debug!(
            "{} doesn't support the requested bandwidth ({} MHz)",
            device.model,
            requirements.bandwidth.key()
        );
        return None;
    };
    let point = working_point(curve, requirements.capacity)?;

    let Some(range_km) =
        device.max_range_km(requirements.availability, requirements.bandwidth, point.step)
    else {
        log::warn!(
            "{} has no range for {} at {} MHz / {}%, skipped",
            device.name,
            point.step,
            requirements.bandwidth.key(),
            requirements.availability
        );
        return None;
    };

    // Positive: overage past the reach. Negative: remaining slack.
    let distance_term = distance_km - range_km;

    let base = weights.base(device.family);
    let penalty = if requirements.exclusions.excludes(device.family) {
        weights.exclude as f64
    } else {
        0.0
    };
    let weight = adjusted_weight(base, requirements.capacity, point.throughput, distance_term)
        + distance_term
        + penalty;

    log::debug!(
        "{}: {} @ {} Mbps, reach {} km, weight {}",
        device.name,
        point.step,
        point.throughput,
        range_km,
        weight
    );

    Some(Candidate {
        weight,
        device: device.name.clone(),
    })
}

/// Score every device of the band table and return the winner.
pub fn recommend(
    link: &Link,
    distance_km: f64,
    table: &[DeviceRecord],
    weights: &FamilyWeights,
) -> Result<Candidate, RecommendError> {
    table
        .iter()
        .filter_map(|device| score_device(device, &link.requirements, distance_km, weights))
        .min()
        .ok_or_else(|| RecommendError::NoSuitableEquipment {
            link: link.label.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Family, Mount};
    use crate::links::{Availability, Band, Bandwidth, Exclusions, Site};
    use std::collections::BTreeMap;

    fn curve(points: &[(u8, u32)]) -> CapacityCurve {
        points.iter().map(|&(s, t)| (Mcs(s), t)).collect()
    }

    fn device(name: &str, family: Family, caps: &[(u8, u32)], ranges: &[(u8, f64)]) -> DeviceRecord {
        let ranges: BTreeMap<Mcs, f64> = ranges.iter().map(|&(s, r)| (Mcs(s), r)).collect();
        DeviceRecord {
            family,
            name: name.to_string(),
            model: name.to_string(),
            mount: Mount::Internal,
            antenna: None,
            cable: None,
            capacity: BTreeMap::from([("40".to_string(), curve(caps))]),
            availability: BTreeMap::from([(
                Availability::Percent9999,
                BTreeMap::from([("40".to_string(), ranges)]),
            )]),
        }
    }

    fn link(capacity: u32, exclude: &str) -> Link {
        let site = |name: &str| Site {
            name: name.to_string(),
            latitude: "0".to_string(),
            longitude: "0".to_string(),
            height: "20".to_string(),
        };
        Link {
            label: "From A to B".to_string(),
            site_a: site("A"),
            site_b: site("B"),
            requirements: Requirements {
                band: Band::Ghz5,
                bandwidth: Bandwidth::new(40.0).unwrap(),
                capacity,
                availability: Availability::Percent9999,
                exclusions: Exclusions::parse(exclude),
            },
        }
    }

    #[test]
    fn working_point_is_closest_qualifying_step() {
        let c = curve(&[(0, 100), (1, 300), (2, 600), (3, 900)]);
        assert_eq!(working_point(&c, 500).unwrap().step, Mcs(2));
        assert_eq!(working_point(&c, 300).unwrap().step, Mcs(1));
        // Steps under the requirement never qualify, even when closer.
        assert_eq!(working_point(&c, 310).unwrap().step, Mcs(2));
    }

    #[test]
    fn working_point_falls_back_to_top_step() {
        let c = curve(&[(0, 100), (1, 300), (2, 600)]);
        let point = working_point(&c, 2000).unwrap();
        assert_eq!(point.step, Mcs(2));
        assert_eq!(point.throughput, 600);
        assert!(working_point(&CapacityCurve::new(), 10).is_none());
    }

    #[test]
    fn working_point_ties_keep_the_lower_step() {
        // 550 and the top step 450 are both 50 away from 500.
        let c = curve(&[(0, 550), (1, 600), (2, 450)]);
        assert_eq!(working_point(&c, 500).unwrap().step, Mcs(0));
        let c = curve(&[(0, 600), (1, 700), (2, 400)]);
        assert_eq!(working_point(&c, 500).unwrap().step, Mcs(0));
    }

    #[test]
    fn reach_beats_a_more_capable_family() {
        // 30 km link, 500 Mbps. Pro reaches 35 km, XG 1000 only 28 km.
        let weights = FamilyWeights::default();
        let pro = device("R5000-Pro", Family::Pro2x2, &[(0, 200), (1, 600)], &[(0, 50.0), (1, 35.0)]);
        let xg = device("XG-1000", Family::Xg1000, &[(0, 200), (1, 600)], &[(0, 40.0), (1, 28.0)]);
        let link = link(500, "");

        let pro_score = score_device(&pro, &link.requirements, 30.0, &weights).unwrap();
        let xg_score = score_device(&xg, &link.requirements, 30.0, &weights).unwrap();
        assert_eq!(pro_score.weight, -5000.0 - 5.0);
        assert_eq!(xg_score.weight, 1000.0 + 2.0);

        let winner = recommend(&link, 30.0, &[xg, pro], &weights).unwrap();
        assert_eq!(winner.device, "R5000-Pro");
    }

    #[test]
    fn cheapest_adequate_family_wins() {
        let weights = FamilyWeights::default();
        let lite = device("R5000-Lite", Family::Lite2x2, &[(0, 100), (1, 300)], &[(0, 20.0), (1, 12.0)]);
        let xg = device("XG-500", Family::Xg500, &[(0, 500), (1, 900)], &[(0, 40.0), (1, 30.0)]);

        let winner = recommend(&link(100, ""), 10.0, &[xg.clone(), lite.clone()], &weights).unwrap();
        assert_eq!(winner.device, "R5000-Lite");

        // Lite cannot carry 800 Mbps, so its weight reverses and XG wins.
        let winner = recommend(&link(800, ""), 10.0, &[xg, lite], &weights).unwrap();
        assert_eq!(winner.device, "XG-500");
    }

    #[test]
    fn reach_failure_hides_the_capacity_outcome() {
        assert_eq!(adjusted_weight(-4000, 100, 500, 3.0), 4000.0);
        assert_eq!(adjusted_weight(-4000, 900, 500, 3.0), 4000.0);
        assert_eq!(adjusted_weight(-4000, 900, 500, -3.0), 4000.0);
        assert_eq!(adjusted_weight(-4000, 100, 500, -3.0), -4000.0);
        assert_eq!(adjusted_weight(-4000, 100, 500, 0.0), -4000.0);
    }

    #[test]
    fn excluded_family_is_penalised_but_still_a_candidate() {
        let weights = FamilyWeights::default();
        let evo = device("E5000", Family::Evolution, &[(0, 500)], &[(0, 50.0)]);
        let link = link(400, "E5000");

        let score = score_device(&evo, &link.requirements, 10.0, &weights).unwrap();
        assert_eq!(score.weight, -4000.0 - 40.0 + 100_000.0);
        assert_eq!(recommend(&link, 10.0, &[evo], &weights).unwrap().device, "E5000");
    }

    #[test]
    fn devices_without_the_bandwidth_are_skipped() {
        let weights = FamilyWeights::default();
        let mut narrow = device("Narrow", Family::Xg1000, &[(0, 500)], &[(0, 50.0)]);
        narrow.capacity = BTreeMap::from([("20".to_string(), curve(&[(0, 500)]))]);
        let wide = device("Wide", Family::Lite2x2, &[(0, 10)], &[(0, 1.0)]);

        let winner = recommend(&link(400, ""), 10.0, &[narrow.clone(), wide], &weights).unwrap();
        assert_eq!(winner.device, "Wide");

        let err = recommend(&link(400, ""), 10.0, &[narrow], &weights).unwrap_err();
        assert!(matches!(err, RecommendError::NoSuitableEquipment { ref link } if link == "From A to B"));
        assert!(recommend(&link(400, ""), 10.0, &[], &weights).is_err());
    }

    #[test]
    fn equal_weights_pick_the_smaller_name() {
        let weights = FamilyWeights::default();
        let b = device("Quanta-B", Family::Quanta5, &[(0, 500)], &[(0, 40.0)]);
        let a = device("Quanta-A", Family::Quanta6, &[(0, 500)], &[(0, 40.0)]);

        let first = recommend(&link(500, ""), 20.0, &[b.clone(), a.clone()], &weights).unwrap();
        let again = recommend(&link(500, ""), 20.0, &[a, b], &weights).unwrap();
        assert_eq!(first.device, "Quanta-A");
        assert_eq!(first, again);
    }

    #[test]
    fn candidate_order_is_weight_then_name() {
        let c = |w: f64, n: &str| Candidate {
            weight: w,
            device: n.to_string(),
        };
        assert!(c(-10.0, "Z") < c(-5.0, "A"));
        assert!(c(1.0, "A") < c(1.0, "B"));
        assert_eq!(c(1.0, "A").cmp(&c(1.0, "A")), Ordering::Equal);
    }
}
