//! Input table: parsing, region buckets and size cohorts.

pub mod cohort;
pub mod record;
pub mod region;

pub use cohort::Cohort;
pub use record::{LocationRecord, read_records};
pub use region::Region;

use tracing::{debug, warn};

/// Records bucketed by region, one bucket per entry of [`Region::ALL`].
#[derive(Clone, Debug, Default)]
pub struct RegionTable {
    buckets: Vec<Vec<LocationRecord>>,
}

impl RegionTable {
    pub fn region(&self, region: Region) -> &[LocationRecord] {
        self.buckets
            .get(region.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Region, &[LocationRecord])> {
        Region::ALL.into_iter().map(move |r| (r, self.region(r)))
    }

    pub fn row_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

/// Buckets records by region key, keeping input order within each region.
pub fn group_by_region(records: Vec<LocationRecord>) -> RegionTable {
    let mut buckets: Vec<Vec<LocationRecord>> = vec![Vec::new(); Region::ALL.len()];
    let mut dropped = 0usize;
    for record in records {
        match Region::from_key(&record.region_key) {
            Some(region) => buckets[region.index()].push(record),
            None => {
                debug!(name = %record.name, key = %record.region_key, "unknown region");
                dropped += 1;
            }
        }
    }
    if dropped > 0 {
        warn!(rows = dropped, "rows with an unknown region key were dropped");
    }
    for (region, bucket) in Region::ALL.iter().zip(&buckets) {
        debug!(region = %region, rows = bucket.len(), "region bucket");
    }
    RegionTable { buckets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record::parse_records;
    use crate::data::record::tests::{HEADER, row};

    #[test]
    fn groups_in_region_order_and_drops_unknown() {
        let csv = format!(
            "{HEADER}{}{}{}{}",
            row("Paris", "Europe", "10000", &[]),
            row("Perth", "Oceania", "2000", &[]),
            row("Boston", "N Am", "4000", &[]),
            row("Lyon", "Europe", "1600", &[]),
        );
        let table = group_by_region(parse_records(csv.as_bytes()).unwrap());
        assert_eq!(table.row_count(), 3);
        let europe: Vec<_> = table
            .region(Region::Europe)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(europe, vec!["Paris", "Lyon"]);
        assert_eq!(table.region(Region::NorthAmerica).len(), 1);
        assert!(table.region(Region::India).is_empty());

        let order: Vec<_> = table.iter().map(|(r, _)| r).collect();
        assert_eq!(order, Region::ALL.to_vec());
    }
}
