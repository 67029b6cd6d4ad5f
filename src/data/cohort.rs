use std::fmt;

use tracing::warn;

use super::RegionTable;

/// Population-size class a figure set is drawn for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cohort {
    All,
    Above,
    Below,
}

impl Cohort {
    pub const ALL: [Cohort; 3] = [Cohort::All, Cohort::Above, Cohort::Below];

    /// Prefix for output files, sheet names and summary blocks.
    pub fn tag(self) -> &'static str {
        match self {
            Cohort::All => "regional_all_location",
            Cohort::Above => "regional_above_location",
            Cohort::Below => "regional_below_location",
        }
    }

    fn admits(self, population_2010: Option<f64>, threshold: f64) -> bool {
        match (self, population_2010) {
            (Cohort::All, _) => true,
            (Cohort::Above, Some(p)) => p > threshold,
            (Cohort::Below, Some(p)) => p <= threshold,
            (_, None) => false,
        }
    }
}

impl fmt::Display for Cohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl RegionTable {
    /// Restricts every region to the rows of one size class. `threshold` is
    /// the 2010 population in thousands.
    pub fn cohort(&self, cohort: Cohort, threshold: f64) -> RegionTable {
        let mut unsized_rows = 0usize;
        let buckets = self
            .buckets
            .iter()
            .map(|bucket| {
                bucket
                    .iter()
                    .filter(|r| {
                        let p = r.population_2010();
                        if p.is_none() && cohort != Cohort::All {
                            unsized_rows += 1;
                        }
                        cohort.admits(p, threshold)
                    })
                    .cloned()
                    .collect()
            })
            .collect();
        if unsized_rows > 0 {
            warn!(
                cohort = %cohort,
                rows = unsized_rows,
                "rows without a 2010 population left out of size cohort"
            );
        }
        RegionTable { buckets }
    }
}
