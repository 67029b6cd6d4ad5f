//! Per-cohort numbers behind the figures, summary and workbook.

use rand::Rng;
use tracing::debug;

use crate::core::bootstrap::bootstrap_series;
use crate::core::location::{PeriodSeries, location_average, series_counts, series_means};
use crate::core::metric::Metric;
use crate::data::{Cohort, LocationRecord, Region, RegionTable};
use crate::error::Result;

/// Bootstrap draws of one metric for one region.
#[derive(Clone, Debug)]
pub struct MetricDraws {
    pub metric: Metric,
    /// Contributing locations per period.
    pub counts: Vec<usize>,
    /// Draws per period, already in display units.
    pub draws: PeriodSeries,
}

impl MetricDraws {
    fn compute<R: Rng>(
        rows: &[LocationRecord],
        metric: Metric,
        iterations: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let series = location_average(rows, metric);
        let draws = bootstrap_series(&series, metric, iterations, rng)?;
        Ok(Self {
            metric,
            counts: series_counts(&series),
            draws,
        })
    }
}

#[derive(Clone, Debug)]
pub struct RegionAnalysis {
    pub region: Region,
    /// Mean location-averaged population change per interval (percent).
    pub population_change: Vec<f64>,
    pub expansion: MetricDraws,
    pub density: MetricDraws,
}

#[derive(Clone, Debug)]
pub struct CohortAnalysis {
    pub cohort: Cohort,
    pub regions: Vec<RegionAnalysis>,
}

/// Location-averages and bootstraps every region of a cohort table.
/// Regions are visited in display order, urban expansion before density,
/// so a seeded generator reproduces the same draws.
pub fn analyze_cohort<R: Rng>(
    table: &RegionTable,
    cohort: Cohort,
    iterations: usize,
    rng: &mut R,
) -> Result<CohortAnalysis> {
    let mut regions = Vec::with_capacity(Region::ALL.len());
    for (region, rows) in table.iter() {
        let population_change = series_means(&location_average(rows, Metric::PopulationChange));
        let expansion = MetricDraws::compute(rows, Metric::UrbanExpansion, iterations, rng)?;
        let density = MetricDraws::compute(rows, Metric::Density, iterations, rng)?;
        debug!(
            cohort = %cohort,
            region = %region,
            rows = rows.len(),
            expansion_locations = ?expansion.counts,
            density_locations = ?density.counts,
            "region analysed"
        );
        regions.push(RegionAnalysis {
            region,
            population_change,
            expansion,
            density,
        });
    }
    Ok(CohortAnalysis { cohort, regions })
}

impl CohortAnalysis {
    pub fn draws(&self, metric: Metric) -> impl Iterator<Item = (Region, &MetricDraws)> {
        self.regions.iter().map(move |r| {
            let draws = match metric {
                Metric::Density => &r.density,
                _ => &r.expansion,
            };
            (r.region, draws)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bootstrap::make_rng;
    use crate::data::group_by_region;
    use crate::data::record::parse_records;
    use crate::data::record::tests::{HEADER, row};

    fn cells<'a>(pc: [&'a str; 4], ue: [&'a str; 4], pd: [&'a str; 5]) -> Vec<&'a str> {
        let mut v = pc.to_vec();
        v.extend(["", "", "", "", ""]);
        v.extend(ue);
        v.extend(pd);
        v
    }

    #[test]
    fn every_region_is_reported_in_order() {
        let csv = format!(
            "{HEADER}{}{}",
            row(
                "Accra",
                "Africa",
                "2500",
                &cells(["3", "3", "3", "3"], ["5", "5", "", "5"], ["8000", "", "", "", "6000"])
            ),
            row(
                "Accra",
                "Africa",
                "2500",
                &cells(["5", "5", "5", "5"], ["7", "7", "", "7"], ["6000", "", "", "", "4000"])
            ),
        );
        let table = group_by_region(parse_records(csv.as_bytes()).unwrap());
        let mut rng = make_rng(Some(1));
        let analysis = analyze_cohort(&table, Cohort::All, 20, &mut rng).unwrap();

        assert_eq!(analysis.regions.len(), 10);
        let africa = &analysis.regions[Region::Africa.index()];
        assert_eq!(africa.region, Region::Africa);
        assert_eq!(africa.population_change, vec![4.0; 4]);
        assert_eq!(africa.expansion.counts, vec![1, 1, 0, 1]);
        assert_eq!(africa.expansion.draws[0], vec![6.0; 20]);
        assert!(africa.expansion.draws[2].is_empty());
        assert_eq!(africa.density.counts, vec![1, 0, 0, 0, 1]);
        assert_eq!(africa.density.draws[0], vec![7.0; 20]);
        assert_eq!(africa.density.draws[4], vec![5.0; 20]);

        let europe = &analysis.regions[Region::Europe.index()];
        assert!(europe.population_change.iter().all(|m| m.is_nan()));
        assert!(europe.expansion.draws.iter().all(Vec::is_empty));
    }
}
