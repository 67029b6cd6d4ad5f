use std::ops::Range;

/// Rate columns cover the four intervals between the five census decades.
pub const INTERVAL_LABELS: [&str; 4] = ["70-80", "80-90", "90-00", "00-10"];
pub const INTERVAL_LEGEND: [&str; 4] = ["1970-1980", "1980-1990", "1990-2000", "2000-2010"];
pub const DECADE_LABELS: [&str; 5] = ["1970", "1980", "1990", "2000", "2010"];

/// A measured quantity with one column per period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    /// Rate of population change per decade interval, percent.
    PopulationChange,
    /// Rate of urban area expansion per decade interval, percent.
    UrbanExpansion,
    /// Population density per decade, people/km².
    Density,
}

impl Metric {
    /// Input columns holding this metric, one per period.
    pub fn columns(self) -> Range<usize> {
        match self {
            Metric::PopulationChange => 9..13,
            Metric::UrbanExpansion => 18..22,
            Metric::Density => 22..27,
        }
    }

    pub fn period_count(self) -> usize {
        self.columns().len()
    }

    /// Values are divided by this before resampling. Density is reported in
    /// thousands of people per km².
    pub fn divisor(self) -> f64 {
        match self {
            Metric::Density => 1000.0,
            _ => 1.0,
        }
    }

    /// Short labels used in workbook column keys.
    pub fn period_labels(self) -> &'static [&'static str] {
        match self {
            Metric::Density => &DECADE_LABELS,
            _ => &INTERVAL_LABELS,
        }
    }

    /// Labels used in figure legends.
    pub fn legend_labels(self) -> &'static [&'static str] {
        match self {
            Metric::Density => &DECADE_LABELS,
            _ => &INTERVAL_LEGEND,
        }
    }

    /// Starting decade of each period, as written in the summary file.
    pub fn summary_labels(self) -> &'static [&'static str] {
        &DECADE_LABELS[..self.period_count()]
    }

    /// Heading of this metric's blocks in the summary file.
    pub fn summary_title(self) -> &'static str {
        match self {
            Metric::PopulationChange => "Population Change Rates",
            Metric::UrbanExpansion => "Urban Expansion Rates",
            Metric::Density => "Population Density",
        }
    }

    /// Prefix of this metric's workbook sheets.
    pub fn sheet_prefix(self) -> &'static str {
        match self {
            Metric::PopulationChange => "PC",
            Metric::UrbanExpansion => "UER",
            Metric::Density => "PD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_counts_match_labels() {
        for m in [Metric::PopulationChange, Metric::UrbanExpansion, Metric::Density] {
            assert_eq!(m.period_labels().len(), m.period_count());
            assert_eq!(m.legend_labels().len(), m.period_count());
            assert_eq!(m.summary_labels().len(), m.period_count());
        }
        assert_eq!(Metric::UrbanExpansion.summary_labels(), &["1970", "1980", "1990", "2000"]);
    }

    #[test]
    fn only_density_is_scaled() {
        assert_eq!(Metric::Density.divisor(), 1000.0);
        assert_eq!(Metric::UrbanExpansion.divisor(), 1.0);
        assert_eq!(Metric::PopulationChange.divisor(), 1.0);
    }
}
