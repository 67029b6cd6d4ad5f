use std::fmt;

/// World regions in chart order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    NorthAmerica,
    LatinAmerica,
    Europe,
    Africa,
    SouthwestAsia,
    CentralSouthAsia,
    India,
    China,
    EastAsia,
    SoutheastAsia,
}

impl Region {
    pub const ALL: [Region; 10] = [
        Region::NorthAmerica,
        Region::LatinAmerica,
        Region::Europe,
        Region::Africa,
        Region::SouthwestAsia,
        Region::CentralSouthAsia,
        Region::India,
        Region::China,
        Region::EastAsia,
        Region::SoutheastAsia,
    ];

    /// Key as it appears in the region column of the input table.
    pub fn key(self) -> &'static str {
        match self {
            Region::NorthAmerica => "N Am",
            Region::LatinAmerica => "CS Am",
            Region::Europe => "Europe",
            Region::Africa => "Africa",
            Region::SouthwestAsia => "SW Asia",
            Region::CentralSouthAsia => "SC Asia",
            Region::India => "India",
            Region::China => "China",
            Region::EastAsia => "E Asia",
            Region::SoutheastAsia => "SE Asia",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::LatinAmerica => "Latin America",
            Region::Europe => "Europe",
            Region::Africa => "Africa",
            Region::SouthwestAsia => "Southwest Asia",
            Region::CentralSouthAsia => "Central-South Asia",
            Region::India => "India",
            Region::China => "China",
            Region::EastAsia => "East Asia",
            Region::SoutheastAsia => "Southeast Asia",
        }
    }

    /// Exact match on the input key; the table is not normalised.
    pub fn from_key(key: &str) -> Option<Region> {
        Region::ALL.into_iter().find(|r| r.key() == key)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Key with spaces replaced, used in workbook column names.
    pub fn column_key(self) -> String {
        self.key().replace(' ', "_")
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
