#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

pub const HEADER: &str = "Urban Agglomeration,Country,Region,OID,\
    Pop1970,Pop1980,Pop1990,Pop2000,Pop2010,\
    PopChg70-80,PopChg80-90,PopChg90-00,PopChg00-10,\
    Area1970,Area1980,Area1990,Area2000,Area2010,\
    UrbExp70-80,UrbExp80-90,UrbExp90-00,UrbExp00-10,\
    PD1970,PD1980,PD1990,PD2000,PD2010";

pub fn unique_dir(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "urbanfig_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&path).unwrap();
    path
}

pub fn row(
    name: &str,
    region: &str,
    pop2010: &str,
    pop_change: [&str; 4],
    expansion: [&str; 4],
    density: [&str; 5],
) -> String {
    let mut fields = vec![name, "Country", region, "7", "100", "200", "300", "400", pop2010];
    fields.extend(pop_change);
    fields.extend(["10", "20", "30", "40", "50"]);
    fields.extend(expansion);
    fields.extend(density);
    fields.join(",")
}

/// Small table touching five regions, a repeated location, a missing
/// period, an unknown region and both size cohorts.
pub fn fixture_csv() -> String {
    let rows = [
        row(
            "Paris",
            "Europe",
            "10000",
            ["1", "1", "1", "1"],
            ["2", "4", "6", "8"],
            ["3000", "3000", "3000", "3000", "3000"],
        ),
        row(
            "Delhi",
            "India",
            "21000",
            ["4", "4", "4", "4"],
            ["3", "3", "", "3"],
            ["20000", "21000", "22000", "23000", "24000"],
        ),
        row(
            "Delhi",
            "India",
            "21000",
            ["6", "6", "6", "6"],
            ["5", "5", "", "5"],
            ["22000", "23000", "24000", "25000", "26000"],
        ),
        row(
            "Pune",
            "India",
            "1500",
            ["2", "2", "2", "2"],
            ["9", "1", "", "7"],
            ["9000", "9000", "9000", "9000", "9000"],
        ),
        row(
            "Nairobi",
            "Africa",
            "1900",
            ["5", "5", "5", "5"],
            ["6", "6", "6", "6"],
            ["4000", "5000", "6000", "7000", "8000"],
        ),
        row(
            "Sydney",
            "Oceania",
            "5000",
            ["1", "1", "1", "1"],
            ["1", "1", "1", "1"],
            ["1000", "1000", "1000", "1000", "1000"],
        ),
        row(
            "Osaka",
            "E Asia",
            "19000",
            ["0", "0", "0", "0"],
            ["0.5", "0.5", "0.5", "0.5"],
            ["", "", "", "", ""],
        ),
        row(
            "Shanghai",
            "China",
            "23000",
            ["3", "3", "3", "3"],
            ["3", "4", "5", "6"],
            ["15000", "16000", "17000", "18000", "19000"],
        ),
        row(
            "Beijing",
            "China",
            "19500",
            ["2", "2", "2", "2"],
            ["7", "2", "9", "1"],
            ["11000", "10000", "9000", "8000", "7000"],
        ),
    ];
    format!("{HEADER}\n{}\n\n", rows.join("\n"))
}
