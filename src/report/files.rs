use chrono::NaiveDate;
use serde::Serialize;

/// Download names for the three export artifacts, stamped with an ISO date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportFileNames {
    pub report: String,
    pub data: String,
    pub map: String,
}

impl ExportFileNames {
    /// `abbrev` is upper-cased for the report and lower-cased for the data and map files.
    pub fn new(abbrev: &str, date: NaiveDate) -> Self {
        let date = date.format("%Y-%m-%d");
        let upper = abbrev.to_uppercase();
        let lower = abbrev.to_lowercase();
        Self {
            report: format!("{upper}-Broadband-Report-{date}.pdf"),
            data: format!("{lower}-broadband-data-{date}.csv"),
            map: format!("{lower}-broadband-map-{date}.png"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_carry_iso_date() {
        let names = ExportFileNames::new("WV", NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
        assert_eq!(names.report, "WV-Broadband-Report-2024-03-07.pdf");
        assert_eq!(names.data, "wv-broadband-data-2024-03-07.csv");
        assert_eq!(names.map, "wv-broadband-map-2024-03-07.png");
    }
}
