use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::{narrative, ExportFileNames};
use crate::{common::{trim_float, with_thousands}, stats::{AggregateStatistics, PopulationSummary}};

/// Produces report snapshots for one region on one date.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportAssembler {
    pub region_name: String,
    pub region_abbrev: String,
    pub generated_on: NaiveDate,
}

impl ReportAssembler {
    pub fn new(region_name: impl Into<String>, region_abbrev: impl Into<String>, generated_on: NaiveDate) -> Self {
        Self { region_name: region_name.into(), region_abbrev: region_abbrev.into(), generated_on }
    }

    /// Snapshot `stats` at `threshold_mbps`. `focus_region` is a county name, without the "County" suffix.
    pub fn assemble(&self, stats: &AggregateStatistics, threshold_mbps: u32, focus_region: Option<&str>) -> ReportSummary {
        let focus_area = match focus_region {
            Some(name) => format!("{name} County"),
            None => self.region_name.clone(),
        };
        debug!(threshold_mbps, focus = %focus_area, "assembling report");

        let narrative = narrative::executive_summary(&narrative::Context {
            region_name: &self.region_name,
            generated_on: self.generated_on,
            focus_area: &focus_area,
            threshold_mbps,
            stats,
        });

        ReportSummary {
            title: format!("{} Broadband Analysis", self.region_name),
            generated_on: self.generated_on,
            focus_region: focus_region.map(str::to_string),
            focus_area,
            threshold_mbps,
            statistics: stats.clone(),
            population: None,
            dataset: None,
            narrative,
            files: ExportFileNames::new(&self.region_abbrev, self.generated_on),
        }
    }
}

/// Counts describing the loaded sources, shown at the end of a report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetInfo {
    pub metric_records: usize,
    pub speed_tiles: usize,
    pub speed_tests: Option<u64>,
    pub median_download_mbps: Option<f64>,
}

/// Immutable report snapshot. Holds copies, never references into live state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub title: String,
    pub generated_on: NaiveDate,
    pub focus_region: Option<String>,
    pub focus_area: String,
    pub threshold_mbps: u32,
    pub statistics: AggregateStatistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<PopulationSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<DatasetInfo>,
    pub narrative: String,
    pub files: ExportFileNames,
}

impl ReportSummary {
    pub fn with_population(mut self, population: Option<PopulationSummary>) -> Self {
        self.population = population;
        self
    }

    pub fn with_dataset(mut self, dataset: DatasetInfo) -> Self {
        self.dataset = Some(dataset);
        self
    }

    /// Lines of the "Key Statistics" block.
    pub fn key_statistics(&self) -> Vec<String> {
        let s = &self.statistics;
        vec![
            format!("Total Census Tracts: {}", s.total_regions),
            format!("Speed Threshold: {} Mbps", self.threshold_mbps),
            format!("Population Below Threshold: {}% ({})", s.underserved_percent, with_thousands(s.underserved_population)),
            format!("Average Speed: {} Mbps", s.avg_speed_mbps),
            format!("Tracts with No Service: {}", s.no_service),
            format!("Tracts with 100+ Mbps: {}%", s.high_speed_percent()),
        ]
    }

    /// Lines of the population-weighted block, empty when that source was not loaded.
    pub fn population_lines(&self) -> Vec<String> {
        let Some(p) = &self.population else { return Vec::new() };
        let mut lines = vec![
            format!("Underserved Population: {}% ({} people)", trim_float(p.underserved_percent), with_thousands(p.underserved_population)),
            format!("Population-Weighted Median Speed: {} Mbps", trim_float(p.pop_weighted_median_speed)),
            format!("High-Speed Population: {}%", trim_float(p.high_speed_percent)),
            format!("Total Analyzed: {} people", with_thousands(p.total_population)),
        ];
        if let Some(rural) = p.geographic_breakdown.rural_percent {
            lines.push(format!("Rural: {}% of analyzed population", trim_float(rural)));
        }
        lines
    }

    /// Lines describing the loaded sources.
    pub fn dataset_lines(&self) -> Vec<String> {
        let Some(info) = &self.dataset else { return Vec::new() };
        let mut lines = vec![format!("Broadband: {} records", with_thousands(info.metric_records as u64))];
        if info.speed_tiles == 0 {
            return lines;
        }
        match (&self.population, info.speed_tests) {
            (Some(p), _) => {
                lines.push(format!("Speed Tiles: {} tiles", with_thousands(info.speed_tiles as u64)));
                lines.push(format!("Population: {} analyzed", with_thousands(p.total_population)));
                lines.push(format!("Underserved: {} people", with_thousands(p.underserved_population)));
            }
            (None, Some(tests)) => {
                lines.push(format!("Speed Tests: {} real tests", with_thousands(tests)));
                lines.push(format!("Speed Tiles: {} tiles", with_thousands(info.speed_tiles as u64)));
                if let Some(median) = info.median_download_mbps {
                    lines.push(format!("Real Median: {} Mbps", trim_float(median)));
                }
            }
            (None, None) => lines.push(format!("Speed Tiles: {} tiles", with_thousands(info.speed_tiles as u64))),
        }
        lines
    }

    /// Plain-text rendering of the whole report, section by section.
    pub fn to_text(&self) -> String {
        let mut sections = vec![
            format!("{}\nGenerated: {}\nFocus: {}", self.title, self.generated_on.format("%-m/%-d/%Y"), self.focus_area),
            section("Key Statistics", &self.key_statistics()),
        ];
        let population = self.population_lines();
        if !population.is_empty() {
            sections.push(section("Population-Weighted Analysis", &population));
        }
        let dataset = self.dataset_lines();
        if !dataset.is_empty() {
            sections.push(section("Dataset", &dataset));
        }
        sections.push(format!("Executive Summary\n\n{}", self.narrative));

        let mut text = sections.join("\n\n");
        text.push('\n');
        text
    }
}

fn section(heading: &str, lines: &[String]) -> String {
    let mut out = heading.to_string();
    for line in lines {
        out.push_str("\n  ");
        out.push_str(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::GeographicBreakdown;

    fn stats() -> AggregateStatistics {
        AggregateStatistics {
            threshold_mbps: 25.0,
            total_regions: 546,
            no_service: 12,
            below_threshold: 88,
            high_speed: 273,
            avg_speed_mbps: 212,
            total_population: 1_793_716,
            underserved_population: 189_234,
            underserved_percent: 11,
        }
    }

    fn assembler() -> ReportAssembler {
        ReportAssembler::new("West Virginia", "WV", NaiveDate::from_ymd_opt(2024, 3, 7).unwrap())
    }

    #[test]
    fn copies_statistics_and_focus() {
        let report = assembler().assemble(&stats(), 25, Some("Kanawha"));
        assert_eq!(report.title, "West Virginia Broadband Analysis");
        assert_eq!(report.focus_area, "Kanawha County");
        assert_eq!(report.focus_region.as_deref(), Some("Kanawha"));
        assert_eq!(report.statistics, stats());
        assert_eq!(report.files.report, "WV-Broadband-Report-2024-03-07.pdf");
    }

    #[test]
    fn whole_region_when_no_focus() {
        let report = assembler().assemble(&stats(), 25, None);
        assert_eq!(report.focus_area, "West Virginia");
        assert_eq!(report.focus_region, None);
    }

    #[test]
    fn key_statistics_block() {
        let lines = assembler().assemble(&stats(), 25, None).key_statistics();
        assert_eq!(lines[0], "Total Census Tracts: 546");
        assert_eq!(lines[2], "Population Below Threshold: 11% (189,234)");
        assert_eq!(lines[5], "Tracts with 100+ Mbps: 50%");
    }

    #[test]
    fn empty_statistics_render() {
        let report = assembler().assemble(&AggregateStatistics::default(), 25, None);
        assert!(report.key_statistics().contains(&"Tracts with 100+ Mbps: 0%".to_string()));
        assert!(report.to_text().contains("0 census tracts analyzed"));
    }

    #[test]
    fn population_and_dataset_blocks() {
        let population = PopulationSummary {
            underserved_percent: 10.6,
            underserved_population: 189_234,
            pop_weighted_median_speed: 87.4,
            high_speed_percent: 41.2,
            total_population: 1_793_716,
            geographic_breakdown: GeographicBreakdown { rural_percent: Some(51.3), ..Default::default() },
        };
        let report = assembler().assemble(&stats(), 25, None)
            .with_population(Some(population))
            .with_dataset(DatasetInfo { metric_records: 546, speed_tiles: 3120, speed_tests: Some(48_211), median_download_mbps: Some(63.2) });

        assert_eq!(report.population_lines()[0], "Underserved Population: 10.6% (189,234 people)");
        assert_eq!(report.dataset_lines(), vec![
            "Broadband: 546 records".to_string(),
            "Speed Tiles: 3,120 tiles".to_string(),
            "Population: 1,793,716 analyzed".to_string(),
            "Underserved: 189,234 people".to_string(),
        ]);

        let text = report.to_text();
        assert!(text.starts_with("West Virginia Broadband Analysis\nGenerated: 3/7/2024\n"));
        assert!(text.contains("Population-Weighted Analysis"));
        assert!(text.contains("Rural: 51.3% of analyzed population"));
    }

    #[test]
    fn speed_test_totals_without_population() {
        let report = assembler().assemble(&stats(), 25, None)
            .with_dataset(DatasetInfo { metric_records: 546, speed_tiles: 3120, speed_tests: Some(48_211), median_download_mbps: Some(63.2) });
        let lines = report.dataset_lines();
        assert_eq!(lines[1], "Speed Tests: 48,211 real tests");
        assert_eq!(lines[3], "Real Median: 63.2 Mbps");
    }
}
