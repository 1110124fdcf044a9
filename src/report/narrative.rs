use chrono::NaiveDate;

use crate::{common::with_thousands, stats::AggregateStatistics};

pub(super) struct Context<'a> {
    pub(super) region_name: &'a str,
    pub(super) generated_on: NaiveDate,
    pub(super) focus_area: &'a str,
    pub(super) threshold_mbps: u32,
    pub(super) stats: &'a AggregateStatistics,
}

/// Templated executive summary embedding the snapshot's numbers.
pub(super) fn executive_summary(cx: &Context<'_>) -> String {
    let Context { region_name, generated_on, focus_area, threshold_mbps: t, stats: s } = cx;

    format!("\
{heading} BROADBAND ANALYSIS REPORT
Generated: {date}
Focus Area: {focus_area}
Speed Threshold: {t} Mbps

EXECUTIVE SUMMARY:
This analysis reveals critical broadband infrastructure gaps across {region_name}.
{pct}% of the population ({pop} residents)
lack access to broadband speeds of {t} Mbps or higher, which is considered
the minimum for modern digital needs.

KEY FINDINGS:
• {total} census tracts analyzed
• {none} tracts have no broadband service
• Average broadband speed: {avg} Mbps
• {high}% of tracts have high-speed access (100+ Mbps)
• {below} tracts fall below the {t} Mbps threshold

POLICY IMPLICATIONS:
The data indicates significant infrastructure investment is needed to achieve universal
broadband access. Priority areas for BEAD funding and infrastructure development
should focus on the {below} underserved census tracts, particularly
those with no current service.

RECOMMENDATIONS:
1. Target BEAD funding to areas below {t} Mbps
2. Prioritize fiber infrastructure in unserved areas
3. Encourage public-private partnerships for rural connectivity
4. Monitor progress with quarterly speed assessments

This analysis provides the foundation for evidence-based broadband policy decisions
and infrastructure investment strategies.",
        heading = region_name.to_uppercase(),
        date = generated_on.format("%-m/%-d/%Y"),
        pct = s.underserved_percent,
        pop = with_thousands(s.underserved_population),
        total = s.total_regions,
        none = s.no_service,
        avg = s.avg_speed_mbps,
        high = s.high_speed_percent(),
        below = s.below_threshold,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_numbers() {
        let stats = AggregateStatistics {
            threshold_mbps: 50.0,
            total_regions: 3,
            no_service: 1,
            below_threshold: 2,
            high_speed: 1,
            avg_speed_mbps: 40,
            total_population: 1000,
            underserved_population: 900,
            underserved_percent: 90,
        };
        let text = executive_summary(&Context {
            region_name: "West Virginia",
            generated_on: NaiveDate::from_ymd_opt(2024, 11, 5).unwrap(),
            focus_area: "Wayne County",
            threshold_mbps: 50,
            stats: &stats,
        });
        assert!(text.starts_with("WEST VIRGINIA BROADBAND ANALYSIS REPORT\nGenerated: 11/5/2024\nFocus Area: Wayne County\n"));
        assert!(text.contains("90% of the population (900 residents)"));
        assert!(text.contains("• 33% of tracts have high-speed access (100+ Mbps)"));
        assert!(text.contains("• 2 tracts fall below the 50 Mbps threshold"));
        assert!(text.contains("1. Target BEAD funding to areas below 50 Mbps"));
    }
}
