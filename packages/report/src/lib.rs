#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Plain-text and HTML hotspot bulletin composer.
//!
//! [`compose`] turns the metrics of one cycle into a [`Bulletin`] carrying
//! both renderings, one block per region in the order given.

use focos_metrics_models::{MeanReport, RecordReport, RegionMetrics};
use serde::Serialize;

/// Placeholder for a count the source did not publish.
pub const MISSING_COUNT: &str = "n/a";

const TITLE_COLOR: &str = "#8B0000";
const LABEL_COLOR: &str = "#555555";

/// A composed bulletin, ready to hand to a notifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bulletin {
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub text: String,
    /// HTML body.
    pub html: String,
}

/// Composes the bulletin for `metrics` under `title`.
#[must_use]
pub fn compose(title: &str, metrics: &[RegionMetrics]) -> Bulletin {
    let mut text = String::new();
    let mut html = format!(
        "<html>\n  <body>\n    <h1 style=\"color: {TITLE_COLOR};\">{}</h1>\n",
        escape(title)
    );

    for region in metrics {
        write_text_block(&mut text, region);
        write_html_block(&mut html, region);
    }

    html.push_str("  </body>\n</html>\n");

    Bulletin {
        subject: title.to_string(),
        text,
        html,
    }
}

/// `24h - {n} hotspots`
#[must_use]
pub fn last_24h_line(region: &RegionMetrics) -> String {
    format!("24h - {} hotspots", count(region.current.last_24h))
}

/// Month-to-date total compared with the same month last year.
#[must_use]
pub fn month_to_date_line(region: &RegionMetrics) -> String {
    format!(
        "Month to date - {} hotspots (vs {} total hotspots in the same month last year)",
        count(region.current.month_to_date),
        count(region.current.same_month_last_year)
    )
}

/// The mean report, labelled even when no figure is available.
#[must_use]
pub fn mean_line(mean: &MeanReport) -> String {
    match mean {
        MeanReport::Available { .. } => mean.to_string(),
        MeanReport::NotAvailable => format!("Average for the month - {mean}"),
    }
}

/// The record report, labelled even when no figure is available.
#[must_use]
pub fn record_line(record: &RecordReport) -> String {
    match record {
        RecordReport::Available { .. } => record.to_string(),
        RecordReport::NotAvailable => format!("Record for the month - {record}"),
    }
}

fn count(value: Option<u64>) -> String {
    value.map_or_else(|| MISSING_COUNT.to_string(), |v| v.to_string())
}

fn write_text_block(out: &mut String, region: &RegionMetrics) {
    out.push_str(&format!(
        "\n{}\n\n{}\n{}\n{}\n{}\n\n",
        region.region_name,
        last_24h_line(region),
        month_to_date_line(region),
        mean_line(&region.stats.mean),
        record_line(&region.stats.record),
    ));
}

fn write_html_block(out: &mut String, region: &RegionMetrics) {
    let mtd = format!(
        "{} hotspots (vs {} total hotspots in the same month last year)",
        count(region.current.month_to_date),
        count(region.current.same_month_last_year)
    );

    out.push_str(&format!(
        "    <h2 style=\"color: {TITLE_COLOR};\"><b>{name}</b></h2>\n    <ul>\n      \
         <li><b style=\"color: {LABEL_COLOR};\">24h</b> - {last_24h} hotspots</li>\n      \
         <li><b style=\"color: {LABEL_COLOR};\">Month to date</b> - {mtd}</li>\n      \
         <li><b style=\"color: orange;\">{mean}</b></li>\n      \
         <li><b style=\"color: red;\">{record}</b></li>\n    </ul>\n",
        name = escape(&region.region_name),
        last_24h = count(region.current.last_24h),
        mtd = escape(&mtd),
        mean = escape(&mean_line(&region.stats.mean)),
        record = escape(&record_line(&region.stats.record)),
    ));
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use focos_metrics_models::{CurrentPeriod, Month, MonthlyStats};

    use super::*;

    fn amazonia() -> RegionMetrics {
        RegionMetrics {
            region_id: "amazonia".to_string(),
            region_name: "AMAZÔNIA".to_string(),
            month: Month::August,
            current: CurrentPeriod {
                last_24h: Some(312),
                month_to_date: Some(10_452),
                same_month_last_year: Some(28_060),
            },
            stats: MonthlyStats {
                mean: MeanReport::Available { hotspots: 21_377 },
                record: RecordReport::Available {
                    hotspots: 63_764,
                    year: 2005,
                },
            },
        }
    }

    fn pampa_without_data() -> RegionMetrics {
        RegionMetrics {
            region_id: "pampa".to_string(),
            region_name: "PAMPA".to_string(),
            month: Month::August,
            current: CurrentPeriod::default(),
            stats: MonthlyStats::NOT_AVAILABLE,
        }
    }

    #[test]
    fn renders_text_block() {
        let bulletin = compose("Hotspots", &[amazonia()]);
        assert_eq!(
            bulletin.text,
            "\nAMAZÔNIA\n\n\
             24h - 312 hotspots\n\
             Month to date - 10452 hotspots (vs 28060 total hotspots in the same month last year)\n\
             Average for the month - 21377 hotspots\n\
             Record for the month - 63764 hotspots (in year 2005)\n\n"
        );
        assert_eq!(bulletin.subject, "Hotspots");
    }

    #[test]
    fn renders_missing_values() {
        let bulletin = compose("Hotspots", &[pampa_without_data()]);
        assert!(bulletin.text.contains("24h - n/a hotspots"));
        assert!(bulletin.text.contains("Month to date - n/a hotspots (vs n/a total"));
        assert!(bulletin.text.contains("Average for the month - not available"));
        assert!(bulletin.text.contains("Record for the month - not available"));
    }

    #[test]
    fn appends_every_region_block() {
        let single = compose("Hotspots", &[amazonia()]);
        let pampa = compose("Hotspots", &[pampa_without_data()]);
        let both = compose("Hotspots", &[amazonia(), pampa_without_data()]);

        assert_eq!(both.text, format!("{}{}", single.text, pampa.text));
        assert_eq!(both.html.matches("<h2").count(), 2);
        assert_eq!(both.html.matches("</ul>").count(), 2);
    }

    #[test]
    fn keeps_region_order() {
        let bulletin = compose("Hotspots", &[pampa_without_data(), amazonia()]);
        let pampa = bulletin.text.find("PAMPA").unwrap();
        let amazonia = bulletin.text.find("AMAZÔNIA").unwrap();
        assert!(pampa < amazonia);

        let pampa = bulletin.html.find("PAMPA").unwrap();
        let amazonia = bulletin.html.find("AMAZÔNIA").unwrap();
        assert!(pampa < amazonia);
    }

    #[test]
    fn renders_html_block() {
        let bulletin = compose("Hotspots", &[amazonia()]);
        assert!(bulletin.html.starts_with("<html>"));
        assert!(bulletin.html.contains("<h1 style=\"color: #8B0000;\">Hotspots</h1>"));
        assert!(bulletin.html.contains("<b>AMAZÔNIA</b>"));
        assert!(bulletin.html.contains("</b> - 312 hotspots</li>"));
        assert!(
            bulletin
                .html
                .contains("<b style=\"color: red;\">Record for the month - 63764 hotspots (in year 2005)</b>")
        );
        assert!(bulletin.html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn escapes_html_content() {
        let mut region = amazonia();
        region.region_name = "A & <B>".to_string();
        let bulletin = compose("Fire \"watch\"", &[region]);
        assert!(bulletin.html.contains("<b>A &amp; &lt;B&gt;</b>"));
        assert!(bulletin.html.contains("Fire &quot;watch&quot;"));
        assert!(bulletin.text.contains("A & <B>"));
    }

    #[test]
    fn empty_cycle_has_title_only() {
        let bulletin = compose("Hotspots", &[]);
        assert!(bulletin.text.is_empty());
        assert!(!bulletin.html.contains("<h2"));
    }
}
