//! Integration tests for the overlay pipeline.

use std::fs;
use std::path::Path;

use mig_cli::pipeline::{ChartFormat, RenderConfig, analyze, overlay_data, render};
use mig_core::DraftTable;
use mig_report::FontOptions;
use tempfile::tempdir;

const HEADER: &str = "REF_DATE,GEO,DGUID,Components of population growth,UOM,UOM_ID,\
SCALAR_FACTOR,SCALAR_ID,VECTOR,COORDINATE,VALUE,STATUS,SYMBOL,TERMINATED,DECIMALS\n";

fn row(date: &str, geo: &str, component: &str, value: i64) -> String {
    format!("{date},{geo},2016A000011124,{component},Persons,249,units,0,v1,1.1,{value},,,,0\n")
}

fn write_fixture(dir: &Path) -> std::path::PathBuf {
    let mut content = String::from(HEADER);
    let immigrants = [(1951, 194_391), (1952, 164_498), (1953, 168_868), (1990, 200_000)];
    for (year, total) in immigrants {
        content.push_str(&row(&format!("{year}-01"), "Canada", "Immigrants", total));
        content.push_str(&row(&format!("{year}-01"), "Canada", "Emigrants", 4_000));
    }
    content.push_str(&row("1951-04", "Canada", "Net emigration", 10));
    content.push_str(&row("2025-01", "Canada", "Immigrants", 99_999));
    let path = dir.join("data.csv");
    fs::write(&path, content).unwrap();
    path
}

fn no_fonts() -> FontOptions {
    FontOptions {
        files: Vec::new(),
        system_fonts: false,
    }
}

#[test]
fn analysis_prints_windows_in_report_order() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path());
    let analysis = analyze(&input, &DraftTable::selective_service()).unwrap();

    let lines: Vec<String> = analysis
        .correlations
        .iter()
        .map(ToString::to_string)
        .collect();
    insta::assert_snapshot!(lines.join("\n"), @r"
    Vietnam: not enough data (n=0)
    Korea (Immigration): r=0.595, p=0.594, n=3)
    Combined (Immigration): r=0.595, p=0.594, n=3)
    ");

    assert_eq!(analysis.stats.rows_kept, 8);
    assert_eq!(analysis.totals.len(), 4);
    let merged_years: Vec<i32> = analysis.merged.iter().map(|r| r.year).collect();
    assert_eq!(merged_years, vec![1951, 1952, 1953]);
}

#[test]
fn overlay_series_cover_all_years_from_1951() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path());
    let draft = DraftTable::selective_service();
    let analysis = analyze(&input, &draft).unwrap();

    let data = overlay_data(&analysis, &draft);
    let years: Vec<i32> = data.migration.iter().map(|(year, _)| *year).collect();
    assert_eq!(years, vec![1951, 1952, 1953, 1990]);
    assert_eq!(data.inductions.len(), 23);
    assert_eq!(data.inductions.first(), Some(&(1951, 551_806)));
    assert_eq!(data.inductions.last(), Some(&(1973, 646)));
}

#[test]
fn render_writes_png_and_svg() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path());
    let draft = DraftTable::selective_service();
    let analysis = analyze(&input, &draft).unwrap();

    let config = RenderConfig {
        output: dir.path().join("overlay.png"),
        dpi: 20,
        format: ChartFormat::Both,
        fonts: no_fonts(),
    };
    let written = render(&analysis, &draft, &config).unwrap();
    assert_eq!(
        written,
        vec![dir.path().join("overlay.svg"), dir.path().join("overlay.png")]
    );

    let image = image::open(dir.path().join("overlay.png")).unwrap();
    assert_eq!((image.width(), image.height()), (200, 120));

    let svg = fs::read_to_string(dir.path().join("overlay.svg")).unwrap();
    assert!(svg.contains("Korea (Immigration): r=0.595, p=0.594, n=3)"));
}

#[test]
fn missing_input_reports_path() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("absent.csv");
    let err = analyze(&missing, &DraftTable::selective_service()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("absent.csv"), "{message}");
}

#[test]
fn existing_output_is_overwritten() {
    let dir = tempdir().unwrap();
    let input = write_fixture(dir.path());
    let draft = DraftTable::selective_service();
    let analysis = analyze(&input, &draft).unwrap();
    let output = dir.path().join("overlay.svg");
    fs::write(&output, "stale").unwrap();

    let config = RenderConfig {
        output: output.clone(),
        dpi: 20,
        format: ChartFormat::Svg,
        fonts: no_fonts(),
    };
    render(&analysis, &draft, &config).unwrap();
    assert!(fs::read_to_string(&output).unwrap().starts_with("<?xml"));
}
