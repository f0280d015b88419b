//! Chart composition and PNG output tests.

use std::fs::File;
use std::io::BufReader;

use mig_model::{CorrelationResult, Window, YearTotals};
use mig_report::{
    CREDIT_CAPTION, FontOptions, OverlayData, ReportError, SOURCE_CAPTION, compose_svg,
    pixels_per_meter, rasterize, write_png, write_run_report, write_svg,
};
use tempfile::tempdir;

fn totals(immigrants: i64, emigrants: i64) -> YearTotals {
    YearTotals {
        immigrants,
        emigrants,
    }
}

fn sample_data() -> OverlayData {
    OverlayData::new(
        vec![
            (1951, totals(194_391, 4_000)),
            (1952, totals(164_498, 4_000)),
            (1953, totals(168_868, 4_000)),
        ],
        vec![(1951, 551_806), (1952, 438_479), (1953, 471_806)],
        vec![
            CorrelationResult::not_enough_data(Window::Vietnam, 0),
            CorrelationResult::computed(Window::Korea, 3, 0.5951, 0.5942),
            CorrelationResult::computed(Window::Combined, 3, 0.5951, 0.5942),
        ],
    )
}

fn no_fonts() -> FontOptions {
    FontOptions {
        files: Vec::new(),
        system_fonts: false,
    }
}

#[test]
fn svg_contains_title_captions_and_legend() {
    let svg = String::from_utf8(compose_svg(&sample_data()).unwrap()).unwrap();

    assert!(svg.contains(
        "Canada Migration vs. U.S. Draft Inductions (Korea &amp; Vietnam) \u{2014} Immigration correlation"
    ));
    assert!(svg.contains(&SOURCE_CAPTION.replace('&', "&amp;")));
    assert!(svg.contains(CREDIT_CAPTION));
    for label in ["Net Migration", "Immigrants", "Emigrants", "US Draft Inductions"] {
        assert!(svg.contains(&format!(">{label}</text>")), "legend missing {label}");
    }
    assert!(svg.contains("Population Change (Canada)"));
    assert!(svg.contains(r#"stroke-dasharray="4 3""#));
}

#[test]
fn annotation_lists_windows_in_report_order() {
    let svg = String::from_utf8(compose_svg(&sample_data()).unwrap()).unwrap();

    let vietnam = svg.find("Vietnam: not enough data (n=0)").unwrap();
    let korea = svg.find("Korea (Immigration): r=0.595, p=0.594, n=3)").unwrap();
    let combined = svg
        .find("Combined (Immigration): r=0.595, p=0.594, n=3)")
        .unwrap();
    assert!(vietnam < korea && korea < combined);
}

#[test]
fn x_ticks_start_at_1951() {
    let svg = String::from_utf8(compose_svg(&sample_data()).unwrap()).unwrap();
    assert!(svg.contains(">1951</text>"));
    assert!(!svg.contains(">1956</text>"));
}

#[test]
fn empty_series_are_rejected() {
    let mut data = sample_data();
    data.inductions.clear();
    let err = compose_svg(&data).unwrap_err();
    assert!(matches!(
        err,
        ReportError::EmptySeries {
            series: "draft inductions"
        }
    ));

    let mut data = sample_data();
    data.migration.clear();
    let err = compose_svg(&data).unwrap_err();
    assert!(matches!(err, ReportError::EmptySeries { series: "migration" }));
}

#[test]
fn png_has_requested_size_and_density() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("overlay.png");
    let svg = compose_svg(&sample_data()).unwrap();

    let image = rasterize(&svg, 50, &no_fonts()).unwrap();
    write_png(&image, &path, 50).unwrap();

    let decoded = image::open(&path).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (500, 300));

    let decoder = png::Decoder::new(BufReader::new(File::open(&path).unwrap()));
    let reader = decoder.read_info().unwrap();
    let dims = reader.info().pixel_dims.unwrap();
    assert_eq!(dims.xppu, pixels_per_meter(50));
    assert_eq!(dims.yppu, pixels_per_meter(50));
    assert_eq!(dims.unit, png::Unit::Meter);
}

#[test]
fn svg_and_report_are_written() {
    let dir = tempdir().unwrap();
    let svg_path = dir.path().join("overlay.svg");
    let report_path = dir.path().join("report.json");
    let data = sample_data();

    let svg = compose_svg(&data).unwrap();
    write_svg(&svg, &svg_path).unwrap();
    assert_eq!(std::fs::read(&svg_path).unwrap(), svg);

    let merged = vec![mig_model::MergedRecord::new(1951, totals(194_391, 4_000), 551_806)];
    write_run_report(
        &report_path,
        std::path::Path::new("data.csv"),
        &merged,
        &data.correlations,
    )
    .unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["schema"], "draft-overlay.run-report");
    assert_eq!(json["input"], "data.csv");
    assert_eq!(json["years"][0]["netMigration"], 190_391);
    assert_eq!(json["correlations"][0]["outcome"]["status"], "notEnoughData");
    assert_eq!(json["correlations"][1]["n"], 3);
}

#[test]
fn unwritable_output_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("overlay.svg");
    let err = write_svg(b"<svg/>", &path).unwrap_err();
    assert!(matches!(err, ReportError::Write { .. }));
}
