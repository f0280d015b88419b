//! Dual-axis overlay chart composed as an SVG document.
//!
//! The canvas is 10 x 6 inches at 100 SVG units per inch. The left axis
//! carries the three Canadian migration series; the right axis carries
//! U.S. draft inductions in purple. Rasterization happens in
//! [`crate::raster`].

use std::time::Instant;

use tracing::{debug, info};

use mig_model::{ANALYSIS_START_YEAR, CorrelationResult, YearTotals};

use crate::axis::{Axis, Scale, format_tick, year_ticks};
use crate::error::{ReportError, Result};
use crate::svg::{SvgWriter, attr, num};

/// SVG user units per inch.
pub const UNITS_PER_INCH: f32 = 100.0;
/// Canvas width in SVG units (10 inches).
pub const CANVAS_WIDTH: f64 = 1000.0;
/// Canvas height in SVG units (6 inches).
pub const CANVAS_HEIGHT: f64 = 600.0;

pub const TITLE: &str =
    "Canada Migration vs. U.S. Draft Inductions (Korea & Vietnam) — Immigration correlation";
pub const SOURCE_CAPTION: &str =
    "Source: Statistics Canada (Table 17-10-0040-01) & U.S. Selective Service";
pub const CREDIT_CAPTION: &str = "Graph by David Castro";
pub const LEFT_AXIS_LABEL: &str = "Population Change (Canada)";
pub const RIGHT_AXIS_LABEL: &str = "US Draft Inductions";
pub const X_AXIS_LABEL: &str = "Year";

/// Years between x-axis ticks.
pub const YEAR_TICK_INTERVAL: usize = 5;

const FONT_FAMILY: &str = "DejaVu Sans, Liberation Sans, Arial, Helvetica, sans-serif";
const DRAFT_COLOR: &str = "#800080";

const PLOT_LEFT: f64 = 95.0;
const PLOT_RIGHT: f64 = 890.0;
const PLOT_TOP: f64 = 45.0;
const PLOT_BOTTOM: f64 = 500.0;

/// Approximate advance of one glyph relative to the font size.
const GLYPH_WIDTH_RATIO: f64 = 0.56;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Circle,
    Square,
    Triangle,
    Diamond,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AxisSide {
    Left,
    Right,
}

struct Series {
    label: &'static str,
    color: &'static str,
    marker: Marker,
    side: AxisSide,
    points: Vec<(i32, f64)>,
}

/// Everything the chart plots.
#[derive(Debug, Clone)]
pub struct OverlayData {
    /// Canadian totals for each plotted year.
    pub migration: Vec<(i32, YearTotals)>,
    /// Draft inductions for each plotted year.
    pub inductions: Vec<(i32, u64)>,
    /// Results shown in the annotation box.
    pub correlations: Vec<CorrelationResult>,
    /// First x-axis tick.
    pub tick_start: i32,
}

impl OverlayData {
    /// Chart data with x ticks starting at the analysis start year.
    pub fn new(
        migration: Vec<(i32, YearTotals)>,
        inductions: Vec<(i32, u64)>,
        correlations: Vec<CorrelationResult>,
    ) -> Self {
        Self {
            migration,
            inductions,
            correlations,
            tick_start: ANALYSIS_START_YEAR,
        }
    }

    fn series(&self) -> Vec<Series> {
        let migration = |select: fn(&YearTotals) -> i64| -> Vec<(i32, f64)> {
            self.migration
                .iter()
                .map(|(year, totals)| (*year, select(totals) as f64))
                .collect()
        };
        vec![
            Series {
                label: "Net Migration",
                color: "#1f77b4",
                marker: Marker::Circle,
                side: AxisSide::Left,
                points: migration(YearTotals::net_migration),
            },
            Series {
                label: "Immigrants",
                color: "#ff7f0e",
                marker: Marker::Square,
                side: AxisSide::Left,
                points: migration(|totals| totals.immigrants),
            },
            Series {
                label: "Emigrants",
                color: "#2ca02c",
                marker: Marker::Triangle,
                side: AxisSide::Left,
                points: migration(|totals| totals.emigrants),
            },
            Series {
                label: "US Draft Inductions",
                color: DRAFT_COLOR,
                marker: Marker::Diamond,
                side: AxisSide::Right,
                points: self
                    .inductions
                    .iter()
                    .map(|(year, count)| (*year, *count as f64))
                    .collect(),
            },
        ]
    }
}

/// Composes the overlay chart and returns the SVG bytes.
pub fn compose_svg(data: &OverlayData) -> Result<Vec<u8>> {
    let start = Instant::now();
    if data.migration.is_empty() {
        return Err(ReportError::EmptySeries {
            series: "migration",
        });
    }
    if data.inductions.is_empty() {
        return Err(ReportError::EmptySeries {
            series: "draft inductions",
        });
    }

    let series = data.series();
    let left = value_axis(&series, AxisSide::Left);
    let right = value_axis(&series, AxisSide::Right);

    let years: Vec<i32> = series
        .iter()
        .flat_map(|s| s.points.iter().map(|(year, _)| *year))
        .collect();
    let first_year = years.iter().copied().min().unwrap_or(data.tick_start);
    let last_year = years.iter().copied().max().unwrap_or(data.tick_start);
    let pad = (f64::from(last_year - first_year) * 0.03).max(0.5);
    let x_scale = Scale::new(
        (f64::from(first_year) - pad, f64::from(last_year) + pad),
        (PLOT_LEFT, PLOT_RIGHT),
    );
    let left_scale = Scale::new((left.min, left.max), (PLOT_BOTTOM, PLOT_TOP));
    let right_scale = Scale::new((right.min, right.max), (PLOT_BOTTOM, PLOT_TOP));

    // Ticks run through the last migration year.
    let last_migration_year = data
        .migration
        .last()
        .map_or(data.tick_start, |(year, _)| *year);
    let x_ticks = year_ticks(data.tick_start, last_migration_year, YEAR_TICK_INTERVAL);

    let mut svg = SvgWriter::new()?;
    svg.start(
        "svg",
        &[
            attr("xmlns", "http://www.w3.org/2000/svg"),
            attr("width", num(CANVAS_WIDTH)),
            attr("height", num(CANVAS_HEIGHT)),
            attr(
                "viewBox",
                format!("0 0 {} {}", num(CANVAS_WIDTH), num(CANVAS_HEIGHT)),
            ),
            attr("font-family", FONT_FAMILY),
        ],
    )?;
    svg.empty(
        "rect",
        &[
            attr("width", num(CANVAS_WIDTH)),
            attr("height", num(CANVAS_HEIGHT)),
            attr("fill", "white"),
        ],
    )?;
    svg.text(
        "text",
        &[
            attr("x", num(CANVAS_WIDTH / 2.0)),
            attr("y", "28"),
            attr("font-size", "14"),
            attr("text-anchor", "middle"),
        ],
        TITLE,
    )?;

    write_grid(&mut svg, &x_ticks, &x_scale, &left, &left_scale)?;
    write_frame(&mut svg)?;
    write_x_axis(&mut svg, &x_ticks, &x_scale)?;
    write_value_axis(&mut svg, AxisSide::Left, &left, &left_scale)?;
    write_value_axis(&mut svg, AxisSide::Right, &right, &right_scale)?;

    for s in &series {
        let scale = match s.side {
            AxisSide::Left => &left_scale,
            AxisSide::Right => &right_scale,
        };
        write_series(&mut svg, s, &x_scale, scale)?;
    }

    write_legend(&mut svg, &series)?;
    let annotation: Vec<String> = data.correlations.iter().map(ToString::to_string).collect();
    write_annotation(&mut svg, &annotation)?;
    write_captions(&mut svg)?;

    svg.end("svg")?;
    let bytes = svg.finish();
    info!(
        series = series.len(),
        first_year,
        last_year,
        annotation_lines = annotation.len(),
        svg_bytes = bytes.len(),
        duration_ms = start.elapsed().as_millis(),
        "chart composed"
    );
    Ok(bytes)
}

fn value_axis(series: &[Series], side: AxisSide) -> Axis {
    let values = series
        .iter()
        .filter(|s| s.side == side)
        .flat_map(|s| s.points.iter().map(|(_, value)| *value));
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let axis = if min.is_finite() && max.is_finite() {
        Axis::covering(min, max)
    } else {
        Axis::covering(0.0, 0.0)
    };
    debug!(?side, min = axis.min, max = axis.max, step = axis.step, "value axis");
    axis
}

fn write_grid(
    svg: &mut SvgWriter,
    x_ticks: &[i32],
    x_scale: &Scale,
    left: &Axis,
    left_scale: &Scale,
) -> Result<()> {
    svg.start(
        "g",
        &[
            attr("id", "grid"),
            attr("stroke", "#b0b0b0"),
            attr("stroke-width", "0.8"),
            attr("stroke-dasharray", "4 3"),
            attr("stroke-opacity", "0.6"),
        ],
    )?;
    for year in x_ticks {
        let x = num(x_scale.map(f64::from(*year)));
        svg.empty(
            "line",
            &[
                attr("x1", &x),
                attr("y1", num(PLOT_TOP)),
                attr("x2", &x),
                attr("y2", num(PLOT_BOTTOM)),
            ],
        )?;
    }
    for tick in left.ticks() {
        let y = num(left_scale.map(tick));
        svg.empty(
            "line",
            &[
                attr("x1", num(PLOT_LEFT)),
                attr("y1", &y),
                attr("x2", num(PLOT_RIGHT)),
                attr("y2", &y),
            ],
        )?;
    }
    svg.end("g")
}

fn write_frame(svg: &mut SvgWriter) -> Result<()> {
    svg.empty(
        "rect",
        &[
            attr("x", num(PLOT_LEFT)),
            attr("y", num(PLOT_TOP)),
            attr("width", num(PLOT_RIGHT - PLOT_LEFT)),
            attr("height", num(PLOT_BOTTOM - PLOT_TOP)),
            attr("fill", "none"),
            attr("stroke", "black"),
            attr("stroke-width", "0.8"),
        ],
    )
}

fn write_x_axis(svg: &mut SvgWriter, x_ticks: &[i32], x_scale: &Scale) -> Result<()> {
    svg.start("g", &[attr("id", "x-axis"), attr("font-size", "10")])?;
    for year in x_ticks {
        let x = x_scale.map(f64::from(*year));
        svg.empty(
            "line",
            &[
                attr("x1", num(x)),
                attr("y1", num(PLOT_BOTTOM)),
                attr("x2", num(x)),
                attr("y2", num(PLOT_BOTTOM + 4.0)),
                attr("stroke", "black"),
            ],
        )?;
        svg.text(
            "text",
            &[
                attr("x", num(x)),
                attr("y", num(PLOT_BOTTOM + 17.0)),
                attr("text-anchor", "middle"),
            ],
            &year.to_string(),
        )?;
    }
    svg.text(
        "text",
        &[
            attr("x", num((PLOT_LEFT + PLOT_RIGHT) / 2.0)),
            attr("y", num(PLOT_BOTTOM + 36.0)),
            attr("font-size", "11"),
            attr("text-anchor", "middle"),
        ],
        X_AXIS_LABEL,
    )?;
    svg.end("g")
}

fn write_value_axis(svg: &mut SvgWriter, side: AxisSide, axis: &Axis, scale: &Scale) -> Result<()> {
    let (id, edge, direction, anchor, color, label, label_x) = match side {
        AxisSide::Left => (
            "left-axis",
            PLOT_LEFT,
            -1.0,
            "end",
            "black",
            LEFT_AXIS_LABEL,
            22.0,
        ),
        AxisSide::Right => (
            "right-axis",
            PLOT_RIGHT,
            1.0,
            "start",
            DRAFT_COLOR,
            RIGHT_AXIS_LABEL,
            CANVAS_WIDTH - 18.0,
        ),
    };
    svg.start(
        "g",
        &[attr("id", id), attr("font-size", "10"), attr("fill", color)],
    )?;
    for tick in axis.ticks() {
        let y = scale.map(tick);
        svg.empty(
            "line",
            &[
                attr("x1", num(edge)),
                attr("y1", num(y)),
                attr("x2", num(edge + 4.0 * direction)),
                attr("y2", num(y)),
                attr("stroke", color),
            ],
        )?;
        svg.text(
            "text",
            &[
                attr("x", num(edge + 7.0 * direction)),
                attr("y", num(y + 3.5)),
                attr("text-anchor", anchor),
            ],
            &format_tick(tick),
        )?;
    }
    let mid_y = (PLOT_TOP + PLOT_BOTTOM) / 2.0;
    svg.text(
        "text",
        &[
            attr("x", num(label_x)),
            attr("y", num(mid_y)),
            attr("font-size", "11"),
            attr("text-anchor", "middle"),
            attr(
                "transform",
                format!("rotate(-90 {} {})", num(label_x), num(mid_y)),
            ),
        ],
        label,
    )?;
    svg.end("g")
}

fn write_series(svg: &mut SvgWriter, series: &Series, x_scale: &Scale, y_scale: &Scale) -> Result<()> {
    let points: Vec<(f64, f64)> = series
        .points
        .iter()
        .map(|(year, value)| (x_scale.map(f64::from(*year)), y_scale.map(*value)))
        .collect();
    let id = format!("series-{}", series.label.to_lowercase().replace(' ', "-"));
    svg.start("g", &[attr("id", id), attr("fill", series.color)])?;
    let path = points
        .iter()
        .map(|(x, y)| format!("{},{}", num(*x), num(*y)))
        .collect::<Vec<_>>()
        .join(" ");
    svg.empty(
        "polyline",
        &[
            attr("points", path),
            attr("fill", "none"),
            attr("stroke", series.color),
            attr("stroke-width", "1.5"),
        ],
    )?;
    for (x, y) in points {
        write_marker(svg, series.marker, x, y, 3.5)?;
    }
    svg.end("g")
}

fn write_marker(svg: &mut SvgWriter, marker: Marker, x: f64, y: f64, size: f64) -> Result<()> {
    match marker {
        Marker::Circle => svg.empty(
            "circle",
            &[attr("cx", num(x)), attr("cy", num(y)), attr("r", num(size))],
        ),
        Marker::Square => svg.empty(
            "rect",
            &[
                attr("x", num(x - size)),
                attr("y", num(y - size)),
                attr("width", num(size * 2.0)),
                attr("height", num(size * 2.0)),
            ],
        ),
        Marker::Triangle => svg.empty(
            "polygon",
            &[attr(
                "points",
                format!(
                    "{},{} {},{} {},{}",
                    num(x),
                    num(y - size),
                    num(x - size),
                    num(y + size),
                    num(x + size),
                    num(y + size)
                ),
            )],
        ),
        Marker::Diamond => svg.empty(
            "polygon",
            &[attr(
                "points",
                format!(
                    "{},{} {},{} {},{} {},{}",
                    num(x),
                    num(y - size),
                    num(x + size * 0.75),
                    num(y),
                    num(x),
                    num(y + size),
                    num(x - size * 0.75),
                    num(y)
                ),
            )],
        ),
    }
}

/// One legend combining the series of both axes, upper-left.
fn write_legend(svg: &mut SvgWriter, series: &[Series]) -> Result<()> {
    let font_size = 9.0;
    let row_height = 15.0;
    let longest = series.iter().map(|s| s.label.len()).max().unwrap_or(0) as f64;
    let width = 40.0 + longest * font_size * GLYPH_WIDTH_RATIO + 10.0;
    let height = row_height * series.len() as f64 + 8.0;
    let x = PLOT_LEFT + 8.0;
    let y = PLOT_TOP + 8.0;

    svg.start("g", &[attr("id", "legend"), attr("font-size", num(font_size))])?;
    svg.empty(
        "rect",
        &[
            attr("x", num(x)),
            attr("y", num(y)),
            attr("width", num(width)),
            attr("height", num(height)),
            attr("rx", "3"),
            attr("fill", "white"),
            attr("fill-opacity", "0.8"),
            attr("stroke", "#cccccc"),
        ],
    )?;
    for (idx, s) in series.iter().enumerate() {
        let row_y = y + 4.0 + row_height * (idx as f64 + 0.5);
        svg.empty(
            "line",
            &[
                attr("x1", num(x + 6.0)),
                attr("y1", num(row_y)),
                attr("x2", num(x + 30.0)),
                attr("y2", num(row_y)),
                attr("stroke", s.color),
                attr("stroke-width", "1.5"),
            ],
        )?;
        svg.start("g", &[attr("fill", s.color)])?;
        write_marker(svg, s.marker, x + 18.0, row_y, 3.0)?;
        svg.end("g")?;
        svg.text(
            "text",
            &[
                attr("x", num(x + 36.0)),
                attr("y", num(row_y + 3.0)),
                attr("fill", "black"),
            ],
            s.label,
        )?;
    }
    svg.end("g")
}

/// Boxed correlation summary centered near the bottom of the plot.
fn write_annotation(svg: &mut SvgWriter, lines: &[String]) -> Result<()> {
    if lines.is_empty() {
        return Ok(());
    }
    let font_size = 9.0;
    let line_height = 12.0;
    let padding = 6.0;
    let longest = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0) as f64;
    let width = longest * font_size * GLYPH_WIDTH_RATIO + padding * 2.0;
    let height = line_height * lines.len() as f64 + padding * 2.0;
    let center_x = CANVAS_WIDTH / 2.0;
    let bottom = PLOT_BOTTOM - 10.0;
    let top = bottom - height;

    svg.start(
        "g",
        &[attr("id", "correlations"), attr("font-size", num(font_size))],
    )?;
    svg.empty(
        "rect",
        &[
            attr("x", num(center_x - width / 2.0)),
            attr("y", num(top)),
            attr("width", num(width)),
            attr("height", num(height)),
            attr("fill", "white"),
            attr("fill-opacity", "0.7"),
            attr("stroke", "black"),
            attr("stroke-width", "0.8"),
        ],
    )?;
    for (idx, line) in lines.iter().enumerate() {
        svg.text(
            "text",
            &[
                attr("x", num(center_x)),
                attr("y", num(top + padding + line_height * (idx as f64 + 1.0) - 3.0)),
                attr("text-anchor", "middle"),
            ],
            line,
        )?;
    }
    svg.end("g")
}

fn write_captions(svg: &mut SvgWriter) -> Result<()> {
    let y = num(CANVAS_HEIGHT - 12.0);
    svg.text(
        "text",
        &[
            attr("x", "10"),
            attr("y", &y),
            attr("font-size", "8"),
            attr("text-anchor", "start"),
        ],
        SOURCE_CAPTION,
    )?;
    svg.text(
        "text",
        &[
            attr("x", num(CANVAS_WIDTH - 10.0)),
            attr("y", &y),
            attr("font-size", "8"),
            attr("text-anchor", "end"),
        ],
        CREDIT_CAPTION,
    )
}
