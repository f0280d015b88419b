use anyhow::{Context, Result};
use tracing::{info, info_span};

use mig_cli::pipeline::{ChartFormat, RenderConfig, analyze, render};
use mig_core::DraftTable;
use mig_report::{FontOptions, write_run_report};

use crate::cli::{ChartFormatArg, OverlayArgs};
use crate::summary::{print_draft_table, print_merged_summary};

pub fn run_overlay(args: &OverlayArgs) -> Result<()> {
    let span = info_span!("overlay", input = %args.input.display());
    let _guard = span.enter();
    let draft = DraftTable::selective_service();

    let analysis = analyze(&args.input, &draft)?;
    for result in &analysis.correlations {
        println!("{result}");
    }
    if args.summary {
        print_merged_summary(&analysis);
    }

    if args.dry_run {
        info!("dry run, no files written");
        return Ok(());
    }

    let config = RenderConfig {
        output: args.output.clone(),
        dpi: args.dpi,
        format: chart_format(args.format),
        fonts: FontOptions {
            files: args.fonts.clone(),
            system_fonts: true,
        },
    };
    let written = render(&analysis, &draft, &config)?;
    if let Some(path) = &args.report_json {
        write_run_report(path, &args.input, &analysis.merged, &analysis.correlations)
            .with_context(|| format!("write run report {}", path.display()))?;
        info!(path = %path.display(), "run report written");
    }
    for path in &written {
        info!(path = %path.display(), "chart written");
    }
    Ok(())
}

pub fn run_draft() -> Result<()> {
    print_draft_table(&DraftTable::selective_service());
    Ok(())
}

fn chart_format(format: ChartFormatArg) -> ChartFormat {
    match format {
        ChartFormatArg::Png => ChartFormat::Png,
        ChartFormatArg::Svg => ChartFormat::Svg,
        ChartFormatArg::Both => ChartFormat::Both,
    }
}
