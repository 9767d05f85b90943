use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "notecards", version)]
/// Render thank-you notecards from a CSV file onto printable sheets.
struct Cli {
    /// JSON configuration file. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input CSV with one response per row.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Header of the response column.
    #[arg(long)]
    column: Option<String>,

    /// Output directory for sheet PNGs.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Show each card as a preview and wait for Enter instead of writing sheets.
    #[arg(long)]
    review: bool,

    /// Log per-card details.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let cfg = resolve_config(&cli)?;

    let assets = notecards::NotecardAssets::load(&cfg.assets)?;
    let mut renderer = notecards::CardRenderer::new(&assets, cfg.text.clone())?;
    let rows = notecards::ResponseReader::from_path(&cfg.input, &cfg.response_column)?;

    let report = if cli.review {
        let stdin = std::io::stdin();
        let mut reviewer = notecards::PreviewReviewer::new(
            cfg.output_dir.join("preview.png"),
            stdin.lock(),
            std::io::stderr(),
        );
        notecards::run_batch(
            rows,
            &mut renderer,
            notecards::BatchOutput::Review(&mut reviewer),
        )?
    } else {
        let sink = notecards::PngDirSink::new(&cfg.output_dir, cfg.file_prefix.clone())?;
        let mut sink = notecards::ProgressSink::new(sink, std::io::stdout());
        notecards::run_batch(
            rows,
            &mut renderer,
            notecards::BatchOutput::Sheets(&mut sink),
        )?
    };

    eprintln!(
        "rendered {} cards onto {} sheets in {}",
        report.cards,
        report.sheets,
        cfg.output_dir.display()
    );
    Ok(())
}

fn resolve_config(cli: &Cli) -> anyhow::Result<notecards::NotecardConfig> {
    let mut cfg = match &cli.config {
        Some(path) => notecards::NotecardConfig::from_json_file(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => notecards::NotecardConfig::default(),
    };

    if let Some(input) = &cli.in_path {
        cfg.input = input.clone();
    }
    if let Some(column) = &cli.column {
        cfg.response_column = column.clone();
    }
    if let Some(out) = &cli.out {
        cfg.output_dir = out.clone();
    }
    cfg.validate()?;
    Ok(cfg)
}
