// File: crates/pricechart/src/main.rs
// Summary: CLI that loads the phone dataset once and renders price charts for filter selections.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use pricechart_core::filter::{parse_battery_selection, parse_ram_selection, parse_year_selection};
use pricechart_core::types::{HEIGHT, WIDTH};
use pricechart_core::{ChangeEvent, Dashboard, Dataset, FilterState, Size, View};
use pricechart_render_skia::{theme, OutputFormat, RenderOptions, SkiaRenderer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pricechart")]
#[command(about = "Average launch price per manufacturer from a phone specification dataset", long_about = None)]
struct Cli {
    /// Dataset CSV with a header row
    #[arg(long, env = "PRICECHART_DATA", default_value = "cleaned_mobiles_data.csv", global = true)]
    data: PathBuf,

    /// Surface width in pixels
    #[arg(long, default_value_t = WIDTH, global = true)]
    width: u32,

    /// Surface height in pixels
    #[arg(long, default_value_t = HEIGHT, global = true)]
    height: u32,

    /// Colour theme (light, dark)
    #[arg(long, default_value = "light", global = true)]
    theme: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one chart for the given filter selections
    Render {
        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Print the aggregated values (bar tooltips or yearly series) to stdout
        #[arg(long, default_value_t = false)]
        summary: bool,
    },
    /// Print the options each filter control offers for this dataset
    Options,
    /// Re-render on every change event read from stdin (`year=2023 battery=Low view=line ...`)
    Watch {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Launch year, or "All"
    #[arg(long, default_value = "All")]
    year: String,

    /// Battery tier: All, Low, Medium or High
    #[arg(long, default_value = "All")]
    battery: String,

    /// RAM size as written in the dataset (e.g. 8 for "8GB"), or "All"
    #[arg(long, default_value = "All")]
    ram: String,

    /// Chart type: bar or line
    #[arg(long, default_value = "bar")]
    view: View,
}

impl FilterArgs {
    fn to_filter(&self) -> Result<FilterState> {
        Ok(FilterState {
            year: parse_year_selection(&self.year),
            battery: parse_battery_selection(&self.battery)?,
            ram: parse_ram_selection(&self.ram),
            view: self.view,
        })
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Svg,
    Png,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Svg => OutputFormat::Svg,
            Format::Png => OutputFormat::Png,
        }
    }
}

#[derive(Args)]
struct OutputArgs {
    /// Output file; defaults to target/out/chart_<view>.<format>
    #[arg(short, long)]
    out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,
}

impl OutputArgs {
    fn path_for(&self, view: View) -> PathBuf {
        let ext = OutputFormat::from(self.format).extension();
        self.out
            .clone()
            .unwrap_or_else(|| Path::new("target/out").join(format!("chart_{view}.{ext}")))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Nothing runs before the dataset is in memory
    let dataset = Dataset::load(&cli.data)
        .with_context(|| format!("failed to load dataset '{}'", cli.data.display()))?;
    let dashboard = Dashboard::new(dataset);
    let size = Size::new(cli.width, cli.height);
    let theme = theme::find(&cli.theme);

    match &cli.command {
        Commands::Render { filters, output, summary } => {
            let filter = filters.to_filter()?;
            let renderer = SkiaRenderer::new(RenderOptions { theme, format: output.format.into(), ..Default::default() });
            if *summary {
                print_summary(&dashboard, &filter);
            }
            render_once(&dashboard, &renderer, &filter, size, &output.path_for(filter.view))?;
        }
        Commands::Options => print_options(&dashboard),
        Commands::Watch { output } => {
            let renderer = SkiaRenderer::new(RenderOptions { theme, format: output.format.into(), ..Default::default() });
            watch(&dashboard, &renderer, output, size)?;
        }
    }
    Ok(())
}

fn render_once(dashboard: &Dashboard, renderer: &SkiaRenderer, filter: &FilterState, size: Size, out: &Path) -> Result<()> {
    let model = dashboard.update(filter, size);
    renderer.render_to_file(&model, out)?;
    info!(
        view = %filter.view,
        year = %filter.year,
        battery = %filter.battery,
        ram = %filter.ram,
        empty = model.is_empty(),
        "wrote {}",
        out.display()
    );
    Ok(())
}

/// Initial render with default selections, then one synchronous pass per input line.
fn watch(dashboard: &Dashboard, renderer: &SkiaRenderer, output: &OutputArgs, size: Size) -> Result<()> {
    let initial = FilterState::default();
    render_once(dashboard, renderer, &initial, size, &output.path_for(initial.view))?;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading change events from stdin")?;
        let event = match ChangeEvent::parse(&line) {
            Ok(ev) => ev,
            Err(err) => {
                error!(%err, "ignoring change event");
                continue;
            }
        };
        let size = Size::new(event.width.unwrap_or(size.width), event.height.unwrap_or(size.height));
        render_once(dashboard, renderer, &event.filter, size, &output.path_for(event.filter.view))?;
    }
    Ok(())
}

fn print_options(dashboard: &Dashboard) {
    let opts = dashboard.options();
    let join = |items: Vec<String>| items.join(", ");
    println!("year:    All, {}", join(opts.years.iter().map(|y| y.to_string()).collect()));
    println!("battery: All, {}", join(opts.battery.iter().map(|b| b.to_string()).collect()));
    println!("ram:     All, {}", join(opts.ram.iter().map(|r| r.to_string()).collect()));
    println!("view:    {}", join(opts.views.iter().map(|v| v.to_string()).collect()));
}

fn print_summary(dashboard: &Dashboard, filter: &FilterState) {
    match filter.view {
        View::Bar => {
            for point in dashboard.bar_points(filter) {
                println!("{}", point.tooltip());
            }
        }
        View::Line => {
            for series in dashboard.line_series(filter) {
                let points = series
                    .points
                    .iter()
                    .map(|p| format!("{}: {:.0}", p.year, p.avg_price))
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("{}: {}", series.company, points);
            }
        }
    }
}
