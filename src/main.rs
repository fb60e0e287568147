use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use layout::engine::EditorCore;
use layout::keyboard::KeyboardHub;
use layout::plan::SaveError;
use layout::render;
use layout::view::EditorView;
use layout::viewport::Point;
use roomplan::catalog::{CatalogBrowser, CatalogClient, CatalogError, fetch_categories, fetch_items};
use roomplan::config::{ConfigError, PlannerConfig};
use roomplan::plan_file::{JsonFilePlanSink, load_plan};
use roomplan::report;
use roomplan::script::{self, ScriptError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error(transparent)]
    Save(#[from] SaveError),
    #[error("{}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
}

#[derive(Parser, Debug)]
#[command(name = "roomplan", about = "Furniture catalog and room layout tool")]
struct Cli {
    /// Catalog API base URL.
    #[arg(long, env = "CATALOG_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog categories.
    Categories,
    /// List furniture templates in a category.
    Items { category: String },
    /// Replay a scripted editor session.
    Layout {
        script: PathBuf,
        /// Write the final canvas as SVG.
        #[arg(long)]
        svg: Option<PathBuf>,
        /// Save the final room plan as JSON.
        #[arg(long)]
        save: Option<PathBuf>,
        /// Start from a previously saved room plan instead of an empty room.
        #[arg(long)]
        plan: Option<PathBuf>,
        #[arg(long, default_value_t = 0.0)]
        canvas_left: f64,
        #[arg(long, default_value_t = 0.0)]
        canvas_top: f64,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut config = PlannerConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.catalog_base_url = base_url.trim_end_matches('/').to_owned();
    }

    match cli.command {
        Command::Categories => run_categories(&config).await,
        Command::Items { category } => run_items(&config, category).await,
        Command::Layout { script, svg, save, plan, canvas_left, canvas_top } => run_layout(
            &config,
            &script,
            LayoutOutputs { svg: svg.as_deref(), save: save.as_deref() },
            plan.as_deref(),
            Point::new(canvas_left, canvas_top),
        ),
    }
}

fn fetch_limit(config: &PlannerConfig) -> Duration {
    Duration::from_secs(config.timeouts.request_secs)
}

async fn run_categories(config: &PlannerConfig) -> Result<(), CliError> {
    let client = CatalogClient::from_config(config)?;
    let mut browser = CatalogBrowser::new();
    let request = browser.request_categories();
    let (request, result) = fetch_categories(&client, request, fetch_limit(config)).await;
    browser.apply_categories(request, result);

    for category in browser.categories() {
        println!("{category}");
    }
    Ok(())
}

async fn run_items(config: &PlannerConfig, category: String) -> Result<(), CliError> {
    let client = CatalogClient::from_config(config)?;
    let mut browser = CatalogBrowser::new();
    let request = browser.select_category(category);
    let (request, result) = fetch_items(&client, request, fetch_limit(config)).await;
    browser.apply_items(&request, result);

    print!("{}", report::items_table(browser.items()));
    Ok(())
}

struct LayoutOutputs<'a> {
    svg: Option<&'a Path>,
    save: Option<&'a Path>,
}

fn run_layout(
    config: &PlannerConfig,
    script_path: &Path,
    outputs: LayoutOutputs<'_>,
    plan: Option<&Path>,
    origin: Point,
) -> Result<(), CliError> {
    let raw = std::fs::read_to_string(script_path)
        .map_err(|source| CliError::Io { path: script_path.to_path_buf(), source })?;
    let events = script::parse_script(&raw)?;

    let hub = KeyboardHub::new();
    let core = match plan {
        Some(path) => EditorCore::from_plan(&load_plan(path)?, config.room_bounds),
        None => EditorCore::new(config.room()),
    };
    let view = EditorView::mount(&hub, core);
    let summary = script::replay(&view, &hub, origin, &events);

    if let Some(path) = outputs.svg {
        let rendered = render::to_svg(&view.scene());
        std::fs::write(path, rendered).map_err(|source| CliError::Io { path: path.to_path_buf(), source })?;
    }
    if let Some(path) = outputs.save {
        view.save_plan(&mut JsonFilePlanSink::new(path))?;
    }

    let core = view.unmount();
    eprintln!(
        "replayed {} events: {} placed, {} moved, {} removed, {} ignored",
        summary.events, summary.placed, summary.moved, summary.removed, summary.ignored
    );
    print!("{}", report::room_listing(&core));
    Ok(())
}
