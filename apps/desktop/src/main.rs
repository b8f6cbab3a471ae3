use std::sync::Arc;

use anyhow::{bail, Result};
use catalog::Catalog;
use clap::{Parser, Subcommand};
use client_core::{
    CatalogAccess, DetailProjector, InMemoryCatalogAccess, LatencyProfile, ListProjector,
    ListViewState,
};
use futures::StreamExt;
use shared::domain::{Category, CelestialObject, ObjectId};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "desktop", about = "Terminal browser for the celestial catalog")]
struct Args {
    /// Skip the simulated retrieval latency entirely.
    #[arg(long, global = true)]
    no_delay: bool,

    /// Scale the simulated latency (1.0 is the shipped profile).
    #[arg(long, global = true, default_value_t = 1.0)]
    latency_scale: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog objects, optionally restricted to one category.
    List {
        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,
        #[arg(long)]
        json: bool,
    },
    /// Show a single object by id.
    Show {
        id: i64,
        #[arg(long)]
        json: bool,
    },
    /// Follow the snapshot feed until it completes.
    Watch,
}

fn parse_category(raw: &str) -> Result<Category, String> {
    match raw.to_ascii_lowercase().as_str() {
        "planet" => Ok(Category::Planet),
        "moon" => Ok(Category::Moon),
        "star" => Ok(Category::Star),
        "galaxy" => Ok(Category::Galaxy),
        "nebula" => Ok(Category::Nebula),
        other => Err(format!(
            "unknown category {other:?}; expected planet, moon, star, galaxy, or nebula"
        )),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let latency = if args.no_delay {
        LatencyProfile::ZERO
    } else {
        LatencyProfile::default().scaled(args.latency_scale)
    };
    let access = InMemoryCatalogAccess::new(Arc::new(Catalog::seeded()), latency);
    debug!(latency = ?access.latency(), "catalog access ready");

    match args.command {
        Command::List { category, json } => run_list(Arc::new(access), category, json).await,
        Command::Show { id, json } => run_show(Arc::new(access), ObjectId(id), json).await,
        Command::Watch => run_watch(&access).await,
    }
}

async fn run_list(
    access: Arc<dyn CatalogAccess>,
    category: Option<Category>,
    json: bool,
) -> Result<()> {
    let projector = ListProjector::new(access);
    projector.set_filter(category).await;

    let state = projector.subscribe_state().borrow().clone();
    match state {
        ListViewState::Success(objects) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&objects)?);
            } else {
                for object in &objects {
                    print_row(object);
                }
                println!("{} object(s)", objects.len());
            }
            Ok(())
        }
        ListViewState::Error(message) => bail!("catalog retrieval failed: {message}"),
        ListViewState::Loading => bail!("catalog load did not settle"),
    }
}

async fn run_show(access: Arc<dyn CatalogAccess>, id: ObjectId, json: bool) -> Result<()> {
    let projector = DetailProjector::new(access);
    projector.load(id).await;

    let state = projector.subscribe_state().borrow().clone();
    match state.object {
        Some(object) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&object)?);
            } else {
                print_detail(&object);
            }
            Ok(())
        }
        None => bail!("no object with id {}", id.0),
    }
}

async fn run_watch(access: &InMemoryCatalogAccess) -> Result<()> {
    let mut snapshots = access.observe_all();
    let mut sequence = 0u32;
    while let Some(snapshot) = snapshots.next().await {
        sequence += 1;
        println!("snapshot {sequence}: {} object(s)", snapshot.len());
        for object in &snapshot {
            print_row(object);
        }
    }
    println!("feed complete");
    Ok(())
}

fn print_row(object: &CelestialObject) {
    println!(
        "{} {:>2}  {:<18} {:<7} {}",
        object.category.glyph(),
        object.id.0,
        object.name,
        object.category.label(),
        object.distance_from_earth
    );
}

fn print_detail(object: &CelestialObject) {
    println!(
        "{} {} ({})",
        object.category.glyph(),
        object.name,
        object.category.label()
    );
    println!("{}", object.description);
    println!("Distance from Earth: {}", object.distance_from_earth);
    println!("Discovered: {}", object.discovery_label());
    println!("Facts:");
    for (index, fact) in object.facts.iter().enumerate() {
        println!("  {}. {fact}", index + 1);
    }
}
