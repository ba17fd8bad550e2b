//! rigbench CLI
//!
//! Catalog, build and price tracking from the command line.

mod report;

use anyhow::{Context, Result};
use clap::Parser;
use rigbench_core::partition::CatalogView;
use rigbench_core::query::{Condition, OrderBy, SortDirection};
use rigbench_core::{BuildId, ComponentId, ComponentKind, LinkId};
use rigbench_db::Store;
use rigbench_script::{load_config, Loader, Seeder};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_DATABASE: &str = "rigbench.db";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Database file (overrides the configuration)
    #[clap(long, global = true)]
    db: Option<PathBuf>,
    /// Configuration file
    #[clap(long, global = true, default_value = "rigbench.ron")]
    config: PathBuf,
    /// Log at debug level
    #[clap(short, long, global = true)]
    verbose: bool,
    /// Command to execute
    #[clap(subcommand)]
    cmd: Command,
}

#[derive(clap::Args, Debug, Default)]
struct TableArgs {
    /// Sort by a field
    #[clap(long)]
    sort: Option<String>,
    /// Sort descending
    #[clap(long)]
    desc: bool,
    /// Brand or name substring
    #[clap(long)]
    search: Option<String>,
}

impl TableArgs {
    fn order_by(&self) -> Option<OrderBy> {
        self.sort.as_ref().map(|field| OrderBy {
            field: field.clone(),
            direction: if self.desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
        })
    }

    fn view(&self) -> CatalogView {
        CatalogView {
            sort: self.order_by(),
            search: self.search.clone(),
        }
    }
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Load a catalog file or directory into the database
    Seed { path: PathBuf },
    /// List the catalog of one kind
    List {
        kind: ComponentKind,
        /// field=value filter, repeatable
        #[clap(long = "where", value_parser = report::parse_condition)]
        conditions: Vec<Condition>,
        #[clap(flatten)]
        table: TableArgs,
    },
    /// Show a build's price per slot
    BuildPrice { build: u64 },
    /// Split the catalog of one kind against a build
    Check {
        build: u64,
        kind: ComponentKind,
        #[clap(flatten)]
        table: TableArgs,
    },
    /// Compare two components attribute by attribute
    Compare { candidate: u64, reference: u64 },
    /// Recognize the retailer of a product URL
    Recognize { url: String },
    /// Show the retailer links of a component
    Links { component: u64 },
    /// Record today's price for a retailer link
    RecordPrice { link: u64, price: u64 },
    /// Run a RON-encoded store request
    Dispatch { request: String },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = load_config(&args.config)
        .with_context(|| format!("load configuration {}", args.config.display()))?;
    let db_path = args
        .db
        .clone()
        .or_else(|| config.database.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE));

    let store = Store::open(&db_path)
        .with_context(|| format!("open database {}", db_path.display()))?
        .with_evaluator(config.evaluator.clone())
        .with_retailers(config.retailer_table());
    info!(path = %db_path.display(), "database ready");

    run(&store, args.cmd)
}

fn run(store: &Store, cmd: Command) -> Result<()> {
    match cmd {
        Command::Seed { path } => {
            let mut loader = Loader::new();
            if path.is_dir() {
                loader.load_directory(&path)?;
            } else {
                loader.load_file(&path)?;
            }
            let report = Seeder::new(store).seed(&loader.finish())?;
            println!(
                "Seeded {} components, {} links, {} groups, {} builds",
                report.components, report.links, report.groups, report.builds
            );
        }
        Command::List {
            kind,
            conditions,
            table,
        } => {
            let mut components = store.components_where(kind, &conditions, table.order_by().as_ref())?;
            let view = table.view();
            components.retain(|c| view.shows(c));
            print!("{}", report::components(kind, &components));
        }
        Command::BuildPrice { build } => {
            let price = store.build_price(BuildId::new(build))?;
            print!("{}", report::build_price(&price));
        }
        Command::Check { build, kind, table } => {
            let partition = store.partition_for_build(Some(BuildId::new(build)), kind, &table.view())?;
            print!("{}", report::partition(&partition));
        }
        Command::Compare {
            candidate,
            reference,
        } => {
            let rows = store.compare(ComponentId::new(candidate), ComponentId::new(reference))?;
            print!("{}", report::comparison(&rows));
        }
        Command::Recognize { url } => {
            print!("{}", report::recognition(&store.recognize(&url)));
        }
        Command::Links { component } => {
            for link in store.retailer_links(ComponentId::new(component))? {
                print!("{}", report::link(&link));
            }
        }
        Command::RecordPrice { link, price } => {
            let link = store.record_price(LinkId::new(link), price)?;
            print!("{}", report::link(&link));
        }
        Command::Dispatch { request } => {
            let response = store.dispatch_str(&request)?;
            let text = ron::ser::to_string_pretty(&response, ron::ser::PrettyConfig::default())?;
            println!("{}", text);
        }
    }
    Ok(())
}
