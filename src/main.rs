use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use log::{error, info};
use roteiro::dataset::Dataset;
use roteiro::errors::{Result, invalid_argument};
use roteiro::facets::FacetOptions;
use roteiro::filter::{self, Selection};
use roteiro::input;
use roteiro::locale::Language;
use roteiro::record::{Resource, Route};
use serde::Serialize;
use std::{fs, io, process};

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Resources CSV file
    resources: String,
    /// Routes CSV file
    routes: String,
    /// Dataset language (pt, en, es)
    #[arg(short, long, default_value = "pt")]
    language: String,
    /// Restrict to a category (repeatable)
    #[arg(long = "category")]
    categories: Vec<String>,
    /// Restrict to a duration (repeatable)
    #[arg(long = "duration")]
    durations: Vec<String>,
    /// Restrict to an activity (repeatable)
    #[arg(long = "activity")]
    activities: Vec<String>,
    /// Scope points to the named route
    #[arg(long)]
    route: Option<String>,
    /// Output file (stdout if omitted)
    #[arg(short, long)]
    outfile: Option<String>,
    /// Pretty print results
    #[arg(short, long)]
    pretty: bool,
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

#[derive(Serialize)]
struct Report<'a> {
    language: Language,
    facets: &'a FacetOptions,
    resources: Vec<&'a Resource>,
    routes: Vec<&'a Route>,
}

fn write_report(args: &Args, report: &Report) -> Result<()> {
    let writer: Box<dyn io::Write> = match &args.outfile {
        Some(outfile) => {
            info!("write: {outfile}");
            Box::new(io::BufWriter::new(fs::File::create(outfile)?))
        }
        None => Box::new(io::stdout().lock()),
    };
    if args.pretty {
        serde_json::to_writer_pretty(writer, report)?;
    } else {
        serde_json::to_writer(writer, report)?;
    }
    Ok(())
}

fn process(args: &Args) -> Result<()> {
    let language: Language = args.language.parse()?;
    info!("read: {}", args.resources);
    let resource_rows = input::read_rows_path(&args.resources)?;
    info!("read: {}", args.routes);
    let route_rows = input::read_rows_path(&args.routes)?;
    let dataset = Dataset::load(&resource_rows, &route_rows, language)?;

    let selection = Selection {
        categories: args.categories.clone(),
        durations: args.durations.clone(),
        activities: args.activities.clone(),
    };
    let route_scope = match &args.route {
        None => None,
        Some(name) => Some(
            dataset
                .route_by_name(name)
                .ok_or_else(|| invalid_argument(format!("no route named '{name}'")))?,
        ),
    };

    let locale = dataset.locale();
    let resources = filter::filter_resources(&dataset.resources, route_scope, &selection, &locale);
    let routes = filter::filter_routes(&dataset.routes, &selection, &locale);
    info!(
        "filtered: {} of {} resources, {} of {} routes",
        resources.len(),
        dataset.resources.len(),
        routes.len(),
        dataset.routes.len(),
    );

    let report = Report {
        language,
        facets: &dataset.facets,
        resources,
        routes,
    };
    write_report(args, &report)
}

fn main() {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    match process(&args) {
        Ok(()) => (),
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}
