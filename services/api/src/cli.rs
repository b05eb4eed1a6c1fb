use crate::report::{render_catalog, render_plan};
use crate::server;
use clap::{Args, Parser, Subcommand, ValueEnum};
use points_planner::catalog::CatalogView;
use points_planner::error::AppError;
use points_planner::export::export;
use points_planner::selection::JsonFileStore;
use points_planner::{ExportFormat, Selection, SelectionField};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Points Strategy Planner",
    about = "Plan point transfers across rewards cards, airline networks, and hotel programs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print a strategy plan for the given selections
    Plan(PlanArgs),
    /// List the cards, networks, hotel programs, and airports the planner knows about
    Catalog,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the directory the page shell is served from
    #[arg(long)]
    pub(crate) static_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct PlanArgs {
    /// Card id to include (repeatable)
    #[arg(long = "card")]
    pub(crate) cards: Vec<String>,
    /// Airline network id to include (repeatable)
    #[arg(long = "alliance")]
    pub(crate) alliances: Vec<String>,
    /// Hotel program id to include (repeatable)
    #[arg(long = "hotel")]
    pub(crate) hotels: Vec<String>,
    /// Home airport IATA code (repeatable)
    #[arg(long = "airport")]
    pub(crate) airports: Vec<String>,
    /// Start from the default selection and add the given ids to it
    #[arg(long)]
    pub(crate) defaults: bool,
    /// Start from the selection saved in this JSON state file
    #[arg(long, conflicts_with = "defaults")]
    pub(crate) state: Option<PathBuf>,
    /// Write the resulting selection back to the state file
    #[arg(long, requires = "state")]
    pub(crate) save: bool,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Write the output to a file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl PlanArgs {
    fn has_ids(&self) -> bool {
        !(self.cards.is_empty()
            && self.alliances.is_empty()
            && self.hotels.is_empty()
            && self.airports.is_empty())
    }

    /// Base selection plus any ids given on the command line.
    fn selection(&self, store: Option<&JsonFileStore>) -> Selection {
        if let Some(store) = store {
            let mut selection = Selection::load(store);
            self.apply(&mut selection);
            return selection;
        }

        if self.defaults || !self.has_ids() {
            let mut selection = Selection::defaults();
            self.apply(&mut selection);
            selection
        } else {
            Selection::new(
                self.cards.clone(),
                self.alliances.clone(),
                self.hotels.clone(),
                self.airports.clone(),
            )
        }
    }

    fn apply(&self, selection: &mut Selection) {
        let fields = [
            (SelectionField::Cards, &self.cards),
            (SelectionField::Alliances, &self.alliances),
            (SelectionField::Hotels, &self.hotels),
            (SelectionField::Airports, &self.airports),
        ];
        for (field, values) in fields {
            for value in values {
                selection.add(field, value);
            }
        }
    }
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Plan(args) => run_plan(args),
        Command::Catalog => {
            print!("{}", render_catalog(&CatalogView::snapshot()));
            Ok(())
        }
    }
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), AppError> {
    let store = args.state.as_ref().map(JsonFileStore::new);
    let selection = args.selection(store.as_ref());
    let plan = selection.plan();

    if let (Some(store), true) = (store.as_ref(), args.save) {
        selection.save(store);
    }

    let content = match args.format {
        OutputFormat::Text => render_plan(&selection, &plan),
        OutputFormat::Json => export(ExportFormat::Json, &selection, &plan)?.content,
        OutputFormat::Csv => export(ExportFormat::Csv, &selection, &plan)?.content,
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, content)?;
            println!("Wrote {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}
