use clap::{Args, Parser, Subcommand};
use dotenvy::dotenv;

use identicole::SearchSession;
use identicole::identicole_client::{LocationClient, RemoteClient};
use identicole::identicole_config::ClientConfig;
use identicole::identicole_core::ClientError;

mod cli;

#[derive(Parser)]
#[command(name = "identicole")]
#[command(about = "Identicole - search Peruvian schools by location, modality and level", long_about = None)]
struct Cli {
    /// Proxy base URL (overrides IDENTICOLE_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the department catalog
    Departments,
    /// List the educational modalities
    Modalities,
    /// List the provinces of a department
    Provinces {
        /// Department code, e.g. 15
        department: String,
    },
    /// List the districts of a province
    Districts {
        /// Department code, e.g. 15
        department: String,
        /// Province code, e.g. 01
        province: String,
    },
    /// List the levels offered under a modality
    Levels {
        /// Modality code: 01, 03 or 04
        modality: String,
    },
    /// Search schools in a district
    Search(SearchArgs),
    /// Walk through the filters with prompts, then browse results page by page
    Interactive,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Department code
    #[arg(short = 'd', long)]
    pub department: String,

    /// Province code (defaults to the first province of the department)
    #[arg(short = 'p', long)]
    pub province: Option<String>,

    /// District code
    #[arg(short = 't', long)]
    pub district: String,

    /// Modality code: 01, 03 or 04
    #[arg(short = 'm', long)]
    pub modality: Option<String>,

    /// Level code (requires --modality to be meaningful)
    #[arg(short = 'l', long)]
    pub level: Option<String>,

    /// School name filter
    #[arg(short = 'q', long)]
    pub query: Option<String>,

    /// Zero-based page to show
    #[arg(long, default_value = "0")]
    pub page: u32,

    /// Print the raw result as JSON
    #[arg(long)]
    pub json: bool,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    identicole_observability::init_tracing();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }

    let result = match cli.command {
        Commands::Departments => {
            cli::print_departments();
            Ok(())
        }
        Commands::Modalities => {
            cli::print_modalities();
            Ok(())
        }
        Commands::Provinces { department } => match location_client(&config) {
            Ok(locations) => cli::handle_provinces(&locations, &department).await,
            Err(e) => Err(e.into()),
        },
        Commands::Districts {
            department,
            province,
        } => match location_client(&config) {
            Ok(locations) => cli::handle_districts(&locations, &department, &province).await,
            Err(e) => Err(e.into()),
        },
        Commands::Levels { modality } => match location_client(&config) {
            Ok(locations) => cli::handle_levels(&locations, &modality).await,
            Err(e) => Err(e.into()),
        },
        Commands::Search(args) => match SearchSession::from_config(&config) {
            Ok(session) => cli::handle_search(&session, args).await,
            Err(e) => Err(e.into()),
        },
        Commands::Interactive => match SearchSession::from_config(&config) {
            Ok(session) => cli::interactive::run(&session).await,
            Err(e) => Err(e.into()),
        },
    };

    if let Err(e) = result {
        match e.downcast_ref::<ClientError>() {
            Some(client_error) => eprintln!("\n❌ {}", client_error.user_message()),
            None => eprintln!("\n❌ {}", e),
        }
        std::process::exit(1);
    }
}

fn location_client(config: &ClientConfig) -> Result<LocationClient, ClientError> {
    RemoteClient::from_config(config).map(LocationClient::new)
}
