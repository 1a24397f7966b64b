mod config;
mod generate_cmd;
mod kpi_cmd;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use plansmith_core::{ArtifactPaths, OpenAiClient, ProjectParameters};

#[derive(Parser)]
#[command(name = "plansmith", about = "Software-project plan and KPI synthesizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a plansmith config file
    Init {
        /// API key for the generation service
        #[arg(long)]
        api_key: String,
        /// Model identifier
        #[arg(long)]
        model: Option<String>,
        /// Endpoint base URL (without the /chat/completions suffix)
        #[arg(long)]
        base_url: Option<String>,
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Generate a full project plan: KPIs, schedule, charts, CSV
    Generate {
        #[command(flatten)]
        project: ProjectArgs,
        /// Directory the chart/CSV artifacts are written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// API key (overrides env var and config file)
        #[arg(long)]
        api_key: Option<String>,
        /// Model identifier (overrides env var and config file)
        #[arg(long)]
        model: Option<String>,
        /// Endpoint base URL (overrides env var and config file)
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Synthesize KPIs only (no generation-service call)
    Kpis {
        #[command(flatten)]
        project: ProjectArgs,
    },
}

#[derive(Args)]
struct ProjectArgs {
    /// Kind of project (e.g. "Web Development")
    #[arg(long)]
    project_type: String,
    /// Project timeline in days
    #[arg(long)]
    timeline: u32,
    /// Number of people on the team
    #[arg(long)]
    team_size: u32,
    /// Implementation languages, comma-separated
    #[arg(long, value_delimiter = ',')]
    languages: Vec<String>,
    /// Number of sprints
    #[arg(long)]
    sprints: u32,
}

impl ProjectArgs {
    fn into_params(self) -> Result<ProjectParameters> {
        Ok(ProjectParameters::new(
            self.project_type,
            self.timeline,
            self.team_size,
            self.languages,
            self.sprints,
        )?)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            api_key,
            model,
            base_url,
            force,
        } => {
            config::run_init(&api_key, model.as_deref(), base_url.as_deref(), force)?;
        }
        Commands::Generate {
            project,
            out_dir,
            api_key,
            model,
            base_url,
        } => {
            let params = project.into_params()?;
            let client_config = config::resolve_client_config(
                api_key.as_deref(),
                model.as_deref(),
                base_url.as_deref(),
            )?;
            let client = OpenAiClient::new(client_config);
            std::fs::create_dir_all(&out_dir)?;
            let paths = ArtifactPaths::new(out_dir);
            generate_cmd::run_generate(&params, &client, &paths).await?;
        }
        Commands::Kpis { project } => {
            let params = project.into_params()?;
            kpi_cmd::run_kpis(&params)?;
        }
    }

    Ok(())
}
