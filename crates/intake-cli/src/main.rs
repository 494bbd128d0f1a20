use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use intake_cli::config::{self, LogFormat, StorageBackend};
use intake_cli::{app, session};

/// Structured mental health intake interview.
#[derive(Parser, Debug)]
#[command(name = "intake")]
#[command(version)]
struct Args {
    /// Session to start or resume. A new id is generated when omitted.
    #[arg(long, env = "INTAKE_SESSION_ID")]
    session_id: Option<String>,

    #[arg(long, env = "INTAKE_PATIENT_ID", default_value = "local")]
    patient_id: String,

    /// Use keyword heuristics only; no model calls.
    #[arg(long)]
    offline: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interview, then print the diagnostic summary (default).
    Interview,
    /// Print the diagnostic summary for symptoms already recorded.
    Diagnose,
    /// Write the effective configuration to the config file.
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let mut config = config::load_config()?;
    if args.offline {
        config.offline = true;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match config.log_format {
        LogFormat::Plain => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }

    let command = args.command.unwrap_or(Command::Interview);
    if let Command::InitConfig = command {
        let path = config::save_config(&config)?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let session_id = args
        .session_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    tracing::info!(session_id = %session_id, "starting session");

    let app = app::build(&config).await?;
    let mut stdout = std::io::stdout();

    match command {
        Command::Interview => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let finished =
                session::run_interview(&app, &session_id, &args.patient_id, stdin, &mut stdout)
                    .await?;
            if finished.is_none() {
                match config.storage {
                    StorageBackend::S3 { .. } => {
                        println!("Interview paused. Resume with --session-id {session_id}")
                    }
                    StorageBackend::Memory => println!("Interview ended early."),
                }
                return Ok(());
            }
            session::diagnose(&app, &session_id, &args.patient_id, &mut stdout).await?;
        }
        Command::Diagnose => {
            session::diagnose(&app, &session_id, &args.patient_id, &mut stdout).await?;
        }
        Command::InitConfig => {}
    }

    Ok(())
}
