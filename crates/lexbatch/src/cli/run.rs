//! `train` and `test` commands.

use crate::cli::error::{HelpfulError, USAGE};
use crate::cli::output;
use anyhow::{Context, Result};
use lexbatch::{load_corpus, Mode, RunConfig, RunInputs, Settings, Target};
use lexbatch_corpus::CorpusReport;
use lexbatch_lex::LexClient;
use std::path::PathBuf;
use std::process::ExitCode;

/// Flags shared by `train` and `test`.
///
/// Required values are plain options here so the checks run in a fixed order
/// with one message each, instead of clap's combined missing-argument error.
#[derive(Debug, clap::Args)]
pub struct RunArgs {
    /// Required: intent or entity
    #[arg(short = 't', long)]
    pub target: Option<String>,

    /// Required: path to the corpus file
    #[arg(short = 'i', long)]
    pub input: Option<String>,

    /// Required: AWS access key id
    #[arg(short = 'a', long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true)]
    pub access_key: Option<String>,

    /// Required: AWS secret access key
    #[arg(short = 's', long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_key: Option<String>,

    /// Required: bot name
    #[arg(short = 'b', long)]
    pub bot: Option<String>,

    /// STS session token for temporary credentials
    #[arg(long, env = "AWS_SESSION_TOKEN", hide_env_values = true)]
    pub session_token: Option<String>,

    /// AWS region (default: us-east-1)
    #[arg(short = 'r', long, env = "LEXBATCH_REGION")]
    pub region: Option<String>,

    /// Bot alias used by `test` (default: the bot name)
    #[arg(long)]
    pub bot_alias: Option<String>,

    /// User id sent with each utterance in `test`
    #[arg(long)]
    pub user_id: Option<String>,

    /// Override the model-building API base URL
    #[arg(long)]
    pub model_endpoint: Option<String>,

    /// Override the runtime API base URL
    #[arg(long)]
    pub runtime_endpoint: Option<String>,

    /// TOML file with region, bot_alias, user_id and endpoint defaults
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl RunArgs {
    fn into_inputs(self) -> (RunInputs, Option<PathBuf>) {
        let inputs = RunInputs {
            target: self.target.unwrap_or_default(),
            input: self.input.unwrap_or_default(),
            access_key: self.access_key.unwrap_or_default(),
            secret_key: self.secret_key.unwrap_or_default(),
            bot_name: self.bot.unwrap_or_default(),
            session_token: self.session_token,
            region: self.region,
            bot_alias: self.bot_alias,
            user_id: self.user_id,
            model_endpoint: self.model_endpoint,
            runtime_endpoint: self.runtime_endpoint,
        };
        (inputs, self.config)
    }
}

pub fn run(mode: Mode, args: RunArgs) -> Result<ExitCode> {
    let (inputs, settings_path) = args.into_inputs();
    let settings = match &settings_path {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let config = match RunConfig::build(mode, inputs, &settings) {
        Ok(config) => config,
        Err(err) => {
            tracing::debug!(error = %err, "Input validation failed");
            eprint!("{}", HelpfulError::from_validation(&err));
            eprintln!();
            eprintln!("{}", USAGE);
            return Ok(ExitCode::from(1));
        }
    };

    tracing::info!(
        mode = mode.as_str(),
        target = %config.target,
        bot = %config.bot_name,
        region = %config.region,
        input = %config.input.display(),
        "Starting run"
    );

    let client = LexClient::new(config.credentials.clone(), config.region.clone())
        .with_endpoints(config.endpoints.clone());
    let corpus = match config.target {
        Target::Intent => load_corpus(&config.input),
        Target::Entity => CorpusReport::default(),
    };
    if !corpus.rejected.is_empty() {
        println!("Skipped {} malformed corpus line(s)", corpus.rejected.len());
    }

    let outcome = lexbatch::run(&client, &config, &corpus);
    for line in output::outcome_lines(&outcome) {
        println!("{}", line);
    }
    Ok(ExitCode::SUCCESS)
}
