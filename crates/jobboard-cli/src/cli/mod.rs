//! CLI for the job-board service.

mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use jobboard_core::config;
use jobboard_core::credentials::{CredentialStore, FileCredentialStore};
use jobboard_core::{JobServiceClient, RequestError};

use commands::{
    run_applied, run_apply, run_create, run_delete, run_jobs, run_login, run_logout, run_orgs,
    run_save, run_saved, run_show, run_types, run_update, ApplyArgs, CreateArgs, UpdateArgs,
};

/// Top-level CLI for the job-board service.
#[derive(Debug, Parser)]
#[command(name = "jobboard")]
#[command(about = "Browse, post and apply to jobs on a job-board service", long_about = None)]
pub struct Cli {
    /// Service base URL (overrides `base_url` in config.toml).
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Store a session token issued by the service.
    Login {
        /// Bearer token.
        #[arg(long)]
        token: String,
    },

    /// Forget the stored session token.
    Logout,

    /// List jobs with applied/saved state.
    Jobs {
        /// Only show jobs whose title contains this text (case-insensitive).
        #[arg(long, value_name = "TEXT")]
        search: Option<String>,
        /// Admin view: active jobs only, without applied/saved columns.
        #[arg(long)]
        admin: bool,
    },

    /// Show one job in full.
    Show {
        /// Job identifier.
        id: String,
    },

    /// Post a new job.
    Create {
        #[arg(long)]
        title: String,
        /// Job type id (see `jobboard types`).
        #[arg(long, value_name = "ID")]
        type_id: String,
        /// Organization id (see `jobboard orgs`).
        #[arg(long, value_name = "ID")]
        org_id: String,
        /// Average annual salary.
        #[arg(long)]
        salary: f64,
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Change title, description or salary of a job.
    Update {
        /// Job identifier.
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        salary: Option<f64>,
    },

    /// Deactivate a job.
    Delete {
        /// Job identifier.
        id: String,
    },

    /// Apply to a job with a PDF resume.
    Apply {
        /// Job identifier.
        id: String,
        /// Applicant full name.
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Mobile phone number.
        #[arg(long)]
        mobile: String,
        /// Path to the resume (PDF).
        #[arg(long, value_name = "PATH")]
        resume: PathBuf,
    },

    /// Bookmark a job.
    Save {
        /// Job identifier.
        id: String,
    },

    /// List saved jobs.
    Saved,

    /// List jobs you have applied to.
    Applied,

    /// List organizations.
    Orgs,

    /// List job types.
    Types,
}

/// Turn an expired or missing session into something actionable.
fn with_login_hint(err: anyhow::Error) -> anyhow::Error {
    match err.downcast_ref::<RequestError>() {
        Some(RequestError::Unauthenticated) => {
            err.context("not signed in; run `jobboard login --token <TOKEN>` first")
        }
        _ => err,
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        if let Some(url) = cli.base_url {
            cfg.base_url = url;
        }
        tracing::debug!("loaded config: {:?}", cfg);

        let store: Arc<dyn CredentialStore> = Arc::new(FileCredentialStore::open_default()?);

        match &cli.command {
            CliCommand::Login { token } => return run_login(store.as_ref(), token),
            CliCommand::Logout => return run_logout(store.as_ref()),
            _ => {}
        }

        let client = JobServiceClient::from_config(&cfg, store)?;
        let result = match cli.command {
            CliCommand::Jobs { search, admin } => run_jobs(&client, search.as_deref(), admin).await,
            CliCommand::Show { id } => run_show(&client, &id).await,
            CliCommand::Create {
                title,
                type_id,
                org_id,
                salary,
                description,
            } => {
                run_create(
                    &client,
                    CreateArgs {
                        title,
                        type_id,
                        org_id,
                        salary,
                        description,
                    },
                )
                .await
            }
            CliCommand::Update {
                id,
                title,
                description,
                salary,
            } => {
                run_update(
                    &client,
                    &id,
                    UpdateArgs {
                        title,
                        description,
                        salary,
                    },
                )
                .await
            }
            CliCommand::Delete { id } => run_delete(&client, &id).await,
            CliCommand::Apply {
                id,
                name,
                email,
                mobile,
                resume,
            } => {
                run_apply(
                    &client,
                    &id,
                    ApplyArgs {
                        name,
                        email,
                        mobile,
                        resume,
                    },
                )
                .await
            }
            CliCommand::Save { id } => run_save(&client, &id).await,
            CliCommand::Saved => run_saved(&client).await,
            CliCommand::Applied => run_applied(&client).await,
            CliCommand::Orgs => run_orgs(&client).await,
            CliCommand::Types => run_types(&client).await,
            CliCommand::Login { .. } | CliCommand::Logout => Ok(()),
        };

        result.map_err(with_login_hint)
    }
}

#[cfg(test)]
mod tests;
