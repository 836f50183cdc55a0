use std::env;
use std::path::Path;

use projects_overview::fetch::{fetch_repo_summaries, FetchRepoSummariesError};
use projects_overview::render::render_overview_table;
use projects_overview::splice::{update_overview_file, UpdateOverviewFileError};
use thiserror::Error;
use tracing::info;
use utils_trace::tracing_init;

const DEFAULT_README_PATH: &str = "README.md";

#[derive(Debug, Error)]
pub enum MainError {
    #[error("TracingInit: {source}")]
    TracingInit {
        #[source]
        source: utils_trace::TracingInitError,
    },
    #[error("MissingEnvVar: {name}")]
    MissingEnvVar { name: &'static str },
    #[error("FetchRepoSummaries: {source}")]
    FetchRepoSummaries {
        #[source]
        source: FetchRepoSummariesError,
    },
    #[error("UpdateOverviewFile: {source}")]
    UpdateOverviewFile {
        #[source]
        source: UpdateOverviewFileError,
    },
}

fn required_env(name: &'static str) -> Result<String, MainError> {
    env::var(name).map_err(|_| MainError::MissingEnvVar { name })
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
    dotenvy::dotenv().ok();

    tracing_init("info").map_err(|source| MainError::TracingInit { source })?;

    let owner = required_env("GH_OWNER")?;
    let token = required_env("GH_TOKEN")?;
    let readme_path =
        env::var("README_PATH").unwrap_or_else(|_| DEFAULT_README_PATH.to_string());

    let repos = fetch_repo_summaries(&token, &owner)
        .await
        .map_err(|source| MainError::FetchRepoSummaries { source })?;

    info!("Fetched {} repositories for {}", repos.len(), owner);

    let table = render_overview_table(&repos);

    update_overview_file(Path::new(&readme_path), &table)
        .map_err(|source| MainError::UpdateOverviewFile { source })?;

    info!("Updated overview table in {}", readme_path);

    Ok(())
}
