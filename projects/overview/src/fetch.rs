use interfaces_github_repos::index::{
    fetch_owner_repositories, FetchOwnerRepositoriesError, GitHubGraphQLResult, GraphQLResponse,
    RepoNode,
};
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchRepoSummariesError {
    #[error("FetchOwnerRepositories: {source}")]
    FetchOwnerRepositories {
        #[from]
        source: FetchOwnerRepositoriesError,
    },

    #[error("HttpStatus: {status}")]
    HttpStatus { status: StatusCode, body: String },

    #[error("DeserializeResponseBody: {source}")]
    DeserializeResponseBody {
        #[from]
        source: serde_json::Error,
    },

    #[error("Missing or malformed user field in GraphQL response")]
    UserFieldMissing,
}

pub async fn fetch_repo_summaries(
    token: &str,
    owner: &str,
) -> Result<Vec<RepoNode>, FetchRepoSummariesError> {
    let GitHubGraphQLResult { body, status } = fetch_owner_repositories(token, owner).await?;

    if !status.is_success() {
        return Err(FetchRepoSummariesError::HttpStatus { status, body });
    }

    parse_repo_summaries(&body)
}

/// Walks `data.user.repositories.nodes`, in the order the server returned them.
pub fn parse_repo_summaries(body: &str) -> Result<Vec<RepoNode>, FetchRepoSummariesError> {
    let parsed: GraphQLResponse = serde_json::from_str(body)?;

    let user = parsed
        .data
        .and_then(|data| data.user)
        .ok_or(FetchRepoSummariesError::UserFieldMissing)?;

    Ok(user.repositories.nodes)
}
