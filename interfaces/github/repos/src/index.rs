use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct GitHubGraphQLResult {
    pub body: String,
    pub status: StatusCode,
}

/// GraphQL envelope; `data` is null when the query itself failed.
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse {
    pub data: Option<ResponseData>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseData {
    pub user: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
pub struct UserNode {
    pub repositories: RepositoryConnection,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryConnection {
    pub nodes: Vec<RepoNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoNode {
    pub name: String,
    pub description: Option<String>,
    pub stargazer_count: u32,
    pub primary_language: Option<LanguageNode>,
    pub pushed_at: DateTime<Utc>,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageNode {
    pub name: String,
}

pub async fn fetch_owner_repositories(
    token: &str,
    owner: &str,
) -> Result<GitHubGraphQLResult, FetchOwnerRepositoriesError> {
    let graphql_query = r#"
        query ownerRepositories($owner: String!) {
            user(login: $owner) {
                repositories(first: 100, privacy: PUBLIC, ownerAffiliations: OWNER, isFork: false) {
                    nodes {
                        name
                        description
                        stargazerCount
                        primaryLanguage {
                            name
                        }
                        pushedAt
                        url
                    }
                }
            }
        }
    "#;

    let payload = serde_json::json!({
        "query": graphql_query,
        "variables": {
            "owner": owner,
        }
    });

    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|source| FetchOwnerRepositoriesError::ClientBuild { source })?;

    let response = client
        .post(GITHUB_GRAPHQL_URL)
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .header("User-Agent", "rust-client")
        .json(&payload)
        .send()
        .await
        .map_err(|source| FetchOwnerRepositoriesError::RequestSend { source })?;

    let status = response.status();

    let body = response
        .text()
        .await
        .map_err(|source| FetchOwnerRepositoriesError::ResponseRead { source })?;

    Ok(GitHubGraphQLResult { body, status })
}

#[derive(Debug, Error)]
pub enum FetchOwnerRepositoriesError {
    #[error("ClientBuild: {source}")]
    ClientBuild {
        source: reqwest::Error,
    },

    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },
}
