use crate::error::{FolioError, Result};
use crate::github::types::RepositoryRecord;
use async_trait::async_trait;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use serde::Serialize;

/// Anything that can list an account's repositories, newest update first.
#[async_trait]
pub trait RepoSource: Send + Sync {
    async fn list_repos(&self) -> Result<Vec<RepositoryRecord>>;
}

#[derive(Serialize)]
struct ListParams {
    sort: &'static str,
    direction: &'static str,
}

const LIST_PARAMS: ListParams = ListParams {
    sort: "updated",
    direction: "desc",
};

#[derive(Clone)]
pub struct GitHubClient {
    octo: Octocrab,
    account: String,
}

impl GitHubClient {
    pub fn new(api_base: &str, account: &str) -> Result<Self> {
        if account.trim().is_empty() {
            return Err(FolioError::Config("account must not be empty".to_string()));
        }

        let octo = Octocrab::builder()
            .base_uri(api_base)
            .map_err(|e| FolioError::Config(format!("invalid api_base {api_base}: {e}")))?
            .add_retry_config(RetryConfig::None)
            .build()
            .map_err(|e| FolioError::Transport(e.to_string()))?;

        Ok(Self {
            octo,
            account: account.to_string(),
        })
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    fn route(&self) -> String {
        format!("/users/{}/repos", self.account)
    }
}

#[async_trait]
impl RepoSource for GitHubClient {
    async fn list_repos(&self) -> Result<Vec<RepositoryRecord>> {
        self.octo
            .get::<Vec<RepositoryRecord>, _, _>(self.route(), Some(&LIST_PARAMS))
            .await
            .map_err(classify)
    }
}

fn classify(err: octocrab::Error) -> FolioError {
    match err {
        octocrab::Error::Serde { .. } | octocrab::Error::Json { .. } => {
            FolioError::Format(err.to_string())
        }
        other => FolioError::Transport(other.to_string()),
    }
}

/// Upstream page listing every repository of the account.
pub fn profile_url(account: &str) -> String {
    format!("https://github.com/{account}?tab=repositories")
}
