//! Blocking GitHub REST client.
//!
//! Only the three calls the initializer needs: repository metadata, user
//! lookup, and topic replacement. Payload structs mirror the REST shapes.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::json;

/// Repository metadata from `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoInfo {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub private: bool,
    pub fork: bool,
    pub is_template: bool,
    pub template_repository: Option<TemplateRepository>,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// The template a repository was generated from, if any.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateRepository {
    pub full_name: String,
}

/// User metadata from `GET /users/{username}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub login: String,
    pub id: u64,
    pub name: Option<String>,
}

pub struct GitHub {
    client: reqwest::blocking::Client,
    base_url: String,
    token: String,
}

impl GitHub {
    /// Build a client for the given token. The API base URL comes from
    /// `GITHUB_API_URL` so GHES workflows keep working.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;

        let base_url = std::env::var("GITHUB_API_URL")
            .unwrap_or_else(|_| "https://api.github.com".to_string());

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    pub fn get_repo(&self, slug: &str) -> Result<RepoInfo> {
        let response = self
            .send(self.client.get(format!("{}/repos/{}", self.base_url, slug)))
            .context("Failed to fetch repository information")?;

        if !response.status().is_success() {
            bail!(
                "GitHub API returned {} for repository {}",
                response.status(),
                slug
            );
        }

        response
            .json()
            .context("Failed to parse repository information JSON")
    }

    pub fn get_user(&self, username: &str) -> Result<UserInfo> {
        let response = self
            .send(
                self.client
                    .get(format!("{}/users/{}", self.base_url, username)),
            )
            .context("Failed to fetch user information")?;

        if !response.status().is_success() {
            bail!(
                "GitHub API returned {} for user {}",
                response.status(),
                username
            );
        }

        response.json().context("Failed to parse user JSON")
    }

    /// Replace the repository's topic list wholesale.
    pub fn replace_topics(&self, slug: &str, names: &[String]) -> Result<()> {
        let response = self
            .send(
                self.client
                    .put(format!("{}/repos/{}/topics", self.base_url, slug))
                    .json(&json!({ "names": names })),
            )
            .context("Failed to update repository topics")?;

        if !response.status().is_success() {
            bail!(
                "GitHub API returned {} when replacing topics",
                response.status()
            );
        }

        Ok(())
    }

    fn send(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::Result<reqwest::blocking::Response> {
        request
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .bearer_auth(&self.token)
            .send()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_info_parses_rest_payload() {
        let payload = r#"{
            "name": "MyPatch",
            "full_name": "someone/MyPatch",
            "description": "A patch",
            "html_url": "https://github.com/someone/MyPatch",
            "private": false,
            "fork": false,
            "is_template": false,
            "template_repository": { "full_name": "szapp/patch-template" },
            "topics": ["gothic", "modding-gothic"]
        }"#;
        let info: RepoInfo = serde_json::from_str(payload).unwrap();
        assert_eq!(info.name, "MyPatch");
        assert_eq!(
            info.template_repository.unwrap().full_name,
            "szapp/patch-template"
        );
        assert_eq!(info.topics.len(), 2);
    }

    #[test]
    fn test_repo_info_tolerates_missing_optionals() {
        let payload = r#"{
            "name": "Bare",
            "description": null,
            "html_url": "https://github.com/someone/Bare",
            "private": true,
            "fork": false,
            "is_template": false,
            "template_repository": null
        }"#;
        let info: RepoInfo = serde_json::from_str(payload).unwrap();
        assert!(info.description.is_none());
        assert!(info.template_repository.is_none());
        assert!(info.topics.is_empty());
    }

    #[test]
    fn test_user_info_parses_rest_payload() {
        let payload = r#"{ "login": "octocat", "id": 583231, "name": "The Octocat" }"#;
        let user: UserInfo = serde_json::from_str(payload).unwrap();
        assert_eq!(user.id, 583231);
        assert_eq!(user.name.as_deref(), Some("The Octocat"));
    }
}
