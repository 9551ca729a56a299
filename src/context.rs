//! Patch context: repository metadata, the triggering user, and the rules
//! the repository name and description have to satisfy.
//!
//! The repository name doubles as the patch name and ends up in file names
//! and Daedalus symbol names, so its character rules are strict. The
//! description lands in the VDF comment and the in-game console.

use anyhow::Result;
use regex::Regex;

use crate::github::GitHub;
use crate::report::{Fault, Report};

/// Everything about the target repository a run needs besides the selections.
#[derive(Debug, Clone)]
pub struct PatchContext {
    /// Patch name (= repository name).
    pub name: String,
    /// Patch description (= repository description).
    pub description: String,
    /// Repository HTML URL.
    pub url: String,
    /// `owner/repo` slug.
    pub repo: String,
    /// Current repository topics, lowercased.
    pub topics: Vec<String>,
    /// Login of the user who triggered the initialization.
    pub username: String,
    /// Display name, falling back to the login.
    pub username_full: String,
    /// Noreply address used for the initial commit.
    pub user_email: String,
}

/// The template repository this initializer belongs to, as `owner/repo`.
///
/// Derived from the crate's own repository metadata; `PATCH_TEMPLATE_REPO`
/// overrides it for forks of the template.
pub fn template_repo() -> Result<String> {
    if let Ok(slug) = std::env::var("PATCH_TEMPLATE_REPO") {
        return Ok(slug);
    }
    parse_slug(env!("CARGO_PKG_REPOSITORY")).ok_or_else(|| {
        Fault::new(
            "Missing package metadata",
            "The template repository metadata could not be accessed. This should not \
             have happened. Please try again. If the error persists, please report it. \
             Please note that this process only works from the original template \
             repository.",
        )
        .into()
    })
}

/// URL of the template repository.
pub fn template_repo_url() -> String {
    env!("CARGO_PKG_REPOSITORY").to_string()
}

/// Extract `owner/repo` from a repository URL.
fn parse_slug(url: &str) -> Option<String> {
    let cleaned = url
        .trim()
        .strip_prefix("git+")
        .unwrap_or(url.trim())
        .trim_end_matches(".git")
        .trim_end_matches('/');
    let mut parts = cleaned.rsplitn(3, '/');
    let repo = parts.next()?;
    let owner = parts.next()?;
    // Anything before owner must exist (scheme/host), otherwise the URL was
    // just "owner/repo" with nothing to anchor it.
    parts.next()?;
    if owner.is_empty() || repo.is_empty() || owner.contains(':') {
        return None;
    }
    Some(format!("{owner}/{repo}"))
}

/// Assemble the patch context from the workflow environment and the API.
///
/// Fails hard when the repository is a fork, was not generated from the
/// template, or is itself a template.
pub fn gather(github: &GitHub, template_repo: &str) -> Result<PatchContext> {
    let slug = std::env::var("GITHUB_REPOSITORY").map_err(|_| {
        Fault::new(
            "Repository context not available",
            "Basic information about the repository could not be accessed. \
             Please try again later",
        )
    })?;

    let repo = github.get_repo(&slug).map_err(|_| {
        Fault::new(
            "Repository information not available",
            "Basic information about the repository is invalid. Please try again later",
        )
    })?;

    if repo.fork {
        return Err(Fault::new(
            "Repository must not be a fork",
            format!(
                "The repository must not be a fork of the template repository. Please \
                 create a new repository, generated from the template {template_repo}."
            ),
        )
        .into());
    }
    let generated_from_template = repo
        .template_repository
        .as_ref()
        .is_some_and(|t| t.full_name == template_repo);
    if !repo.private && !generated_from_template {
        return Err(Fault::new(
            "Repository must be generated from the official template",
            format!(
                "The repository must be generated from the official template \
                 repository. Please create a new repository, generated from the \
                 template {template_repo}."
            ),
        )
        .into());
    }
    if repo.is_template {
        return Err(Fault::new(
            "Repository must not be a template",
            "The repository must not be a template repository. Please change the \
             settings of this repository and try again.",
        )
        .into());
    }

    let username = std::env::var("GITHUB_TRIGGERING_ACTOR")
        .or_else(|_| std::env::var("GITHUB_ACTOR"))
        .map_err(|_| {
            Fault::new(
                "Repository context not available",
                "The triggering user could not be determined. Please try again later",
            )
        })?;

    let user = github.get_user(&username)?;
    let username_full = user.name.clone().unwrap_or_else(|| username.clone());
    let user_email = format!("{}+{}@users.noreply.github.com", user.id, username);

    Ok(PatchContext {
        name: repo.name,
        description: repo.description.unwrap_or_default(),
        url: repo.html_url,
        repo: slug,
        topics: repo.topics.iter().map(|t| t.to_lowercase()).collect(),
        username,
        username_full,
        user_email,
    })
}

/// Patch-name rules. All violations are collected.
pub fn check_patch_name(name: &str, report: &mut Report) {
    let details = "The repository name is used as the name of the patch. The patch will \
                   be identified by this name and it determines the name of the VDF. \
                   Allowed are alphanumerical characters [0-9a-zA-Z_] only, not starting \
                   with a digit with a maximum length of 60 characters";
    if name.len() > 60 {
        report.error("The patch name may not exceed 60 characters", details);
    }
    if name.is_empty() {
        report.error("The patch name may not be empty", details);
    }
    if regex(r"^\d").is_match(name) {
        report.error("The patch name may not start with a digit", details);
    }
    if !regex(r"^[_a-z0-9A-Z]*$").is_match(name) {
        report.error(
            "The patch name may only contain characters from `0-9a-zA-Z_`",
            details,
        );
    }
}

/// Description rules. `%%N` markers count as line breaks, not characters.
pub fn check_patch_description(description: &str, report: &mut Report) {
    let details = "The repository description is used as a brief sentence describing the \
                   patch. It serves as basic information for players in the ingame \
                   console and inside the VDF. Maximum length is 250 characters. Illegal \
                   characters: ><|& You may use %%N for line breaks. No more than three \
                   lines are supported.";
    let num_breaks = regex(r"%%N").find_iter(description).count();
    if description.chars().count() - num_breaks > 254 {
        report.error("The patch description may not exceed 254 characters", details);
    }
    if regex(r"[><|&]").is_match(description) {
        report.error(
            "The patch description may not contain the characters `><|&`",
            details,
        );
    }
    if num_breaks > 3 {
        report.error(
            "The patch description may not contain more than 3 line breaks (%%N)",
            details,
        );
    }
}

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slug_variants() {
        assert_eq!(
            parse_slug("https://github.com/szapp/patch-template").as_deref(),
            Some("szapp/patch-template")
        );
        assert_eq!(
            parse_slug("git+https://github.com/szapp/patch-template.git").as_deref(),
            Some("szapp/patch-template")
        );
        assert_eq!(parse_slug("not-a-url"), None);
    }

    #[test]
    fn test_valid_patch_name() {
        let mut report = Report::new();
        check_patch_name("My_Patch01", &mut report);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_patch_name_rules_aggregate() {
        // Starts with a digit AND contains an illegal character.
        let mut report = Report::new();
        check_patch_name("1Bad-Name", &mut report);
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn test_patch_name_empty() {
        let mut report = Report::new();
        check_patch_name("", &mut report);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].summary, "The patch name may not be empty");
    }

    #[test]
    fn test_patch_name_too_long() {
        let mut report = Report::new();
        check_patch_name(&"a".repeat(61), &mut report);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.errors[0].summary,
            "The patch name may not exceed 60 characters"
        );
    }

    #[test]
    fn test_description_length_ignores_break_markers() {
        // 255 chars minus one %%N marker (3 chars) leaves 252 visible: fine.
        let description = format!("{}%%N{}", "a".repeat(126), "b".repeat(126));
        let mut report = Report::new();
        check_patch_description(&description, &mut report);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_description_too_long() {
        let mut report = Report::new();
        check_patch_description(&"a".repeat(255), &mut report);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_description_illegal_characters() {
        let mut report = Report::new();
        check_patch_description("this & that", &mut report);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.errors[0].summary,
            "The patch description may not contain the characters `><|&`"
        );
    }

    #[test]
    fn test_description_too_many_breaks() {
        let mut report = Report::new();
        check_patch_description("a%%Nb%%Nc%%Nd%%Ne", &mut report);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.errors[0].summary,
            "The patch description may not contain more than 3 line breaks (%%N)"
        );
    }
}
