//! Flattened plain-text rendering of repository details.
//!
//! Produces `repoDetailsText`, the block-per-repository string handed to
//! retrieval-style consumers. Every block starts and ends with a newline and
//! blocks are separated by a blank line, so consumers that split on the
//! exact layout keep working.

use anyhow::Result;
use std::path::Path;

use crate::analyze::analyze;
use crate::input;
use crate::models::RepoDetail;

const BLOCK_SEPARATOR: &str = "\n\n";

/// Render one repository as a text block.
pub fn render_detail_block(detail: &RepoDetail) -> String {
    let topics = if detail.topics.is_empty() {
        "None".to_string()
    } else {
        detail.topics.join(", ")
    };

    format!(
        "\nRepo Name: {}\nDescription: {}\nLanguage: {}\nURL: {}\nUpdated At: {}\nTopics: {}\nREADME Main Idea: {}\n",
        detail.name,
        detail.description,
        detail.language,
        detail.html_url,
        detail.updated_at,
        topics,
        detail.main_idea
    )
}

/// Render all repositories in input order. Empty input renders as "".
pub fn render_details_text(details: &[RepoDetail]) -> String {
    details
        .iter()
        .map(render_detail_block)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

/// Run the details command: print `repoDetailsText` verbatim.
pub fn run_details(input_path: Option<&Path>) -> Result<()> {
    let repos = input::load_items(input_path)?;
    let summary = analyze(&repos, input::owner_login(&repos));
    print!("{}", summary.repo_details_text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(name: &str, topics: &[&str]) -> RepoDetail {
        RepoDetail {
            name: name.to_string(),
            description: "No description provided".to_string(),
            language: "Rust".to_string(),
            html_url: "https://github.com/octocat/demo".to_string(),
            updated_at: "2025-11-01T00:00:00Z".to_string(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
            readme: "No README content".to_string(),
            main_idea: "No main idea available".to_string(),
        }
    }

    #[test]
    fn test_single_block_exact() {
        let text = render_details_text(&[detail("demo", &["cli", "rust"])]);
        assert_eq!(
            text,
            "\nRepo Name: demo\n\
             Description: No description provided\n\
             Language: Rust\n\
             URL: https://github.com/octocat/demo\n\
             Updated At: 2025-11-01T00:00:00Z\n\
             Topics: cli, rust\n\
             README Main Idea: No main idea available\n"
        );
    }

    #[test]
    fn test_empty_topics_render_none() {
        let text = render_details_text(&[detail("demo", &[])]);
        assert!(text.contains("Topics: None"));
    }

    #[test]
    fn test_blocks_joined_with_blank_line() {
        let text = render_details_text(&[detail("a", &[]), detail("b", &[])]);
        assert!(text.contains("README Main Idea: No main idea available\n\n\nRepo Name: b"));
        assert!(text.starts_with("\nRepo Name: a"));
        assert!(text.ends_with("No main idea available\n"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(render_details_text(&[]), "");
    }
}
