//! README detection and main-idea extraction.
//!
//! The README is located case-insensitively among the keys of a repository's
//! `files` map. Its "main idea" is the first three non-blank lines, trimmed
//! and joined with single spaces. Missing data never fails; it degrades to
//! fixed sentinel strings instead.

use anyhow::Result;
use std::path::Path;

use crate::input;
use crate::models::{RawRepository, ReadmeExtraction, RepoFile};

/// Readme text reported when no README file is present.
pub const NO_README: &str = "No README content";
/// Main idea reported when no README file is present.
pub const NO_MAIN_IDEA: &str = "No main idea available";
/// Main idea reported when a README exists but has no non-blank lines.
pub const NO_MAIN_IDEA_DETECTED: &str = "README exists but no main idea detected";

const README_NAME: &str = "readme.md";
const MAIN_IDEA_LINES: usize = 3;

/// Find the README in `repo.files` and summarize it.
///
/// When several keys fold to `readme.md`, the first one in the map's
/// source order wins.
pub fn extract_readme_main_idea(repo: &RawRepository) -> ReadmeExtraction {
    let Some(file) = find_readme(repo) else {
        return ReadmeExtraction {
            readme: NO_README.to_string(),
            main_idea: NO_MAIN_IDEA.to_string(),
        };
    };

    let content = file
        .and_then(|f| f.content.as_deref())
        .unwrap_or_default();

    let main_idea = content
        .split('\n')
        .map(trim_line)
        .filter(|line| !line.is_empty())
        .take(MAIN_IDEA_LINES)
        .collect::<Vec<_>>()
        .join(" ");

    ReadmeExtraction {
        readme: content.to_string(),
        main_idea: if main_idea.is_empty() {
            NO_MAIN_IDEA_DETECTED.to_string()
        } else {
            main_idea
        },
    }
}

/// Trims whitespace and byte-order marks from both ends.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Outer `None`: no README key. Inner `None`: README key mapped to null.
fn find_readme(repo: &RawRepository) -> Option<Option<&RepoFile>> {
    repo.files
        .as_ref()?
        .iter()
        .find(|(name, _)| name.to_lowercase() == README_NAME)
        .map(|(_, file)| file.as_ref())
}

/// Run the readme command: print each repository's README status and main idea.
pub fn run_readme(input_path: Option<&Path>) -> Result<()> {
    let repos = input::load_items(input_path)?;

    if repos.is_empty() {
        println!("No repositories.");
        return Ok(());
    }

    println!("{:<32} {:<8} MAIN IDEA", "REPOSITORY", "README");
    println!("{}", "-".repeat(80));

    for repo in &repos {
        let extraction = extract_readme_main_idea(repo);
        let status = if extraction.readme == NO_README {
            "missing"
        } else if extraction.readme.is_empty() {
            "empty"
        } else {
            "ok"
        };
        println!(
            "{:<32} {:<8} {}",
            repo.name.as_deref().unwrap_or_default(),
            status,
            extraction.main_idea
        );
    }

    Ok(())
}
