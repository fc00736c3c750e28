//! Per-repository strengths, weaknesses and record assembly.
//!
//! Each rule is checked independently; a repository can collect any mix of
//! strengths and weaknesses.
//!
//! Descriptions are compared against [`NO_DESCRIPTION`] after defaulting, so
//! a description literally set to that sentinel reads as missing. Reviews
//! consumed downstream depend on that output, so it is kept as is.

use crate::models::{
    ReadmeExtraction, RepoDetail, Repository, ReviewRecord, NO_DESCRIPTION, UNKNOWN_LANGUAGE,
};
use crate::readme::{NO_MAIN_IDEA, NO_README};

pub fn derive_strengths(repo: &Repository, extraction: &ReadmeExtraction) -> Vec<String> {
    let mut strengths = Vec::new();

    if let Some(language) = repo.language.as_deref().filter(|l| *l != UNKNOWN_LANGUAGE) {
        strengths.push(format!("Uses {}", language));
    }
    if repo.description != NO_DESCRIPTION {
        strengths.push(format!("Has description: \"{}\"", repo.description));
    }
    if has_readme(extraction) {
        strengths.push("Has README".to_string());
    }
    if extraction.main_idea != NO_MAIN_IDEA {
        strengths.push(format!("Main idea: {}", extraction.main_idea));
    }

    strengths
}

pub fn derive_weaknesses(repo: &Repository, extraction: &ReadmeExtraction) -> Vec<String> {
    let mut weaknesses = Vec::new();

    if repo.description == NO_DESCRIPTION {
        weaknesses.push("Missing description".to_string());
    }
    if !has_readme(extraction) {
        weaknesses.push("Missing README".to_string());
    }

    weaknesses
}

/// An empty README body counts as missing.
fn has_readme(extraction: &ReadmeExtraction) -> bool {
    !extraction.readme.is_empty() && extraction.readme != NO_README
}

pub fn build_review(repo: &Repository, extraction: &ReadmeExtraction) -> ReviewRecord {
    ReviewRecord {
        name: repo.name.clone(),
        description: repo.description.clone(),
        language: repo.display_language().to_string(),
        main_idea: extraction.main_idea.clone(),
        strengths: derive_strengths(repo, extraction),
        weaknesses: derive_weaknesses(repo, extraction),
        html_url: repo.html_url.clone(),
        updated_at: repo.updated_at.clone(),
        topics: repo.topics.clone(),
    }
}

pub fn build_detail(repo: &Repository, extraction: ReadmeExtraction) -> RepoDetail {
    RepoDetail {
        name: repo.name.clone(),
        description: repo.description.clone(),
        language: repo.display_language().to_string(),
        html_url: repo.html_url.clone(),
        updated_at: repo.updated_at.clone(),
        topics: repo.topics.clone(),
        readme: extraction.readme,
        main_idea: extraction.main_idea,
    }
}
