//! Single-pass aggregation over a list of repositories.
//!
//! [`analyze`] tallies languages and recent activity, extracts README main
//! ideas, derives per-repository reviews, classifies the overall profile and
//! renders the flattened retrieval text. It is a pure function of its inputs:
//! all accumulators live for the duration of one call.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use indexmap::IndexMap;
use std::path::Path;

use crate::config::Config;
use crate::details::render_details_text;
use crate::input;
use crate::models::{
    AggregateSummary, ProfileStrength, RawRepository, Repository, UNKNOWN_USERNAME,
};
use crate::readme::{extract_readme_main_idea, NO_README};
use crate::review::{build_detail, build_review};

/// Repositories updated strictly after this instant count as recent.
pub fn recency_cutoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

const GOOD_MIN_REPOS: usize = 10;
const GOOD_MIN_RECENT: usize = 3;
const STRONG_MIN_REPOS: usize = 20;
const STRONG_MIN_LANGUAGES: usize = 3;

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse an `updated_at` value as UTC.
///
/// Accepts the ISO-8601 date-time forms: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`,
/// and `YYYY-MM-DDTHH:MM[:SS[.fff]]` followed by `Z`, an offset, or
/// nothing. Missing parts default to the first month/day at midnight and a
/// missing zone means UTC. Returns `None` for anything else.
pub fn parse_updated_at(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    let naive = value.strip_suffix('Z').unwrap_or(value);
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, format) {
            return Some(dt.and_utc());
        }
    }

    parse_calendar_date(value)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`.
fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = value.split('-').collect();
    let widths: &[usize] = match parts.len() {
        1 => &[4],
        2 => &[4, 2],
        3 => &[4, 2, 2],
        _ => return None,
    };
    let well_formed = parts
        .iter()
        .zip(widths)
        .all(|(part, width)| part.len() == *width && part.bytes().all(|b| b.is_ascii_digit()));
    if !well_formed {
        return None;
    }

    let year = parts[0].parse().ok()?;
    let month = parts.get(1).map_or(Some(1), |m| m.parse().ok())?;
    let day = parts.get(2).map_or(Some(1), |d| d.parse().ok())?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Whether `updated_at` is strictly after the recency cutoff.
/// Absent or unparsable values are never recent.
pub fn is_recent(updated_at: Option<&str>) -> bool {
    let Some(raw) = updated_at else {
        return false;
    };
    match parse_updated_at(raw) {
        Some(ts) => ts > recency_cutoff(),
        None => {
            tracing::warn!(updated_at = raw, "unparsable updated_at, treating as not recent");
            false
        }
    }
}

/// Later rules override earlier ones; "Strong" does not require "Good".
pub fn classify_profile(
    total_repos: usize,
    recent_repos: usize,
    distinct_languages: usize,
) -> ProfileStrength {
    let mut strength = ProfileStrength::Weak;
    if total_repos >= GOOD_MIN_REPOS && recent_repos >= GOOD_MIN_RECENT {
        strength = ProfileStrength::Good;
    }
    if total_repos >= STRONG_MIN_REPOS && distinct_languages >= STRONG_MIN_LANGUAGES {
        strength = ProfileStrength::Strong;
    }
    strength
}

/// Summarize `repos` for downstream AI consumption.
///
/// `owner_login` becomes `github_username`; an absent or empty login is
/// reported as "Unknown".
pub fn analyze(repos: &[RawRepository], owner_login: Option<&str>) -> AggregateSummary {
    let mut languages: IndexMap<String, usize> = IndexMap::new();
    let mut recent_repos = 0;
    let mut deterministic_review = Vec::with_capacity(repos.len());
    let mut details = Vec::with_capacity(repos.len());

    for raw in repos {
        let repo = Repository::from(raw);

        if let Some(language) = &repo.language {
            *languages.entry(language.clone()).or_insert(0) += 1;
        }

        let recent = is_recent(raw.updated_at.as_deref());
        if recent {
            recent_repos += 1;
        }

        let extraction = extract_readme_main_idea(raw);
        tracing::debug!(
            repo = %repo.name,
            recent,
            readme = extraction.readme != NO_README,
            "analyzed repository"
        );

        deterministic_review.push(build_review(&repo, &extraction));
        details.push(build_detail(&repo, extraction));
    }

    let profile_strength = classify_profile(repos.len(), recent_repos, languages.len());

    tracing::info!(
        total = repos.len(),
        recent = recent_repos,
        languages = languages.len(),
        profile = %profile_strength,
        "repository analysis complete"
    );

    AggregateSummary {
        github_username: owner_login
            .filter(|login| !login.is_empty())
            .unwrap_or(UNKNOWN_USERNAME)
            .to_string(),
        total_repos: repos.len(),
        recent_repos,
        languages,
        profile_strength,
        deterministic_review,
        repo_details_text: render_details_text(&details),
    }
}

/// Run the analyze command: load the payload and emit the summary as JSON.
///
/// `owner` overrides the login found in the payload. When `output` is
/// `Some`, the JSON is written to that file; otherwise to stdout.
pub fn run_analyze(
    config: &Config,
    input_path: Option<&Path>,
    owner: Option<&str>,
    output: Option<&Path>,
    compact: bool,
) -> Result<()> {
    let repos = input::load_items(input_path)?;

    let owner = owner
        .or(config.input.owner.as_deref())
        .or_else(|| input::owner_login(&repos));
    let summary = analyze(&repos, owner);

    let json = if compact || !config.output.pretty {
        serde_json::to_string(&summary)?
    } else {
        serde_json::to_string_pretty(&summary)?
    };

    match output.or(config.output.path.as_deref()) {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write summary: {}", path.display()))?;
            eprintln!(
                "Analyzed {} repositories ({} recent, profile {}) to {}",
                summary.total_repos,
                summary.recent_repos,
                summary.profile_strength,
                path.display()
            );
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, language: Option<&str>, updated_at: Option<&str>) -> RawRepository {
        RawRepository {
            name: Some(name.to_string()),
            language: language.map(str::to_string),
            updated_at: updated_at.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_input() {
        let summary = analyze(&[], None);
        assert_eq!(summary.github_username, "Unknown");
        assert_eq!(summary.total_repos, 0);
        assert_eq!(summary.recent_repos, 0);
        assert!(summary.languages.is_empty());
        assert_eq!(summary.profile_strength, ProfileStrength::Weak);
        assert!(summary.deterministic_review.is_empty());
        assert_eq!(summary.repo_details_text, "");
    }

    #[test]
    fn test_recency_dates() {
        assert!(is_recent(Some("2025-11-01")));
        assert!(is_recent(Some("2025-10-01T00:00:01Z")));
        assert!(is_recent(Some("2025-10-02T08:30:00")));
        assert!(!is_recent(Some("2025-01-01")));
        assert!(!is_recent(Some("2025-10-01T00:00:00Z")));
        assert!(!is_recent(Some("2025-10-01")));
        assert!(!is_recent(Some("not a date")));
        assert!(!is_recent(Some("")));
        assert!(!is_recent(None));
    }

    #[test]
    fn test_recency_partial_iso_forms() {
        assert!(is_recent(Some("2025-11-01T10:00Z")));
        assert!(is_recent(Some("2025-11-01T10:00")));
        assert!(is_recent(Some("2025-11-01T10:00+02:00")));
        assert!(is_recent(Some("2025-10-01T00:00:01.500+00:00")));
        assert!(is_recent(Some("2025-11")));
        assert!(is_recent(Some("2026")));
        assert!(!is_recent(Some("2025-10")));
        assert!(!is_recent(Some("2025")));
        assert!(!is_recent(Some("2025-10-01T02:00+03:00")));
        assert!(!is_recent(Some("2025-13")));
        assert!(!is_recent(Some("20251")));
    }

    #[test]
    fn test_partial_dates_read_as_utc_midnight() {
        let expected = Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).single();
        assert_eq!(parse_updated_at("2025-11"), expected);
        assert_eq!(parse_updated_at("2025-11-01"), expected);
        assert_eq!(parse_updated_at("2025-11-01T00:00"), expected);
        assert_eq!(
            parse_updated_at("2026"),
            Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).single()
        );
    }

    #[test]
    fn test_offsets_normalized_to_utc() {
        // 2025-10-01T01:00:00+02:00 is 2025-09-30T23:00:00Z
        assert!(!is_recent(Some("2025-10-01T01:00:00+02:00")));
        assert!(is_recent(Some("2025-09-30T23:00:00-02:00")));
    }

    #[test]
    fn test_language_tally_first_seen_order() {
        let repos = vec![
            repo("a", Some("Rust"), None),
            repo("b", Some("Go"), None),
            repo("c", None, None),
            repo("d", Some(""), None),
            repo("e", Some("Rust"), None),
            repo("f", Some("Unknown"), None),
        ];
        let summary = analyze(&repos, None);
        let langs: Vec<(&str, usize)> = summary
            .languages
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
        assert_eq!(langs, vec![("Rust", 2), ("Go", 1), ("Unknown", 1)]);
    }

    #[test]
    fn test_classify_profile() {
        assert_eq!(classify_profile(9, 9, 9), ProfileStrength::Weak);
        assert_eq!(classify_profile(10, 2, 1), ProfileStrength::Weak);
        assert_eq!(classify_profile(10, 3, 1), ProfileStrength::Good);
        assert_eq!(classify_profile(20, 0, 3), ProfileStrength::Strong);
        assert_eq!(classify_profile(20, 5, 2), ProfileStrength::Good);
        assert_eq!(classify_profile(25, 10, 4), ProfileStrength::Strong);
    }

    #[test]
    fn test_owner_login_defaulting() {
        assert_eq!(analyze(&[], Some("octocat")).github_username, "octocat");
        assert_eq!(analyze(&[], Some("")).github_username, "Unknown");
    }

    #[test]
    fn test_review_order_matches_input() {
        let repos: Vec<RawRepository> = (0..5)
            .map(|i| repo(&format!("repo-{}", i), None, None))
            .collect();
        let summary = analyze(&repos, None);
        let names: Vec<&str> = summary
            .deterministic_review
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["repo-0", "repo-1", "repo-2", "repo-3", "repo-4"]);
    }
}
