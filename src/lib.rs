//! # Repo Digest
//!
//! Deterministic pre-processing of repository metadata for AI tools.
//!
//! Repo Digest takes the repository list fetched from a source-control
//! hosting API (optionally augmented with file contents) and normalizes it
//! into structured summaries, so every fact a language model later sees is
//! taken literally from repository data rather than inferred.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────────────────┐   ┌──────────────────┐
//! │  Fetch      │──▶│  analyze()               │──▶│ AggregateSummary │
//! │  (upstream) │   │  README │ review │ tally │   │ JSON + text blob │
//! └─────────────┘   └──────────────────────────┘   └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! digest analyze repos.json             # summary JSON on stdout
//! digest details repos.json             # flattened text for retrieval
//! digest readme repos.json              # README main ideas per repository
//! cat repos.json | digest analyze --compact
//! ```
//!
//! ## Library use
//!
//! ```rust
//! use repo_digest::analyze::analyze;
//! use repo_digest::input::{owner_login, parse_items};
//!
//! let repos = parse_items(r#"[{"name": "demo", "language": "Rust"}]"#).unwrap();
//! let summary = analyze(&repos, owner_login(&repos));
//! assert_eq!(summary.total_repos, 1);
//! assert_eq!(summary.languages["Rust"], 1);
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Input, review and summary types |
//! | [`input`] | Payload loading and owner discovery |
//! | [`readme`] | README detection and main-idea extraction |
//! | [`review`] | Strengths, weaknesses and per-repository records |
//! | [`analyze`] | Aggregation and profile classification |
//! | [`details`] | Flattened retrieval text |
//! | [`config`] | TOML configuration parsing |

pub mod analyze;
pub mod config;
pub mod details;
pub mod input;
pub mod models;
pub mod readme;
pub mod review;
