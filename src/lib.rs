//! # namesift
//!
//! Extract person names from webpages and text with the Gemini API.
//!
//! ## Pipeline Overview
//!
//! ```text
//! URL / file / stdin
//!  │
//!  ├─ 1. Input    fetch the page and reduce HTML to visible text
//!  ├─ 2. Request  instruction prompt + text as one generateContent call
//!  ├─ 3. Parse    split reply fragments on commas, trim, apply the name rule
//!  ├─ 4. Dedup    first occurrence wins, exact match after trimming
//!  └─ 5. Output   NameList → CSV file, comma-joined line, or search links
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use namesift::{extract_from_input, ExtractionConfig, ExtractionOutcome};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads GEMINI_API_KEY / GEMINI_MODEL / GEMINI_BASE_URL
//!     let config = ExtractionConfig::from_env()?;
//!     let outcome = extract_from_input("https://example.org/team", &config).await?;
//!     match outcome {
//!         ExtractionOutcome::Names(names) => println!("{}", namesift::export::copy_line(&names)),
//!         other => eprintln!("{}", other.message()),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `namesift` binary (clap + anyhow + tracing-subscriber + dotenvy) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod names;
pub mod pipeline;
pub mod prompts;
pub mod session;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ExtractionConfig, ExtractionConfigBuilder};
pub use error::{ExtractionFailure, NameSiftError};
pub use extract::{extract, extract_from_input, extract_sync, ExtractionOutcome};
pub use names::{NameList, NameRule};
pub use session::Session;
