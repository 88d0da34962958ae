//! Pipeline stages for name extraction.
//!
//! Each submodule implements exactly one transformation step, so each can
//! be tested on its own and the network stage can be pointed at a stub.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ request ──▶ llm ──▶ parse
//! (URL/path)  (JSON body)  (POST)  (split, filter, dedup)
//! ```
//!
//! 1. [`input`]   — turn a URL, file path or stdin into plain page text
//! 2. [`request`] — wire types of the `generateContent` call
//! 3. [`llm`]     — the only stage with API network I/O
//! 4. [`parse`]   — comma-split the reply fragments into a [`crate::NameList`]

pub mod input;
pub mod llm;
pub mod parse;
pub mod request;
