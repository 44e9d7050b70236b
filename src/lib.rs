//! # jo
//!
//! A Rust library to turn `key=value` arguments into JSON, with bracket notation for nesting.
//!
//! Sometimes you want to hand a small JSON object to a program without writing JSON by hand.
//! This library takes a list of tokens like `name=John` or `user[address][city]=Boston`,
//! assembles them into one nested document, and renders it as pretty-printed JSON.
//!
//! ## Features
//!
//! - **Nested Objects:** Bracket notation to any depth (e.g., `users[123][name]=Ann`).
//! - **Strings Only:** Values are never coerced; `age=30` stays the string `"30"`.
//! - **Last Write Wins:** Later tokens override earlier ones, whatever their shape.
//! - **Canonical Output:** Keys are sorted at every level, so the output never depends on the
//!   order the tokens were given in.
//!
//! ## Examples
//!
//! ### Basic usage:
//!
//! ```rust
//! use serde_json::json;
//!
//! let document = jo::process(["name=John", "user[age]=30", "user[city]=Boston"]).unwrap();
//! let json_output = jo::to_string(&document).unwrap();
//!
//! let parsed: serde_json::Value = serde_json::from_str(&json_output).unwrap();
//! assert_eq!(parsed, json!({
//!     "name": "John",
//!     "user": {
//!         "age": "30",
//!         "city": "Boston"
//!     }
//! }));
//! ```
//!
//! ### Overriding
//!
//! A scalar followed by a nested assignment under the same key is replaced by an object,
//! and the other way around:
//!
//! ```rust
//! use jo::Node;
//!
//! let document = jo::process(["user=simple", "user[name]=John"]).unwrap();
//! assert!(document.get("user").is_some_and(Node::is_object));
//!
//! let document = jo::process(["user[name]=John", "user=simple"]).unwrap();
//! assert_eq!(document.get("user").and_then(Node::as_scalar), Some("simple"));
//! ```
//!
//! ### Values containing `=`
//!
//! Only the first `=` separates key and value:
//!
//! ```rust
//! let document = jo::process(["url=http://x?a=b"]).unwrap();
//! assert_eq!(jo::to_string(&document).unwrap(), "{\n  \"url\": \"http://x?a=b\"\n}");
//! ```
//!
//! ### Malformed key paths
//!
//! ```rust
//! use jo::{Error, PathFault};
//!
//! let err = jo::process(["a[b=v"]).unwrap_err();
//! assert!(matches!(err, Error::MalformedPath { reason: PathFault::UnclosedBracket, .. }));
//! ```

mod input;
mod manipulators;
mod options;
mod parse;
mod ser;
mod types;

pub use input::{read_tokens, split_valid};
pub use manipulators::insert_value;
pub use options::Options;
pub use parse::{parse_assignment, parse_key_path};
pub use ser::{to_string, to_string_with_options, to_writer};
pub use types::{Assignment, Document, Error, KeyPath, Node, PathFault, Result};

use log::debug;

/// Builds a document from raw tokens, applied strictly in order.
///
/// Stops at the first token that has no `=` or whose key path is malformed; no
/// partial document is returned.
///
/// ## Arguments
///
/// * `tokens` - The raw `key=value` tokens
///
/// ## Returns
///
/// Returns the finished `Document`, or the first `Error` encountered.
pub fn process<I, S>(tokens: I) -> Result<Document>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut document = Document::new();
    let mut applied = 0usize;
    for token in tokens {
        let assignment: Assignment = token.as_ref().parse()?;
        assignment.apply_to(&mut document);
        applied += 1;
    }
    debug!(
        "applied {applied} assignments, {} top-level keys",
        document.len()
    );
    Ok(document)
}
