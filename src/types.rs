use std::collections::{btree_map, BTreeMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::manipulators::insert_value;
use crate::parse::{parse_assignment, parse_key_path};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    // Where the value lands (the left-hand side of the token)
    pub path: KeyPath,
    // Everything after the first `=`, kept verbatim
    pub value: String,
}

impl FromStr for Assignment {
    type Err = Error;

    /// Parses a raw `key=value` token.
    ///
    /// The token is split on its first `=`, so the value may itself contain `=`.
    /// A key without any bracket characters is taken verbatim as a single segment;
    /// otherwise it is tokenized as a bracketed key path.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use jo::Assignment;
    ///
    /// let assignment = "url=http://x?a=b".parse::<Assignment>().unwrap();
    /// assert_eq!(assignment.value(), "http://x?a=b");
    /// assert_eq!(assignment.path().segments(), ["url"]);
    /// ```
    fn from_str(token: &str) -> Result<Self> {
        parse_assignment(token)
    }
}

impl Assignment {
    /// Returns the key path of the parsed token.
    pub fn path(&self) -> &KeyPath {
        &self.path
    }

    /// Returns the scalar value of the parsed token.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Builds a fresh document holding only this assignment.
    pub fn as_document(&self) -> Document {
        let mut document = Document::new();
        self.apply_to(&mut document);
        document
    }

    /// **Assigns** the value into an existing document.
    ///
    /// Whatever sits at the target key is overwritten, and any scalar found on the way
    /// down is replaced by an object. Siblings along the path are left alone.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use jo::{Assignment, Document};
    ///
    /// let mut document = Document::new();
    /// "user=simple".parse::<Assignment>().unwrap().apply_to(&mut document);
    /// "user[name]=John".parse::<Assignment>().unwrap().apply_to(&mut document);
    ///
    /// let user = document.get("user").and_then(|node| node.as_object()).unwrap();
    /// assert_eq!(user.get("name").and_then(|node| node.as_scalar()), Some("John"));
    /// ```
    pub fn apply_to(&self, document: &mut Document) {
        document.assign(&self.path, &self.value);
    }
}

/// An ordered, non-empty list of key segments, e.g. `users[123][name]` is
/// `["users", "123", "name"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// Builds a path from already split segments. Fails with [`PathFault::NoSegments`]
    /// when `segments` is empty.
    pub fn new<I, S>(segments: I) -> std::result::Result<Self, PathFault>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(PathFault::NoSegments);
        }
        Ok(KeyPath(segments))
    }

    /// A path made of one verbatim key. Used for keys without bracket notation,
    /// which may be any string, including the empty one.
    pub fn single(key: impl Into<String>) -> Self {
        KeyPath(vec![key.into()])
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a key path has at least one segment.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for KeyPath {
    type Err = PathFault;

    fn from_str(input: &str) -> std::result::Result<Self, Self::Err> {
        parse_key_path(input)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (head, tail) = self.0.split_first().ok_or(fmt::Error)?;
        f.write_str(head)?;
        for segment in tail {
            write!(f, "[{segment}]")?;
        }
        Ok(())
    }
}

/// One value in a [`Document`]: either a leaf string or a nested document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Scalar(String),
    Object(Document),
}

impl Node {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Node::Scalar(value) => Some(value),
            Node::Object(_) => None,
        }
    }

    pub fn as_object(&self) -> Option<&Document> {
        match self {
            Node::Scalar(_) => None,
            Node::Object(document) => Some(document),
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Scalar(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Scalar(value)
    }
}

impl From<Document> for Node {
    fn from(document: Document) -> Self {
        Node::Object(document)
    }
}

/// The nested structure built from a batch of tokens.
///
/// Keys are kept sorted, so iteration and serialization order never depends on
/// the order assignments were made in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub(crate) entries: BTreeMap<String, Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// **Assigns** `value` at `path`, last write wins.
    ///
    /// The leaf key is overwritten whatever its previous shape. Intermediate keys
    /// holding a scalar are replaced by empty documents; intermediate documents are
    /// descended into, so writes under a common parent accumulate.
    pub fn assign(&mut self, path: &KeyPath, value: impl Into<String>) {
        insert_value(self, path.segments(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in lexicographic key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Node> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Node);
    type IntoIter = btree_map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<Node>> FromIterator<(K, V)> for Document {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Document {
            entries: iter
                .into_iter()
                .map(|(key, node)| (key.into(), node.into()))
                .collect(),
        }
    }
}

/// The specific bracket violation behind a malformed key path.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathFault {
    #[error("nested brackets not properly closed")]
    NestedBrackets,
    #[error("closing bracket without opening bracket")]
    UnmatchedClose,
    #[error("empty key in brackets")]
    EmptySegment,
    #[error("unclosed bracket")]
    UnclosedBracket,
    #[error("no keys found")]
    NoSegments,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument format '{token}'. Expected 'key=value' or 'key[subkey]=value'")]
    InvalidFormat { token: String },
    #[error("invalid key path '{path}' in argument '{token}': {reason}")]
    MalformedPath {
        token: String,
        path: String,
        reason: PathFault,
    },
    #[error("error marshalling JSON: {0}")]
    SerializationFailure(String),
    #[error("error reading input: {0}")]
    Io(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationFailure(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
