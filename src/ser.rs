use std::io::Write;

use serde::Serialize;

use crate::options::Options;
use crate::types::{Document, Error, Result};

/// Renders the document as two-space indented JSON.
///
/// Keys come out in lexicographic order at every level and every scalar is a JSON
/// string. An empty document renders as `{}`.
///
/// ## Example
///
/// ```rust
/// let document = jo::process(["b=1", "a[y]=2", "a[x]=3"]).unwrap();
/// let json = jo::to_string(&document).unwrap();
///
/// assert_eq!(
///     json,
///     "{\n  \"a\": {\n    \"x\": \"3\",\n    \"y\": \"2\"\n  },\n  \"b\": \"1\"\n}"
/// );
/// ```
pub fn to_string(document: &Document) -> Result<String> {
    to_string_with_options(document, &Options::default())
}

pub fn to_string_with_options(document: &Document, options: &Options) -> Result<String> {
    let mut buf = Vec::new();
    to_writer(&mut buf, document, options)?;
    String::from_utf8(buf).map_err(|err| Error::SerializationFailure(err.to_string()))
}

/// Writes the document as JSON into `writer`, without a trailing newline.
pub fn to_writer<W: Write>(writer: W, document: &Document, options: &Options) -> Result<()> {
    if options.indent == 0 {
        serde_json::to_writer(writer, document)?;
        return Ok(());
    }

    let indent = vec![b' '; options.indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    document.serialize(&mut serializer)?;
    Ok(())
}
