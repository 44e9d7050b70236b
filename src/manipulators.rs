use log::{debug, trace};

use crate::types::{Document, Node};

/// Inserts a scalar into the document at the specified segments.
///
/// # Arguments
///
/// * `document` - The document to insert into.
/// * `segments` - The key segments describing where to insert.
/// * `value` - The scalar to insert.
pub fn insert_value(document: &mut Document, segments: &[String], value: String) {
    let Some((leaf, parents)) = segments.split_last() else {
        return;
    };

    let mut current = document;
    for segment in parents {
        current = current
            .entries
            .entry(segment.clone())
            .or_insert_with(|| Node::Object(Document::new()))
            .make_object(segment);
    }

    if let Some(previous) = current.entries.insert(leaf.clone(), Node::Scalar(value)) {
        if previous.is_object() {
            debug!("object at {leaf:?} replaced by a scalar");
        } else {
            trace!("scalar at {leaf:?} overwritten");
        }
    }
}

impl Node {
    // Turns this node into an object, dropping a scalar if one is there.
    fn make_object(&mut self, key: &str) -> &mut Document {
        if let Node::Scalar(previous) = self {
            debug!("scalar {previous:?} at {key:?} replaced by an object");
            *self = Node::Object(Document::new());
        }
        match self {
            Node::Object(document) => document,
            Node::Scalar(_) => unreachable!("scalars are replaced above"),
        }
    }
}
