use serde::Serialize;
use std::collections::BTreeMap;

/// Value of a single named field within a log event.
///
/// Events are one level deep: a field is a string, a list of strings, or a
/// flat string-to-string map. Map keys are held sorted; only the top-level
/// field order carries meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Str(String),
    List(Vec<String>),
    Map(BTreeMap<String, String>),
}
