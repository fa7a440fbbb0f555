use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Prefix that marks a response slot filled with an error instead of model output.
pub const ERROR_MARKER: &str = "❌ Error: ";

/// Build the in-band error string stored in place of a failed response.
pub fn error_response(err: &impl fmt::Display) -> String {
    format!("{}{}", ERROR_MARKER, err)
}

pub fn is_error_response(text: &str) -> bool {
    text.starts_with(ERROR_MARKER)
}

/// One saved prompt and the response of every model it was sent to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub prompt: String,
    pub responses: Responses,
}

impl ComparisonEntry {
    pub fn new(prompt: impl Into<String>, responses: Responses) -> Self {
        Self { prompt: prompt.into(), responses }
    }

    /// Case-insensitive containment against the prompt or any response.
    /// `needle` must already be lowercased.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        self.prompt.to_lowercase().contains(needle)
            || self.responses.iter().any(|(_, text)| text.to_lowercase().contains(needle))
    }
}

/// Label to response mapping that keeps insertion order.
///
/// Serialized as a JSON object whose key order is the display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Responses(Vec<(String, String)>);

impl Responses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a response. An existing label keeps its position and takes the new text.
    pub fn insert(&mut self, label: impl Into<String>, text: impl Into<String>) {
        let label = label.into();
        let text = text.into();
        match self.0.iter_mut().find(|(l, _)| *l == label) {
            Some(slot) => slot.1 = text,
            None => self.0.push((label, text)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.iter().find(|(l, _)| l == label).map(|(_, t)| t.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(l, t)| (l.as_str(), t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.0.iter().filter(|(_, t)| is_error_response(t)).count()
    }
}

impl<L: Into<String>, T: Into<String>> FromIterator<(L, T)> for Responses {
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        let mut responses = Responses::new();
        for (label, text) in iter {
            responses.insert(label, text);
        }
        responses
    }
}

impl Serialize for Responses {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, text) in &self.0 {
            map.serialize_entry(label, text)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Responses {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResponsesVisitor;

        impl<'de> Visitor<'de> for ResponsesVisitor {
            type Value = Responses;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of model label to response text")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Responses, A::Error> {
                let mut responses = Responses::new();
                while let Some((label, text)) = access.next_entry::<String, String>()? {
                    responses.insert(label, text);
                }
                Ok(responses)
            }
        }

        deserializer.deserialize_map(ResponsesVisitor)
    }
}
