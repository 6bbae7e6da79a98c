use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of an aggregate as it travels over the wire and through routes
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the identifier for URLs and form state
    fn as_string(&self) -> String;

    /// Parse an identifier taken from a route or a form
    fn from_string(s: &str) -> Result<Self, String>;
}
