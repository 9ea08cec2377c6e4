//! Custom serde helpers for the result wire format.

/// Serializes a slice of typed messages as a JSON array of their `Display` strings.
pub mod display_seq {
    use serde::Serializer;
    use std::fmt::Display;

    pub fn serialize<S, T>(items: &[T], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Display,
    {
        serializer.collect_seq(items.iter().map(ToString::to_string))
    }
}
