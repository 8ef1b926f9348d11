use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::errors::{Error, Result};

/// Comma-separated list of every variant's canonical name, for error messages.
pub fn valid_csv<T>() -> String
where
    T: IntoEnumIterator + AsRef<str> + Sized,
{
    T::iter()
        .map(|v| v.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a strum enum, turning a miss into an `InvalidArguments` error that
/// lists the accepted spellings.
pub fn parse_variant<T>(raw: &str, what: &str) -> Result<T>
where
    T: FromStr + IntoEnumIterator + AsRef<str>,
{
    T::from_str(raw.trim()).map_err(|_| {
        Error::invalid_arguments(format!(
            "Unsupported {what}: '{}'. Valid values: {}",
            raw.trim(),
            valid_csv::<T>()
        ))
    })
}
