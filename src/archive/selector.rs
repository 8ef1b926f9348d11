use crate::archive::ArchiveGroup;
use crate::errors::{Error, Result};

/// Marker looked for in multi-part groups. Plain substring match, so
/// `part10` and `part11` qualify as well.
const FIRST_PART: &str = "part1";

/// Pick the file the extraction tool is invoked on.
///
/// A single member is its own entry. Otherwise the first member whose name
/// contains `part1` wins; the tool finds the remaining volumes itself.
pub fn select_entry(group: &ArchiveGroup) -> Result<&str> {
    match group.members() {
        [] => Err(Error::NoEntryFound {
            group: group.key().to_string(),
        }),
        [only] => Ok(only.as_str()),
        members => members
            .iter()
            .find(|m| m.contains(FIRST_PART))
            .map(String::as_str)
            .ok_or_else(|| Error::NoEntryFound {
                group: group.describe(),
            }),
    }
}
