use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::archive::ARCHIVE_EXTENSION;
use crate::errors::{Error, Result};

// Every occurrence is stripped, not only the volume suffix.
static PART_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"part\d+").unwrap());

/// Filenames believed to make up one logical archive.
///
/// All members share the same [`identity_key`]. Membership is decided from
/// the names alone; file contents are never inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveGroup {
    key: String,
    members: Vec<String>,
}

impl ArchiveGroup {
    pub fn new(key: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            key: key.into(),
            members,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn describe(&self) -> String {
        self.members.join(", ")
    }
}

/// The name with every `part<digits>` token removed.
///
/// `foo.part01.rar` and `foo.part2.rar` both map to `foo..rar`.
pub fn identity_key(name: &str) -> String {
    PART_TOKEN.replace_all(name, "").into_owned()
}

/// Cluster archive names by identity key.
///
/// Names without the archive extension are dropped. Groups come out in the
/// order their key first appears, members in input order.
pub fn group_parts<I, S>(names: I) -> Vec<ArchiveGroup>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<ArchiveGroup> = Vec::new();

    for name in names {
        let name = name.into();
        if !name.ends_with(ARCHIVE_EXTENSION) {
            continue;
        }
        let key = identity_key(&name);
        match index.get(&key) {
            Some(&i) => groups[i].members.push(name),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(ArchiveGroup::new(key, vec![name]));
            }
        }
    }
    groups
}

/// What a directory scan found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    /// Candidate file names, sorted.
    pub names: Vec<String>,
    /// Archive-looking names that are not valid UTF-8 and were left out.
    pub skipped: Vec<OsString>,
}

/// List the entries of `dir` (non-recursive) that are not directories,
/// sorted by name.
///
/// Symlinks are followed, so a link to a directory is skipped like the
/// directory itself.
pub fn scan_directory(dir: &Path) -> Result<DirectoryListing> {
    let scan_err = |source| Error::DirectoryScan {
        path: dir.to_path_buf(),
        source,
    };

    let mut listing = DirectoryListing::default();
    for entry in fs::read_dir(dir).map_err(scan_err)? {
        let entry = entry.map_err(scan_err)?;
        if entry.path().is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => listing.names.push(name),
            Err(raw) => {
                if raw.to_string_lossy().ends_with(ARCHIVE_EXTENSION) {
                    listing.skipped.push(raw);
                }
            }
        }
    }
    listing.names.sort();
    listing.skipped.sort();
    Ok(listing)
}
