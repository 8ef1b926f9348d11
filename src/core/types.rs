use crate::errors::Result;
use crate::extensions::enums::parse_variant;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// How much the run prints to the console. Ordered so that
/// `Quiet < ErrorsOnly < Full`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
)]
#[strum(ascii_case_insensitive)]
pub enum Verbosity {
    #[strum(serialize = "quiet", serialize = "0", to_string = "quiet")]
    Quiet,
    #[strum(serialize = "errors-only", serialize = "1", to_string = "errors-only")]
    ErrorsOnly,
    #[default]
    #[strum(serialize = "full", serialize = "2", to_string = "full")]
    Full,
}

impl Verbosity {
    /// Accepts the numeric levels `0`, `1`, `2` as well as the names.
    pub fn try_from(s: &str) -> Result<Self> {
        parse_variant(s, "verbosity")
    }

    /// Failure reports reach the console from `ErrorsOnly` upwards.
    pub fn shows_errors(self) -> bool {
        self >= Verbosity::ErrorsOnly
    }

    pub fn shows_info(self) -> bool {
        self == Verbosity::Full
    }

    /// The extraction tool is asked to stay quiet below `Full`.
    pub fn silences_tool(self) -> bool {
        self <= Verbosity::ErrorsOnly
    }
}
