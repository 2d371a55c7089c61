//! Diagnostic verbosity requested by zone declarations.

use core::fmt;

use crate::error::ZrError;

/// Verbosity level, ordered from least to most output.
///
/// A message written at level `L` is shown when the active verbosity is
/// at least `L`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
#[repr(u8)]
pub enum Verbosity {
    Fatal = 1,
    Error = 2,
    #[default]
    Warning = 3,
    Info = 4,
    Verbose = 5,
    Debug = 6,
}

impl Verbosity {
    pub const ALL: [Verbosity; 6] = [
        Verbosity::Fatal,
        Verbosity::Error,
        Verbosity::Warning,
        Verbosity::Info,
        Verbosity::Verbose,
        Verbosity::Debug,
    ];

    pub fn level(self) -> u8 {
        self as u8
    }

    /// True when a message at `level` passes this verbosity.
    pub fn admits(self, level: Verbosity) -> bool {
        level <= self
    }
}

impl TryFrom<u8> for Verbosity {
    type Error = ZrError;

    fn try_from(level: u8) -> Result<Self, ZrError> {
        Verbosity::ALL
            .into_iter()
            .find(|v| v.level() == level)
            .ok_or(ZrError::InvalidVerbosity { level })
    }
}

impl From<Verbosity> for u8 {
    fn from(v: Verbosity) -> Self {
        v.level()
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verbosity::Fatal => "fatal",
            Verbosity::Error => "error",
            Verbosity::Warning => "warning",
            Verbosity::Info => "info",
            Verbosity::Verbose => "verbose",
            Verbosity::Debug => "debug",
        };
        write!(f, "{} ({})", name, self.level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn levels_are_ordered() {
        assert!(Verbosity::Fatal < Verbosity::Error);
        assert!(Verbosity::Verbose < Verbosity::Debug);
        assert!(Verbosity::Info.admits(Verbosity::Warning));
        assert!(!Verbosity::Warning.admits(Verbosity::Info));
    }

    #[test]
    fn out_of_range_level_is_rejected() {
        assert_eq!(
            Verbosity::try_from(0),
            Err(ZrError::InvalidVerbosity { level: 0 })
        );
        assert!(Verbosity::try_from(7).is_err());
    }

    proptest! {
        #[test]
        fn try_from_matches_level(level in 1_u8..=6) {
            let v = Verbosity::try_from(level).unwrap();
            prop_assert_eq!(v.level(), level);
        }
    }
}
