use std::fmt;

use serde::Serialize;

/// Numeric probe identity taken from the trailing `_<digits>` of a column name.
///
/// Displays zero-padded to width 2, so lexical order of the rendered labels
/// matches numeric order for indices below 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct ProbeNumber(pub u32);

impl ProbeNumber {
    /// `probe_12` -> 12, `non_probe_3` -> 3. `None` if the final token is not
    /// a non-empty run of ASCII digits.
    pub fn from_column(name: &str) -> Option<Self> {
        let token = name.rsplit('_').next()?;
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        token.parse::<u32>().ok().map(ProbeNumber)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn label(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ProbeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl From<ProbeNumber> for String {
    fn from(value: ProbeNumber) -> Self {
        value.to_string()
    }
}
