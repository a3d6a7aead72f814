// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tuning switches for one extension step.

/// Configuration for [`extend_with`](crate::extend_with).
///
/// Neither switch changes the resulting identity set; they trade bookkeeping
/// for fewer redundant raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExtendConfig {
    /// Erase pending raises whose target another parent already produced.
    pub erase_sources: bool,
    /// Also erase the sources of raises that turned out reducible. Lookups
    /// for those mostly miss, so this is off by default.
    pub erase_reducible_sources: bool,
}

impl Default for ExtendConfig {
    fn default() -> Self {
        Self {
            erase_sources: true,
            erase_reducible_sources: false,
        }
    }
}

impl ExtendConfig {
    /// Sets [`erase_sources`](Self::erase_sources).
    pub fn with_erase_sources(mut self, on: bool) -> Self {
        self.erase_sources = on;
        self
    }

    /// Sets [`erase_reducible_sources`](Self::erase_reducible_sources).
    pub fn with_erase_reducible_sources(mut self, on: bool) -> Self {
        self.erase_reducible_sources = on;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: ExtendConfig =
            serde_json::from_str(r#"{"erase_reducible_sources": true}"#).expect("parse config");
        assert!(cfg.erase_sources);
        assert!(cfg.erase_reducible_sources);
    }
}
