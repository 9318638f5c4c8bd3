//! Per-call resolution options.

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Flags adjusting how [`Namespace::resolve`](crate::Namespace::resolve)
    /// falls back when no adaptor matches.
    ///
    /// Serializes in the human-readable `"NO_HYBRID | COMPLETE_HYBRID"`
    /// form, so it can sit in a configuration file.
    ///
    /// ```
    /// use stringable::Options;
    ///
    /// let options = Options::NO_HYBRID | Options::COMPLETE_HYBRID;
    /// assert!(options.contains(Options::NO_HYBRID));
    /// assert!(Options::default().is_empty());
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Options: u8 {
        /// Never compose a converter from probed capabilities.
        const NO_HYBRID = 1 << 0;
        /// Only accept a composed converter that has both halves.
        const COMPLETE_HYBRID = 1 << 1;
    }
}

impl Options {
    /// Whether composition may run at all.
    #[must_use]
    pub fn hybrid_enabled(self) -> bool {
        !self.contains(Self::NO_HYBRID)
    }

    /// Whether a composed converter must be complete.
    #[must_use]
    pub fn requires_complete(self) -> bool {
        self.contains(Self::COMPLETE_HYBRID)
    }
}
