//! Feature flags

use serde::Deserialize;

/// Feature flags
///
/// `prepend_empathy` controls whether the empathy preamble derived from the
/// sentiment probe is prepended to replies. The preamble is always computed;
/// with the flag off (the default) it has no visible effect.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FeatureFlags {
    /// Prepend the empathy preamble to non-greeting replies
    #[serde(default)]
    pub prepend_empathy: bool,
}
