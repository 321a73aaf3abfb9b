//! Feature flag translation.

use crate::util::escape::quote;

/// Translate named build features into compiler configuration flags.
///
/// Each feature becomes one `--cfg feature="<name>"` flag, quoted so the
/// string literal survives the shell. Input order is preserved; callers
/// that care about reproducibility across builds pass a deterministically
/// ordered set.
pub fn cfg_flags(features: &[String]) -> Vec<String> {
    features
        .iter()
        .map(|name| format!("--cfg {}", quote(&format!("feature=\"{}\"", name))))
        .collect()
}
