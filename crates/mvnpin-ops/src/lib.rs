pub mod ops_compare;
pub mod ops_conflicts;
pub mod ops_pin;

use mvnpin_core::config::{GlobalConfig, ResolveConfig};
use mvnpin_util::errors::MvnpinResult;

/// Resolve settings from the global config, with the CLI's depth override applied.
pub fn resolve_config(max_depth: Option<usize>) -> MvnpinResult<ResolveConfig> {
    let mut config = GlobalConfig::load()?.resolve;
    if let Some(depth) = max_depth {
        config.max_depth = depth;
    }
    Ok(config)
}
