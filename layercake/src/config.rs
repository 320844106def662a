use heapless::Vec;

use crate::combination::CombinationConfig;
use crate::key_override::{KEY_OVERRIDE_MAX_NUM, KeyOverride};
use crate::layer::TriLayer;

/// Config for configurable action behavior
#[derive(Clone, Debug, Default)]
pub struct BehaviorConfig {
    pub tri_layer: Option<TriLayer>,
    pub key_override: KeyOverridesConfig,
    pub combination: Option<CombinationConfig>,
}

/// Config for key-override behavior. Order matters: the first matching
/// override wins.
#[derive(Clone, Debug, Default)]
pub struct KeyOverridesConfig {
    pub overrides: Vec<KeyOverride, KEY_OVERRIDE_MAX_NUM>,
}
