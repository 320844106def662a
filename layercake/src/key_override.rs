//! Key overrides.
//!
//! An override substitutes a different output keycode when a specific
//! modifier + keycode combination is detected, before normal report
//! generation. A classic example: Shift + PrevTrack sends VolumeUp with the
//! shift suppressed.
//!
//! Overrides live in an ordered slice; the first matching record wins. There
//! is no sentinel record, the slice length bounds the scan.

use crate::keycode::KeyCode;
use crate::layer::LayerState;
use crate::modifier::HidModifiers;

// Max number of key overrides
pub const KEY_OVERRIDE_MAX_NUM: usize = 8;

/// One key-override record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyOverride {
    /// Keycode that triggers the override.
    pub trigger: KeyCode,
    /// At least one of these modifiers must be held.
    pub trigger_modifiers: HidModifiers,
    /// None of these modifiers may be held.
    pub negative_modifiers: HidModifiers,
    /// Layer mask, bit `i` enables the override on layer `i`.
    pub layers: u32,
    /// Keycode sent instead of the trigger.
    pub replacement: KeyCode,
}

impl Default for KeyOverride {
    fn default() -> Self {
        Self::empty()
    }
}

impl KeyOverride {
    /// An override active on all layers with no negative modifiers.
    pub const fn new(trigger: KeyCode, trigger_modifiers: HidModifiers, replacement: KeyCode) -> Self {
        Self {
            trigger,
            trigger_modifiers,
            negative_modifiers: HidModifiers::new(),
            layers: u32::MAX,
            replacement,
        }
    }

    pub const fn with_layers(mut self, layers: u32) -> Self {
        self.layers = layers;
        self
    }

    pub const fn with_negative_modifiers(mut self, negative_modifiers: HidModifiers) -> Self {
        self.negative_modifiers = negative_modifiers;
        self
    }

    pub const fn empty() -> Self {
        Self::new(KeyCode::No, HidModifiers::new(), KeyCode::No)
    }

    fn matches(&self, key: KeyCode, held: HidModifiers, active_layer: u8) -> bool {
        self.trigger == key
            && held.intersects(self.trigger_modifiers)
            && !held.intersects(self.negative_modifiers)
            && LayerState::from_bits(self.layers).is_active(active_layer)
    }
}

/// The decision made for a matched override.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OverrideOutput {
    /// Keycode to send instead of the trigger.
    pub replacement: KeyCode,
    /// The triggering modifiers, to be removed from the report.
    pub suppress: HidModifiers,
}

/// Find the first override matching the pressed key under the held modifiers
/// on the given active layer.
pub fn resolve_override(
    overrides: &[KeyOverride],
    key: KeyCode,
    held: HidModifiers,
    active_layer: u8,
) -> Option<OverrideOutput> {
    overrides
        .iter()
        .find(|o| o.matches(key, held, active_layer))
        .map(|o| OverrideOutput {
            replacement: o.replacement,
            suppress: held & o.trigger_modifiers,
        })
}
