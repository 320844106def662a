//! Active-layer state and the tri-layer rule.
//!
//! The active-layer set is an explicit bitmask value: bit `i` set means
//! layer `i` is active. It is threaded through pure functions rather than
//! held in process-wide mutable state; [`crate::keymap::KeyMap`] owns the
//! single instance and re-runs [`TriLayer::resolve`] after every change.

use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

/// Hard cap of the layer space, bounded by the bitmask width.
pub const MAX_LAYER: usize = 32;

/// Bitmask over layer identifiers. Bit `i` set means layer `i` is active.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(u32);

impl LayerState {
    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn into_bits(self) -> u32 {
        self.0
    }

    pub const fn is_active(self, layer: u8) -> bool {
        (layer as usize) < MAX_LAYER && (self.0 >> layer) & 1 == 1
    }

    /// Layer numbers beyond the bitmask width are ignored.
    pub const fn with_active(self, layer: u8) -> Self {
        if (layer as usize) < MAX_LAYER {
            Self(self.0 | 1 << layer)
        } else {
            self
        }
    }

    pub const fn with_inactive(self, layer: u8) -> Self {
        if (layer as usize) < MAX_LAYER {
            Self(self.0 & !(1 << layer))
        } else {
            self
        }
    }

    pub const fn with_toggled(self, layer: u8) -> Self {
        if (layer as usize) < MAX_LAYER {
            Self(self.0 ^ 1 << layer)
        } else {
            self
        }
    }

    pub fn activate(&mut self, layer: u8) {
        *self = self.with_active(layer);
    }

    pub fn deactivate(&mut self, layer: u8) {
        *self = self.with_inactive(layer);
    }

    pub fn toggle(&mut self, layer: u8) {
        *self = self.with_toggled(layer);
    }
}

/// The tri-layer rule: an immutable triple of layer identifiers, fixed per
/// keyboard. Holding `lower` and `raise` together activates `adjust`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TriLayer {
    pub lower: u8,
    pub raise: u8,
    pub adjust: u8,
}

impl TriLayer {
    pub const fn new(lower: u8, raise: u8, adjust: u8) -> Self {
        Self { lower, raise, adjust }
    }

    /// Correct an active-layer set: `adjust` is active exactly when `lower`
    /// and `raise` both are. All other bits pass through unchanged.
    ///
    /// Pure and idempotent; run after every change to the base toggle state.
    pub const fn resolve(self, state: LayerState) -> LayerState {
        if state.is_active(self.lower) && state.is_active(self.raise) {
            state.with_active(self.adjust)
        } else {
            state.with_inactive(self.adjust)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // EXT=2, NAV=3, RAT=4, as on the preonic
    const TRI: TriLayer = TriLayer::new(2, 3, 4);

    #[test]
    fn test_adjust_set_when_both_held() {
        let state = LayerState::from_bits(0b1100);
        assert_eq!(TRI.resolve(state).into_bits(), 0b11100);
    }

    #[test]
    fn test_adjust_untouched_when_one_held() {
        let state = LayerState::from_bits(0b0100);
        assert_eq!(TRI.resolve(state).into_bits(), 0b0100);

        let state = LayerState::from_bits(0b1000);
        assert_eq!(TRI.resolve(state).into_bits(), 0b1000);
    }

    #[test]
    fn test_adjust_cleared_when_either_released() {
        let state = TRI.resolve(LayerState::from_bits(0b1100));
        let state = TRI.resolve(state.with_inactive(3));
        assert_eq!(state.into_bits(), 0b0100);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        for bits in 0..1u32 << 6 {
            let state = LayerState::from_bits(bits);
            let once = TRI.resolve(state);
            assert_eq!(TRI.resolve(once), once, "not idempotent for {bits:#b}");
        }
    }

    #[test]
    fn test_resolve_touches_only_adjust_bit() {
        for bits in 0..1u32 << 6 {
            let state = LayerState::from_bits(bits);
            let resolved = TRI.resolve(state);
            assert_eq!(
                resolved.into_bits() & !(1 << 4),
                bits & !(1 << 4),
                "non-adjust bits changed for {bits:#b}"
            );
        }
    }

    #[test]
    fn test_resolve_exact_rule() {
        for bits in 0..1u32 << 6 {
            let state = TriLayer::new(2, 3, 4).resolve(LayerState::from_bits(bits));
            let both = bits & 0b1100 == 0b1100;
            assert_eq!(state.is_active(4), both, "wrong adjust bit for {bits:#b}");
        }
    }

    #[test]
    fn test_out_of_range_layers_ignored() {
        let state = LayerState::new().with_active(40);
        assert_eq!(state.into_bits(), 0);
        assert!(!state.is_active(40));
    }
}
