//! Combination keys: a pair of synthetic keys that drive three layers.
//!
//! Holding the left key activates its layer, holding the right key activates
//! its layer, and holding both activates an extra layer on top. Releasing
//! either key drops all three layers at once, regardless of which key is
//! released first.

use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

use crate::layer::LayerState;

/// Which half of the combination-key pair a key position belongs to.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CombinationSide {
    Left,
    Right,
}

/// The three layers driven by the combination keys.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CombinationConfig {
    pub left: u8,
    pub right: u8,
    pub both: u8,
}

impl CombinationConfig {
    pub const fn new(left: u8, right: u8, both: u8) -> Self {
        Self { left, right, both }
    }
}

/// Runtime state of the combination-key pair.
#[derive(Debug, Clone)]
pub struct CombinationKeys {
    config: CombinationConfig,
    left_held: bool,
    right_held: bool,
}

impl CombinationKeys {
    pub const fn new(config: CombinationConfig) -> Self {
        Self {
            config,
            left_held: false,
            right_held: false,
        }
    }

    /// Feed one combination-key event and return the corrected layer state.
    ///
    /// A release of either side clears the left, right and extra layers and
    /// forgets both held flags (last-writer-clears-all).
    pub fn process(&mut self, side: CombinationSide, pressed: bool, state: LayerState) -> LayerState {
        if pressed {
            let mut state = match side {
                CombinationSide::Left => {
                    self.left_held = true;
                    state.with_active(self.config.left)
                }
                CombinationSide::Right => {
                    self.right_held = true;
                    state.with_active(self.config.right)
                }
            };
            if self.left_held && self.right_held {
                state = state.with_active(self.config.both);
            }
            state
        } else {
            self.left_held = false;
            self.right_held = false;
            state
                .with_inactive(self.config.left)
                .with_inactive(self.config.right)
                .with_inactive(self.config.both)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const CONFIG: CombinationConfig = CombinationConfig::new(1, 2, 3);

    #[test]
    fn test_single_side() {
        let mut keys = CombinationKeys::new(CONFIG);
        let state = keys.process(CombinationSide::Left, true, LayerState::new());
        assert_eq!(state.into_bits(), 0b0010);

        let state = keys.process(CombinationSide::Left, false, state);
        assert_eq!(state.into_bits(), 0);
    }

    #[test]
    fn test_both_held_activates_extra_layer() {
        let mut keys = CombinationKeys::new(CONFIG);
        let state = keys.process(CombinationSide::Left, true, LayerState::new());
        let state = keys.process(CombinationSide::Right, true, state);
        assert!(state.is_active(1));
        assert!(state.is_active(2));
        assert!(state.is_active(3));
    }

    #[test]
    fn test_either_release_clears_all_three() {
        for release_side in [CombinationSide::Left, CombinationSide::Right] {
            let mut keys = CombinationKeys::new(CONFIG);
            let state = keys.process(CombinationSide::Left, true, LayerState::new());
            let state = keys.process(CombinationSide::Right, true, state);
            let state = keys.process(release_side, false, state);
            assert_eq!(state.into_bits(), 0, "release of {release_side:?} left layers on");
        }
    }

    #[test]
    fn test_unrelated_layers_untouched() {
        let mut keys = CombinationKeys::new(CONFIG);
        let base = LayerState::new().with_active(5);
        let state = keys.process(CombinationSide::Right, true, base);
        let state = keys.process(CombinationSide::Right, false, state);
        assert_eq!(state.into_bits(), base.into_bits());
    }
}
