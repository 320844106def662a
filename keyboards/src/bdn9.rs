//! BDN9 (3x3 macropad) with combination keys.
//!
//! The top corners are the left and right combination keys: holding one
//! opens its layer, holding both opens the BOTH layer on top, and releasing
//! either key closes all three at once.

use layercake::action::KeyAction;
use layercake::combination::CombinationConfig;
use layercake::config::BehaviorConfig;
use layercake::{a, comb, k, layer};

pub const ROW: usize = 3;
pub const COL: usize = 3;
pub const NUM_LAYER: usize = 4;

/// Media macropad, the base layer
pub const BASE: u8 = 0;
/// Held left combination key: arrows
pub const LEFT: u8 = 1;
/// Held right combination key: paging and function keys
pub const RIGHT: u8 = 2;
/// Both combination keys held: firmware toggles
pub const BOTH: u8 = 3;

#[rustfmt::skip]
pub const fn default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    [
        layer!([
            [comb!(Left), k!(MediaPlayPause), comb!(Right)],
            [k!(AudioVolDown), k!(AudioMute), k!(AudioVolUp)],
            [k!(MediaPrevTrack), k!(MediaStop), k!(MediaNextTrack)]
        ]),
        layer!([
            [a!(Transparent), k!(Escape), a!(Transparent)],
            [k!(Home), k!(Up), k!(End)],
            [k!(Left), k!(Down), k!(Right)]
        ]),
        layer!([
            [a!(Transparent), k!(Insert), a!(Transparent)],
            [k!(PageUp), k!(PrintScreen), k!(PageDown)],
            [k!(F10), k!(F11), k!(F12)]
        ]),
        layer!([
            [a!(Transparent), k!(Escape), a!(Transparent)],
            [k!(MagicNkroOn), k!(CapsLock), k!(MagicNkroOff)],
            [k!(MagicGuiOn), k!(ScrollLock), k!(MagicGuiOff)]
        ]),
    ]
}

pub fn behavior_config() -> BehaviorConfig {
    BehaviorConfig {
        combination: Some(CombinationConfig::new(LEFT, RIGHT, BOTH)),
        ..BehaviorConfig::default()
    }
}
