//! Preonic (5x12 ortholinear).
//!
//! The number row hosts momentary FUN keys in the corners; EXT and NAV held
//! together give the RAT mouse layer.

use layercake::action::KeyAction;
use layercake::config::BehaviorConfig;
use layercake::layer::TriLayer;
use layercake::{a, k, layer, mo};

pub const ROW: usize = 5;
pub const COL: usize = 12;
pub const NUM_LAYER: usize = 5;

/// Base layer
pub const TOP: u8 = 0;
/// Function and media keys
pub const FUN: u8 = 1;
/// Extend: numbers and brackets
pub const EXT: u8 = 2;
/// Navigate: arrows and paging
pub const NAV: u8 = 3;
/// Rat: mouse keys, active while EXT and NAV are both held
pub const RAT: u8 = 4;

#[rustfmt::skip]
pub const fn default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    [
        layer!([
            [mo!(FUN), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), mo!(FUN)],
            [k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P), k!(Backspace)],
            [k!(Escape), k!(A), k!(S), k!(D), k!(F), k!(G), k!(H), k!(J), k!(K), k!(L), k!(Semicolon), k!(Quote)],
            [k!(LShift), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash), k!(RShift)],
            [k!(LCtrl), k!(LGui), k!(LAlt), mo!(FUN), mo!(NAV), k!(Space), k!(Space), mo!(EXT), mo!(FUN), k!(RAlt), k!(RGui), k!(RCtrl)]
        ]),
        layer!([
            [a!(Transparent), k!(MediaPrevTrack), k!(MediaPlayPause), k!(MediaNextTrack), k!(MagicNkroOn), a!(No), a!(No), k!(MagicNkroOff), k!(AudioMute), k!(AudioVolDown), k!(AudioVolUp), a!(Transparent)],
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)],
            [k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), k!(F11), k!(F12)],
            [a!(Transparent), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)]
        ]),
        layer!([
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), k!(PrintScreen)],
            [k!(Insert), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), k!(Delete)],
            [k!(Grave), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), k!(Enter)],
            [a!(Transparent), a!(No), a!(No), a!(No), a!(No), a!(No), k!(Minus), k!(Equal), k!(LeftBracket), k!(RightBracket), k!(Backslash), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(Transparent), a!(Transparent), a!(Transparent)]
        ]),
        layer!([
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), k!(PrintScreen)],
            [a!(No), a!(No), k!(Up), a!(No), a!(No), a!(No), a!(No), a!(No), k!(PageUp), a!(No), a!(No), k!(Delete)],
            [k!(Escape), k!(Left), k!(Down), k!(Right), a!(No), a!(No), a!(No), k!(Home), k!(PageDown), k!(End), a!(No), k!(Enter)],
            [a!(Transparent), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(Transparent), a!(Transparent), a!(Transparent)]
        ]),
        layer!([
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), k!(PrintScreen)],
            [a!(No), a!(No), k!(MouseUp), a!(No), a!(No), a!(No), a!(No), a!(No), k!(MouseWheelUp), k!(MouseBtn3), a!(No), k!(Delete)],
            [k!(Escape), k!(MouseLeft), k!(MouseDown), k!(MouseRight), a!(No), a!(No), a!(No), k!(MouseBtn1), k!(MouseWheelDown), k!(MouseBtn2), k!(MouseAccel0), k!(Enter)],
            [a!(Transparent), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(Transparent), a!(Transparent), a!(Transparent)]
        ]),
    ]
}

pub fn behavior_config() -> BehaviorConfig {
    BehaviorConfig {
        tri_layer: Some(TriLayer::new(EXT, NAV, RAT)),
        ..BehaviorConfig::default()
    }
}
