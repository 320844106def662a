//! Planck (4x12 ortholinear): keyboard and mouse combo.
//!
//! Shifted media keys turn into volume keys through key overrides, so the
//! media cluster on the RAT layer doubles as volume control.

use heapless::Vec;
use layercake::action::KeyAction;
use layercake::config::{BehaviorConfig, KeyOverridesConfig};
use layercake::key_override::KeyOverride;
use layercake::keycode::KeyCode;
use layercake::layer::TriLayer;
use layercake::modifier::{HidModifiers, SHIFT};
use layercake::{a, k, layer, mo, wm};

pub const ROW: usize = 4;
pub const COL: usize = 12;
pub const NUM_LAYER: usize = 4;

/// Text, the base layer
pub const TXT: u8 = 0;
/// Extend: symbols and numbers
pub const EXT: u8 = 1;
/// Navigate: arrows and function keys
pub const NAV: u8 = 2;
/// Rat: mouse keys, active while EXT and NAV are both held
pub const RAT: u8 = 3;

#[rustfmt::skip]
pub const fn default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    [
        layer!([
            [k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P), k!(Backspace)],
            [k!(Escape), k!(A), k!(S), k!(D), k!(F), k!(G), k!(H), k!(J), k!(K), k!(L), k!(Semicolon), k!(Quote)],
            [k!(LShift), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash), k!(RShift)],
            [k!(LCtrl), k!(LGui), k!(LAlt), k!(LShift), mo!(EXT), k!(Space), k!(Space), mo!(NAV), k!(RShift), k!(RAlt), k!(RGui), k!(RCtrl)]
        ]),
        layer!([
            [wm!(Grave, SHIFT), wm!(Kc1, SHIFT), wm!(Kc2, SHIFT), wm!(Kc3, SHIFT), wm!(Kc4, SHIFT), wm!(Kc5, SHIFT), wm!(Kc6, SHIFT), wm!(Kc7, SHIFT), wm!(Kc8, SHIFT), wm!(Kc9, SHIFT), wm!(Kc0, SHIFT), k!(Delete)],
            [k!(Grave), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), k!(Enter)],
            [a!(Transparent), wm!(Backslash, SHIFT), wm!(LeftBracket, SHIFT), wm!(RightBracket, SHIFT), wm!(Equal, SHIFT), wm!(Minus, SHIFT), k!(Minus), k!(Equal), k!(LeftBracket), k!(RightBracket), k!(Backslash), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)]
        ]),
        layer!([
            [k!(Insert), k!(Home), k!(Up), k!(End), k!(PageUp), a!(No), a!(No), k!(F1), k!(F2), k!(F3), k!(F4), k!(Delete)],
            [k!(PrintScreen), k!(Left), k!(Down), k!(Right), k!(PageDown), a!(No), a!(No), k!(F5), k!(F6), k!(F7), k!(F8), k!(Enter)],
            [a!(Transparent), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), k!(F9), k!(F10), k!(F11), k!(F12), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)]
        ]),
        layer!([
            [k!(MagicNkroOn), k!(Home), k!(MouseUp), k!(End), k!(PageUp), a!(No), a!(No), a!(No), k!(MouseWheelUp), k!(MouseBtn3), a!(No), k!(MagicNkroOff)],
            [k!(MagicGuiOn), k!(MouseLeft), k!(MouseDown), k!(MouseRight), k!(PageDown), a!(No), k!(MediaPrevTrack), k!(MouseBtn1), k!(MouseWheelDown), k!(MouseBtn2), k!(MouseAccel0), k!(MagicGuiOff)],
            [a!(Transparent), a!(No), a!(No), a!(No), a!(No), a!(No), k!(MediaNextTrack), k!(MediaPlayPause), a!(No), a!(No), a!(No), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)]
        ]),
    ]
}

/// Shift + media key → volume key, on all layers, blocked while ctrl, alt
/// or gui is held.
fn key_overrides() -> KeyOverridesConfig {
    KeyOverridesConfig {
        overrides: Vec::from_iter([
            KeyOverride::new(KeyCode::MediaPrevTrack, HidModifiers::MASK_SHIFT, KeyCode::AudioVolUp)
                .with_negative_modifiers(HidModifiers::MASK_CAG),
            KeyOverride::new(KeyCode::MediaNextTrack, HidModifiers::MASK_SHIFT, KeyCode::AudioVolDown)
                .with_negative_modifiers(HidModifiers::MASK_CAG),
            KeyOverride::new(KeyCode::MediaPlayPause, HidModifiers::MASK_SHIFT, KeyCode::AudioMute)
                .with_negative_modifiers(HidModifiers::MASK_CAG),
        ]),
    }
}

pub fn behavior_config() -> BehaviorConfig {
    BehaviorConfig {
        tri_layer: Some(TriLayer::new(EXT, NAV, RAT)),
        key_override: key_overrides(),
        combination: None,
    }
}
