//! Keycode definitions.
//!
//! A flat `u16` keycode space: the HID keyboard/keypad page in the low byte,
//! consumer-page and mouse keycodes folded into the same enum, and magic
//! keycodes (runtime firmware toggles such as NKRO on/off) above 0x100.

use serde::{Deserialize, Serialize};
use strum::FromRepr;

use crate::modifier::HidModifiers;

/// KeyCode is the internal representation of all keycodes, keyboard operations, etc.
/// Use flat representation of keycodes.
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    /// Reserved, no-key.
    No = 0x0000,
    /// Keyboard roll over error, too many keys are pressed simultaneously, not a physical key.
    ErrorRollover = 0x0001,
    /// Keyboard post fail error, not a physical key.
    PostFail = 0x0002,
    /// An undefined error, not a physical key.
    ErrorUndefined = 0x0003,
    /// `a` and `A`
    A = 0x0004,
    /// `b` and `B`
    B = 0x0005,
    /// `c` and `C`
    C = 0x0006,
    /// `d` and `D`
    D = 0x0007,
    /// `e` and `E`
    E = 0x0008,
    /// `f` and `F`
    F = 0x0009,
    /// `g` and `G`
    G = 0x000A,
    /// `h` and `H`
    H = 0x000B,
    /// `i` and `I`
    I = 0x000C,
    /// `j` and `J`
    J = 0x000D,
    /// `k` and `K`
    K = 0x000E,
    /// `l` and `L`
    L = 0x000F,
    /// `m` and `M`
    M = 0x0010,
    /// `n` and `N`
    N = 0x0011,
    /// `o` and `O`
    O = 0x0012,
    /// `p` and `P`
    P = 0x0013,
    /// `q` and `Q`
    Q = 0x0014,
    /// `r` and `R`
    R = 0x0015,
    /// `s` and `S`
    S = 0x0016,
    /// `t` and `T`
    T = 0x0017,
    /// `u` and `U`
    U = 0x0018,
    /// `v` and `V`
    V = 0x0019,
    /// `w` and `W`
    W = 0x001A,
    /// `x` and `X`
    X = 0x001B,
    /// `y` and `Y`
    Y = 0x001C,
    /// `z` and `Z`
    Z = 0x001D,
    /// `1` and `!`
    Kc1 = 0x001E,
    /// `2` and `@`
    Kc2 = 0x001F,
    /// `3` and `#`
    Kc3 = 0x0020,
    /// `4` and `$`
    Kc4 = 0x0021,
    /// `5` and `%`
    Kc5 = 0x0022,
    /// `6` and `^`
    Kc6 = 0x0023,
    /// `7` and `&`
    Kc7 = 0x0024,
    /// `8` and `*`
    Kc8 = 0x0025,
    /// `9` and `(`
    Kc9 = 0x0026,
    /// `0` and `)`
    Kc0 = 0x0027,
    /// `Enter`
    Enter = 0x0028,
    /// `Esc`
    Escape = 0x0029,
    /// `Backspace`
    Backspace = 0x002A,
    /// `Tab`
    Tab = 0x002B,
    /// `Space`
    Space = 0x002C,
    /// `-` and `_`
    Minus = 0x002D,
    /// `=` and `+`
    Equal = 0x002E,
    /// `[` and `{`
    LeftBracket = 0x002F,
    /// `]` and `}`
    RightBracket = 0x0030,
    /// `\` and `|`
    Backslash = 0x0031,
    /// Non-US `#` and `~`
    NonusHash = 0x0032,
    /// `;` and `:`
    Semicolon = 0x0033,
    /// `'` and `"`
    Quote = 0x0034,
    /// `` ` `` and `~`
    Grave = 0x0035,
    /// `,` and `<`
    Comma = 0x0036,
    /// `.` and `>`
    Dot = 0x0037,
    /// `/` and `?`
    Slash = 0x0038,
    /// `CapsLock`
    CapsLock = 0x0039,
    /// `F1`
    F1 = 0x003A,
    /// `F2`
    F2 = 0x003B,
    /// `F3`
    F3 = 0x003C,
    /// `F4`
    F4 = 0x003D,
    /// `F5`
    F5 = 0x003E,
    /// `F6`
    F6 = 0x003F,
    /// `F7`
    F7 = 0x0040,
    /// `F8`
    F8 = 0x0041,
    /// `F9`
    F9 = 0x0042,
    /// `F10`
    F10 = 0x0043,
    /// `F11`
    F11 = 0x0044,
    /// `F12`
    F12 = 0x0045,
    /// Print Screen
    PrintScreen = 0x0046,
    /// Scroll Lock
    ScrollLock = 0x0047,
    /// Pause
    Pause = 0x0048,
    /// Insert
    Insert = 0x0049,
    /// Home
    Home = 0x004A,
    /// Page Up
    PageUp = 0x004B,
    /// Delete
    Delete = 0x004C,
    /// End
    End = 0x004D,
    /// Page Down
    PageDown = 0x004E,
    /// Right arrow
    Right = 0x004F,
    /// Left arrow
    Left = 0x0050,
    /// Down arrow
    Down = 0x0051,
    /// Up arrow
    Up = 0x0052,
    /// Mute, consumer page
    AudioMute = 0x00A8,
    /// Volume up, consumer page
    AudioVolUp = 0x00A9,
    /// Volume down, consumer page
    AudioVolDown = 0x00AA,
    /// Next track, consumer page
    MediaNextTrack = 0x00AB,
    /// Previous track, consumer page
    MediaPrevTrack = 0x00AC,
    /// Stop, consumer page
    MediaStop = 0x00AD,
    /// Play/pause, consumer page
    MediaPlayPause = 0x00AE,
    /// Mouse cursor up
    MouseUp = 0x00CD,
    /// Mouse cursor down
    MouseDown = 0x00CE,
    /// Mouse cursor left
    MouseLeft = 0x00CF,
    /// Mouse cursor right
    MouseRight = 0x00D0,
    /// Mouse button 1 (left)
    MouseBtn1 = 0x00D1,
    /// Mouse button 2 (right)
    MouseBtn2 = 0x00D2,
    /// Mouse button 3 (middle)
    MouseBtn3 = 0x00D3,
    /// Mouse wheel up
    MouseWheelUp = 0x00D9,
    /// Mouse wheel down
    MouseWheelDown = 0x00DA,
    /// Mouse acceleration 0
    MouseAccel0 = 0x00DD,
    /// Mouse acceleration 1
    MouseAccel1 = 0x00DE,
    /// Mouse acceleration 2
    MouseAccel2 = 0x00DF,
    /// Left Control
    LCtrl = 0x00E0,
    /// Left Shift
    LShift = 0x00E1,
    /// Left Alt
    LAlt = 0x00E2,
    /// Left GUI
    LGui = 0x00E3,
    /// Right Control
    RCtrl = 0x00E4,
    /// Right Shift
    RShift = 0x00E5,
    /// Right Alt
    RAlt = 0x00E6,
    /// Right GUI
    RGui = 0x00E7,
    // Magic keycodes, use 0x100 ~ 0x1FF
    /// Enable the GUI keys
    MagicGuiOn = 0x109,
    /// Disable the GUI keys
    MagicGuiOff = 0x10A,
    /// Enable n-key rollover
    MagicNkroOn = 0x111,
    /// Disable n-key rollover
    MagicNkroOff = 0x112,
}

impl Default for KeyCode {
    fn default() -> Self {
        KeyCode::No
    }
}

impl KeyCode {
    /// Returns `true` if the keycode is a basic HID keyboard/keypad page keycode
    pub fn is_basic(self) -> bool {
        KeyCode::A <= self && self <= KeyCode::RGui
    }

    /// Returns `true` if the keycode is a modifier keycode
    pub fn is_modifier(self) -> bool {
        KeyCode::LCtrl <= self && self <= KeyCode::RGui
    }

    /// Returns `true` if the keycode is a keycode in consumer page
    pub fn is_consumer(self) -> bool {
        KeyCode::AudioMute <= self && self <= KeyCode::MediaPlayPause
    }

    /// Returns `true` if the keycode is a mouse keycode
    pub fn is_mouse_key(self) -> bool {
        KeyCode::MouseUp <= self && self <= KeyCode::MouseAccel2
    }

    /// Returns `true` if the keycode is a magic keycode
    pub fn is_magic(self) -> bool {
        KeyCode::MagicGuiOn <= self && self <= KeyCode::MagicNkroOff
    }

    /// Convert a modifier keycode into its HID modifier bit.
    /// Returns an empty set for non-modifier keycodes.
    pub fn as_modifier_bit(self) -> HidModifiers {
        if self.is_modifier() {
            HidModifiers::from_bits(1 << (self as u16 as u8 - KeyCode::LCtrl as u16 as u8))
        } else {
            HidModifiers::new()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_keycode_ranges() {
        assert!(KeyCode::A.is_basic());
        assert!(KeyCode::RGui.is_basic());
        assert!(!KeyCode::AudioMute.is_basic());
        assert!(KeyCode::MediaPrevTrack.is_consumer());
        assert!(KeyCode::MouseWheelDown.is_mouse_key());
        assert!(KeyCode::MagicNkroOn.is_magic());
        assert!(!KeyCode::MagicNkroOn.is_basic());
    }

    #[test]
    fn test_modifier_bits() {
        assert_eq!(KeyCode::LCtrl.as_modifier_bit().into_bits(), 0b0000_0001);
        assert_eq!(KeyCode::LShift.as_modifier_bit().into_bits(), 0b0000_0010);
        assert_eq!(KeyCode::RGui.as_modifier_bit().into_bits(), 0b1000_0000);
        assert_eq!(KeyCode::A.as_modifier_bit().into_bits(), 0);
    }

    #[test]
    fn test_from_repr() {
        assert_eq!(KeyCode::from_repr(0x0004), Some(KeyCode::A));
        assert_eq!(KeyCode::from_repr(0x0111), Some(KeyCode::MagicNkroOn));
        assert_eq!(KeyCode::from_repr(0xFFFF), None);
    }
}
