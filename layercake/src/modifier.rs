//! Modifier bitfields.
//!
//! [`HidModifiers`] is the 8-bit HID modifier byte, one bit per physical
//! modifier key. It doubles as a modifier *mask* for key overrides, where a
//! set bit means "this modifier counts". [`ModifierCombination`] is the
//! packed 5-bit form stored inside keymap actions.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use bitfield_struct::bitfield;
use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Serialize, Deserialize, MaxSize, Eq, PartialEq)]
pub struct HidModifiers {
    #[bits(1)]
    pub left_ctrl: bool,
    #[bits(1)]
    pub left_shift: bool,
    #[bits(1)]
    pub left_alt: bool,
    #[bits(1)]
    pub left_gui: bool,
    #[bits(1)]
    pub right_ctrl: bool,
    #[bits(1)]
    pub right_shift: bool,
    #[bits(1)]
    pub right_alt: bool,
    #[bits(1)]
    pub right_gui: bool,
}

impl BitOr for HidModifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}
impl BitAnd for HidModifiers {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() & rhs.into_bits())
    }
}
impl Not for HidModifiers {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::from_bits(!self.into_bits())
    }
}
impl BitAndAssign for HidModifiers {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}
impl BitOrAssign for HidModifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl HidModifiers {
    /// Both shift keys.
    pub const MASK_SHIFT: Self = Self::new().with_left_shift(true).with_right_shift(true);
    /// Both ctrl keys.
    pub const MASK_CTRL: Self = Self::new().with_left_ctrl(true).with_right_ctrl(true);
    /// Both alt keys.
    pub const MASK_ALT: Self = Self::new().with_left_alt(true).with_right_alt(true);
    /// Both gui keys.
    pub const MASK_GUI: Self = Self::new().with_left_gui(true).with_right_gui(true);
    /// Ctrl, alt and gui, both sides.
    pub const MASK_CAG: Self = Self::from_bits(
        Self::MASK_CTRL.into_bits() | Self::MASK_ALT.into_bits() | Self::MASK_GUI.into_bits(),
    );

    pub const fn is_empty(self) -> bool {
        self.into_bits() == 0
    }

    /// At least one bit is set in both masks.
    pub const fn intersects(self, other: Self) -> bool {
        self.into_bits() & other.into_bits() != 0
    }
}

/// To represent all combinations of modifiers, at least 5 bits are needed.
/// 1 bit for Left/Right, 4 bits for modifier type. Represented in LSB format.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Serialize, Deserialize, MaxSize, Eq, PartialEq)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

pub const CTRL: ModifierCombination = ModifierCombination::new().with_ctrl(true);
pub const SHIFT: ModifierCombination = ModifierCombination::new().with_shift(true);
pub const ALT: ModifierCombination = ModifierCombination::new().with_alt(true);
pub const GUI: ModifierCombination = ModifierCombination::new().with_gui(true);
pub const RIGHT: ModifierCombination = ModifierCombination::new().with_right(true);

impl ModifierCombination {
    /// Get modifier hid report bits from modifier combination
    pub const fn to_hid_modifiers(self) -> HidModifiers {
        if !self.right() {
            HidModifiers::new()
                .with_left_ctrl(self.ctrl())
                .with_left_shift(self.shift())
                .with_left_alt(self.alt())
                .with_left_gui(self.gui())
        } else {
            HidModifiers::new()
                .with_right_ctrl(self.ctrl())
                .with_right_shift(self.shift())
                .with_right_alt(self.alt())
                .with_right_gui(self.gui())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_mask_intersection() {
        let held = HidModifiers::new().with_left_shift(true);
        assert!(held.intersects(HidModifiers::MASK_SHIFT));
        assert!(!held.intersects(HidModifiers::MASK_CAG));

        let held = HidModifiers::new().with_right_alt(true);
        assert!(held.intersects(HidModifiers::MASK_CAG));
    }

    #[test]
    fn test_combination_to_hid() {
        assert_eq!(SHIFT.to_hid_modifiers(), HidModifiers::new().with_left_shift(true));
        assert_eq!(
            (SHIFT | RIGHT).to_hid_modifiers(),
            HidModifiers::new().with_right_shift(true)
        );
    }
}
