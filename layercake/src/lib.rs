#![no_std]

//! Keymap and layer engine for keyboard firmware.
//!
//! The host firmware owns matrix scanning, debouncing and HID report
//! generation. This crate owns what sits between: the layer stack, the
//! active-layer bitmask with its tri-layer rule, keymap lookup with a
//! per-position layer cache, key overrides and combination keys.

#[macro_use]
mod fmt;

pub mod action;
pub mod combination;
pub mod config;
pub mod event;
pub mod key_override;
pub mod keycode;
pub mod keymap;
pub mod layer;
pub mod layout_macro;
pub mod modifier;
