#![no_std]

//! Static keymaps and behavior configuration, one module per keyboard.
//!
//! The layer tables here are plain data; the host firmware hands them to
//! [`layercake::keymap::KeyMap`] together with the matching
//! [`layercake::config::BehaviorConfig`].

pub mod bdn9;
pub mod planck;
pub mod preonic;
