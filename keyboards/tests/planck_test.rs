pub mod common;

use layercake::k;
use layercake::keycode::KeyCode;
use layercake::keymap::KeyMap;
use layercake::modifier::HidModifiers;
use layercake_keyboards::planck;

use crate::common::send_events;

#[test]
fn test_rat_layer_follows_ext_and_nav() {
    let mut map = planck::default_keymap();
    let mut keymap: KeyMap<{ planck::ROW }, { planck::COL }, { planck::NUM_LAYER }> =
        KeyMap::new(&mut map, planck::behavior_config());

    // MO(EXT) sits at (3, 4), MO(NAV) at (3, 7)
    send_events(&mut keymap, &[(3, 4, true)]);
    assert!(keymap.layer_state().is_active(planck::EXT));
    assert!(!keymap.layer_state().is_active(planck::RAT));

    send_events(&mut keymap, &[(3, 7, true)]);
    assert!(keymap.layer_state().is_active(planck::RAT));

    send_events(&mut keymap, &[(3, 4, false)]);
    assert!(!keymap.layer_state().is_active(planck::RAT));
    assert!(keymap.layer_state().is_active(planck::NAV));
}

#[test]
fn test_shifted_media_keys_become_volume_keys() {
    let mut map = planck::default_keymap();
    let keymap: KeyMap<{ planck::ROW }, { planck::COL }, { planck::NUM_LAYER }> =
        KeyMap::new(&mut map, planck::behavior_config());

    let shift = HidModifiers::new().with_left_shift(true);
    assert_eq!(
        keymap.resolve_output(KeyCode::MediaPrevTrack, shift),
        (KeyCode::AudioVolUp, HidModifiers::new())
    );
    assert_eq!(
        keymap.resolve_output(KeyCode::MediaNextTrack, shift),
        (KeyCode::AudioVolDown, HidModifiers::new())
    );
    assert_eq!(
        keymap.resolve_output(KeyCode::MediaPlayPause, shift),
        (KeyCode::AudioMute, HidModifiers::new())
    );
}

#[test]
fn test_override_needs_shift_and_no_cag() {
    let mut map = planck::default_keymap();
    let keymap: KeyMap<{ planck::ROW }, { planck::COL }, { planck::NUM_LAYER }> =
        KeyMap::new(&mut map, planck::behavior_config());

    // bare media key passes through
    assert_eq!(
        keymap.resolve_output(KeyCode::MediaPrevTrack, HidModifiers::new()),
        (KeyCode::MediaPrevTrack, HidModifiers::new())
    );

    // ctrl on top of shift disables the override, modifiers untouched
    let held = HidModifiers::new().with_left_shift(true).with_right_ctrl(true);
    assert_eq!(
        keymap.resolve_output(KeyCode::MediaPrevTrack, held),
        (KeyCode::MediaPrevTrack, held)
    );
}

#[test]
fn test_mouse_keys_reachable_through_rat() {
    let mut map = planck::default_keymap();
    let mut keymap: KeyMap<{ planck::ROW }, { planck::COL }, { planck::NUM_LAYER }> =
        KeyMap::new(&mut map, planck::behavior_config());

    send_events(&mut keymap, &[(3, 4, true), (3, 7, true)]);
    let action = keymap.process_key_event(layercake::event::KeyEvent {
        row: 0,
        col: 2,
        pressed: true,
    });
    assert_eq!(action, k!(MouseUp));
}

#[test]
fn test_base_layer_is_plain_qwerty() {
    let map = planck::default_keymap();
    assert_eq!(map[planck::TXT as usize][0][1], k!(Q));
    assert_eq!(map[planck::TXT as usize][2][11], k!(RShift));
}
