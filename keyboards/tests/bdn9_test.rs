pub mod common;

use layercake::k;
use layercake::keymap::KeyMap;
use layercake_keyboards::bdn9;

use crate::common::send_events;

// The left combination key is (0, 0), the right one is (0, 2)
const LEFT_KEY: (u8, u8) = (0, 0);
const RIGHT_KEY: (u8, u8) = (0, 2);

#[test]
fn test_left_then_right_opens_all_three_layers() {
    let mut map = bdn9::default_keymap();
    let mut keymap: KeyMap<{ bdn9::ROW }, { bdn9::COL }, { bdn9::NUM_LAYER }> =
        KeyMap::new(&mut map, bdn9::behavior_config());

    send_events(&mut keymap, &[(LEFT_KEY.0, LEFT_KEY.1, true)]);
    assert!(keymap.layer_state().is_active(bdn9::LEFT));
    assert!(!keymap.layer_state().is_active(bdn9::BOTH));

    send_events(&mut keymap, &[(RIGHT_KEY.0, RIGHT_KEY.1, true)]);
    assert!(keymap.layer_state().is_active(bdn9::LEFT));
    assert!(keymap.layer_state().is_active(bdn9::RIGHT));
    assert!(keymap.layer_state().is_active(bdn9::BOTH));
}

#[test]
fn test_either_release_closes_all_three_layers() {
    for release in [LEFT_KEY, RIGHT_KEY] {
        let mut map = bdn9::default_keymap();
        let mut keymap: KeyMap<{ bdn9::ROW }, { bdn9::COL }, { bdn9::NUM_LAYER }> =
            KeyMap::new(&mut map, bdn9::behavior_config());

        send_events(
            &mut keymap,
            &[
                (LEFT_KEY.0, LEFT_KEY.1, true),
                (RIGHT_KEY.0, RIGHT_KEY.1, true),
                (release.0, release.1, false),
            ],
        );
        assert_eq!(keymap.layer_state().into_bits(), 0, "{release:?} release left layers open");
    }
}

#[test]
fn test_single_side_opens_only_its_layer() {
    let mut map = bdn9::default_keymap();
    let mut keymap: KeyMap<{ bdn9::ROW }, { bdn9::COL }, { bdn9::NUM_LAYER }> =
        KeyMap::new(&mut map, bdn9::behavior_config());

    send_events(&mut keymap, &[(RIGHT_KEY.0, RIGHT_KEY.1, true)]);
    assert!(keymap.layer_state().is_active(bdn9::RIGHT));
    assert!(!keymap.layer_state().is_active(bdn9::LEFT));
    assert!(!keymap.layer_state().is_active(bdn9::BOTH));

    send_events(&mut keymap, &[(RIGHT_KEY.0, RIGHT_KEY.1, false)]);
    assert_eq!(keymap.layer_state().into_bits(), 0);
}

#[test]
fn test_layers_change_key_meaning() {
    let mut map = bdn9::default_keymap();
    let mut keymap: KeyMap<{ bdn9::ROW }, { bdn9::COL }, { bdn9::NUM_LAYER }> =
        KeyMap::new(&mut map, bdn9::behavior_config());

    // base layer: volume down
    let action = keymap.process_key_event(layercake::event::KeyEvent {
        row: 1,
        col: 0,
        pressed: true,
    });
    assert_eq!(action, k!(AudioVolDown));
    send_events(&mut keymap, &[(1, 0, false)]);

    // left layer: home
    send_events(&mut keymap, &[(LEFT_KEY.0, LEFT_KEY.1, true)]);
    let action = keymap.process_key_event(layercake::event::KeyEvent {
        row: 1,
        col: 0,
        pressed: true,
    });
    assert_eq!(action, k!(Home));
    send_events(&mut keymap, &[(1, 0, false)]);

    // both layers: NKRO on
    send_events(&mut keymap, &[(RIGHT_KEY.0, RIGHT_KEY.1, true)]);
    let action = keymap.process_key_event(layercake::event::KeyEvent {
        row: 1,
        col: 0,
        pressed: true,
    });
    assert_eq!(action, k!(MagicNkroOn));
}
