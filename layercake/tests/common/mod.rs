use layercake::event::KeyEvent;
use layercake::keymap::KeyMap;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Feed a (row, col, pressed) sequence through the keymap.
pub fn send_events<const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    keymap: &mut KeyMap<ROW, COL, NUM_LAYER>,
    sequence: &[(u8, u8, bool)],
) {
    for &(row, col, pressed) in sequence {
        keymap.process_key_event(KeyEvent { row, col, pressed });
    }
}
