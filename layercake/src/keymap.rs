use crate::action::{Action, KeyAction};
use crate::combination::CombinationKeys;
use crate::config::BehaviorConfig;
use crate::event::KeyEvent;
use crate::key_override::resolve_override;
use crate::keycode::KeyCode;
use crate::layer::LayerState;
use crate::modifier::HidModifiers;

/// Keymap represents the stack of layers.
///
/// The conception of Keymap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
///
/// Keymap should be binded to the actual pcb matrix definition. The host
/// detects hardware key strokes and uses tuple `(row, col, layer)` to
/// retrieve the action from Keymap.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Layers
    pub(crate) layers: &'a mut [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Current active-layer bitmask
    layer_state: LayerState,
    /// Default layer number, max: 32
    default_layer: u8,
    /// Layer cache
    layer_cache: [[u8; COL]; ROW],
    /// Combination-key state, present when the keyboard declares the keys
    combination: Option<CombinationKeys>,
    /// Options for configurable action behavior
    pub(crate) behavior: BehaviorConfig,
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<'a, ROW, COL, NUM_LAYER> {
    pub fn new(action_map: &'a mut [[[KeyAction; COL]; ROW]; NUM_LAYER], behavior: BehaviorConfig) -> Self {
        let combination = behavior.combination.map(CombinationKeys::new);
        KeyMap {
            layers: action_map,
            layer_state: LayerState::new(),
            default_layer: 0,
            layer_cache: [[0; COL]; ROW],
            combination,
            behavior,
        }
    }

    pub fn get_keymap_config(&self) -> (usize, usize, usize) {
        (ROW, COL, NUM_LAYER)
    }

    /// Get the default layer number
    pub fn get_default_layer(&self) -> u8 {
        self.default_layer
    }

    /// Set the default layer number
    pub fn set_default_layer(&mut self, layer_num: u8) {
        self.default_layer = layer_num;
    }

    /// Current active-layer bitmask
    pub fn layer_state(&self) -> LayerState {
        self.layer_state
    }

    pub fn set_action_at(&mut self, row: usize, col: usize, layer_num: usize, action: KeyAction) {
        self.layers[layer_num][row][col] = action;
    }

    /// Fetch the action in keymap at the given position
    pub fn get_action_at(&self, row: usize, col: usize, layer_num: usize) -> KeyAction {
        self.layers[layer_num][row][col]
    }

    /// Fetch the action in keymap, with layer cache.
    ///
    /// A pressed key resolves against the current layer stack and caches the
    /// resolving layer, so that its release resolves in the same layer even
    /// if the stack changed in between.
    pub fn get_action_with_layer_cache(&mut self, key_event: KeyEvent) -> KeyAction {
        let row = key_event.row as usize;
        let col = key_event.col as usize;
        if !key_event.pressed {
            // Releasing a pressed key, use cached layer and restore the cache
            let layer = self.pop_layer_from_cache(row, col);
            return self.layers[layer as usize][row][col];
        }

        // Iterate from higher layer to lower layer, the lowest checked layer is the default layer
        let mut resolved = None;
        for (layer_idx, layer) in self.layers.iter().enumerate().rev() {
            let layer_num = layer_idx as u8;
            if self.layer_state.is_active(layer_num) || layer_num == self.default_layer {
                let action = layer[row][col];
                if action != KeyAction::Transparent {
                    // Found a valid action in the layer
                    resolved = Some((layer_num, action));
                    break;
                }
            }

            if layer_num == self.default_layer {
                // No action
                break;
            }
        }

        match resolved {
            Some((layer_num, action)) => {
                self.save_layer_cache(row, col, layer_num);
                action
            }
            None => KeyAction::No,
        }
    }

    /// Fetch the action for a key event and apply its layer bookkeeping.
    ///
    /// Layer actions mutate the active-layer bitmask; the tri-layer rule is
    /// re-run after the base toggle state is computed.
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> KeyAction {
        let key_action = self.get_action_with_layer_cache(key_event);
        match key_action.to_action() {
            Action::LayerOn(layer_num) => {
                if key_event.pressed {
                    self.activate_layer(layer_num);
                } else {
                    self.deactivate_layer(layer_num);
                }
            }
            Action::LayerOff(layer_num) => {
                if key_event.pressed {
                    self.deactivate_layer(layer_num);
                }
            }
            Action::LayerToggle(layer_num) => {
                if key_event.pressed {
                    self.toggle_layer(layer_num);
                }
            }
            Action::DefaultLayer(layer_num) => {
                if key_event.pressed {
                    self.set_default_layer(layer_num);
                }
            }
            Action::CombinationKey(side) => {
                if let Some(combination) = &mut self.combination {
                    self.layer_state = combination.process(side, key_event.pressed, self.layer_state);
                    self.update_tri_layer();
                }
            }
            _ => (),
        }
        key_action
    }

    /// Apply key overrides to an output keycode before report generation.
    /// Returns the effective keycode and the effective modifiers.
    pub fn resolve_output(&self, key: KeyCode, held: HidModifiers) -> (KeyCode, HidModifiers) {
        match resolve_override(
            &self.behavior.key_override.overrides,
            key,
            held,
            self.get_activated_layer(),
        ) {
            Some(output) => (output.replacement, held & !output.suppress),
            None => (key, held),
        }
    }

    pub fn get_activated_layer(&self) -> u8 {
        for layer_idx in (0..NUM_LAYER as u8).rev() {
            if self.layer_state.is_active(layer_idx) || layer_idx == self.default_layer {
                return layer_idx;
            }
        }

        self.default_layer
    }

    fn pop_layer_from_cache(&mut self, row: usize, col: usize) -> u8 {
        let layer = self.layer_cache[row][col];
        self.layer_cache[row][col] = self.default_layer;

        layer
    }

    fn save_layer_cache(&mut self, row: usize, col: usize, layer_num: u8) {
        self.layer_cache[row][col] = layer_num;
    }

    /// Re-run the tri-layer rule against the current layer state
    fn update_tri_layer(&mut self) {
        if let Some(tri_layer) = self.behavior.tri_layer {
            self.layer_state = tri_layer.resolve(self.layer_state);
        }
    }

    /// Activate given layer
    pub fn activate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.layer_state.activate(layer_num);
        self.update_tri_layer();
    }

    /// Deactivate given layer
    pub fn deactivate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.layer_state.deactivate(layer_num);
        self.update_tri_layer();
    }

    /// Toggle given layer
    pub fn toggle_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.layer_state.toggle(layer_num);
        self.update_tri_layer();
    }
}
