//! Key-binding configuration
//!
//! One explicit `{action: [key_codes]}` table built at startup and passed
//! into the session; no global binding state. The defaults use the
//! absolute-movement scheme. A RON file can replace the whole table, which
//! is how the orientation-relative scheme is selected:
//!
//! ```ron
//! (
//!     bindings: {
//!         move_forward: ["Up", "W"],
//!         move_backward: ["Down", "S"],
//!         strafe_left: ["Right", "D"],
//!         strafe_right: ["Left", "A"],
//!         rotate_left: ["Q"],
//!         rotate_right: ["E"],
//!     },
//! )
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use macroquad::input::KeyCode;
use serde::{Deserialize, Serialize};

use super::Action;
use crate::logging::GameLog;

/// On-disk shape of a bindings file. Key names that don't resolve to a
/// known key are skipped; actions missing from the file end up unbound.
#[derive(Debug, Serialize, Deserialize)]
pub struct ControlsFile {
    pub bindings: HashMap<Action, Vec<String>>,
}

/// The input-mapping configuration: which keys trigger which actions.
#[derive(Debug, Clone)]
pub struct ControlMap {
    bindings: HashMap<Action, Vec<KeyCode>>,
}

impl ControlMap {
    /// Map with no bindings at all.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Default scheme: absolute movement on arrows/WASD, Q/E to rotate.
    pub fn default_bindings() -> Self {
        let mut map = Self::empty();
        map.bind(Action::MoveNorth, vec![KeyCode::Up, KeyCode::W]);
        map.bind(Action::MoveSouth, vec![KeyCode::Down, KeyCode::S]);
        map.bind(Action::MoveEast, vec![KeyCode::Right, KeyCode::D]);
        map.bind(Action::MoveWest, vec![KeyCode::Left, KeyCode::A]);
        map.bind(Action::RotateLeft, vec![KeyCode::Q]);
        map.bind(Action::RotateRight, vec![KeyCode::E]);
        map.bind(Action::Attack, vec![KeyCode::R]);
        map.bind(Action::Inventory, vec![KeyCode::I, KeyCode::B]);
        map
    }

    /// Replace the keys bound to `action`.
    pub fn bind(&mut self, action: Action, keys: Vec<KeyCode>) {
        let _ = self.bindings.insert(action, keys);
    }

    /// Keys currently bound to `action`.
    pub fn keys_for(&self, action: Action) -> &[KeyCode] {
        self.bindings.get(&action).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All actions `key` is bound to, in fixed dispatch order.
    pub fn actions_for(&self, key: KeyCode) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|action| self.keys_for(*action).contains(&key))
            .collect()
    }

    /// Parse a bindings table from RON text.
    pub fn from_ron_str(text: &str) -> Result<Self, ron::error::SpannedError> {
        let file: ControlsFile = ron::from_str(text)?;
        let mut map = Self::empty();
        for (action, names) in file.bindings {
            let keys = names
                .iter()
                .filter_map(|name| key_from_name(name))
                .collect();
            map.bind(action, keys);
        }
        Ok(map)
    }

    /// Load bindings from `path`, falling back to the defaults when the
    /// file is absent or malformed.
    pub fn load_or_default(path: &Path, log: &dyn GameLog) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => match Self::from_ron_str(&text) {
                Ok(map) => {
                    log.info(&format!("loaded key bindings from {}", path.display()));
                    map
                }
                Err(err) => {
                    log.warning(&format!(
                        "ignoring malformed bindings file {}: {err}",
                        path.display()
                    ));
                    Self::default_bindings()
                }
            },
            Err(_) => Self::default_bindings(),
        }
    }
}

impl Default for ControlMap {
    fn default() -> Self {
        Self::default_bindings()
    }
}

/// Resolve a human-readable key name from a bindings file.
fn key_from_name(name: &str) -> Option<KeyCode> {
    let key = match name {
        "A" => KeyCode::A,
        "B" => KeyCode::B,
        "C" => KeyCode::C,
        "D" => KeyCode::D,
        "E" => KeyCode::E,
        "F" => KeyCode::F,
        "G" => KeyCode::G,
        "H" => KeyCode::H,
        "I" => KeyCode::I,
        "J" => KeyCode::J,
        "K" => KeyCode::K,
        "L" => KeyCode::L,
        "M" => KeyCode::M,
        "N" => KeyCode::N,
        "O" => KeyCode::O,
        "P" => KeyCode::P,
        "Q" => KeyCode::Q,
        "R" => KeyCode::R,
        "S" => KeyCode::S,
        "T" => KeyCode::T,
        "U" => KeyCode::U,
        "V" => KeyCode::V,
        "W" => KeyCode::W,
        "X" => KeyCode::X,
        "Y" => KeyCode::Y,
        "Z" => KeyCode::Z,
        "0" => KeyCode::Key0,
        "1" => KeyCode::Key1,
        "2" => KeyCode::Key2,
        "3" => KeyCode::Key3,
        "4" => KeyCode::Key4,
        "5" => KeyCode::Key5,
        "6" => KeyCode::Key6,
        "7" => KeyCode::Key7,
        "8" => KeyCode::Key8,
        "9" => KeyCode::Key9,
        "Up" => KeyCode::Up,
        "Down" => KeyCode::Down,
        "Left" => KeyCode::Left,
        "Right" => KeyCode::Right,
        "Space" => KeyCode::Space,
        "Tab" => KeyCode::Tab,
        "Enter" => KeyCode::Enter,
        "LeftShift" => KeyCode::LeftShift,
        "RightShift" => KeyCode::RightShift,
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NopLog;
    use std::io::Write;

    #[test]
    fn test_default_bindings_resolve() {
        let map = ControlMap::default_bindings();
        assert_eq!(map.actions_for(KeyCode::W), vec![Action::MoveNorth]);
        assert_eq!(map.actions_for(KeyCode::Up), vec![Action::MoveNorth]);
        assert_eq!(map.actions_for(KeyCode::Q), vec![Action::RotateLeft]);
        // E rotates right and nothing else in the default scheme.
        assert_eq!(map.actions_for(KeyCode::E), vec![Action::RotateRight]);
    }

    #[test]
    fn test_unbound_key_resolves_to_nothing() {
        let map = ControlMap::default_bindings();
        assert!(map.actions_for(KeyCode::Z).is_empty());
        assert!(map.actions_for(KeyCode::Space).is_empty());
    }

    #[test]
    fn test_ron_table_replaces_defaults() {
        let text = r#"
            (
                bindings: {
                    move_forward: ["Up", "W"],
                    strafe_left: ["Right", "D"],
                    rotate_left: ["Q"],
                },
            )
        "#;
        let map = ControlMap::from_ron_str(text).unwrap();
        assert_eq!(map.actions_for(KeyCode::W), vec![Action::MoveForward]);
        assert_eq!(map.actions_for(KeyCode::D), vec![Action::StrafeLeft]);
        // Actions absent from the file are unbound.
        assert!(map.actions_for(KeyCode::Down).is_empty());
    }

    #[test]
    fn test_unknown_key_names_are_skipped() {
        let text = r#"(bindings: { rotate_left: ["Hyper", "Q"] })"#;
        let map = ControlMap::from_ron_str(text).unwrap();
        assert_eq!(map.keys_for(Action::RotateLeft), &[KeyCode::Q]);
    }

    #[test]
    fn test_load_or_default_falls_back_on_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "this is not ron").unwrap();
        let map = ControlMap::load_or_default(file.path(), &NopLog);
        assert_eq!(map.actions_for(KeyCode::W), vec![Action::MoveNorth]);
    }

    #[test]
    fn test_load_or_default_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"(bindings: {{ move_backward: ["S"] }})"#).unwrap();
        let map = ControlMap::load_or_default(file.path(), &NopLog);
        assert_eq!(map.actions_for(KeyCode::S), vec![Action::MoveBackward]);
        assert!(map.actions_for(KeyCode::W).is_empty());
    }
}
