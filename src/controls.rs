//! Key bindings
//!
//! Maps raw key names (as delivered by the platform) to game actions.
//! Each action accepts several keys, so WASD and the arrow keys both move.

use serde::{Deserialize, Deserializer, Serialize};

/// Movement direction for a single key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// What a key press asks the simulation to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Move(Direction),
    Attack,
}

/// Key binding table
///
/// In `settings.json` every binding is either a single key name or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Controls {
    #[serde(deserialize_with = "one_or_many")]
    pub up: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub down: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub left: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub right: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub attack: Vec<String>,
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            up: keys(&["w", "ArrowUp"]),
            down: keys(&["s", "ArrowDown"]),
            left: keys(&["a", "ArrowLeft"]),
            right: keys(&["d", "ArrowRight"]),
            attack: keys(&["l"]),
        }
    }
}

/// Accept `"w"` as well as `["w", "ArrowUp"]`
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum KeyList {
        One(String),
        Many(Vec<String>),
    }

    Ok(match KeyList::deserialize(deserializer)? {
        KeyList::One(key) => vec![key],
        KeyList::Many(keys) => keys,
    })
}

impl Controls {
    /// Resolve a key name to its bound action (case-insensitive)
    pub fn action_for(&self, key: &str) -> Option<Action> {
        let bindings = [
            (&self.up, Action::Move(Direction::Up)),
            (&self.down, Action::Move(Direction::Down)),
            (&self.left, Action::Move(Direction::Left)),
            (&self.right, Action::Move(Direction::Right)),
            (&self.attack, Action::Attack),
        ];
        bindings
            .into_iter()
            .find(|(bound, _)| bound.iter().any(|name| name.eq_ignore_ascii_case(key)))
            .map(|(_, action)| action)
    }

    /// Primary key bound to an action (used by drivers that synthesize input)
    pub fn key_for(&self, action: Action) -> Option<&str> {
        let bound = match action {
            Action::Move(Direction::Up) => &self.up,
            Action::Move(Direction::Down) => &self.down,
            Action::Move(Direction::Left) => &self.left,
            Action::Move(Direction::Right) => &self.right,
            Action::Attack => &self.attack,
        };
        bound.first().map(String::as_str)
    }
}
