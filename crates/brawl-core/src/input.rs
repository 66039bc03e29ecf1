//! Human control snapshot and key bindings.
//!
//! The host feeds raw key names (as reported by its windowing layer) through
//! [`ControlBindings`], which maps them onto the five [`Control`]s. The set of
//! currently held controls is a [`ControlState`] bitflag snapshot that the
//! human decision source reads fresh every tick.

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// A single game control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    /// Walk left
    Left,
    /// Walk right
    Right,
    /// Jump
    Jump,
    /// Attack
    Attack,
    /// Block
    Block,
}

impl Control {
    /// All controls in binding order.
    pub const ALL: [Self; 5] = [Self::Left, Self::Right, Self::Jump, Self::Attack, Self::Block];

    /// The bitflag corresponding to this control.
    #[must_use]
    pub const fn flag(self) -> ControlState {
        match self {
            Self::Left => ControlState::LEFT,
            Self::Right => ControlState::RIGHT,
            Self::Jump => ControlState::JUMP,
            Self::Attack => ControlState::ATTACK,
            Self::Block => ControlState::BLOCK,
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
            Self::Jump => write!(f, "Jump"),
            Self::Attack => write!(f, "Attack"),
            Self::Block => write!(f, "Block"),
        }
    }
}

bitflags! {
    /// Controls currently held by the human player.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ControlState: u8 {
        /// Walk left held
        const LEFT = 1 << 0;
        /// Walk right held
        const RIGHT = 1 << 1;
        /// Jump held
        const JUMP = 1 << 2;
        /// Attack held
        const ATTACK = 1 << 3;
        /// Block held
        const BLOCK = 1 << 4;
    }
}

impl ControlState {
    /// Returns `true` if `control` is held.
    #[must_use]
    pub const fn is_held(self, control: Control) -> bool {
        self.contains(control.flag())
    }

    /// Marks `control` as held or released.
    pub fn set_held(&mut self, control: Control, held: bool) {
        self.set(control.flag(), held);
    }
}

/// Host key names bound to each control.
///
/// Key names are compared exactly, so `"z"` and `"Z"` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlBindings {
    /// Key for [`Control::Left`]
    pub left: String,
    /// Key for [`Control::Right`]
    pub right: String,
    /// Key for [`Control::Jump`]
    pub jump: String,
    /// Key for [`Control::Attack`]
    pub attack: String,
    /// Key for [`Control::Block`]
    pub block: String,
}

impl Default for ControlBindings {
    fn default() -> Self {
        Self {
            left: "ArrowLeft".to_string(),
            right: "ArrowRight".to_string(),
            jump: "ArrowUp".to_string(),
            attack: "z".to_string(),
            block: "x".to_string(),
        }
    }
}

impl ControlBindings {
    /// Returns the key bound to `control`.
    #[must_use]
    pub fn key_for(&self, control: Control) -> &str {
        match control {
            Control::Left => &self.left,
            Control::Right => &self.right,
            Control::Jump => &self.jump,
            Control::Attack => &self.attack,
            Control::Block => &self.block,
        }
    }

    /// Looks up the control bound to a raw key name, if any.
    ///
    /// ```
    /// use brawl_core::input::{Control, ControlBindings};
    ///
    /// let bindings = ControlBindings::default();
    /// assert_eq!(bindings.control_for("ArrowUp"), Some(Control::Jump));
    /// assert_eq!(bindings.control_for("q"), None);
    /// ```
    #[must_use]
    pub fn control_for(&self, key: &str) -> Option<Control> {
        Control::ALL
            .into_iter()
            .find(|control| self.key_for(*control) == key)
    }
}
