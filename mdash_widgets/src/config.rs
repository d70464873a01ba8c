use std::ops::{Deref, DerefMut};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

pub const VALUE_SLOTS: usize = 10;
pub const INPUT_SLOTS: usize = 10;
pub const TOGGLE_SLOTS: usize = 3;
pub const BUTTON_SLOTS: usize = 3;

/// Slot describing a toggle, value or input widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KeyedSlot {
    pub enable: bool,
    pub title: String,
    pub key: String,
}

impl KeyedSlot {
    /// An enabled slot.
    #[must_use]
    pub fn new(title: &str, key: &str) -> Self {
        Self {
            enable: true,
            title: title.to_string(),
            key: key.to_string(),
        }
    }
}

/// Slot describing a button widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ButtonSlot {
    pub enable: bool,
    pub title: String,
    pub method: String,
    pub params: Option<String>,
    pub icon: Option<String>,
}

impl ButtonSlot {
    /// An enabled slot without params or icon.
    #[must_use]
    pub fn new(title: &str, method: &str) -> Self {
        Self {
            enable: true,
            title: title.to_string(),
            method: method.to_string(),
            params: None,
            icon: None,
        }
    }
}

/// Fixed number of configuration slots of one category.
///
/// Deserializes from a list of at most `N` entries; missing trailing entries
/// are filled with disabled slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slots<T, const N: usize>([T; N]);

impl<T: Default, const N: usize> Default for Slots<T, N> {
    fn default() -> Self {
        Self(std::array::from_fn(|_| T::default()))
    }
}

impl<T, const N: usize> Deref for Slots<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T, const N: usize> DerefMut for Slots<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for Slots<T, N>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let mut slots = Vec::<T>::deserialize(deserializer)?;

        if slots.len() > N {
            return Err(D::Error::custom(format!(
                "expected at most {N} slots, found {}",
                slots.len()
            )));
        }

        slots.resize_with(N, T::default);
        let slots: [T; N] = slots
            .try_into()
            .map_err(|_| D::Error::custom("slot count mismatch"))?;

        Ok(Self(slots))
    }
}

/// Widget layout of a device, one fixed set of slots per widget kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetsConfig {
    pub value: Slots<KeyedSlot, VALUE_SLOTS>,
    pub input: Slots<KeyedSlot, INPUT_SLOTS>,
    pub toggle: Slots<KeyedSlot, TOGGLE_SLOTS>,
    pub button: Slots<ButtonSlot, BUTTON_SLOTS>,
}

impl WidgetsConfig {
    /// Number of enabled slots across all categories.
    #[must_use]
    pub fn enabled_count(&self) -> usize {
        let keyed = self
            .value
            .iter()
            .chain(self.input.iter())
            .chain(self.toggle.iter())
            .filter(|slot| slot.enable)
            .count();

        keyed + self.button.iter().filter(|slot| slot.enable).count()
    }
}
