//! Location text inputs addressed by their page element identifier

use std::fmt;
use std::str::FromStr;

use domain::LocationInput;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// The two location inputs of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputField {
    Start,
    End,
}

impl InputField {
    /// Page element identifier
    #[must_use]
    pub const fn element_id(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

impl FromStr for InputField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "end" => Ok(Self::End),
            _ => Err(format!("Unknown input field: {s}. Use 'start' or 'end'")),
        }
    }
}

/// A text input whose value is written by typing or by autocomplete
pub struct TextInput {
    field: InputField,
    value: watch::Sender<LocationInput>,
}

impl fmt::Debug for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInput")
            .field("field", &self.field)
            .field("value", &*self.value.borrow())
            .finish()
    }
}

impl TextInput {
    /// Create an empty input
    #[must_use]
    pub fn new(field: InputField) -> Self {
        let (value, _) = watch::channel(LocationInput::default());
        Self { field, value }
    }

    /// Which input this is
    #[must_use]
    pub const fn field(&self) -> InputField {
        self.field
    }

    /// Overwrite the current text
    pub fn set(&self, text: impl Into<LocationInput>) {
        let text = text.into();
        self.value.send_if_modified(|current| {
            if *current == text {
                return false;
            }
            *current = text;
            true
        });
    }

    /// Current text
    #[must_use]
    pub fn value(&self) -> LocationInput {
        self.value.borrow().clone()
    }

    /// Receiver notified on every text change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LocationInput> {
        self.value.subscribe()
    }
}
