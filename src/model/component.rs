//! Interactive message components (action rows, buttons, string selects).
//!
//! Components serialize with the API's integer `type` and `style` codes.
//! Use [`crate::builders::create_components`] to validate rows before
//! attaching them to a message.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Component type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    ActionRow = 1,
    Button = 2,
    StringSelect = 3,
}

impl Serialize for ComponentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for ComponentType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            1 => Ok(ComponentType::ActionRow),
            2 => Ok(ComponentType::Button),
            3 => Ok(ComponentType::StringSelect),
            other => Err(D::Error::custom(format!("unsupported component type {}", other))),
        }
    }
}

/// Reads a `type` code and rejects any other kind than `expected`, so an
/// untagged [`Component`] only matches the variant its code names.
fn expect_kind<'de, D: Deserializer<'de>>(
    deserializer: D,
    expected: ComponentType,
) -> Result<ComponentType, D::Error> {
    let kind = ComponentType::deserialize(deserializer)?;
    if kind == expected {
        Ok(kind)
    } else {
        Err(D::Error::custom(format!(
            "expected component type {}, got {}",
            expected as u8, kind as u8
        )))
    }
}

fn action_row_kind<'de, D: Deserializer<'de>>(d: D) -> Result<ComponentType, D::Error> {
    expect_kind(d, ComponentType::ActionRow)
}

fn button_kind<'de, D: Deserializer<'de>>(d: D) -> Result<ComponentType, D::Error> {
    expect_kind(d, ComponentType::Button)
}

fn string_select_kind<'de, D: Deserializer<'de>>(d: D) -> Result<ComponentType, D::Error> {
    expect_kind(d, ComponentType::StringSelect)
}

/// Button style codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonStyle {
    Primary = 1,
    Secondary = 2,
    Success = 3,
    Danger = 4,
    /// Opens `url`; the only style without a `custom_id`.
    Link = 5,
}

impl Serialize for ButtonStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for ButtonStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            1 => Ok(ButtonStyle::Primary),
            2 => Ok(ButtonStyle::Secondary),
            3 => Ok(ButtonStyle::Success),
            4 => Ok(ButtonStyle::Danger),
            5 => Ok(ButtonStyle::Link),
            other => Err(D::Error::custom(format!("unsupported button style {}", other))),
        }
    }
}

/// A row of up to five components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRow {
    #[serde(rename = "type", deserialize_with = "action_row_kind")]
    kind: ComponentType,
    pub components: Vec<Component>,
}

impl ActionRow {
    pub fn new(components: impl IntoIterator<Item = Component>) -> Self {
        Self {
            kind: ComponentType::ActionRow,
            components: components.into_iter().collect(),
        }
    }

    pub fn kind(&self) -> ComponentType {
        self.kind
    }
}

/// A component placed inside an action row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Component {
    Button(Button),
    StringSelect(StringSelect),
}

impl Component {
    /// The developer-defined id, if the component has one.
    pub fn custom_id(&self) -> Option<&str> {
        match self {
            Component::Button(button) => button.custom_id.as_deref(),
            Component::StringSelect(select) => Some(&select.custom_id),
        }
    }
}

impl From<Button> for Component {
    fn from(button: Button) -> Self {
        Component::Button(button)
    }
}

impl From<StringSelect> for Component {
    fn from(select: StringSelect) -> Self {
        Component::StringSelect(select)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    #[serde(rename = "type", deserialize_with = "button_kind")]
    kind: ComponentType,
    pub style: ButtonStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<PartialEmoji>,
    #[serde(default)]
    pub disabled: bool,
}

impl Button {
    /// Interactive button; give it an id with [`Button::custom_id`].
    pub fn new(label: impl Into<String>, style: ButtonStyle) -> Self {
        Self {
            kind: ComponentType::Button,
            style,
            label: Some(label.into()),
            custom_id: None,
            url: None,
            emoji: None,
            disabled: false,
        }
    }

    /// Link-style button opening `url`.
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::new(label, ButtonStyle::Link)
        }
    }

    pub fn custom_id(mut self, custom_id: impl Into<String>) -> Self {
        self.custom_id = Some(custom_id.into());
        self
    }

    pub fn emoji(mut self, emoji: PartialEmoji) -> Self {
        self.emoji = Some(emoji);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Dropdown of text options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringSelect {
    #[serde(rename = "type", deserialize_with = "string_select_kind")]
    kind: ComponentType,
    pub custom_id: String,
    pub options: Vec<SelectOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_values: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_values: Option<u8>,
    #[serde(default)]
    pub disabled: bool,
}

impl StringSelect {
    pub fn new(
        custom_id: impl Into<String>,
        options: impl IntoIterator<Item = SelectOption>,
    ) -> Self {
        Self {
            kind: ComponentType::StringSelect,
            custom_id: custom_id.into(),
            options: options.into_iter().collect(),
            placeholder: None,
            min_values: None,
            max_values: None,
            disabled: false,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn min_values(mut self, min: u8) -> Self {
        self.min_values = Some(min);
        self
    }

    pub fn max_values(mut self, max: u8) -> Self {
        self.max_values = Some(max);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<PartialEmoji>,
    #[serde(default)]
    pub default: bool,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            description: None,
            emoji: None,
            default: false,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn emoji(mut self, emoji: PartialEmoji) -> Self {
        self.emoji = Some(emoji);
        self
    }

    /// Pre-select this option.
    pub fn selected(mut self, selected: bool) -> Self {
        self.default = selected;
        self
    }
}

/// Unicode emoji (`name` only) or custom emoji (`id` + `name`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialEmoji {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub animated: bool,
}

impl PartialEmoji {
    pub fn unicode(emoji: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(emoji.into()),
            animated: false,
        }
    }
}
