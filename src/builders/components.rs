//! Validation of component rows before they are sent.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::component::{ActionRow, Button, ButtonStyle, Component, StringSelect};

pub const MAX_ACTION_ROWS: usize = 5;
pub const MAX_ROW_COMPONENTS: usize = 5;
pub const MAX_SELECT_OPTIONS: usize = 25;
pub const MAX_SELECT_VALUES: u8 = 25;

/// A component layout the API would reject.
///
/// `custom_id` names the offending component, or is empty when the problem
/// is not tied to a single component.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid component '{custom_id}': {reason}")]
pub struct ComponentError {
    pub custom_id: String,
    pub reason: String,
}

impl ComponentError {
    fn new(custom_id: &str, reason: impl Into<String>) -> Self {
        Self {
            custom_id: custom_id.to_string(),
            reason: reason.into(),
        }
    }
}

/// Validate action rows and hand them back ready for a message.
pub fn create_components(rows: Vec<ActionRow>) -> Result<Vec<ActionRow>, ComponentError> {
    if rows.len() > MAX_ACTION_ROWS {
        return Err(ComponentError::new(
            "",
            format!("too many rows, max {}", MAX_ACTION_ROWS),
        ));
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for row in &rows {
        if row.components.len() > MAX_ROW_COMPONENTS {
            return Err(ComponentError::new(
                "",
                format!("too many components in a row, max {}", MAX_ROW_COMPONENTS),
            ));
        }
        for component in &row.components {
            match component {
                Component::Button(button) => check_button(button)?,
                Component::StringSelect(select) => check_select(select)?,
            }
            if let Some(id) = component.custom_id() {
                if !seen.insert(id) {
                    return Err(ComponentError::new(id, "duplicate custom id"));
                }
            }
        }
    }

    Ok(rows)
}

fn check_button(button: &Button) -> Result<(), ComponentError> {
    let id = button.custom_id.as_deref().unwrap_or("");
    if button.style == ButtonStyle::Link {
        if button.url.is_none() {
            return Err(ComponentError::new(id, "link button requires a url"));
        }
        if button.custom_id.is_some() {
            return Err(ComponentError::new(id, "link button cannot have a custom id"));
        }
    } else if button.custom_id.is_none() {
        return Err(ComponentError::new("", "non-link button requires a custom id"));
    }
    Ok(())
}

fn check_select(select: &StringSelect) -> Result<(), ComponentError> {
    let id = select.custom_id.as_str();
    if select.options.len() > MAX_SELECT_OPTIONS {
        return Err(ComponentError::new(
            id,
            format!("too many options, max {}", MAX_SELECT_OPTIONS),
        ));
    }
    if select.min_values.unwrap_or(1) > MAX_SELECT_VALUES {
        return Err(ComponentError::new(
            id,
            "invalid min value, valid min value is between 0 and 25",
        ));
    }
    let max = select.max_values.unwrap_or(1);
    if max == 0 || max > MAX_SELECT_VALUES {
        return Err(ComponentError::new(
            id,
            "invalid max value, valid max value is between 1 and 25",
        ));
    }
    Ok(())
}
