//! Confirmation dialog configuration.

use serde::{Deserialize, Serialize};

use super::builder::{BaseData, ConfigBuilder, ConfigError};

/// Visual role of the dialog, drives styling in the consuming UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogRole {
    #[default]
    Info,
    Delete,
}

/// Caller-facing partial input for a confirmation dialog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfirmDialogInput {
    pub title: Option<String>,
    /// Paragraphs of the dialog body.
    pub text: Option<Vec<String>>,
    pub confirm_button_label: Option<String>,
    pub cancel_button_label: Option<String>,
    /// Require the user to type `confirmation_text` before confirming.
    pub require_confirmation: Option<bool>,
    pub confirmation_text: Option<String>,
    pub role: Option<DialogRole>,
}

/// Complete confirmation dialog configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmDialogConfig {
    pub title: String,
    pub text: Vec<String>,
    pub confirm_button_label: String,
    pub cancel_button_label: String,
    pub require_confirmation: bool,
    pub confirmation_text: Option<String>,
    pub role: DialogRole,
}

impl BaseData<ConfirmDialogInput> for ConfirmDialogConfig {
    fn validate_input(input: &ConfirmDialogInput) -> Result<(), ConfigError> {
        let requires = input.require_confirmation.unwrap_or(false);

        if input.confirmation_text.is_some() && !requires {
            return Err(ConfigError::Invalid(
                "confirmationText is set but requireConfirmation is not enabled".to_string(),
            ));
        }
        if requires && input.confirmation_text.is_none() {
            return Err(ConfigError::Invalid(
                "requireConfirmation is enabled but no confirmationText is set".to_string(),
            ));
        }

        Ok(())
    }

    fn generate_base_data(input: &ConfirmDialogInput) -> Self {
        Self {
            title: input.title.clone().unwrap_or_else(|| "Confirmation".to_string()),
            text: input
                .text
                .clone()
                .unwrap_or_else(|| vec!["Are you sure?".to_string()]),
            confirm_button_label: input
                .confirm_button_label
                .clone()
                .unwrap_or_else(|| "Confirm".to_string()),
            cancel_button_label: input
                .cancel_button_label
                .clone()
                .unwrap_or_else(|| "Cancel".to_string()),
            require_confirmation: input.require_confirmation.unwrap_or(false),
            confirmation_text: input.confirmation_text.clone(),
            role: input.role.unwrap_or_default(),
        }
    }
}

impl ConfirmDialogConfig {
    pub fn builder(
        input: ConfirmDialogInput,
    ) -> Result<ConfigBuilder<ConfirmDialogInput, Self>, ConfigError> {
        ConfigBuilder::new(input)
    }
}
