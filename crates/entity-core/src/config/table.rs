//! CRUD table configuration.

use serde::{Deserialize, Serialize};

use super::builder::{BaseData, ConfigBuilder, ConfigError};
use crate::entity::Entity;
use crate::layout::visible_fields;

/// One column of a generated table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    pub header: String,
    /// Field keys rendered in this column.
    pub field_keys: Vec<String>,
}

/// Caller-facing partial input for a table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableInput {
    pub title: Option<String>,
    pub columns: Option<Vec<TableColumn>>,
    pub search_label: Option<String>,
    pub create_button_label: Option<String>,
    pub allow_create: Option<bool>,
    pub allow_edit: Option<bool>,
    pub allow_delete: Option<bool>,
}

/// Complete table configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    pub title: String,
    pub columns: Vec<TableColumn>,
    pub search_label: String,
    pub create_button_label: String,
    pub allow_create: bool,
    pub allow_edit: bool,
    pub allow_delete: bool,
}

impl BaseData<TableInput> for TableConfig {
    fn validate_input(input: &TableInput) -> Result<(), ConfigError> {
        if input.create_button_label.is_some() && input.allow_create == Some(false) {
            return Err(ConfigError::Invalid(
                "createButtonLabel is set but allowCreate is disabled".to_string(),
            ));
        }
        Ok(())
    }

    fn generate_base_data(input: &TableInput) -> Self {
        Self {
            title: input.title.clone().unwrap_or_default(),
            columns: input.columns.clone().unwrap_or_default(),
            search_label: input.search_label.clone().unwrap_or_else(|| "Search".to_string()),
            create_button_label: input
                .create_button_label
                .clone()
                .unwrap_or_else(|| "Create".to_string()),
            allow_create: input.allow_create.unwrap_or(true),
            allow_edit: input.allow_edit.unwrap_or(true),
            allow_delete: input.allow_delete.unwrap_or(true),
        }
    }
}

impl TableConfig {
    pub fn builder(input: TableInput) -> Result<ConfigBuilder<TableInput, Self>, ConfigError> {
        ConfigBuilder::new(input)
    }

    /// Table for one entity type. Title and columns the caller did not
    /// supply are derived from the entity's metadata: one column per
    /// displayed field, in display order.
    pub fn for_entity<E: Entity>(input: TableInput) -> Result<Self, ConfigError> {
        let columns: Vec<TableColumn> = visible_fields(E::descriptor())
            .into_iter()
            .map(|field| TableColumn {
                header: field.display_name.to_string(),
                field_keys: vec![field.name.to_string()],
            })
            .collect();

        Ok(Self::builder(input)?
            .with_default(|input| input.columns.is_some(), |data| &mut data.columns, columns)
            .with_default(
                |input| input.title.is_some(),
                |data| &mut data.title,
                E::entity_name().to_string(),
            )
            .build())
    }
}
