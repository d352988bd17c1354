//! Layered configuration for the consuming UI layer.
//!
//! Configs are built in two phases: a partial, caller-facing input is
//! validated and expanded into a complete config, then later defaults may
//! fill fields the caller left unset. Defaulting layers explicitly:
//! library default, then caller-of-library default, then the end user's
//! value.

mod builder;
mod dialog;
mod table;

pub use builder::{merge, BaseData, ConfigBuilder, ConfigError};
pub use dialog::{ConfirmDialogConfig, ConfirmDialogInput, DialogRole};
pub use table::{TableColumn, TableConfig, TableInput};
