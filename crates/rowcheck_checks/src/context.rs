//! The provider handle threaded through the UI tree.
//!
//! A [`SchemaCheckContext`] is passed down explicitly, the way a context
//! provider scopes a value to a subtree. Its default value wraps
//! [`Unconfigured`], so components rendered outside a configured scope get
//! not-configured errors instead of silently passing.

use std::fmt;
use std::sync::Arc;

use rowcheck_foundation::{DataRow, Error};
use rowcheck_schema::SchemaFamily;
use tracing::trace;

use crate::checks::SchemaChecks;
use crate::config::CheckConfig;
use crate::family::FamilyChecks;
use crate::unconfigured::Unconfigured;

/// Cheaply cloneable handle to a check bundle and its configuration.
#[derive(Clone)]
pub struct SchemaCheckContext {
    checks: Arc<dyn SchemaChecks>,
    config: CheckConfig,
    configured: bool,
}

impl Default for SchemaCheckContext {
    fn default() -> Self {
        Self {
            checks: Arc::new(Unconfigured),
            config: CheckConfig::default(),
            configured: false,
        }
    }
}

impl SchemaCheckContext {
    /// Creates an unconfigured context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context backed by a frozen copy of `family`.
    #[must_use]
    pub fn provide(family: &SchemaFamily) -> Self {
        Self::provide_with(family, CheckConfig::default())
    }

    /// Creates a context backed by a frozen copy of `family`, with `config`.
    #[must_use]
    pub fn provide_with(family: &SchemaFamily, config: CheckConfig) -> Self {
        Self {
            checks: Arc::new(FamilyChecks::with_config(family, config.clone())),
            config,
            configured: true,
        }
    }

    /// Creates a context backed by a custom bundle.
    #[must_use]
    pub fn from_checks(checks: impl SchemaChecks + 'static, config: CheckConfig) -> Self {
        Self {
            checks: Arc::new(checks),
            config,
            configured: true,
        }
    }

    /// Returns the check bundle.
    #[must_use]
    pub fn checks(&self) -> &dyn SchemaChecks {
        self.checks.as_ref()
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Returns true if a family or custom bundle was provided.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Reads several fields of a row for display.
    ///
    /// A disabled view is empty and error-free. Defaults are substituted
    /// according to [`CheckConfig::ignore_defaults`].
    #[must_use]
    pub fn props_view(&self, table: &str, props: &[&str], row: &DataRow, enabled: bool) -> PropsView {
        if !enabled {
            return PropsView::default();
        }
        match self
            .checks
            .props(table, props, row, self.config.ignore_defaults)
        {
            Ok(props) => PropsView {
                props: Some(props),
                error: None,
            },
            Err(error) => {
                trace!(table, %error, "props view failed");
                PropsView {
                    props: None,
                    error: Some(error),
                }
            }
        }
    }

    /// Reads the primary key of a row for display.
    ///
    /// A disabled view is empty and error-free.
    #[must_use]
    pub fn pk_view(&self, table: &str, row: &DataRow, enabled: bool) -> PkView {
        if !enabled {
            return PkView::default();
        }
        let result = self.checks.pk(table, row).and_then(|pk| {
            if pk.trim().is_empty() {
                Err(Error::blank_primary_key())
            } else {
                Ok(pk)
            }
        });
        match result {
            Ok(pk) => PkView {
                pk: Some(pk),
                error: None,
            },
            Err(error) => {
                trace!(table, %error, "pk view failed");
                PkView {
                    pk: None,
                    error: Some(error),
                }
            }
        }
    }
}

impl fmt::Debug for SchemaCheckContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaCheckContext")
            .field("configured", &self.configured)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Outcome of [`SchemaCheckContext::props_view`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropsView {
    /// The resolved fields, if the read succeeded.
    pub props: Option<DataRow>,
    /// The failure, if the read failed.
    pub error: Option<Error>,
}

impl PropsView {
    /// Returns true if the read failed.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Outcome of [`SchemaCheckContext::pk_view`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PkView {
    /// The primary key value, if it was read.
    pub pk: Option<String>,
    /// The failure, if the read failed.
    pub error: Option<Error>,
}

impl PkView {
    /// Returns true if the read failed.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
