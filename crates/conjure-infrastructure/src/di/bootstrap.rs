//! Container bootstrap
//!
//! ```text
//! AppConfig ─┐
//!            ├─> Injector (ResolutionOptions) ─> Converter
//! TypeSystem ┘
//! ```
//!
//! ## Usage
//!
//! ```
//! use conjure_application::ClassTable;
//! use conjure_infrastructure::config::AppConfig;
//! use conjure_infrastructure::di::init_container;
//!
//! let container = init_container(AppConfig::default(), ClassTable::new().into_shared())?;
//! assert!(container.converter().same_context(&container.injector().converter()));
//! # Ok::<(), conjure_domain::Error>(())
//! ```

use std::sync::Arc;

use conjure_application::{Converter, Injector};
use conjure_domain::error::Result;
use conjure_domain::ports::TypeSystem;
use tracing::info;

use crate::config::{AppConfig, validate_app_config};

/// A configured resolution context
///
/// Cloning shares the context.
#[derive(Clone)]
pub struct Container {
    /// Application configuration
    pub config: Arc<AppConfig>,

    injector: Injector,
}

impl Container {
    pub fn injector(&self) -> &Injector {
        &self.injector
    }

    pub fn converter(&self) -> Converter {
        self.injector.converter()
    }
}

/// Build a container from configuration and the host's type system
///
/// The configuration is validated again, so hand-built values are held to
/// the same rules as loaded ones.
pub fn init_container(config: AppConfig, types: Arc<dyn TypeSystem>) -> Result<Container> {
    validate_app_config(&config)?;
    let injector = Injector::with_options(types, config.resolution.options());
    info!(max_depth = ?config.resolution.max_depth, "Resolution container initialized");
    Ok(Container {
        config: Arc::new(config),
        injector,
    })
}
