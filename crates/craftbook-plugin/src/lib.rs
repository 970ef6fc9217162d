//! Plugin entry points for declarative recipe registration.
//!
//! A host constructs a [`RecipeManager`] with its item catalog, its recipe
//! registry and a config store, then calls [`RecipeManager::on_start`] when
//! the plugin is enabled and [`RecipeManager::on_stop`] when it is disabled.
//!
//! # Usage
//!
//! ```rust,ignore
//! use craftbook_plugin::{RecipeManager, config::load_settings, logging::init_logging};
//! use craftbook_data::DirConfigStore;
//!
//! let settings = load_settings(&data_dir)?;
//! init_logging(&settings.log_filter);
//! let store = DirConfigStore::with_bundled_templates(&data_dir);
//! let mut mgr = RecipeManager::new(catalog, host_registry, store, settings);
//! let report = mgr.on_start()?;
//! // ...
//! mgr.on_stop();
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod manager;

pub use config::{ManagerSettings, load_settings};
pub use error::PluginError;
pub use manager::{CategoryReport, LifecycleState, LoadReport, RecipeManager, StopReport};
