pub mod capability;
pub mod config;
pub mod db;
pub mod error;
pub mod locator;
pub mod logging;
pub mod resources;

pub use crate::capability::Capability;
pub use crate::config::RegistryConfig;
pub use crate::db::{Contains, ServiceDb, ServiceSet};
pub use crate::error::{LocatorError, LocatorResult};
pub use crate::locator::{Locator, LocatorState, ReinitPolicy};
pub use crate::resources::ServiceMap;
