use std::fmt;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::capability::Capability;
use crate::error::{LocatorError, LocatorResult};

/// Observable state of a [`Locator`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LocatorState {
    Uninitialized,
    Null,
    Provided,
}

/// What `init()` does on a locator that is already initialized.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReinitPolicy {
    /// Leave the current binding alone.
    #[default]
    Keep,
    /// Drop any provided service and go back to the null service.
    Reset,
}

enum Binding<'a, C: ?Sized> {
    Unset,
    Null,
    Provided(&'a C),
}

impl<'a, C: ?Sized> Clone for Binding<'a, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, C: ?Sized> Copy for Binding<'a, C> {}

impl<'a, C: ?Sized> Binding<'a, C> {
    fn state(self) -> LocatorState {
        match self {
            Binding::Unset => LocatorState::Uninitialized,
            Binding::Null => LocatorState::Null,
            Binding::Provided(_) => LocatorState::Provided,
        }
    }
}

/// Access point for one capability.
///
/// Owns the capability's null service and borrows whatever was provided.
/// The `'a` lifetime is the borrow: anything passed to [`Locator::provide`]
/// must outlive the locator, so the owner of a provided service (usually a
/// `ServiceDb`) cannot drop or move it while the locator can still hand it out.
///
/// The binding sits behind a `RwLock`. Concurrent `provide` calls are
/// last-writer-wins; `service` sees either the old or the new binding.
pub struct Locator<'a, C: Capability + ?Sized> {
    null: Box<C>,
    current: RwLock<Binding<'a, C>>,
    policy: ReinitPolicy,
}

impl<'a, C: Capability + ?Sized> Locator<'a, C> {
    pub fn new() -> Self {
        Self::with_null(C::null_service())
    }

    /// Uses `null` instead of `C::null_service()` as the default binding.
    pub fn with_null(null: Box<C>) -> Self {
        Self {
            null,
            current: RwLock::new(Binding::Unset),
            policy: ReinitPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ReinitPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[inline]
    pub fn policy(&self) -> ReinitPolicy {
        self.policy
    }

    /// Points the locator at its null service.
    ///
    /// On an initialized locator this follows the [`ReinitPolicy`].
    pub fn init(&self) {
        let mut current = self.current.write();
        match (*current, self.policy) {
            (Binding::Unset, _) => {
                *current = Binding::Null;
                log::debug!("{}: initialized with null service", C::NAME);
            }
            (Binding::Null, _) => {
                log::debug!("{}: init() on initialized locator, already null", C::NAME);
            }
            (Binding::Provided(_), ReinitPolicy::Keep) => {
                log::debug!("{}: init() ignored, keeping provided service", C::NAME);
            }
            (Binding::Provided(_), ReinitPolicy::Reset) => {
                *current = Binding::Null;
                log::info!("{}: init() reset provided service to null", C::NAME);
            }
        }
    }

    /// Overrides the active service. The previous binding is dropped.
    pub fn provide(&self, service: &'a C) -> LocatorResult<()> {
        let mut current = self.current.write();
        if let Binding::Unset = *current {
            return Err(self.uninitialized());
        }
        *current = Binding::Provided(service);
        log::info!("{}: service provided", C::NAME);
        Ok(())
    }

    /// Reverts to the null service.
    pub fn reset(&self) -> LocatorResult<()> {
        let mut current = self.current.write();
        match *current {
            Binding::Unset => Err(self.uninitialized()),
            Binding::Null => Ok(()),
            Binding::Provided(_) => {
                *current = Binding::Null;
                log::info!("{}: reverted to null service", C::NAME);
                Ok(())
            }
        }
    }

    /// The active service: the provided one if any, the null one otherwise.
    pub fn service(&self) -> LocatorResult<&C> {
        let binding = *self.current.read();
        match binding {
            Binding::Unset => Err(self.uninitialized()),
            Binding::Null => Ok(&*self.null),
            Binding::Provided(service) => Ok(service),
        }
    }

    #[inline]
    pub fn state(&self) -> LocatorState {
        self.current.read().state()
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.state() != LocatorState::Uninitialized
    }

    fn uninitialized(&self) -> LocatorError {
        log::error!("{}: locator used before init()", C::NAME);
        LocatorError::InvalidState { capability: C::NAME }
    }
}

impl<'a, C: Capability + ?Sized> Default for Locator<'a, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, C: Capability + ?Sized> fmt::Debug for Locator<'a, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Locator")
            .field("capability", &C::NAME)
            .field("state", &self.state())
            .field("policy", &self.policy)
            .finish()
    }
}
