use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

use crate::error::{LocatorError, LocatorResult};

struct Entry {
    type_name: &'static str,
    value: Box<dyn Any + Send + Sync>,
}

/// Runtime-typed service store.
///
/// Same contract as `ServiceDb` (one instance per type, keyed by type) for
/// wiring that is only known at runtime. Lookup misses are errors instead of
/// compile failures.
#[derive(Default)]
pub struct ServiceMap {
    map: HashMap<TypeId, Entry>,
}

impl ServiceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default-constructs the single `T` this map will manage.
    pub fn register<T: Default + Any + Send + Sync>(&mut self) -> LocatorResult<&mut T> {
        self.insert(T::default())
    }

    pub fn insert<T: Any + Send + Sync>(&mut self, value: T) -> LocatorResult<&mut T> {
        let key = TypeId::of::<T>();
        if self.map.contains_key(&key) {
            return Err(LocatorError::DuplicateType { type_name: type_name::<T>() });
        }

        log::debug!("service map: managing {}", type_name::<T>());
        let entry = self.map.entry(key).or_insert(Entry {
            type_name: type_name::<T>(),
            value: Box::new(value),
        });
        entry.value.downcast_mut::<T>().ok_or_else(unmanaged::<T>)
    }

    #[inline]
    pub fn get<T: Any + Send + Sync>(&self) -> LocatorResult<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|e| e.value.downcast_ref::<T>())
            .ok_or_else(unmanaged::<T>)
    }

    #[inline]
    pub fn get_mut<T: Any + Send + Sync>(&mut self) -> LocatorResult<&mut T> {
        self.map
            .get_mut(&TypeId::of::<T>())
            .and_then(|e| e.value.downcast_mut::<T>())
            .ok_or_else(unmanaged::<T>)
    }

    #[inline]
    pub fn contains<T: Any + Send + Sync>(&self) -> bool {
        self.map.contains_key(&TypeId::of::<T>())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Managed type names, sorted.
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.map.values().map(|e| e.type_name).collect();
        names.sort_unstable();
        names
    }
}

fn unmanaged<T>() -> LocatorError {
    LocatorError::UnmanagedType { type_name: type_name::<T>() }
}
