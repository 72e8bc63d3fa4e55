//! Statically typed service database.
//!
//! The managed types are a type-level list built with [`service_set!`]:
//! `ServiceDb<service_set![ConsoleAudio, ConsoleLog]>` owns exactly one
//! default-constructed `ConsoleAudio` and one `ConsoleLog`.
//!
//! Lookups resolve at compile time. Asking for a type outside the set does not
//! compile:
//!
//! ```compile_fail
//! use servloc_core::{service_set, ServiceDb};
//!
//! #[derive(Default)]
//! struct Audio;
//! #[derive(Default)]
//! struct Log;
//!
//! let db: ServiceDb<service_set![Audio]> = ServiceDb::new();
//! let _log: &Log = db.get();
//! ```
//!
//! Listing a type twice makes every lookup of it ambiguous, so that does not
//! compile either. Building such a database is refused at runtime:
//! [`ServiceDb::new`] panics before constructing any member.
//!
//! ```compile_fail
//! use servloc_core::{service_set, ServiceDb};
//!
//! #[derive(Default)]
//! struct Audio;
//!
//! let db: ServiceDb<service_set![Audio, Audio]> = ServiceDb::new();
//! let _audio: &Audio = db.get();
//! ```
//!
//! ```
//! use servloc_core::{service_set, ServiceDb};
//!
//! #[derive(Default)]
//! struct Audio {
//!     volume: u8,
//! }
//!
//! let mut db: ServiceDb<service_set![Audio]> = ServiceDb::new();
//! db.get_mut::<Audio, _>().volume = 7;
//! assert_eq!(db.get::<Audio, _>().volume, 7);
//! ```

use std::any::{type_name, TypeId};
use std::fmt;
use std::marker::PhantomData;

/// Empty end of a service list.
#[derive(Debug, Default)]
pub struct Nil;

/// A service `H` followed by the rest of the list.
#[derive(Debug, Default)]
pub struct Cons<H, T> {
    head: H,
    tail: T,
}

/// Index marker: the service is the head of the list.
pub struct Here;

/// Index marker: the service is somewhere in the tail, at `I`.
pub struct There<I>(PhantomData<I>);

/// A list of default-constructible services.
pub trait ServiceSet: Default {
    const LEN: usize;

    fn type_names(out: &mut Vec<&'static str>);

    fn type_ids(out: &mut Vec<TypeId>);
}

impl ServiceSet for Nil {
    const LEN: usize = 0;

    fn type_names(_out: &mut Vec<&'static str>) {}

    fn type_ids(_out: &mut Vec<TypeId>) {}
}

impl<H: Default + 'static, T: ServiceSet> ServiceSet for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;

    fn type_names(out: &mut Vec<&'static str>) {
        out.push(type_name::<H>());
        T::type_names(out);
    }

    fn type_ids(out: &mut Vec<TypeId>) {
        out.push(TypeId::of::<H>());
        T::type_ids(out);
    }
}

/// `Self` holds a `T` at position `I`.
///
/// `I` is inferred; callers write `_` for it.
pub trait Contains<T, I> {
    fn get(&self) -> &T;
    fn get_mut(&mut self) -> &mut T;
}

impl<T, Tail> Contains<T, Here> for Cons<T, Tail> {
    #[inline]
    fn get(&self) -> &T {
        &self.head
    }

    #[inline]
    fn get_mut(&mut self) -> &mut T {
        &mut self.head
    }
}

impl<H, Tail, T, I> Contains<T, There<I>> for Cons<H, Tail>
where
    Tail: Contains<T, I>,
{
    #[inline]
    fn get(&self) -> &T {
        self.tail.get()
    }

    #[inline]
    fn get_mut(&mut self) -> &mut T {
        self.tail.get_mut()
    }
}

/// Builds the type of a service list: `service_set![A, B]` is
/// `Cons<A, Cons<B, Nil>>`.
#[macro_export]
macro_rules! service_set {
    () => { $crate::db::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::db::Cons<$head, $crate::service_set![$($tail),*]>
    };
}

/// Owns one instance of every type in `S`, created eagerly by [`ServiceDb::new`].
///
/// Each type may appear in `S` only once.
pub struct ServiceDb<S: ServiceSet> {
    services: S,
}

impl<S: ServiceSet> ServiceDb<S> {
    /// # Panics
    ///
    /// If `S` lists the same type more than once.
    pub fn new() -> Self {
        if let Some(dup) = Self::duplicate() {
            log::error!("service database lists `{dup}` more than once");
            panic!("service database lists `{dup}` more than once");
        }

        let db = Self { services: S::default() };
        log::debug!("service database ready: {:?}", Self::type_names());
        db
    }

    #[inline]
    pub fn get<T, I>(&self) -> &T
    where
        S: Contains<T, I>,
    {
        self.services.get()
    }

    #[inline]
    pub fn get_mut<T, I>(&mut self) -> &mut T
    where
        S: Contains<T, I>,
    {
        self.services.get_mut()
    }

    #[inline]
    pub fn len(&self) -> usize {
        S::LEN
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        S::LEN == 0
    }

    fn duplicate() -> Option<&'static str> {
        let mut ids = Vec::with_capacity(S::LEN);
        S::type_ids(&mut ids);
        let names = Self::type_names();

        (1..ids.len())
            .find(|&i| ids[..i].contains(&ids[i]))
            .map(|i| names[i])
    }

    pub fn type_names() -> Vec<&'static str> {
        let mut out = Vec::with_capacity(S::LEN);
        S::type_names(&mut out);
        out
    }
}

impl<S: ServiceSet> Default for ServiceDb<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ServiceSet> fmt::Debug for ServiceDb<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceDb")
            .field("services", &Self::type_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[derive(Default)]
    struct Mixer {
        channels: u32,
    }

    #[derive(Default)]
    struct Journal {
        lines: Vec<String>,
    }

    static BUILT: AtomicUsize = AtomicUsize::new(0);

    struct Counted;

    impl Default for Counted {
        fn default() -> Self {
            BUILT.fetch_add(1, Ordering::SeqCst);
            Counted
        }
    }

    type Db = ServiceDb<crate::service_set![Mixer, Journal]>;

    #[test]
    fn get_returns_the_same_instance() {
        let db = Db::new();

        let a: &Mixer = db.get();
        let b: &Mixer = db.get();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn distinct_types_are_distinct_instances() {
        let db = Db::new();

        let mixer: &Mixer = db.get();
        let journal: &Journal = db.get();
        assert!(!std::ptr::addr_eq(mixer as *const Mixer, journal as *const Journal));
    }

    #[test]
    fn get_mut_edits_the_managed_instance() {
        let mut db = Db::new();

        db.get_mut::<Mixer, _>().channels = 2;
        db.get_mut::<Journal, _>().lines.push("boot".into());

        assert_eq!(db.get::<Mixer, _>().channels, 2);
        assert_eq!(db.get::<Journal, _>().lines, vec!["boot".to_string()]);
    }

    #[test]
    fn members_are_built_once_and_eagerly() {
        let before = BUILT.load(Ordering::SeqCst);
        let db: ServiceDb<crate::service_set![Counted, Mixer]> = ServiceDb::new();
        assert_eq!(BUILT.load(Ordering::SeqCst), before + 1);

        let _: &Counted = db.get();
        let _: &Counted = db.get();
        assert_eq!(BUILT.load(Ordering::SeqCst), before + 1);
    }

    #[derive(Default)]
    struct Twin;

    static TALLIED: AtomicUsize = AtomicUsize::new(0);

    struct Tallied;

    impl Default for Tallied {
        fn default() -> Self {
            TALLIED.fetch_add(1, Ordering::SeqCst);
            Tallied
        }
    }

    #[test]
    #[should_panic(expected = "more than once")]
    fn duplicated_member_is_rejected() {
        let _db: ServiceDb<crate::service_set![Twin, Mixer, Twin]> = ServiceDb::new();
    }

    #[test]
    fn duplicated_member_is_rejected_before_construction() {
        let built = std::panic::catch_unwind(|| {
            ServiceDb::<crate::service_set![Tallied, Tallied]>::new().len()
        });

        assert!(built.is_err());
        assert_eq!(TALLIED.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn reports_managed_types() {
        let db = Db::new();

        assert_eq!(db.len(), 2);
        assert!(!db.is_empty());

        let names = Db::type_names();
        assert!(names[0].ends_with("Mixer"));
        assert!(names[1].ends_with("Journal"));

        let empty: ServiceDb<crate::service_set![]> = ServiceDb::new();
        assert!(empty.is_empty());
    }
}
