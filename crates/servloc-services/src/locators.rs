use servloc_core::{
    Capability, Contains, LocatorError, LocatorResult, ReinitPolicy, ServiceDb, ServiceSet,
};

use crate::audio::{AudioLocator, AudioService, ConsoleAudio};
use crate::logger::{ConsoleLog, LogLocator, LogService};

/// One locator per sample capability.
///
/// Built by the caller and passed to whoever needs services, instead of
/// living in process-wide statics.
#[derive(Debug)]
pub struct Locators<'a> {
    audio: AudioLocator<'a>,
    log: LogLocator<'a>,
}

impl<'a> Locators<'a> {
    pub fn new(policy: ReinitPolicy) -> Self {
        Self {
            audio: AudioLocator::new().with_policy(policy),
            log: LogLocator::new().with_policy(policy),
        }
    }

    /// Builds from explicit locators (e.g. with custom null services).
    pub fn from_parts(audio: AudioLocator<'a>, log: LogLocator<'a>) -> Self {
        Self { audio, log }
    }

    pub fn init(&self) {
        self.audio.init();
        self.log.init();
    }

    #[inline]
    pub fn audio(&self) -> &AudioLocator<'a> {
        &self.audio
    }

    #[inline]
    pub fn log(&self) -> &LogLocator<'a> {
        &self.log
    }

    /// Binds audio to the database's `ConsoleAudio`.
    pub fn provide_audio_from<S, I>(&self, db: &'a ServiceDb<S>) -> LocatorResult<()>
    where
        S: ServiceSet + Contains<ConsoleAudio, I>,
    {
        self.audio.provide(db.get::<ConsoleAudio, I>())
    }

    /// Binds log to the database's `ConsoleLog`.
    pub fn provide_log_from<S, I>(&self, db: &'a ServiceDb<S>) -> LocatorResult<()>
    where
        S: ServiceSet + Contains<ConsoleLog, I>,
    {
        self.log.provide(db.get::<ConsoleLog, I>())
    }

    /// Binds each named capability to its console implementation in `db`.
    ///
    /// `db` must manage both console implementations; for a database holding
    /// only one, use [`Locators::provide_audio_from`] or
    /// [`Locators::provide_log_from`].
    ///
    /// Stops at the first unknown name; capabilities before it stay bound.
    pub fn provide_from<S, IA, IL>(&self, db: &'a ServiceDb<S>, names: &[String]) -> LocatorResult<()>
    where
        S: ServiceSet + Contains<ConsoleAudio, IA> + Contains<ConsoleLog, IL>,
    {
        for name in names {
            match name.as_str() {
                n if n == <dyn AudioService as Capability>::NAME => {
                    self.provide_audio_from::<S, IA>(db)?
                }
                n if n == <dyn LogService as Capability>::NAME => self.provide_log_from::<S, IL>(db)?,
                other => {
                    return Err(LocatorError::UnknownCapability { name: other.to_string() });
                }
            }
        }
        Ok(())
    }
}

impl<'a> Default for Locators<'a> {
    fn default() -> Self {
        Self::new(ReinitPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use servloc_core::{service_set, LocatorState};

    use super::*;

    type Db = ServiceDb<service_set![ConsoleAudio, ConsoleLog]>;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn init_points_everything_at_null() {
        let locators = Locators::default();
        assert_eq!(locators.audio().state(), LocatorState::Uninitialized);

        locators.init();
        assert_eq!(locators.audio().state(), LocatorState::Null);
        assert_eq!(locators.log().state(), LocatorState::Null);
    }

    #[test]
    fn provide_from_binds_only_named_capabilities() {
        let db = Db::new();
        let locators = Locators::default();
        locators.init();

        locators.provide_from(&db, &names(&["audio"])).unwrap();

        assert_eq!(locators.audio().state(), LocatorState::Provided);
        assert_eq!(locators.log().state(), LocatorState::Null);
        assert!(std::ptr::addr_eq(
            locators.audio().service().unwrap() as *const dyn AudioService,
            db.get::<ConsoleAudio, _>() as *const ConsoleAudio,
        ));
    }

    #[test]
    fn provide_from_rejects_unknown_names() {
        let db = Db::new();
        let locators = Locators::default();
        locators.init();

        let err = locators.provide_from(&db, &names(&["log", "video"])).unwrap_err();

        assert_eq!(err, LocatorError::UnknownCapability { name: "video".into() });
        assert_eq!(locators.log().state(), LocatorState::Provided);
    }

    #[test]
    fn provide_from_before_init_fails() {
        let db = Db::new();
        let locators = Locators::default();

        let err = locators.provide_from(&db, &names(&["audio"])).unwrap_err();
        assert_eq!(err, LocatorError::InvalidState { capability: "audio" });
    }

    #[test]
    fn single_service_database_binds_its_capability() {
        let db: ServiceDb<service_set![ConsoleAudio]> = ServiceDb::new();
        let locators = Locators::default();
        locators.init();

        locators.provide_audio_from(&db).unwrap();

        assert_eq!(locators.audio().state(), LocatorState::Provided);
        assert_eq!(locators.log().state(), LocatorState::Null);
    }

    #[test]
    fn log_only_database_binds_log() {
        let db: ServiceDb<service_set![ConsoleLog]> = ServiceDb::new();
        let locators = Locators::default();
        locators.init();

        locators.provide_log_from(&db).unwrap();

        assert_eq!(locators.log().state(), LocatorState::Provided);
        assert!(std::ptr::addr_eq(
            locators.log().service().unwrap() as *const dyn LogService,
            db.get::<ConsoleLog, _>() as *const ConsoleLog,
        ));
        assert_eq!(locators.audio().state(), LocatorState::Null);
    }

    #[test]
    fn policy_applies_to_every_locator() {
        let locators = Locators::new(ReinitPolicy::Reset);
        assert_eq!(locators.audio().policy(), ReinitPolicy::Reset);
        assert_eq!(locators.log().policy(), ReinitPolicy::Reset);
    }
}
