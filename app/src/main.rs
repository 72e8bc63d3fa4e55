use anyhow::Context;
use servloc_core::{service_set, LocatorResult, RegistryConfig, ServiceDb};
use servloc_services::{ConsoleAudio, ConsoleLog, Locators};

const CONFIG_PATH: &str = "servloc.toml";

type Services = ServiceDb<service_set![ConsoleAudio, ConsoleLog]>;

/// Consumer side: only talks to whatever the locators hand out.
fn play_intro(locators: &Locators<'_>) -> LocatorResult<()> {
    let audio = locators.audio().service()?;
    let logger = locators.log().service()?;

    audio.play_sound(1);
    logger.log("sound played");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cfg = RegistryConfig::load_or_default(CONFIG_PATH)?;
    servloc_core::logging::init(&cfg.log_filter);
    log::info!("boot (reinit={:?}, provide={:?})", cfg.reinit, cfg.provide);

    let db = Services::new();

    let locators = Locators::new(cfg.reinit);
    locators.init();
    locators
        .provide_from(&db, &cfg.provide)
        .context("binding configured services")?;

    play_intro(&locators)?;

    log::info!("shutdown");
    Ok(())
}
