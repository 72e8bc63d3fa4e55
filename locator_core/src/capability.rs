/// A service contract that can be located.
///
/// Implemented for the trait object of a capability, not for its
/// implementations:
///
/// ```ignore
/// pub trait AudioService: Send + Sync {
///     fn play_sound(&self, id: i32);
/// }
///
/// impl Capability for dyn AudioService {
///     const NAME: &'static str = "audio";
///
///     fn null_service() -> Box<Self> {
///         Box::new(NullAudio::default())
///     }
/// }
/// ```
///
/// The pairing with `null_service` is what lets a `Locator<dyn AudioService>`
/// hand out a usable service before anything was provided.
pub trait Capability: Send + Sync + 'static {
    /// Stable name used in logs, errors and config.
    const NAME: &'static str;

    /// Builds the inert default implementation.
    fn null_service() -> Box<Self>;
}
