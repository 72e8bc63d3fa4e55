use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use env_logger::{Builder, Env};

/// Installs the process logger.
///
/// `RUST_LOG` wins over `filter`. Lines look like `[<unix-ms>] [INFO] [<target>] msg`.
/// Returns `false` if a logger was already installed.
pub fn init(filter: &str) -> bool {
    Builder::from_env(Env::default().default_filter_or(filter))
        .format(|buf, record| {
            let ms = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis();
            writeln!(buf, "[{}] [{}] [{}] {}", ms, record.level(), record.target(), record.args())
        })
        .try_init()
        .is_ok()
}
