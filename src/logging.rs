use env_logger::Env;
use std::io::Write;

/// Installs the process-wide logger. `RUST_LOG` takes precedence over `level`.
/// Calling it twice is harmless.
pub fn init_logging(level: &str) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .try_init();
}
