use crate::model::config::Config;
use crate::model::error::Error;
use crate::model::error::io::IOError;
use crate::model::error::system::SystemError;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_FILE_PREFIX: &str = "AclSphere.log";

pub struct Logging;

impl Logging {
    /// Installs the console and rolling file layers.
    ///
    /// The returned guard flushes the file writer when dropped, so it has to
    /// live as long as the process logs.
    pub fn initialize(config: &Config) -> Result<WorkerGuard, Error> {
        fs::create_dir_all(&config.log_directory).map_err(|err| {
            IOError::CreateDirectoryFailed(config.log_directory.display().to_string(), err)
        })?;

        let filter = Self::filter(&config.log_level)?;

        let file_appender = tracing_appender::rolling::daily(&config.log_directory, LOG_FILE_PREFIX);
        let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .with(fmt::layer().with_ansi(false).with_writer(file_writer))
            .try_init()
            .map_err(SystemError::LoggingInitializeFailed)?;

        Self::panic_hook().install_panic_hook();

        Ok(guard)
    }

    /// Routes panics, with resolved backtraces, into the log.
    pub fn panic_hook() -> log_panics::Config {
        log_panics::Config::new().backtrace_mode(log_panics::BacktraceMode::Resolved)
    }

    /// `RUST_LOG` takes precedence over the configured level.
    pub fn filter(log_level: &str) -> Result<EnvFilter, Error> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        let filter = EnvFilter::try_new(log_level).map_err(SystemError::InvalidConfig)?;
        Ok(filter)
    }
}
