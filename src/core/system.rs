use crate::core::app_config::AppConfig;
use crate::core::security_manager::SecurityManager;
use crate::model::error::Error;
use crate::model::log::system::SystemLog;
use crate::utils::logging::Logging;
use macros::log;
use std::path::Path;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;

pub struct System {
    config: Arc<AppConfig>,
    security_manager: SecurityManager,
    _log_guard: WorkerGuard,
}

impl System {
    pub fn initialize(config_path: &Path) -> Result<Self, Error> {
        let config = Arc::new(AppConfig::new(config_path)?);
        let log_guard = Logging::initialize(&config)?;

        log!(SystemLog::Initializing);
        if config.source().is_none() {
            log!(SystemLog::DefaultConfigUsed {
                path: config_path.display().to_string()
            });
        }
        let security_manager = SecurityManager::new(config.clone());
        log!(SystemLog::InitializeComplete);

        Ok(Self {
            config,
            security_manager,
            _log_guard: log_guard,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn security_manager(&self) -> &SecurityManager {
        &self.security_manager
    }

    pub fn terminate(self) {
        log!(SystemLog::Terminating);
        log!(SystemLog::TerminateComplete);
    }
}
