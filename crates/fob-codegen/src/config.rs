//! Code generation options.
//!
//! Options are layered with figment:
//!
//! 1. built-in defaults
//! 2. `fob-codegen.toml` (or an explicit file)
//! 3. `FOB_CODEGEN_*` environment variables, nested keys split on `__`
//!    (e.g. `FOB_CODEGEN_RUNTIME__PATHINFO=true`)

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CodegenError, Result};

/// Default configuration file name, looked up in the base directory.
pub const CONFIG_FILE: &str = "fob-codegen.toml";

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "FOB_CODEGEN_";

/// Options of the runtime expressions emitted into modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeOptions {
    /// Name of the runtime require function.
    pub require_function: String,
    /// Annotate runtime calls with the original request.
    pub pathinfo: bool,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            require_function: "__webpack_require__".to_string(),
            pathinfo: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenOptions {
    pub runtime: RuntimeOptions,
    /// Generate module batches in parallel.
    pub parallel: bool,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            runtime: RuntimeOptions::default(),
            parallel: true,
        }
    }
}

impl CodegenOptions {
    /// Load options relative to the current directory.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_in(Path::new("."), config_path)
    }

    /// Load options, resolving the default config file against `base_dir`.
    ///
    /// An explicit `config_path` must exist; the default file is optional.
    pub fn load_in(base_dir: &Path, config_path: Option<&Path>) -> Result<Self> {
        let config_file = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(CodegenError::config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                Some(path.to_path_buf())
            }
            None => {
                let default_path = base_dir.join(CONFIG_FILE);
                default_path.exists().then_some(default_path)
            }
        };

        Self::figment(config_file)
            .extract()
            .map_err(|e| CodegenError::config(e.to_string()))
    }

    fn figment(config_file: Option<PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = config_file {
            debug!(path = %path.display(), "loading codegen config");
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::sync::{Mutex, MutexGuard, OnceLock};

    use tempfile::TempDir;

    use super::*;

    const REQUIRE_VAR: &str = "FOB_CODEGEN_RUNTIME__REQUIRE_FUNCTION";

    fn env_lock() -> MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn missing_default_file_yields_defaults() {
        let _guard = env_lock();
        let dir = TempDir::new().unwrap();

        let options = CodegenOptions::load_in(dir.path(), None).unwrap();
        assert_eq!(options, CodegenOptions::default());
    }

    #[test]
    fn default_file_is_discovered() {
        let _guard = env_lock();
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "parallel = false\n\n[runtime]\npathinfo = true\n",
        )
        .unwrap();

        let options = CodegenOptions::load_in(dir.path(), None).unwrap();
        assert!(!options.parallel);
        assert!(options.runtime.pathinfo);
        assert_eq!(options.runtime.require_function, "__webpack_require__");
    }

    #[test]
    fn explicit_file_must_exist() {
        let _guard = env_lock();
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = CodegenOptions::load_in(dir.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, CodegenError::Config { .. }));
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn invalid_value_is_a_config_error() {
        let _guard = env_lock();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "parallel = \"sometimes\"\n").unwrap();

        let err = CodegenOptions::load_in(dir.path(), Some(&path)).unwrap_err();
        assert!(matches!(err, CodegenError::Config { .. }));
    }

    #[test]
    fn env_overrides_file() {
        let _guard = env_lock();
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[runtime]\nrequire_function = \"fromFile\"\n",
        )
        .unwrap();

        // SAFETY: env mutation is serialized by `env_lock`.
        unsafe { env::set_var(REQUIRE_VAR, "fromEnv") };
        let result = CodegenOptions::load_in(dir.path(), None);
        unsafe { env::remove_var(REQUIRE_VAR) };

        assert_eq!(result.unwrap().runtime.require_function, "fromEnv");
    }

    #[test]
    fn defaults_use_webpack_runtime_names() {
        let options = CodegenOptions::default();
        assert_eq!(options.runtime.require_function, "__webpack_require__");
        assert!(!options.runtime.pathinfo);
        assert!(options.parallel);
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let options: CodegenOptions =
            serde_json::from_str(r#"{ "runtime": { "pathinfo": true } }"#).unwrap();
        assert!(options.runtime.pathinfo);
        assert_eq!(options.runtime.require_function, "__webpack_require__");
        assert!(options.parallel);
    }
}
