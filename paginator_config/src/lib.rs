use std::{net::IpAddr, path::Path};

use anyhow::{ensure, Context};
use config::{File, FileFormat};
use paginator_models::{pagination::PageSize, window::MaxVisible};
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variable holding a comma separated list of config files.
pub const CONFIG_PATH_ENV: &str = "PAGINATOR_CONFIG";

/// Loads the config files listed in `PAGINATOR_CONFIG`, or the default
/// config if the variable is not set.
pub fn load() -> anyhow::Result<Config> {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(paths) => load_paths(&paths.split(',').map(str::trim).collect::<Vec<_>>()),
        Err(_) => load_paths(&[DEFAULT_CONFIG_PATH]),
    }
}

/// Loads and merges the given config files. Later files take precedence.
pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    let config = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            anyhow::Ok(builder.add_source(File::from_str(&content, FileFormat::Toml)))
        })?
        .build()?
        .try_deserialize::<Config>()
        .context("Failed to load config")?;

    config.validate()?;
    Ok(config)
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub window: WindowConfig,
    pub pagination: PaginationConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub max_visible: MaxVisible,
}

#[derive(Debug, Deserialize)]
pub struct PaginationConfig {
    pub events: PaginationScopeConfig,
    pub resources: PaginationScopeConfig,
}

#[derive(Debug, Deserialize)]
pub struct PaginationScopeConfig {
    pub page_sizes: Vec<PageSize>,
    pub default_page_size: PageSize,
    /// Overrides `window.max_visible` for this list.
    pub max_visible: Option<MaxVisible>,
}

impl Config {
    fn validate(&self) -> anyhow::Result<()> {
        for (name, scope) in [
            ("events", &self.pagination.events),
            ("resources", &self.pagination.resources),
        ] {
            ensure!(
                !scope.page_sizes.is_empty(),
                "pagination.{name}.page_sizes must not be empty"
            );
            ensure!(
                scope.page_sizes.contains(&scope.default_page_size),
                "pagination.{name}.default_page_size must be one of pagination.{name}.page_sizes"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(content: &str) -> std::path::PathBuf {
        static COUNTER: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "paginator-config-test-{}-{n}.toml",
            std::process::id()
        ));
        std::fs::File::create(&path)
            .unwrap()
            .write_all(content.as_bytes())
            .unwrap();
        path
    }

    #[test]
    fn load_default_config() {
        let config = load_paths(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
        assert_eq!(*config.window.max_visible, 7);
        assert_eq!(*config.pagination.events.default_page_size, 6);
        assert_eq!(config.pagination.resources.max_visible, None);
    }

    #[test]
    fn later_files_override() {
        let overrides = write_config(
            "[window]\nmax_visible = 9\n\n[pagination.resources]\nmax_visible = 5\n",
        );

        let config = load_paths(&[Path::new(DEFAULT_CONFIG_PATH), overrides.as_path()]).unwrap();

        assert_eq!(*config.window.max_visible, 9);
        assert_eq!(config.pagination.resources.max_visible.map(|x| *x), Some(5));
        assert_eq!(config.pagination.resources.page_sizes.len(), 3);
    }

    #[test]
    fn reject_small_window() {
        let overrides = write_config("[window]\nmax_visible = 3\n");

        let result = load_paths(&[Path::new(DEFAULT_CONFIG_PATH), overrides.as_path()]);

        assert!(result.is_err());
    }

    #[test]
    fn reject_unknown_default_page_size() {
        let overrides = write_config("[pagination.events]\ndefault_page_size = 7\n");

        let result = load_paths(&[Path::new(DEFAULT_CONFIG_PATH), overrides.as_path()]);

        assert!(result.is_err());
    }

    #[test]
    fn missing_file() {
        let result = load_paths(&[Path::new("/nonexistent/paginator.toml")]);
        assert!(result.is_err());
    }
}
