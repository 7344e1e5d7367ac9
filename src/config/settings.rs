//! Layered configuration: base file, environment file, environment variables.
//!
//! Later layers override earlier ones key by key. File keys are lowercased
//! before merging, matching how environment overrides
//! (`PRODUCTS_<SECTION>__<KEY>`) are keyed, so `ProductsDb` in one layer and
//! `productsdb` in another name the same setting.

use super::environment::{EnvironmentName, ProcessEnv};
use crate::error::{Error, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Required base settings file, relative to the base directory.
pub const BASE_FILE: &str = "settings.toml";

/// Prefix for environment-variable overrides.
pub const ENV_PREFIX: &str = "PRODUCTS";

/// Separator between nested keys in environment-variable overrides.
pub const ENV_SEPARATOR: &str = "__";

const CONNECTION_STRINGS: &str = "connection_strings";

/// Path of the optional override file for `environment`.
pub fn environment_file(base_dir: &Path, environment: &EnvironmentName) -> PathBuf {
    base_dir.join(format!("settings.{environment}.toml"))
}

/// Builds [`ConfigurationRoot`]s rooted at a base directory.
#[derive(Debug, Clone)]
pub struct ConfigurationService {
    base_dir: PathBuf,
    env: ProcessEnv,
}

impl ConfigurationService {
    pub fn new(base_dir: impl Into<PathBuf>, env: ProcessEnv) -> Self {
        Self {
            base_dir: base_dir.into(),
            env,
        }
    }

    /// Assemble the layered configuration.
    ///
    /// The base file must exist and parse. The environment file is skipped
    /// when missing or when no environment name is given. Environment
    /// variables from the snapshot are always applied last.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the base file is missing or any present
    /// file fails to parse.
    pub fn build(&self, environment: Option<&EnvironmentName>) -> Result<ConfigurationRoot> {
        let base_file = self.base_dir.join(BASE_FILE);
        if !base_file.is_file() {
            return Err(Error::Config(format!(
                "required settings file {} not found",
                base_file.display()
            )));
        }

        let mut builder = config::Config::builder()
            .add_source(LowercaseKeys(
                config::File::from(base_file.as_path()).required(true),
            ));

        if let Some(environment) = environment {
            let env_file = environment_file(&self.base_dir, environment);
            tracing::debug!(
                path = %env_file.display(),
                present = env_file.is_file(),
                "environment settings file"
            );
            builder =
                builder.add_source(LowercaseKeys(config::File::from(env_file).required(false)));
        }

        let overrides: config::Map<String, String> = self
            .env
            .with_prefix(&format!("{ENV_PREFIX}_"))
            .into_iter()
            .collect();

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .source(Some(overrides)),
            )
            .build()?;

        Ok(ConfigurationRoot { config })
    }
}

/// Source wrapper that lowercases every table key of the inner source.
#[derive(Debug, Clone)]
struct LowercaseKeys<S>(S);

impl<S> config::Source for LowercaseKeys<S>
where
    S: config::Source + Clone + Send + Sync + 'static,
{
    fn clone_into_box(&self) -> Box<dyn config::Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(
        &self,
    ) -> std::result::Result<config::Map<String, config::Value>, config::ConfigError> {
        Ok(lowercase_table(self.0.collect()?))
    }
}

fn lowercase_table(
    table: config::Map<String, config::Value>,
) -> config::Map<String, config::Value> {
    table
        .into_iter()
        .map(|(key, mut value)| {
            lowercase_value(&mut value);
            (key.to_lowercase(), value)
        })
        .collect()
}

fn lowercase_value(value: &mut config::Value) {
    match &mut value.kind {
        config::ValueKind::Table(table) => *table = lowercase_table(std::mem::take(table)),
        config::ValueKind::Array(items) => items.iter_mut().for_each(lowercase_value),
        _ => {}
    }
}

/// Merged configuration produced by [`ConfigurationService::build`].
#[derive(Debug, Clone)]
pub struct ConfigurationRoot {
    config: config::Config,
}

impl ConfigurationRoot {
    /// Look up a connection string by logical name, ignoring case.
    ///
    /// Returns `None` when the section or key is missing or the value is empty.
    pub fn connection_string(&self, logical_name: &str) -> Option<String> {
        let mut table = self.config.get_table(CONNECTION_STRINGS).ok()?;
        table
            .remove(&logical_name.to_lowercase())
            .and_then(|value| value.into_string().ok())
            .filter(|value| !value.is_empty())
    }

    pub fn server_settings(&self) -> Result<ServerSettings> {
        self.section("server")
    }

    pub fn telemetry_settings(&self) -> Result<TelemetrySettings> {
        self.section("telemetry")
    }

    /// Deserialize a section, falling back to its default when absent.
    fn section<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        match self.config.get::<T>(key) {
            Ok(value) => Ok(value),
            Err(config::ConfigError::NotFound(_)) => Ok(T::default()),
            Err(e) => Err(Error::Config(format!("invalid [{key}] section: {e}"))),
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0:8080".into()
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// `[telemetry]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelemetrySettings {
    /// OTLP endpoint; local fmt logging only when unset.
    #[serde(default)]
    pub otel_endpoint: Option<String>,
}
