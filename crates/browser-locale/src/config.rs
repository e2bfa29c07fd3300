use crate::{
    BoxError, LocaleNegotiator, TomlTable,
    error::{Error, Result},
    extension::TomlTableExt,
};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Locales served by an application.
///
/// The config can be read from the `[i18n]` table of a TOML file:
///
/// ```toml
/// [i18n]
/// default-locale = "en-US"
/// supported-locales = ["en-US", "fr", "zh-CN"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[serde(default)]
pub struct NegotiatorConfig {
    /// Locale used when none of the supported locales is accepted.
    default_locale: Option<String>,
    /// Locales available in the application.
    supported_locales: Vec<String>,
}

impl NegotiatorConfig {
    /// Creates a new instance with the supported locales.
    pub fn new<T: Into<String>>(supported_locales: impl IntoIterator<Item = T>) -> Self {
        Self {
            default_locale: None,
            supported_locales: supported_locales.into_iter().map(|s| s.into()).collect(),
        }
    }

    /// Sets the default locale.
    #[inline]
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = Some(locale.into());
        self
    }

    /// Creates a new instance from the `i18n` table if it exists,
    /// or from the table itself otherwise.
    pub fn from_table(config: &TomlTable) -> Self {
        let config = config.get_table("i18n").unwrap_or(config);
        let default_locale = config.get_str("default-locale").map(|s| s.to_owned());
        let supported_locales = config
            .get_str_array("supported-locales")
            .unwrap_or_default()
            .into_iter()
            .map(|s| s.to_owned())
            .collect();
        Self {
            default_locale,
            supported_locales,
        }
    }

    /// Reads the config from a local `.toml` or `.json` file.
    pub fn read_file(config_file: impl AsRef<Path>) -> Result<Self> {
        let config_file = config_file.as_ref();
        let file_name = config_file.display();
        let invalid_config = |err: BoxError| {
            Error::invalid_config(format!("fail to load `{file_name}`")).caused_by(err)
        };
        let data = fs::read_to_string(config_file).map_err(|err| {
            Error::invalid_config(format!("fail to read `{file_name}`")).caused_by(err)
        })?;
        let config = match config_file.extension().and_then(|s| s.to_str()) {
            Some("json") => {
                let value = serde_json::from_str::<serde_json::Value>(&data)
                    .map_err(|err| invalid_config(err.into()))?;
                let table = value.get("i18n").cloned().unwrap_or(value);
                serde_json::from_value::<Self>(table).map_err(|err| invalid_config(err.into()))?
            }
            _ => {
                let table = data
                    .parse::<TomlTable>()
                    .map_err(|err| invalid_config(err.into()))?;
                Self::from_table(&table)
            }
        };
        tracing::info!("`{file_name}` loaded");
        Ok(config)
    }

    /// Returns the default locale.
    #[inline]
    pub fn default_locale(&self) -> Option<&str> {
        self.default_locale.as_deref()
    }

    /// Returns the supported locales.
    #[inline]
    pub fn supported_locales(&self) -> &[String] {
        &self.supported_locales
    }

    /// Creates a negotiator for the `Accept-Language` value with the supported locales.
    pub fn negotiator(&self, accept: &str) -> LocaleNegotiator {
        let mut negotiator = LocaleNegotiator::new(accept);
        negotiator.among(self.supported_locales.iter().map(|s| s.as_str()));
        negotiator
    }

    /// Negotiates the locale for the `Accept-Language` value,
    /// falling back to the default locale.
    pub fn negotiate(&self, accept: &str) -> Option<String> {
        self.negotiator(accept)
            .choose(self.default_locale())
            .map(|locale| locale.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::NegotiatorConfig;
    use crate::{TomlTable, error::ErrorKind};
    use std::fs;

    #[test]
    fn it_reads_config_from_table() {
        let table = r#"
            [i18n]
            default-locale = "en-US"
            supported-locales = ["en-US", "fr", "zh-CN"]
        "#
        .parse::<TomlTable>()
        .unwrap();
        let config = NegotiatorConfig::from_table(&table);
        assert_eq!(config.default_locale(), Some("en-US"));
        assert_eq!(config.supported_locales(), ["en-US", "fr", "zh-CN"]);

        let table = r#"supported-locales = ["de"]"#.parse::<TomlTable>().unwrap();
        let config = NegotiatorConfig::from_table(&table);
        assert_eq!(config.default_locale(), None);
        assert_eq!(config.supported_locales(), ["de"]);
    }

    #[test]
    fn it_negotiates_locales() {
        let config =
            NegotiatorConfig::new(["en-US", "fr", "zh-CN"]).with_default_locale("en-US");
        assert_eq!(
            config.negotiate("zh-CN,zh;q=0.9,fr;q=0.8").as_deref(),
            Some("zh-CN")
        );
        assert_eq!(config.negotiate("de,fr;q=0.2").as_deref(), Some("fr"));
        assert_eq!(config.negotiate("de").as_deref(), Some("en-US"));
        assert_eq!(NegotiatorConfig::new(["fr"]).negotiate("de"), None);

        let negotiator = config.negotiator("fr");
        assert_eq!(negotiator.candidates(), ["en-US", "fr", "zh-CN"]);
    }

    #[test]
    fn it_reads_config_files() {
        let dir = std::env::temp_dir().join(format!("browser-locale-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let toml_file = dir.join("locale.toml");
        fs::write(
            &toml_file,
            "[i18n]\ndefault-locale = \"fr\"\nsupported-locales = [\"fr\", \"en\"]\n",
        )
        .unwrap();
        let config = NegotiatorConfig::read_file(&toml_file).unwrap();
        assert_eq!(
            config,
            NegotiatorConfig::new(["fr", "en"]).with_default_locale("fr")
        );

        let json_file = dir.join("locale.json");
        fs::write(
            &json_file,
            r#"{"i18n":{"default-locale":"en","supported-locales":["en"]}}"#,
        )
        .unwrap();
        let config = NegotiatorConfig::read_file(&json_file).unwrap();
        assert_eq!(
            config,
            NegotiatorConfig::new(["en"]).with_default_locale("en")
        );

        let err = NegotiatorConfig::read_file(dir.join("missing.toml")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
        assert!(err.message().starts_with("fail to read"));
        assert_eq!(err.sources().count(), 1);

        let broken_file = dir.join("broken.json");
        fs::write(&broken_file, r#"{"supported-locales": "en"}"#).unwrap();
        let err = NegotiatorConfig::read_file(&broken_file).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
        assert!(err.message().starts_with("fail to load"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
