#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]

mod accept;
mod config;
mod negotiator;

pub mod error;
pub mod extension;

pub use accept::{
    AcceptedLocales, DEFAULT_WEIGHT, LocaleIter, parse_quality, parse_weighted_locale,
};
pub use config::NegotiatorConfig;
pub use negotiator::{ACCEPT_LANGUAGE_ENV, LocaleNegotiator};

/// A TOML table.
pub type TomlTable = toml::Table;

/// An owned dynamically typed error.
pub type BoxError = Box<dyn std::error::Error + Sync + Send + 'static>;

/// An allocation-optimized string.
pub type SharedString = std::borrow::Cow<'static, str>;
