#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]

mod header_map;
mod request;

pub use header_map::HeaderMapExt;
pub use request::RequestLocale;

#[doc(no_inline)]
pub use browser_locale::{LocaleNegotiator, NegotiatorConfig, error::Error};
