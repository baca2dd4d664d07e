#[cfg(feature = "ssr")]
pub mod config;
mod errors;
#[cfg(feature = "ssr")]
pub mod logging;

pub use errors::*;
