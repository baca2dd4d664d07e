use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid bind address {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Invalid log filter {0:?}")]
    InvalidLogFilter(String),

    #[error("Logger initialization failed: {0}")]
    Logger(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate key {key:?} in {table}")]
    DuplicateKey { table: &'static str, key: String },

    #[error("Entry {key:?} in {table} has an empty {field}")]
    EmptyField {
        table: &'static str,
        key: String,
        field: &'static str,
    },
}
