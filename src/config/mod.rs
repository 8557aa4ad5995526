mod errors;
mod settings;
#[cfg(test)]
mod tests;

pub use errors::ConfigError;
pub use settings::{ImportPolicy, Settings};
