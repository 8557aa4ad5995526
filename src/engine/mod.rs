mod export;
mod import_engine;
mod sample;
#[cfg(test)]
mod tests;

pub use export::{write_allocation, write_net_worth, write_transactions};
pub use import_engine::{ImportEngine, ImportOutcome};
pub use sample::generate_sample;
