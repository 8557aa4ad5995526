mod context;

pub use context::Session;
