pub mod logger;

pub use logger::CommandLogger;
