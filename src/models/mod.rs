pub mod config;
pub mod report;
pub mod switch;

pub use config::{ActionConfig, ConfigError, EnvInputs, InputSource};
pub use report::Report;
pub use switch::Switch;
