mod environment_data;
mod provider;

pub use environment_data::EnvironmentData;
pub use provider::EnvironmentConfig;
