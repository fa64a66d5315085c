mod probe;
mod provider;
mod system_data;

pub use provider::SystemConfig;
pub use system_data::SystemData;
