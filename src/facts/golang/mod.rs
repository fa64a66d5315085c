mod golang_data;
mod provider;

pub use golang_data::GolangData;
pub use provider::GolangConfig;
