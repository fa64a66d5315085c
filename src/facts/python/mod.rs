mod provider;
mod python_data;

pub use provider::{DependenciesConfig, PythonConfig};
pub use python_data::PythonData;
