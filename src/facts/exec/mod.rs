mod exec_data;
mod provider;

pub use exec_data::ExecData;
pub use provider::ExecConfig;
