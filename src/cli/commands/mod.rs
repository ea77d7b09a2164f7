//! CLI command implementations.

mod config;
mod doctor;
mod fetch;
mod init;
mod list;

pub use config::run_config;
pub use doctor::run_doctor;
pub use fetch::run_fetch;
pub use init::run_init;
pub use list::run_list;
