pub mod binary_locator;
mod compose_command;
mod workload_filesystem;

pub use binary_locator::{binary_name, resolve_installation_root, resolve_installation_root_in};
pub use compose_command::{ComposeCommandAdapter, DEFAULT_COMPOSE_PROGRAM};
pub use workload_filesystem::FilesystemWorkloadStore;
