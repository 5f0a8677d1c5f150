pub mod command;
pub mod compose;
pub mod error;
pub mod layout;
pub mod workload;

pub use command::Command;
pub use compose::{ComposeAction, ComposeOutput, manifest_args};
pub use error::AppError;
pub use layout::{MANIFEST_FILE, WORKLOADS_DIR, WorkloadLayout};
pub use workload::WorkloadName;
