use crate::domain::WorkloadLayout;

/// Shown for a missing or unrecognized command token.
pub const USAGE_HINT: &str =
    "Please provide a valid command to run. Use 'dcm h' to see the available commands";

/// Shown when `u`/`d` is given without a workload name.
pub const MISSING_NAME_HINT: &str = "Please provide a compose name";

/// Static help text including the resolved workloads directory.
pub fn render(layout: &WorkloadLayout) -> String {
    format!(
        "Commands available:\n\
         ls - List all docker-compose files\n\
         s - Show the status of all docker-compose files\n\
         u <name> - Start a docker-compose file\n\
         d <name> - Stop a docker-compose file\n\
         docker-compose repository directory: {}\n",
        layout.workloads_dir().display()
    )
}
