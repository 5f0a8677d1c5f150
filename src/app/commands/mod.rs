pub mod environment;
pub mod help;
pub mod lifecycle;
pub mod list;
pub mod status;
