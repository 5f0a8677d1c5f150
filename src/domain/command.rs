use crate::domain::WorkloadName;

/// A command token and its positional arguments, resolved into a closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `h`
    Help,
    /// `ls`
    List,
    /// `s`
    Status,
    /// `u <name>`; the name is `None` when the argument was omitted.
    Start(Option<WorkloadName>),
    /// `d <name>`
    Stop(Option<WorkloadName>),
    /// Any other token.
    Unknown(String),
}

impl Command {
    /// Map a token and trailing arguments to a command.
    ///
    /// Extra arguments beyond the first are ignored.
    pub fn parse(token: &str, args: &[String]) -> Self {
        let name = || {
            args.first().filter(|arg| !arg.is_empty()).map(|arg| WorkloadName::new(arg.as_str()))
        };
        match token {
            "h" => Command::Help,
            "ls" => Command::List,
            "s" => Command::Status,
            "u" => Command::Start(name()),
            "d" => Command::Stop(name()),
            other => Command::Unknown(other.to_string()),
        }
    }
}
