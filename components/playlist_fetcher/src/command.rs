// components/playlist_fetcher/src/command.rs
use std::ffi::OsString;
use std::fmt;

/// A program and its argument vector. Executed directly, never through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadCommand {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl DownloadCommand {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn to_tokio(&self) -> tokio::process::Command {
        let mut command = tokio::process::Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

/// Space-joined, unquoted. For humans only.
impl fmt::Display for DownloadCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_with_single_spaces() {
        let command = DownloadCommand::new("spotdl")
            .arg("https://example.test/playlist/abc")
            .arg("--output")
            .arg("/tmp/out");

        assert_eq!(
            command.to_string(),
            "spotdl https://example.test/playlist/abc --output /tmp/out"
        );
    }

    #[test]
    fn arguments_with_metacharacters_stay_single_arguments() {
        let command = DownloadCommand::new("spotdl").arg("a b; echo $HOME");

        assert_eq!(command.args.len(), 1);
        assert_eq!(command.to_string(), "spotdl a b; echo $HOME");

        let tokio_command = command.to_tokio();
        let std_command = tokio_command.as_std();
        let args: Vec<_> = std_command.get_args().collect();
        assert_eq!(args, vec![std::ffi::OsStr::new("a b; echo $HOME")]);
        assert_eq!(std_command.get_program(), "spotdl");
    }
}
