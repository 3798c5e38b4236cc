// sh! command execution

use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use anyhow::{bail, Result};
use derive_builder::Builder;

/// Trait for types that can configure a `Command` before execution.
pub trait ShConfig {
    fn apply(&self, cmd: &mut Command);
}

impl<T: ShConfig + ?Sized> ShConfig for &T {
    fn apply(&self, cmd: &mut Command) {
        (*self).apply(cmd)
    }
}

#[derive(Clone, Debug)]
pub enum StreamMode {
    Inherit,
    Pipe,
    Null,
}

impl StreamMode {
    fn stdio(&self) -> Stdio {
        match self {
            StreamMode::Inherit => Stdio::inherit(),
            StreamMode::Pipe => Stdio::piped(),
            StreamMode::Null => Stdio::null(),
        }
    }
}

#[derive(Clone, Debug, Builder)]
#[builder(default)]
pub struct ShOptions {
    pub stdout: StreamMode,
    pub stderr: StreamMode,
    pub cwd: Option<PathBuf>,
}

impl Default for ShOptions {
    fn default() -> Self {
        Self {
            stdout: StreamMode::Inherit,
            stderr: StreamMode::Inherit,
            cwd: None,
        }
    }
}

impl ShConfig for ShOptions {
    fn apply(&self, cmd: &mut Command) {
        cmd.stdout(self.stdout.stdio());
        cmd.stderr(self.stderr.stdio());
        if let Some(ref dir) = self.cwd {
            cmd.current_dir(dir);
        }
    }
}

pub struct ShOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

#[macro_export]
macro_rules! sh {
    (options($opts:expr), $cmd:expr $(,)?) => {{ $crate::sh::sh($cmd, $opts) }};

    ($cmd:expr $(,)?) => {{ $crate::sh::sh($cmd, $crate::sh::ShOptions::default()) }};
}

pub fn sh<S, O>(cmd: S, opts: O) -> Result<ShOutput>
where
    S: AsRef<str>,
    O: ShConfig,
{
    let cmd = cmd.as_ref();
    log::debug!("[sh] {}", cmd);

    let mut command = Command::new("sh");
    command.arg("-c").arg(cmd);
    opts.apply(&mut command);

    let output = command.output()?;
    if !output.status.success() {
        bail!(
            "command failed: {}\nexit code: {:?}",
            cmd,
            output.status.code().unwrap_or(-1)
        );
    }

    Ok(ShOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_piped_stdout() {
        let opts = ShOptionsBuilder::default()
            .stdout(StreamMode::Pipe)
            .build()
            .unwrap();
        let out = crate::sh!(options(opts), "echo picobase").unwrap();
        assert!(out.status.success());
        assert_eq!(out.stdout.trim(), "picobase");
    }

    #[test]
    fn failing_command_is_an_error() {
        let opts = ShOptions {
            stdout: StreamMode::Null,
            stderr: StreamMode::Null,
            cwd: None,
        };
        assert!(crate::sh!(options(opts), "exit 3").is_err());
    }
}
