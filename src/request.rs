//! Process spawn request.

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Stdio;

/// How one of the child's standard streams is wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StdioMode {
    /// Share the parent's stream (default).
    #[default]
    Inherit,

    /// Connect the stream to a pipe readable/writable from the parent.
    Piped,

    /// Connect the stream to the null device.
    Null,
}

impl StdioMode {
    pub(crate) fn to_stdio(self) -> Stdio {
        match self {
            StdioMode::Inherit => Stdio::inherit(),
            StdioMode::Piped => Stdio::piped(),
            StdioMode::Null => Stdio::null(),
        }
    }
}

/// A request to launch a child process.
///
/// This struct represents what the caller wants to execute. Once the
/// creation slot is armed, every request passes through the agent
/// injection rewrite before it reaches the operating system.
#[derive(Debug, Clone, Default)]
pub struct SpawnRequest {
    /// Program to execute, resolved through `PATH` if not absolute.
    pub command: PathBuf,

    /// Arguments to pass to the program (not including the program itself).
    pub args: Vec<String>,

    /// Complete environment for the child.
    ///
    /// `None` means the child inherits the parent's environment untouched.
    /// `Some` replaces the environment entirely with the given mapping.
    pub env: Option<HashMap<String, String>>,

    /// Working directory for the child. `None` keeps the parent's.
    pub cwd: Option<PathBuf>,

    /// Standard input wiring.
    pub stdin: StdioMode,

    /// Standard output wiring.
    pub stdout: StdioMode,

    /// Standard error wiring.
    pub stderr: StdioMode,
}

impl SpawnRequest {
    /// Create a new request with minimal arguments.
    pub fn new(command: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
            ..Self::default()
        }
    }

    /// Set the working directory.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Replace the child's environment.
    pub fn with_env(mut self, env: HashMap<String, String>) -> Self {
        self.env = Some(env);
        self
    }

    /// Add a single environment variable.
    ///
    /// Starts an explicit (empty) environment if none was set, so the child
    /// no longer inherits the parent's.
    pub fn with_env_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set the wiring of all three standard streams at once.
    pub fn with_stdio(mut self, stdin: StdioMode, stdout: StdioMode, stderr: StdioMode) -> Self {
        self.stdin = stdin;
        self.stdout = stdout;
        self.stderr = stderr;
        self
    }
}
