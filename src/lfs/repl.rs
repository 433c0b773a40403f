use std::error;
use std::fmt;
use std::io::{self, BufRead, IsTerminal, Write};

use rustyline::error::ReadlineError;

use crate::common::Stages;
use crate::env::Env;
use crate::readline::{EditorSource, LineSource, ReadError, StreamSource};

pub const DEFAULT_PROMPT: &str = "--> ";
pub const READ_ERROR_PREFIX: &str = "read error: ";

/// What to do when a read reports end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EofPolicy {
    Stop,
    /// Skip the iteration and prompt again. On a closed stream this never
    /// returns.
    Continue,
}

#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub prompt: String,
    pub eof: EofPolicy,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: DEFAULT_PROMPT.to_owned(),
            eof: EofPolicy::Stop,
        }
    }
}

/// Why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    EndOfInput,
    ReadFailed,
}

#[derive(Debug)]
pub enum ReplError {
    Output(io::Error),
    Editor(ReadlineError),
}

impl From<io::Error> for ReplError {
    fn from(err: io::Error) -> Self {
        ReplError::Output(err)
    }
}

impl From<ReadlineError> for ReplError {
    fn from(err: ReadlineError) -> Self {
        ReplError::Editor(err)
    }
}

impl fmt::Display for ReplError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ReplError::Output(ref err) => write!(f, "output error: {}", err),
            ReplError::Editor(ref err) => write!(f, "line editor error: {}", err),
        }
    }
}

impl error::Error for ReplError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            ReplError::Output(ref err) => Some(err),
            ReplError::Editor(ref err) => Some(err),
        }
    }
}

pub struct Repl<S> {
    config: ReplConfig,
    stages: S,
}

impl<S: Stages> Repl<S> {
    pub fn new(config: ReplConfig, stages: S) -> Repl<S> {
        Repl { config, stages }
    }

    /// Runs the loop on the process' stdin, stdout and stderr.
    ///
    /// A terminal on stdin gets a line editor with history; piped input is
    /// read as a plain stream. The handles are held for the duration of
    /// the run.
    pub fn run_stdio(&self, env: &Env) -> Result<Outcome, ReplError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let stderr = io::stderr();

        if stdin.is_terminal() {
            debug!("stdin is a terminal, using line editor");

            let source = EditorSource::new()?;
            self.run_source(env, source, stdout.lock(), stderr.lock())
        } else {
            self.run(env, stdin.lock(), stdout.lock(), stderr.lock())
        }
    }

    /// Runs the loop on a plain input stream.
    pub fn run<R, W, D>(&self, env: &Env, input: R, output: W, diag: D)
                        -> Result<Outcome, ReplError>
        where R: BufRead,
              W: Write,
              D: Write
    {
        self.run_source(env, StreamSource::new(input), output, diag)
    }

    /// Prompts, reads a line and prints the result of the stages until
    /// input ends (subject to `EofPolicy`) or a read fails.
    ///
    /// Every line read is handed to the source's history. A read failure
    /// is written to `diag` once and ends the loop with
    /// `Outcome::ReadFailed`; only failures to write are returned as errors.
    pub fn run_source<L, W, D>(&self, env: &Env, mut source: L, mut output: W, mut diag: D)
                               -> Result<Outcome, ReplError>
        where L: LineSource,
              W: Write,
              D: Write
    {
        loop {
            let line = match source.read_line(&self.config.prompt, &mut output) {
                Ok(Some(line)) => line,

                Ok(None) => {
                    debug!("end of input, policy: {:?}", self.config.eof);

                    match self.config.eof {
                        EofPolicy::Stop => return Ok(Outcome::EndOfInput),
                        EofPolicy::Continue => continue,
                    }
                }

                Err(ReadError::Prompt(err)) => return Err(ReplError::Output(err)),

                Err(err) => {
                    debug!("read failed: {:?}", err);

                    writeln!(diag, "{}{}", READ_ERROR_PREFIX, err)?;
                    diag.flush()?;

                    return Ok(Outcome::ReadFailed);
                }
            };

            trace!("line: {:?}", line);
            source.add_history(&line);

            let value = self.stages.rep(env, &line);
            writeln!(output, "{}", self.stages.print(&value))?;
            output.flush()?;
        }
    }
}
