//! Interactive driver around the pipeline.
//!
//! The driver is an explicit loop over three states:
//!
//! Prompt  -> banner, then the log path from the argument or from the user
//! Run     -> one pipeline run, then the restart menu
//! Exit
//!
//! An unreadable input ends the session with an error. Any other failure is
//! reported and the user is offered a fresh run.

use crate::PipelineError;
use crate::config::SweepConfig;
use crate::pipeline;
use chrono::{Local, NaiveDateTime};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::error;

const BANNER: &str = "\
****************************************************************
*** BIENVENIDO AL FORTI-PROGRAMA DE REVISIÓN DE LOGS ANY-ANY ***
****************************************************************";

const PATH_PROMPT: &str = "Introduce el nombre del fichero de log a tratar: ";

const MENU_PROMPT: &str =
    "\nEjecucion finalizada. Pulsa INTRO para volver a empezar, o escribe SALIR para cerrar el programa: ";

const EXIT_WORD: &str = "SALIR";

pub const PROGRESS_MESSAGE: &str = "Tratando el fichero de log...";
pub const INPUT_OPEN_MESSAGE: &str = "ERROR al abrir el fichero de log.";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("console I/O failed: {0}")]
    Console(#[from] io::Error),

    #[error("failed to render run summary: {0}")]
    Summary(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Log path given on the command line. Reused by every restart.
    pub input: Option<PathBuf>,
    /// Stop after one run instead of showing the restart menu.
    pub once: bool,
    pub summary_json: bool,
}

enum State {
    Prompt,
    Run(PathBuf),
    Exit,
}

pub struct Session<'a, R, W> {
    config: &'a SweepConfig,
    options: SessionOptions,
    input: R,
    output: W,
    clock: fn() -> NaiveDateTime,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(config: &'a SweepConfig, options: SessionOptions, input: R, output: W) -> Self {
        Self {
            config,
            options,
            input,
            output,
            clock: local_now,
        }
    }

    /// Replace the timestamp source used for artifact names.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn run(&mut self) -> Result<(), SessionError> {
        let mut state = State::Prompt;

        loop {
            state = match state {
                State::Prompt => self.prompt_for_input()?,
                State::Run(path) => {
                    self.run_once(path)?;
                    self.restart_menu()?
                }
                State::Exit => return Ok(()),
            };
        }
    }

    fn prompt_for_input(&mut self) -> Result<State, SessionError> {
        writeln!(self.output, "{BANNER}")?;

        if let Some(path) = &self.options.input {
            writeln!(self.output, "El fichero de log a tratar es: {}", path.display())?;
            return Ok(State::Run(path.clone()));
        }

        Ok(match self.ask(PATH_PROMPT)? {
            Some(answer) => State::Run(PathBuf::from(answer)),
            None => State::Exit,
        })
    }

    fn run_once(&mut self, path: PathBuf) -> Result<(), SessionError> {
        let started = (self.clock)();
        writeln!(self.output, "{PROGRESS_MESSAGE}")?;

        match pipeline::run(&path, self.config, started) {
            Ok(summary) => {
                let rendered = if self.options.summary_json {
                    summary.render_json()? + "\n"
                } else {
                    summary.render_plain()
                };
                write!(self.output, "{rendered}")?;
                Ok(())
            }
            Err(e) if e.is_fatal_to_process() => {
                writeln!(self.output, "{INPUT_OPEN_MESSAGE}")?;
                Err(e.into())
            }
            Err(e) => {
                error!(error = %e, "run aborted");
                writeln!(self.output, "ERROR: {e}")?;
                Ok(())
            }
        }
    }

    fn restart_menu(&mut self) -> Result<State, SessionError> {
        if self.options.once {
            return Ok(State::Exit);
        }

        Ok(match self.ask(MENU_PROMPT)? {
            Some(answer) if answer.eq_ignore_ascii_case(EXIT_WORD) => State::Exit,
            Some(_) => State::Prompt,
            None => State::Exit,
        })
    }

    /// `None` when the input is exhausted.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }
}
