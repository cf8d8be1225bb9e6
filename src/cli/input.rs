//! Line sources for the command loop and the token stream built on them.
//!
//! Terminal sessions read through `rustyline` for line editing and history;
//! piped input and tests read from any `BufRead`. Prompts and the menu never
//! go to the result stream, so JSON output stays parseable.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use rustyline::config::Config;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Editor};

use crate::types::{GraphError, GraphResult};

/// Where command lines come from.
pub trait LineSource {
    /// Show `prompt` and read one line. `None` means end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Show text outside the result stream (menu, hints).
    fn show(&mut self, text: &str) -> io::Result<()>;
}

/// Lines from any reader, with prompts written to a separate sink.
pub struct PlainLines<R, P> {
    inner: R,
    prompts: P,
    show_prompts: bool,
}

impl<R: BufRead, P: Write> PlainLines<R, P> {
    /// Read from `inner`; prompts go to `prompts` unless `show_prompts` is false.
    pub fn new(inner: R, prompts: P, show_prompts: bool) -> Self {
        Self {
            inner,
            prompts,
            show_prompts,
        }
    }
}

impl<R: BufRead, P: Write> LineSource for PlainLines<R, P> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if self.show_prompts {
            write!(self.prompts, "{prompt}")?;
            self.prompts.flush()?;
        }
        let mut line = String::new();
        if self.inner.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        write!(self.prompts, "{text}")?;
        self.prompts.flush()
    }
}

/// History file location.
fn history_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".gsearch_history")
}

/// Terminal input with line editing and history.
pub struct EditorLines {
    editor: DefaultEditor,
    history: PathBuf,
}

impl EditorLines {
    /// Open the line editor and load saved history.
    pub fn new() -> GraphResult<Self> {
        let config = Config::builder()
            .history_ignore_space(true)
            .auto_add_history(true)
            .build();
        let mut editor: DefaultEditor = Editor::with_config(config).map_err(readline_io)?;

        let history = history_path();
        if history.exists() {
            let _ = editor.load_history(&history);
        }
        Ok(Self { editor, history })
    }
}

impl LineSource for EditorLines {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => return Ok(Some(line)),
                Err(ReadlineError::Interrupted) => {
                    eprintln!("  (Ctrl+C) Type q to quit.");
                }
                Err(ReadlineError::Eof) => return Ok(None),
                Err(ReadlineError::Io(e)) => return Err(e),
                Err(e) => return Err(io::Error::other(e.to_string())),
            }
        }
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        eprint!("{text}");
        Ok(())
    }
}

impl Drop for EditorLines {
    fn drop(&mut self) {
        let _ = self.editor.save_history(&self.history);
    }
}

fn readline_io(err: ReadlineError) -> GraphError {
    match err {
        ReadlineError::Io(e) => GraphError::Io(e),
        other => GraphError::Io(io::Error::other(other.to_string())),
    }
}

/// Reads tokens one at a time, pulling new lines only when the current one
/// is used up. Operands may therefore follow a command on the same line or
/// arrive on later lines.
pub struct TokenReader<S> {
    source: S,
    pending: VecDeque<String>,
}

impl<S: LineSource> TokenReader<S> {
    /// Tokenize lines read from `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    ///
    /// `prompt` is shown only when a new line has to be read.
    pub fn next_token(&mut self, prompt: &str) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let line = match self.source.read_line(prompt)? {
                Some(line) => line,
                None => return Ok(None),
            };
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Drop whatever is left of the current line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }

    /// Show text through the underlying source.
    pub fn show(&mut self, text: &str) -> io::Result<()> {
        self.source.show(text)
    }
}
