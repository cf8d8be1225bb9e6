//! Line-oriented command loop.
//!
//! Reads a one-character command code followed by its integer operands and
//! dispatches to [`commands`]. Rejected commands are reported and the loop
//! goes on; only I/O failures end it early. Results go to the output stream;
//! the menu and prompts go through the [`LineSource`].

use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::cli::commands;
use crate::cli::input::{LineSource, PlainLines, TokenReader};
use crate::config::{DriverConfig, OutputFormat};
use crate::graph::{Graph, TraversalKind};
use crate::types::{GraphError, GraphResult};

/// One interactive session: the graph plus its input and output streams.
pub struct Session<S, W> {
    graph: Graph,
    input: TokenReader<S>,
    out: W,
    json: bool,
    quiet: bool,
}

impl<R: BufRead, W: Write> Session<PlainLines<R, io::Stderr>, W> {
    /// Create a session reading plain lines from `input`, prompting on stderr.
    pub fn new(config: &DriverConfig, input: R, out: W) -> Self {
        Self::with_source(config, PlainLines::new(input, io::stderr(), !config.quiet), out)
    }
}

impl<S: LineSource, W: Write> Session<S, W> {
    /// Create a session with a fresh graph built from `config`.
    pub fn with_source(config: &DriverConfig, source: S, out: W) -> Self {
        Self {
            graph: Graph::with_capacity(config.model, config.capacity),
            input: TokenReader::new(source),
            out,
            json: config.format == OutputFormat::Json,
            quiet: config.quiet,
        }
    }

    /// The session graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Consume the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run until `q` or end of input.
    pub fn run(&mut self) -> GraphResult<()> {
        if !self.quiet {
            self.input.show(&commands::menu_text(self.graph.model()))?;
        }
        while !self.step()? {}
        self.out.flush()?;
        Ok(())
    }

    /// Execute one command. Returns `true` when the session should end.
    pub fn step(&mut self) -> GraphResult<bool> {
        let token = match self.input.next_token("Enter command: ")? {
            Some(t) => t,
            None => return Ok(true),
        };

        match self.dispatch(&token) {
            Ok(done) => Ok(done),
            Err(e) if e.is_recoverable() => {
                warn!("command '{}' rejected: {}", token, e);
                if matches!(e, GraphError::InvalidCommand(_) | GraphError::InvalidOperand(_)) {
                    self.input.discard_line();
                }
                commands::report_error(&e, &mut self.out, self.json)?;
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    fn dispatch(&mut self, token: &str) -> GraphResult<bool> {
        let mut chars = token.chars();
        let code = match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_ascii_lowercase(),
            _ => return Err(GraphError::InvalidCommand(token.to_string())),
        };
        debug!("command '{}'", code);

        let json = self.json;
        let max = self.graph.capacity().saturating_sub(1);
        match code {
            'z' => commands::cmd_initialize(&mut self.graph, &mut self.out, json)?,
            'v' => {
                let v = match self.operand(&format!("Enter vertex to insert (0-{max}): "))? {
                    Some(v) => v,
                    None => return Ok(true),
                };
                commands::cmd_insert_vertex(&mut self.graph, v, &mut self.out, json)?;
            }
            'e' => {
                let prompt = format!("Enter two vertices to connect with an edge (0-{max}): ");
                let a = match self.operand(&prompt)? {
                    Some(v) => v,
                    None => return Ok(true),
                };
                let b = match self.operand(&prompt)? {
                    Some(v) => v,
                    None => return Ok(true),
                };
                commands::cmd_insert_edge(&mut self.graph, a, b, &mut self.out, json)?;
            }
            'd' | 'b' => {
                let (kind, label) = if code == 'd' {
                    (TraversalKind::Dfs, "DFS")
                } else {
                    (TraversalKind::Bfs, "BFS")
                };
                let start =
                    match self.operand(&format!("Enter starting vertex for {label} (0-{max}): "))? {
                        Some(v) => v,
                        None => return Ok(true),
                    };
                commands::cmd_search(&mut self.graph, kind, start, &mut self.out, json)?;
            }
            'p' => commands::cmd_print(&self.graph, &mut self.out, json)?,
            'h' | '?' => self.input.show(&commands::menu_text(self.graph.model()))?,
            'q' => {
                commands::cmd_quit(&mut self.out, json)?;
                return Ok(true);
            }
            _ => return Err(GraphError::InvalidCommand(token.to_string())),
        }
        Ok(false)
    }

    /// Read one integer operand, prompting if the current line is used up.
    ///
    /// `None` means input ended before the operand arrived.
    fn operand(&mut self, prompt: &str) -> GraphResult<Option<i64>> {
        match self.input.next_token(prompt)? {
            Some(t) => t
                .parse::<i64>()
                .map(Some)
                .map_err(|_| GraphError::InvalidOperand(t)),
            None => Ok(None),
        }
    }
}
