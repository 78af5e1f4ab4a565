use std::io::{self, Stderr, Stdout, Write};

/// Two append-only text lanes: informational output and error output.
///
/// The real binary binds stdout/stderr via [`ConsoleSink::stdio`]; tests bind
/// byte buffers and inspect them with [`ConsoleSink::into_parts`]. One line
/// per routed event, newline-terminated.
pub struct ConsoleSink<O, E> {
    out: O,
    err: E,
}

impl ConsoleSink<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

impl<O: Write, E: Write> ConsoleSink<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn out_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    pub fn error_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.err, "{line}")
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}
