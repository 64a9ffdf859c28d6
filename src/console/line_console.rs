// Console over any reader/writer pair
//
// stdin/stdout in the binary, Cursor/Vec<u8> in tests.

use crate::console::Console;
use crate::error::Result;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

// ANSI: clear screen, cursor home
const CLEAR_SEQUENCE: &str = "\x1B[2J\x1B[1;1H";

pub struct LineConsole<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl LineConsole<BufReader<Stdin>, Stdout> {
    /// The real terminal, with screen clearing on
    pub fn stdio() -> Self {
        Self {
            input: BufReader::new(io::stdin()),
            output: io::stdout(),
            clear_screen: true,
        }
    }
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    /// Screen clearing is off; escape codes would only clutter captured output
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    /// Get back the writer, e.g. to inspect what a test session printed
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }

        // Strip exactly the line ending, callers decide about other whitespace
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        // Keep captured sessions readable: answer lands on its own line
        if !self.clear_screen {
            writeln!(self.output)?;
        }

        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            write!(self.output, "{}", CLEAR_SEQUENCE)?;
            self.output.flush()?;
        }
        Ok(())
    }
}
