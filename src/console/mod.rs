/// Console I/O boundary
///
/// The menu only talks to a [`Console`]. The binary plugs in stdin/stdout,
/// tests plug in an in-memory script.

pub mod line_console;
pub mod table;

pub use line_console::LineConsole;
pub use table::render_table;

use crate::error::Result;

/// Line-oriented, blocking terminal
pub trait Console {
    /// Show `prompt` and block for one line of input, without the newline.
    ///
    /// End of input is an error; there is no line left to answer with.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Print one line
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Wipe the screen before a screen-sized flow. No-op by default.
    fn clear(&mut self) -> Result<()> {
        Ok(())
    }
}
