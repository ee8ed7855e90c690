//! Provides error reporting for the command-line interface.

use termcolor::{Buffer, BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

use std::fmt::Display;
use std::io::Write;

/// An error which can be printed to the terminal.
pub trait SliderError {
    /// Writes the error message to the buffer.
    fn display(&self, buf: &mut Buffer);

    /// Prints the error to standard error, prefixed with a red `error: `.
    fn print(&self) {
        let writer = BufferWriter::stderr(ColorChoice::Auto);
        let mut buffer = writer.buffer();

        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_intense(true));
        let _ = write!(buffer, "error: ");
        let _ = buffer.reset();

        self.display(&mut buffer);
        let _ = writer.print(&buffer);
    }
}

impl<T: Display> SliderError for T {
    fn display(&self, buf: &mut Buffer) {
        let _ = writeln!(buf, "{}", self);
    }
}

impl<T: SliderError + 'static> From<T> for Box<dyn SliderError> {
    fn from(t: T) -> Self {
        Box::new(t)
    }
}
