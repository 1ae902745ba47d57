//! Console rendering of engine responses.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use rand::Rng;

use ab_engine::ResponseVisitor;

use crate::config::PlayConfig;

/// Shown for `NotUnderstood`.
pub const NOT_UNDERSTOOD: &str = "Sorry, I don't know what that means.";
/// Shown for `Bye`.
pub const GOODBYE: &str = "Good bye.";
/// Shown for `Finished`.
pub const THE_END: &str = "*** The End ***";
/// Shown instead of a turn that failed.
pub const APOLOGY: &str = "Oops, something went wrong. Please try again.";

/// Writes directives as plain lines of text.
pub struct ConsoleRenderer<W> {
    out: W,
    config: PlayConfig,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, config: PlayConfig) -> Self {
        Self { out, config }
    }

    /// Print the input prompt.
    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        if self.config.typewriter {
            self.type_out(text)
        } else {
            writeln!(self.out, "{text}")
        }
    }

    fn type_out(&mut self, text: &str) -> io::Result<()> {
        let max_ms = self.config.keystroke_jitter.as_millis() as u64;
        let mut rng = rand::rng();
        for c in text.chars() {
            thread::sleep(Duration::from_millis(rng.random_range(0..=max_ms)));
            write!(self.out, "{c}")?;
            self.out.flush()?;
        }
        writeln!(self.out)
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    #[cfg(test)]
    pub fn out_mut(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> ResponseVisitor for ConsoleRenderer<W> {
    type Error = io::Error;

    fn say(&mut self, text: &str) -> io::Result<()> {
        self.line(text)
    }

    fn delay(&mut self, duration: Duration) -> io::Result<()> {
        if self.config.honor_delays {
            self.out.flush()?;
            thread::sleep(duration);
        }
        Ok(())
    }

    fn play(&mut self, sound: &str) -> io::Result<()> {
        writeln!(self.out, "(sound: {})", self.config.sound_url(sound))
    }

    fn not_understood(&mut self) -> io::Result<()> {
        self.line(NOT_UNDERSTOOD)
    }

    fn bye(&mut self) -> io::Result<()> {
        self.line(GOODBYE)
    }

    fn finished(&mut self) -> io::Result<()> {
        self.line(THE_END)
    }
}
