//! Line-based input and paced output.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;

use europa_game::GameEvent;

use crate::render;

const INVALID_CHOICE: &str = "Invalid choice.";

/// Everything the menu driver needs from a terminal.
pub trait Console {
    /// Ask for a numbered menu selection in `1..=count`.
    ///
    /// Re-prompts on anything else. Returns the 0-based index, or `None`
    /// once input is exhausted.
    fn request_choice(&mut self, prompt: &str, count: usize) -> io::Result<Option<usize>>;

    /// Ask for a line of free text. Returns `None` once input is exhausted.
    fn request_text(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Print text immediately.
    fn say(&mut self, text: &str) -> io::Result<()>;

    /// Print story text. Implementations may pace it.
    fn narrate(&mut self, text: &str) -> io::Result<()> {
        self.say(text)
    }

    /// Show the result of an action.
    fn render(&mut self, event: &GameEvent) -> io::Result<()> {
        let text = render::event_text(event);
        if render::is_story(event) {
            self.narrate(&text)
        } else {
            self.say(&text)
        }
    }
}

/// A console over any reader and writer, with a typewriter effect.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    delay: Duration,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    /// Create a console. A zero `delay` prints story text at once.
    pub fn new(input: R, output: W, delay: Duration) -> Self {
        Self {
            input,
            output,
            delay,
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line.trim().to_string())),
        }
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.output, "{prompt}")?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn request_choice(&mut self, prompt: &str, count: usize) -> io::Result<Option<usize>> {
        loop {
            self.prompt(prompt)?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(None);
            };
            match line.parse::<usize>() {
                Ok(n) if (1..=count).contains(&n) => return Ok(Some(n - 1)),
                _ => writeln!(self.output, "{}", INVALID_CHOICE.yellow())?,
            }
        }
    }

    fn request_text(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompt(prompt)?;
        self.read_line()
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    fn narrate(&mut self, text: &str) -> io::Result<()> {
        if self.delay.is_zero() {
            return self.say(text);
        }
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            self.output.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            self.output.flush()?;
            thread::sleep(self.delay);
        }
        writeln!(self.output)
    }
}
