//! Terminal output. A rich panel when stdout is an interactive terminal,
//! plain timestamped lines otherwise.

use crate::config::BOT_NAME;
use crate::message::Message;
use chrono::{DateTime, Local};
use colored::Colorize;
use std::io::{self, IsTerminal, Write};

pub trait Screen {
    fn render(&self, message: &Message, at: DateTime<Local>) -> String;

    fn show(&self, message: &Message, at: DateTime<Local>) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", self.render(message, at))?;
        stdout.flush()
    }
}

/// Chooses the display once, based on the environment.
pub fn detect(force_plain: bool) -> Box<dyn Screen> {
    let no_color = std::env::var_os("NO_COLOR").is_some();
    if force_plain || no_color || !io::stdout().is_terminal() {
        Box::new(PlainScreen)
    } else {
        Box::new(RichScreen)
    }
}

pub struct PlainScreen;

impl Screen for PlainScreen {
    fn render(&self, message: &Message, at: DateTime<Local>) -> String {
        format!("[{}] [{}] {}", BOT_NAME, at.format("%H:%M:%S"), message.text)
    }
}

pub struct RichScreen;

impl Screen for RichScreen {
    fn render(&self, message: &Message, at: DateTime<Local>) -> String {
        let title = format!(" {} · {} ", BOT_NAME, at.format("%H:%M:%S"));
        let text_width = message.text.chars().count();
        let inner = text_width.max(title.chars().count()) + 2;

        let top_fill = "─".repeat(inner - title.chars().count() - 1);
        let top = format!("╭─{}{}╮", title.bold(), top_fill);
        let padding = " ".repeat(inner - text_width - 1);
        let text = if message.is_promo() {
            message.text.yellow()
        } else {
            message.text.bright_white().bold()
        };
        let body = format!("│ {}{}│", text, padding);
        let bottom = format!("╰{}╯", "─".repeat(inner));

        format!("{}\n{}\n{}", top.cyan(), body, bottom.cyan())
    }
}
