//! Terminal styling for status output
//!
//! Status lines go to stderr and are the only colored output. Paths printed
//! on stdout for the shell wrapper stay plain.

use std::fmt;

use owo_colors::OwoColorize;

/// Value of `--color`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    Always,
    #[default]
    Auto,
    Never,
}

impl ColorMode {
    /// Pick the effective mode
    ///
    /// An explicit flag wins, then `NO_COLOR` (any value), then `TERM=dumb`.
    #[must_use]
    pub fn resolve(flag: Option<Self>) -> Self {
        match flag {
            Some(mode) => mode,
            None if std::env::var_os("NO_COLOR").is_some() => Self::Never,
            None if std::env::var_os("TERM").is_some_and(|term| term == "dumb") => Self::Never,
            None => Self::Auto,
        }
    }

    /// Whether stderr output gets ANSI styling
    #[must_use]
    pub fn should_colorize(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => supports_color::on_cached(supports_color::Stream::Stderr).is_some(),
        }
    }

    #[must_use]
    pub fn colorize_name(self, name: &str) -> String {
        if self.should_colorize() {
            name.cyan().to_string()
        } else {
            name.to_string()
        }
    }

    #[must_use]
    pub fn colorize_path(self, path: &str) -> String {
        if self.should_colorize() {
            path.bright_black().to_string()
        } else {
            path.to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Info,
    Warn,
    Error,
}

/// One status line: a leading marker followed by the message
pub struct Status<D> {
    tone: Tone,
    mode: ColorMode,
    message: D,
}

impl<D: fmt::Display> fmt::Display for Status<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.tone {
            Tone::Success => "✓",
            Tone::Info => "ℹ",
            Tone::Warn => "⚠",
            Tone::Error => "✗",
        };

        if !self.mode.should_colorize() {
            return write!(f, "{marker} {}", self.message);
        }

        match self.tone {
            Tone::Success => write!(f, "{} {}", marker.bright_green().bold(), self.message),
            Tone::Info => write!(f, "{} {}", marker.bright_cyan(), self.message),
            Tone::Warn => write!(f, "{} {}", marker.bright_yellow(), self.message),
            Tone::Error => write!(f, "{} {}", marker.bright_red().bold(), self.message),
        }
    }
}

const fn status<D>(tone: Tone, mode: ColorMode, message: D) -> Status<D> {
    Status {
        tone,
        mode,
        message,
    }
}

pub const fn success<D: fmt::Display>(mode: ColorMode, message: D) -> Status<D> {
    status(Tone::Success, mode, message)
}

pub const fn info<D: fmt::Display>(mode: ColorMode, message: D) -> Status<D> {
    status(Tone::Info, mode, message)
}

pub const fn warn<D: fmt::Display>(mode: ColorMode, message: D) -> Status<D> {
    status(Tone::Warn, mode, message)
}

pub const fn error<D: fmt::Display>(mode: ColorMode, message: D) -> Status<D> {
    status(Tone::Error, mode, message)
}

/// Secondary detail inside a status line
pub struct Dim<D> {
    mode: ColorMode,
    text: D,
}

impl<D: fmt::Display> fmt::Display for Dim<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mode.should_colorize() {
            write!(f, "{}", self.text.dimmed())
        } else {
            write!(f, "{}", self.text)
        }
    }
}

pub const fn dim<D: fmt::Display>(mode: ColorMode, text: D) -> Dim<D> {
    Dim { mode, text }
}
