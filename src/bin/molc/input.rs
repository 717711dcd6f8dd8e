use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Read, Stdin, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// Returns `true` if stderr is a terminal (interactive).
pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

/// Returns `true` if stdin is a terminal (interactive).
pub fn stdin_is_tty() -> bool {
    io::stdin().is_terminal()
}

pub enum Source {
    File(PathBuf),
    Stdin,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// Decides where the MMT source comes from. With no argument, a terminal
/// user is prompted for a filename and piped input is read directly.
pub fn resolve(path: Option<PathBuf>) -> Result<Source> {
    match path {
        Some(p) => Ok(Source::File(p)),
        None if stdin_is_tty() => prompt_filename().map(Source::File),
        None => Ok(Source::Stdin),
    }
}

fn prompt_filename() -> Result<PathBuf> {
    let mut stderr = io::stderr().lock();
    write!(stderr, "Enter filename: ").and_then(|_| stderr.flush())?;
    drop(stderr);

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read filename from stdin")?;

    let trimmed = line.trim();
    if trimmed.is_empty() {
        bail!("No input filename provided.");
    }
    Ok(PathBuf::from(trimmed))
}

pub enum InputSource {
    File(BufReader<File>),
    Stdin(BufReader<Stdin>),
}

impl Read for InputSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            InputSource::File(r) => r.read(buf),
            InputSource::Stdin(r) => r.read(buf),
        }
    }
}

impl BufRead for InputSource {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            InputSource::File(r) => r.fill_buf(),
            InputSource::Stdin(r) => r.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            InputSource::File(r) => r.consume(amt),
            InputSource::Stdin(r) => r.consume(amt),
        }
    }
}

pub fn open(source: &Source) -> Result<InputSource> {
    match source {
        Source::File(p) => {
            let file = File::open(p)
                .with_context(|| format!("Failed to open input file: {}", p.display()))?;
            Ok(InputSource::File(BufReader::new(file)))
        }
        Source::Stdin => Ok(InputSource::Stdin(BufReader::new(io::stdin()))),
    }
}
