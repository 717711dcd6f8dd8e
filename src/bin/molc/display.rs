use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Error;
use indicatif::{ProgressBar, ProgressStyle};

use molspin::ModelError;
use molspin::io::Error as IoError;
use molspin::io::mmt::Warning;

#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub interactive: bool,
}

impl Context {
    pub fn detect() -> Self {
        Self {
            interactive: crate::input::stderr_is_tty(),
        }
    }

    pub fn with_quiet(self, quiet: bool) -> Self {
        if quiet { Self { interactive: false } } else { self }
    }
}

pub struct StepSpinner {
    bar: Option<ProgressBar>,
    start: Instant,
    step: u8,
    total_steps: u8,
    step_start: Instant,
}

impl StepSpinner {
    pub fn new(total_steps: u8) -> Self {
        let now = Instant::now();
        Self {
            bar: None,
            start: now,
            step: 0,
            total_steps,
            step_start: now,
        }
    }

    pub fn step(&mut self, description: &str) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }

        self.step += 1;
        self.step_start = Instant::now();

        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner:.cyan} {msg}")
                .expect("invalid template")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        bar.enable_steady_tick(Duration::from_millis(80));
        bar.set_message(format!(
            "[{}/{}] {}...",
            self.step, self.total_steps, description
        ));

        self.bar = Some(bar);
    }

    pub fn complete_step(&mut self, description: &str, substeps: &[&str]) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }

        let elapsed = self.step_start.elapsed();
        let mut stderr = io::stderr().lock();

        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m {:<44} {:>5.1}s",
            description,
            elapsed.as_secs_f64()
        );

        for substep in substeps {
            let _ = writeln!(stderr, "      \x1b[2m·\x1b[0m {}", substep);
        }
    }

    pub fn finish(mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }

        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr);
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m Compilation complete {:>29}",
            format!("Total: {:.2}s", self.start.elapsed().as_secs_f64())
        );
        let _ = writeln!(stderr);
    }
}

pub enum Progress {
    Interactive(StepSpinner),
    Silent,
}

impl Progress {
    pub fn new(interactive: bool, total_steps: u8) -> Self {
        if interactive {
            Self::Interactive(StepSpinner::new(total_steps))
        } else {
            Self::Silent
        }
    }

    pub fn step(&mut self, description: &str) {
        if let Self::Interactive(s) = self {
            s.step(description);
        }
    }

    pub fn complete_step(&mut self, description: &str, substeps: &[&str]) {
        if let Self::Interactive(s) = self {
            s.complete_step(description, substeps);
        }
    }

    pub fn finish(self) {
        if let Self::Interactive(s) = self {
            s.finish();
        }
    }
}

pub fn print_warning(warning: &Warning) {
    eprintln!(
        "warning: unrecognized parameter key '{}' at line {} (ignored)",
        warning.key, warning.line
    );
}

pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr, "error: {err}");

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "  caused by: {cause}");
        source = cause.source();
    }

    if let Some(hints) = collect_hints(err) {
        let _ = writeln!(stderr);
        for hint in hints {
            let _ = writeln!(stderr, "  hint: {hint}");
        }
    }
}

fn collect_hints(err: &Error) -> Option<Vec<String>> {
    let mut hints = Vec::new();

    if let Some(io_err) = err.downcast_ref::<IoError>() {
        collect_io_hints(io_err, &mut hints);
    } else if let Some(model_err) = err.downcast_ref::<ModelError>() {
        collect_model_hints(model_err, &mut hints);
    } else if let Some(std_err) = err.downcast_ref::<std::io::Error>() {
        collect_std_io_hints(std_err, &mut hints);
    }

    if hints.is_empty() { None } else { Some(hints) }
}

fn collect_io_hints(err: &IoError, hints: &mut Vec<String>) {
    match err {
        IoError::Io { source } => collect_std_io_hints(source, hints),

        IoError::Parse { line, .. } => {
            hints.push(format!(
                "Inspect the input around line {line} for malformed entries"
            ));
            hints.push("Data lines are whitespace-separated key=value tokens".into());
        }

        IoError::MissingKey { key, .. } => {
            hints.push(format!("Every edge line must name {key}= explicitly"));
        }

        IoError::SectionTooShort {
            section, declared, ..
        } => {
            hints.push(format!(
                "The {section} count line declares {declared} records; add the missing lines or correct the count"
            ));
        }

        IoError::MissingLead(side) => {
            hints.push(format!(
                "Designate the {side} lead before writing the device out"
            ));
        }

        IoError::Model(model_err) => collect_model_hints(model_err, hints),

        IoError::BadMagic { .. } | IoError::UnsupportedVersion { .. } => {
            hints.push("The input does not look like an artifact produced by this compiler".into());
        }

        IoError::Truncated { .. } | IoError::TrailingData { .. } => {
            hints.push("The artifact may be corrupted or partially written".into());
        }

        IoError::BufferTooSmall { required, .. } => {
            hints.push(format!("Allocate at least {required} bytes for the encoding"));
        }
    }
}

fn collect_model_hints(err: &ModelError, hints: &mut Vec<String>) {
    match err {
        ModelError::NodeIndexOutOfRange { .. } => {
            hints.push("Node indices are dense and zero-based".into());
            hints.push("srcNode and destNode must reference nodes declared in the node section".into());
        }
        ModelError::LeadIndexOutOfRange { .. } => {
            hints.push("The lead lines must reference nodes declared in the node section".into());
        }
    }
}

fn collect_std_io_hints(source: &std::io::Error, hints: &mut Vec<String>) {
    use std::io::ErrorKind;

    match source.kind() {
        ErrorKind::NotFound => {
            hints.push("Check the path spelling and ensure the file exists".into());
        }
        ErrorKind::PermissionDenied => {
            hints.push("Check file permissions with `ls -la`".into());
        }
        ErrorKind::WriteZero => {
            hints.push("Failed to write data (disk full?)".into());
        }
        _ => {}
    }
}
