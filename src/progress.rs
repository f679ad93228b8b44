// src/progress.rs
/// Lightweight progress reporting used by the long-running fetch loops.
/// The CLI prints to stdout; tests record or ignore.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, msg: &str);
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {
    fn log(&mut self, _msg: &str) {}
}

/// Prints status lines to stdout.
pub struct ConsoleProgress;
impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
}

/// Keeps every status line; handy for asserting on what a run reported.
#[derive(Default)]
pub struct RecordingProgress {
    pub lines: Vec<String>,
}
impl Progress for RecordingProgress {
    fn log(&mut self, msg: &str) {
        self.lines.push(s!(msg));
    }
}

/// `Progress: 100/1850 shows (5.4%)`
pub fn progress_line(done: usize, total: usize, what: &str) -> String {
    let pct = if total == 0 { 100.0 } else { done as f64 / total as f64 * 100.0 };
    format!("  Progress: {done}/{total} {what} ({pct:.1}%)")
}
