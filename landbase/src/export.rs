//! Saving the land list as a text file and opening it.

use crate::error::Result;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Asks the user where to save. `None` means the user declined.
pub trait PathPrompt {
    fn ask_save_path(&mut self) -> Option<PathBuf>;
}

/// Opens a file with the system's default handler
pub trait FileOpener {
    fn open(&self, path: &Path) -> io::Result<()>;
}

/// What happened to an export request
#[derive(Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// No path chosen; nothing written
    Declined,
    /// File written. `open_warning` is set when the file could not be opened.
    Saved {
        path: PathBuf,
        open_warning: Option<String>,
    },
}

/// Path given up front (e.g. on the command line)
#[derive(Debug, Clone, Default)]
pub struct FixedPath(pub Option<PathBuf>);

impl PathPrompt for FixedPath {
    fn ask_save_path(&mut self) -> Option<PathBuf> {
        self.0.take()
    }
}

/// Reads the save path from a line of input; a blank line declines
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> PathPrompt for LinePrompt<R, W> {
    fn ask_save_path(&mut self) -> Option<PathBuf> {
        if write!(self.output, "Save as (*.txt, empty to cancel): ").is_err() {
            return None;
        }
        if let Err(e) = self.output.flush() {
            log::warn!("Failed to show save prompt: {}", e);
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(_) => {
                let answer = line.trim();
                if answer.is_empty() {
                    None
                } else {
                    Some(with_txt_extension(PathBuf::from(answer)))
                }
            }
            Err(e) => {
                log::warn!("Failed to read save path: {}", e);
                None
            }
        }
    }
}

/// Appends `.txt` when the chosen name has no extension
fn with_txt_extension(mut path: PathBuf) -> PathBuf {
    if path.extension().is_none() {
        path.set_extension("txt");
    }
    path
}

/// Opens files with `start`, `open` or `xdg-open` depending on the OS
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl FileOpener for SystemOpener {
    fn open(&self, path: &Path) -> io::Result<()> {
        let status = if cfg!(target_os = "windows") {
            Command::new("cmd")
                .args(["/C", "start", ""])
                .arg(path)
                .status()?
        } else if cfg!(target_os = "macos") {
            Command::new("open").arg(path).status()?
        } else {
            Command::new("xdg-open").arg(path).status()?
        };

        if status.success() {
            Ok(())
        } else {
            Err(io::Error::other(format!("opener exited with {status}")))
        }
    }
}

/// Writes `text` to a user-chosen file and opens it.
///
/// Trailing whitespace is stripped before writing. Declining the prompt is not
/// an error. Failing to open the saved file is reported as a warning in the
/// outcome; failing to write it is an error.
pub fn save_and_open(
    text: &str,
    prompt: &mut impl PathPrompt,
    opener: &impl FileOpener,
) -> Result<ExportOutcome> {
    let Some(path) = prompt.ask_save_path() else {
        log::info!("Export cancelled");
        return Ok(ExportOutcome::Declined);
    };

    {
        let mut file = File::create(&path)?;
        file.write_all(text.trim_end().as_bytes())?;
        file.flush()?;
    }
    log::info!("Saved land list to {}", path.display());

    let open_warning = match opener.open(&path) {
        Ok(()) => None,
        Err(e) => {
            let warning = format!("Could not open {}: {}", path.display(), e);
            log::warn!("{}", warning);
            Some(warning)
        }
    };

    Ok(ExportOutcome::Saved { path, open_warning })
}
