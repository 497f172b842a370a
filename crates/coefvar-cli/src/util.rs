use std::{
    fs::{self, File},
    io::{self, BufWriter, StdoutLock, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;

/// Where a report or dataset goes: stdout, or a file given with `--output`.
///
/// An `Output` is used once. [`Output::emit`] writes and flushes in one step
/// so a failed flush is reported like any other write error.
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File {
        path: PathBuf,
        writer: BufWriter<File>,
    },
}

impl Output {
    /// Creates `path`, or locks stdout when no path is given.
    pub fn create(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::Stdout(io::stdout().lock()));
        };
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file {}", path.display()))?;
        Ok(Self::File {
            path: path.to_owned(),
            writer: BufWriter::new(file),
        })
    }

    pub fn destination(&self) -> String {
        match self {
            Self::Stdout(_) => "stdout".to_owned(),
            Self::File { path, .. } => path.display().to_string(),
        }
    }

    /// Writes `what` through `write`, then flushes.
    pub fn emit<F>(mut self, what: &str, write: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut dyn Write) -> io::Result<()>,
    {
        let result = {
            let writer = self.writer();
            write(&mut *writer).and_then(|()| writer.flush())
        };
        result.with_context(|| format!("Failed to write {what} to {}", self.destination()))
    }

    /// Writes `value` as pretty-printed JSON followed by a newline, then flushes.
    pub fn emit_json<T>(self, what: &str, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize + ?Sized,
    {
        self.emit(what, |writer| {
            serde_json::to_writer_pretty(&mut *writer, value)?;
            writeln!(writer)
        })
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(writer) => writer,
            Self::File { writer, .. } => writer,
        }
    }
}

/// Reads `path` and deserializes it from JSON.
pub fn read_json<T>(path: &Path) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Entry {
        label: String,
        width: f64,
    }

    #[test]
    fn test_emit_json_ends_with_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let entry = Entry {
            label: "PESO (kg)".to_owned(),
            width: 4.0,
        };

        let output = Output::create(Some(&path)).unwrap();
        assert_eq!(output.destination(), path.display().to_string());
        output.emit_json("report", &entry).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("}\n"));
        assert_eq!(read_json::<Entry>(&path).unwrap(), entry);
    }

    #[test]
    fn test_emit_flushes_buffered_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");

        Output::create(Some(&path))
            .unwrap()
            .emit("dataset", |writer| writeln!(writer, "170.00 65.00"))
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "170.00 65.00\n");
    }

    #[test]
    fn test_emit_reports_destination_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");

        let err = Output::create(Some(&path))
            .unwrap()
            .emit("dataset", |_| Err(io::Error::other("disk full")))
            .unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("Failed to write dataset to "));
        assert!(message.ends_with("data.txt"));
    }

    #[test]
    fn test_read_json_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = read_json::<Entry>(&missing).unwrap_err();
        assert!(err.to_string().contains("missing.json"));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ \"label\": ").unwrap();
        let err = read_json::<Entry>(&broken).unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON in "));
    }
}
