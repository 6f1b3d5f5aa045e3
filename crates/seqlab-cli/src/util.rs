use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::PathBuf,
};

use anyhow::Context;

/// Destination for generated artifacts: stdout by default, a buffered file
/// when a path is given.
#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    /// Write a sequence in the format the analyze command reads back: one
    /// value per line.
    pub fn write_sequence(&mut self, values: &[f64]) -> anyhow::Result<()> {
        for value in values {
            writeln!(self, "{value}")
                .with_context(|| format!("failed to write to {}", self.display_path()))?;
        }
        self.flush()
            .with_context(|| format!("failed to flush {}", self.display_path()))?;
        Ok(())
    }

    /// Serialize `value` as pretty-printed JSON to the given path, or to
    /// stdout when no path is given.
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(output_path)?;
        serde_json::to_writer_pretty(&mut output, value)
            .with_context(|| format!("failed to write JSON to {}", output.display_path()))?;
        writeln!(output).with_context(|| format!("failed to write to {}", output.display_path()))?;
        output
            .flush()
            .with_context(|| format!("failed to flush {}", output.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}
