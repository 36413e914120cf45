use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{GameResult, History};

/// Writes finished games as JSON files into a directory.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self { num: 1, directory })
    }

    /// Writes the next `game_NNNNNN.json` and returns its path.
    pub fn write_game_recording(&mut self, result: &GameResult) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        write_json(&filepath, result)?;
        self.num += 1;
        Ok(filepath)
    }

    pub fn write_history(&self, history: &History) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join("history.json");
        write_json(&filepath, history)?;
        Ok(filepath)
    }
}

fn write_json<T: Serialize>(filepath: &Path, value: &T) -> anyhow::Result<()> {
    let mut writer = BufWriter::new(File::create(filepath)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
