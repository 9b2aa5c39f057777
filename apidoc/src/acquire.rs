//! Doc-model acquisition: run the analyzer and load its JSON dump.
//!
//! The analyzer is a trait so the filter and render stages can be driven
//! by an in-memory dump in tests.

use crate::error::{Error, Result};
use crate::model::{decode_dump, DocDescriptor};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// File name the analyzer writes into its log directory.
pub const DUMP_FILE: &str = "doc.json";

/// Something that turns a documentation source tree into descriptors.
pub trait Analyzer {
    fn run(&self, config: &Path, source_dir: &Path) -> Result<Vec<DocDescriptor>>;
}

/// lua-language-server in `--doc` export mode.
pub struct LuaLanguageServer {
    pub program: String,
    /// Leave the scoped temp directory on disk after the run.
    pub keep_temp: bool,
}

impl LuaLanguageServer {
    fn args(config: &Path, log_dir: &Path, source_dir: &Path) -> Vec<String> {
        vec![
            format!("--configpath={}", config.display()),
            format!("--logpath={}", log_dir.display()),
            format!("--doc={}", source_dir.display()),
        ]
    }
}

impl Analyzer for LuaLanguageServer {
    fn run(&self, config: &Path, source_dir: &Path) -> Result<Vec<DocDescriptor>> {
        // Removed on drop unless --keep-temp.
        let temp = tempfile::Builder::new()
            .prefix("apidoc-")
            .disable_cleanup(self.keep_temp)
            .tempdir()?;
        tracing::info!(path = %temp.path().display(), "temporary dir");

        let args = Self::args(config, temp.path(), source_dir);
        tracing::debug!(program = %self.program, ?args, "running analyzer");

        // No timeout: a hung analyzer hangs the run.
        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| Error::ToolSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.stderr.is_empty() {
            tracing::debug!(
                stderr = %String::from_utf8_lossy(&output.stderr).trim_end(),
                "analyzer stderr"
            );
        }
        if !output.status.success() {
            return Err(Error::ToolExecutionFailed {
                program: self.program.clone(),
                code: output.status.code(),
            });
        }

        let dump_path = temp.path().join(DUMP_FILE);
        let text = read_dump(&dump_path)?;
        decode_dump(&text)
    }
}

/// Read a dump file, mapping a missing file to [`Error::MissingDump`].
pub fn read_dump(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::MissingDump(path.to_path_buf()),
        _ => Error::Io(e),
    })
}

/// Load a dump that already exists on disk.
pub fn load_dump(path: &Path) -> Result<Vec<DocDescriptor>> {
    decode_dump(&read_dump(path)?)
}

/// Check the analyzer config exists, then run the analyzer.
pub fn acquire(
    analyzer: &dyn Analyzer,
    config: &Path,
    source_dir: &Path,
) -> Result<Vec<DocDescriptor>> {
    if fs::symlink_metadata(config).is_err() {
        return Err(Error::ConfigNotFound(PathBuf::from(config)));
    }
    analyzer.run(config, source_dir)
}
