use std::path::PathBuf;

use anyhow::Result;
use temp_dir::TempDir;

pub fn write_test_file<S: AsRef<str>, C: AsRef<[u8]>>(
    workdir: &TempDir,
    filename: S,
    content: C,
) -> Result<PathBuf> {
    let file = workdir.child(filename.as_ref());
    std::fs::write(&file, content.as_ref())?;
    Ok(file)
}
