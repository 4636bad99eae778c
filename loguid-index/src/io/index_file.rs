//! Loading listing files written by the loguid reader.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::index::LogIndex;

/// Read a listing fully and parse it into a [`LogIndex`].
pub fn load_index(path: &Path) -> Result<LogIndex> {
    debug!(path = %path.display(), "loading log index");
    let contents =
        fs::read_to_string(path).with_context(|| format!("read log index {}", path.display()))?;
    let index = LogIndex::parse(&contents);
    info!(
        path = %path.display(),
        loguids = index.len(),
        logs = index.log_count(),
        "log index loaded"
    );
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::IndexFixture;

    #[test]
    fn load_reads_listing() {
        let fixture = IndexFixture::new().expect("fixture");
        let path = fixture
            .write_listing("local.txt", &[("abc", "foo.log"), ("abc", "bar.log")])
            .expect("write listing");
        let index = load_index(&path).expect("load");
        assert_eq!(index.len(), 1);
        assert_eq!(index.log_count(), 2);
    }

    #[test]
    fn load_twice_yields_same_index() {
        let fixture = IndexFixture::new().expect("fixture");
        let path = fixture
            .write("nas.txt", "# listing\nb  2.log\na  1.log\nxyz\n")
            .expect("write");
        assert_eq!(load_index(&path).expect("first"), load_index(&path).expect("second"));
    }

    #[test]
    fn load_missing_file_errors_with_path() {
        let fixture = IndexFixture::new().expect("fixture");
        let path = fixture.path().join("absent.txt");
        let err = load_index(&path).expect_err("missing file should fail");
        let message = format!("{err:#}");
        assert!(message.contains("read log index"));
        assert!(message.contains("absent.txt"));
    }
}
