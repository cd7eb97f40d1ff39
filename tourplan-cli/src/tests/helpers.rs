//! Temporary cost tables for CLI tests.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;
use tourplan_data::Measure;

const FOUR_CITY_DISTANCES: &str = "\
city,A,B,C,D
A,0,10,15,20
B,10,0,35,25
C,15,35,0,30
D,20,25,30,0
";

/// The four-city distances scaled to minutes.
const FOUR_CITY_TIMES: &str = "\
city,A,B,C,D
A,0,30,45,60
B,30,0,105,75
C,45,105,0,90
D,60,75,90,0
";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Temporary directory holding the default table for each measure.
pub(super) struct TablesDir {
    _tmp: TempDir,
    pub(super) root: Utf8PathBuf,
}

impl TablesDir {
    pub(super) fn empty() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    pub(super) fn four_city() -> Self {
        let dir = Self::empty();
        dir.write_defaults();
        dir
    }

    /// Write the four-city distance and time tables under their default names.
    pub(super) fn write_defaults(&self) {
        write_utf8(
            &Measure::Distance.table_path(&self.root),
            FOUR_CITY_DISTANCES.as_bytes(),
        );
        write_utf8(
            &Measure::Time.table_path(&self.root),
            FOUR_CITY_TIMES.as_bytes(),
        );
    }
}
