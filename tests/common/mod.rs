use camino::{Utf8Path, Utf8PathBuf};
use inoue_igm::constants::{DLA_COEFF_FILE, LAF_COEFF_FILE};
use tempfile::TempDir;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn fixture_dir() -> &'static Utf8Path {
    Utf8Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data"))
}

/// Write both coefficient tables into a fresh temporary directory.
///
/// The returned [`TempDir`] must be kept alive for as long as the directory is used.
#[allow(dead_code)]
pub fn write_tables(laf: &str, dla: &str) -> (TempDir, Utf8PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let dir = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
    std::fs::write(dir.join(LAF_COEFF_FILE), laf).unwrap();
    std::fs::write(dir.join(DLA_COEFF_FILE), dla).unwrap();
    (tmp, dir)
}
