use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

pub fn open_fixture(name: &str) -> BufReader<File> {
    let path = fixture_path(name);
    let file = File::open(&path)
        .unwrap_or_else(|e| panic!("failed to open fixture {}: {e}", path.display()));
    BufReader::new(file)
}
