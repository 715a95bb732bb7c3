use std::path::PathBuf;

/// Resolve a fixture file by name from tests/fixtures/
pub fn fixture_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    assert!(path.exists(), "fixture not found: {}", path.display());
    path
}

/// Fixture path as a `&str`-able `String` for command arguments.
#[allow(dead_code)]
pub fn fixture_arg(name: &str) -> String {
    fixture_path(name).to_string_lossy().into_owned()
}

/// Read a fixture file to a string.
#[allow(dead_code)]
pub fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("read fixture")
}

/// Write `contents` to a file in a fresh temp directory.
/// Returns (TempDir, path). TempDir must be kept alive.
#[allow(dead_code)]
pub fn temp_file(name: &str, contents: &str) -> (tempfile::TempDir, PathBuf) {
    let tmp = tempfile::TempDir::new().expect("create temp dir");
    let path = tmp.path().join(name);
    std::fs::write(&path, contents).expect("write temp file");
    (tmp, path)
}

/// A chapter heading (two words) followed by `words` words of prose.
#[allow(dead_code)]
pub fn prose_manuscript(words: usize) -> String {
    let mut text = String::from("CHAPTER ONE\n\n");
    for i in 0..words {
        text.push_str(if i % 10 == 9 { "word. " } else { "word " });
        if i % 100 == 99 {
            text.push_str("\n\n");
        }
    }
    text
}
