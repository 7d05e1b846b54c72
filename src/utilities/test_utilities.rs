use std::fs::{create_dir_all, remove_dir_all};
use std::path::{Path, PathBuf};

/// convenience struct to ensure that temporary test files get cleaned up
/// even after a panic
pub struct TestCleanup<P: AsRef<Path>> {
    // individual test dirs to enable test cases to run in parallel
    test_dir: Option<P>,
}

impl<P: AsRef<Path>> TestCleanup<P> {
    pub fn new(test_dir: P) -> Self {
        Self {
            test_dir: Some(test_dir),
        }
    }
}

impl<P: AsRef<Path>> Drop for TestCleanup<P> {
    fn drop(&mut self) {
        if let Some(dir) = self.test_dir.take() {
            // the test may have failed before creating anything
            let _ = remove_dir_all(dir);
        }
    }
}

/// create a fresh scratch directory for the named test under the system temp dir
pub fn test_dir(test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "boggle-solver-{}-{}",
        test_name,
        std::process::id()
    ));
    create_dir_all(&dir).unwrap();
    dir
}
