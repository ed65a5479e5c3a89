use std::path::{Path, PathBuf};

/// Directory holding mpsver's own files (`.mpsver`) under a root directory
#[must_use]
pub fn get_mpsver_dir(root_dir: &Path) -> PathBuf {
    root_dir.join(".mpsver")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_get_mpsver_dir_path_structure() {
        let temp_dir = TempDir::new().unwrap();
        let temp_path = temp_dir.path();

        let mpsver_dir = get_mpsver_dir(temp_path);
        assert!(mpsver_dir.ends_with(".mpsver"));
        assert_eq!(mpsver_dir.parent().unwrap(), temp_path);

        temp_dir.close().unwrap();
    }

    #[test]
    fn test_get_mpsver_dir_does_not_create_directory() {
        let temp_dir = TempDir::new().unwrap();
        let temp_path = temp_dir.path();

        let mpsver_dir = get_mpsver_dir(temp_path);
        assert!(!mpsver_dir.exists());

        fs::create_dir_all(&mpsver_dir).unwrap();
        assert!(mpsver_dir.is_dir());

        temp_dir.close().unwrap();
    }
}
