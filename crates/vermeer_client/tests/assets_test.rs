//! Tests for local image enumeration.

use tempfile::TempDir;
use vermeer_client::list_local_images;

#[test]
fn filters_to_allowed_extensions() {
    let dir = TempDir::new().unwrap();
    for name in ["a.png", "b.jpg", "c.JPEG", "notes.txt", "d.gif"] {
        std::fs::write(dir.path().join(name), b"x").unwrap();
    }

    let mut names: Vec<String> = list_local_images(dir.path())
        .into_iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();

    assert_eq!(names, vec!["a.png", "b.jpg", "c.JPEG"]);
}

#[test]
fn skips_subdirectories() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("nested.png")).unwrap();
    std::fs::write(dir.path().join("real.png"), b"x").unwrap();

    let images = list_local_images(dir.path());
    assert_eq!(images.len(), 1);
}

#[test]
fn absent_directory_yields_empty_pool() {
    assert!(list_local_images("./definitely-missing".as_ref()).is_empty());
}
