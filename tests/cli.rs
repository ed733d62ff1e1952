use std::fs;
use std::path::Path;
use std::process::Command;

use image::{Rgba, RgbaImage};

fn run_in(dir: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_icon-pad"))
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to launch icon-pad")
}

fn write_icon(dir: &Path, img: &RgbaImage) -> std::path::PathBuf {
    let assets = dir.join("assets");
    fs::create_dir_all(&assets).unwrap();
    let path = assets.join("icon.png");
    img.save(&path).unwrap();
    path
}

#[test]
fn test_solid_icon_exits_zero() {
    let dir = tempfile::tempdir().expect("tempdir");
    let icon = write_icon(dir.path(), &RgbaImage::from_pixel(64, 48, Rgba([20, 40, 60, 255])));

    let output = run_in(dir.path());
    assert!(output.status.success(), "status: {:?}", output.status);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Original bounding box: (0, 0, 64, 48)"), "{}", stdout);
    assert!(stdout.contains("1024x1024 with 51px margins"), "{}", stdout);

    let padded = image::open(&icon).unwrap();
    assert_eq!((padded.width(), padded.height()), (1024, 1024));
}

#[test]
fn test_transparent_icon_exits_one_and_keeps_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let icon = write_icon(dir.path(), &RgbaImage::new(100, 100));
    let before = fs::read(&icon).unwrap();

    let output = run_in(dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(fs::read(&icon).unwrap(), before);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: could not find image content"), "{}", stderr);
}

#[test]
fn test_missing_icon_exits_one() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = run_in(dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("assets").join("icon.png").exists());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: "));
}
