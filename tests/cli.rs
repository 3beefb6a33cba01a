use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::Result;
use assert_cmd::prelude::*;
use image::RgbImage;
use predicates::prelude::*;
use rstest::*;

macro_rules! cargo_run {
    ($($args:expr),*) => {
        {
            let mut cmd = Command::cargo_bin("sneakmatch")?;
            $(cmd.arg($args);)*
            cmd.assert()
        }
    };
}

const CATALOG: &str = r##"[
  {"name": "Mono Black", "brand": "Acme", "image": "images/mono_black.png", "colors": ["#000000", "#111111"]},
  {"name": "Cloud White", "brand": "Acme", "image": "images/cloud_white.png", "colors": ["#ffffff", "#f0f0f0"]},
  {"name": "Crimson Red", "brand": "Acme", "image": "images/crimson_red.png", "colors": ["#ff0000", "#cc0000"]}
]"##;

/// 在临时目录中准备目录文件和一张纯色测试图片
fn setup(dir: &Path, color: [u8; 3]) -> Result<(String, String)> {
    let catalog = dir.join("sneaker_data.json");
    fs::write(&catalog, CATALOG)?;

    let image = dir.join("outfit.png");
    RgbImage::from_pixel(64, 64, image::Rgb(color)).save(&image)?;

    Ok((catalog.display().to_string(), image.display().to_string()))
}

#[test]
fn match_red_outfit() -> Result<()> {
    let dir = assert_fs::TempDir::new()?;
    let (catalog, image) = setup(dir.path(), [250, 10, 10])?;

    cargo_run!("-c", &catalog, "match", &image)
        .success()
        .stdout(predicate::str::contains("Crimson Red"));

    Ok(())
}

#[test]
fn match_white_outfit() -> Result<()> {
    let dir = assert_fs::TempDir::new()?;
    let (catalog, image) = setup(dir.path(), [255, 255, 255])?;

    cargo_run!("-c", &catalog, "match", &image)
        .success()
        .stdout(predicate::str::contains("Cloud White"));

    Ok(())
}

#[test]
fn match_black_outfit_zero_vector() -> Result<()> {
    // 全黑图片展平后是零向量，所有得分都是 0，应该返回目录中的第一条记录
    let dir = assert_fs::TempDir::new()?;
    let (catalog, image) = setup(dir.path(), [0, 0, 0])?;

    cargo_run!("-c", &catalog, "match", &image)
        .success()
        .stdout(predicate::str::contains("Mono Black"));

    Ok(())
}

#[rstest]
#[case::json("json", "\"palette\"")]
#[case::table("table", "Acme")]
fn match_output_format(#[case] format: &str, #[case] expected: &str) -> Result<()> {
    let dir = assert_fs::TempDir::new()?;
    let (catalog, image) = setup(dir.path(), [250, 10, 10])?;

    cargo_run!("-c", &catalog, "match", &image, "--output-format", format)
        .success()
        .stdout(predicate::str::contains(expected));

    Ok(())
}

#[test]
fn palette_prints_hex() -> Result<()> {
    let dir = assert_fs::TempDir::new()?;
    let (_, image) = setup(dir.path(), [250, 10, 10])?;

    cargo_run!("palette", &image).success().stdout(predicate::str::contains("#fa0a0a"));

    Ok(())
}

#[test]
fn match_missing_catalog() -> Result<()> {
    let dir = assert_fs::TempDir::new()?;
    let (_, image) = setup(dir.path(), [250, 10, 10])?;
    let missing = dir.path().join("missing.json");

    cargo_run!("-c", &missing, "match", &image)
        .failure()
        .stderr(predicate::str::contains("目录加载失败"));

    Ok(())
}

#[test]
fn match_unreadable_image() -> Result<()> {
    let dir = assert_fs::TempDir::new()?;
    let (catalog, _) = setup(dir.path(), [0, 0, 0])?;
    let broken = dir.path().join("broken.png");
    fs::write(&broken, b"not an image")?;

    cargo_run!("-c", &catalog, "match", &broken)
        .failure()
        .stderr(predicate::str::contains("无法读取图片"));

    Ok(())
}

#[test]
fn match_empty_catalog() -> Result<()> {
    let dir = assert_fs::TempDir::new()?;
    let (_, image) = setup(dir.path(), [0, 0, 0])?;
    let empty = dir.path().join("empty.json");
    fs::write(&empty, "[]")?;

    cargo_run!("-c", &empty, "match", &image)
        .failure()
        .stderr(predicate::str::contains("目录为空"));

    Ok(())
}
