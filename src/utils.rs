use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};

use crate::errors::{Error, Result};

/// 解码内存中的图片，统一转换为 RGB 格式
pub fn imdecode(bytes: &[u8], max_size: (u32, u32)) -> Result<RgbImage> {
    let img = image::load_from_memory(bytes).map_err(|e| Error::UnreadableImage(e.to_string()))?;
    Ok(adjust_image_size(img, max_size))
}

/// 读取并解码图片文件
pub fn imread(path: impl AsRef<Path>, max_size: (u32, u32)) -> Result<RgbImage> {
    let bytes = std::fs::read(path)?;
    imdecode(&bytes, max_size)
}

/// 如果宽高**均**超过最大尺寸，则等比缩放
pub fn adjust_image_size(img: DynamicImage, (width, height): (u32, u32)) -> RgbImage {
    if img.width() > width && img.height() > height {
        img.resize(width, height, FilterType::Triangle).to_rgb8()
    } else {
        img.to_rgb8()
    }
}
