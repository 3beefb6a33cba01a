use image::RgbImage;
use log::debug;

use crate::color::Rgb;
use crate::errors::{Error, Result};

/// 中位切分法使用的颜色箱
struct ColorBox {
    pixels: Vec<[u8; 3]>,
}

impl ColorBox {
    /// 返回跨度最大的通道及其跨度
    fn widest_channel(&self) -> (usize, u8) {
        let mut min = [u8::MAX; 3];
        let mut max = [u8::MIN; 3];
        for p in &self.pixels {
            for c in 0..3 {
                min[c] = min[c].min(p[c]);
                max[c] = max[c].max(p[c]);
            }
        }
        (0..3).map(|c| (c, max[c] - min[c])).max_by_key(|&(_, range)| range).unwrap_or((0, 0))
    }

    /// 所有像素完全相同的箱子无法继续切分
    fn splittable(&self) -> bool {
        self.pixels.len() > 1 && self.widest_channel().1 > 0
    }

    /// 沿跨度最大的通道在中位像素处切分
    ///
    /// 分割点对齐到通道值的边界，同值像素不会被切进两个箱子。
    fn split(mut self) -> (ColorBox, ColorBox) {
        let (channel, _) = self.widest_channel();
        // 稳定排序，保证相同输入的切分结果一致
        self.pixels.sort_by_key(|p| p[channel]);

        let mid = self.pixels.len() / 2;
        let pivot = self.pixels[mid][channel];
        let mut split_at = self.pixels.iter().position(|p| p[channel] >= pivot).unwrap_or(mid);
        if split_at == 0 {
            // 中位值就是最小值，向右寻找第一个更大的通道值
            split_at = self.pixels.iter().position(|p| p[channel] > pivot).unwrap_or(mid);
        }

        let right = self.pixels.split_off(split_at);
        (self, ColorBox { pixels: right })
    }

    /// 箱内像素的平均颜色
    fn average(&self) -> Rgb {
        let n = self.pixels.len() as u64;
        let mut sum = [0u64; 3];
        for p in &self.pixels {
            for c in 0..3 {
                sum[c] += p[c] as u64;
            }
        }
        Rgb::new((sum[0] / n) as u8, (sum[1] / n) as u8, (sum[2] / n) as u8)
    }
}

/// 提取图片中最主导的 `count` 种颜色，最主导的颜色在前
///
/// 采用中位切分法：反复选取像素最多且可切分的颜色箱，沿跨度最大的通道
/// 在中位处一分为二，直到箱数达到 `count`，每个箱的平均色即为一种主色。
/// 对相同的图片和参数，结果是确定的。
///
/// 图片颜色种类不足 `count` 时，重复末尾的主色补齐，保证调色板长度
/// 始终等于 `count`，与目录向量的维度一致。
pub fn extract_palette(image: &RgbImage, count: usize, sample_step: usize) -> Result<Vec<Rgb>> {
    let step = sample_step.max(1);
    let pixels = image.pixels().step_by(step).map(|p| p.0).collect::<Vec<_>>();
    if pixels.is_empty() {
        return Err(Error::UnreadableImage("图片不含任何像素".to_string()));
    }
    debug!("采样像素数量: {}", pixels.len());

    let mut boxes = vec![ColorBox { pixels }];
    while boxes.len() < count {
        let candidate = boxes
            .iter()
            .enumerate()
            .filter(|(_, b)| b.splittable())
            .max_by_key(|(_, b)| b.pixels.len())
            .map(|(i, _)| i);
        match candidate {
            Some(i) => {
                let (left, right) = boxes.swap_remove(i).split();
                boxes.push(left);
                boxes.push(right);
            }
            None => break,
        }
    }

    // 按像素数量降序排列，最主导的颜色在前
    boxes.sort_by(|a, b| b.pixels.len().cmp(&a.pixels.len()));
    let mut palette = boxes.iter().map(|b| b.average()).collect::<Vec<_>>();
    if let Some(&last) = palette.last() {
        while palette.len() < count {
            palette.push(last);
        }
    }
    palette.truncate(count);
    Ok(palette)
}
