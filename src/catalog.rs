use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::color::Rgb;
use crate::errors::{Error, Result};
use crate::matcher;

/// 鞋款记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SneakerRecord {
    /// 鞋款名称
    pub name: String,
    /// 品牌
    pub brand: String,
    /// 展示图片的路径
    pub image: String,
    /// 代表色，`#rrggbb` 格式
    pub colors: Vec<String>,
}

/// 只读的鞋款目录
///
/// 启动时加载一次，此后在进程生命周期内不再变化。
/// 每条记录的颜色向量在加载时解码完成，匹配阶段不再解析十六进制字符串。
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<SneakerRecord>,
    vectors: Vec<Vec<f32>>,
}

impl Catalog {
    /// 从 JSON 文件加载目录
    ///
    /// 文件缺失或格式错误返回 [`Error::CatalogLoad`]；
    /// 记录中的非法颜色在此处立即失败，避免污染后续所有匹配请求。
    pub fn load(path: impl AsRef<Path>, palette_count: usize) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::CatalogLoad(format!("无法读取 {}: {e}", path.display())))?;
        let records = serde_json::from_str::<Vec<SneakerRecord>>(&data)
            .map_err(|e| Error::CatalogLoad(format!("无法解析 {}: {e}", path.display())))?;

        let catalog = Self::from_records(records, palette_count)?;
        info!("目录加载完成，共 {} 条记录", catalog.len());
        Ok(catalog)
    }

    /// 由已解析的记录构建目录
    ///
    /// 颜色数量不等于 `palette_count` 的记录视为非法，整体拒绝加载。
    pub fn from_records(records: Vec<SneakerRecord>, palette_count: usize) -> Result<Self> {
        let mut vectors = Vec::with_capacity(records.len());
        for record in &records {
            if record.colors.len() != palette_count {
                return Err(Error::CatalogLoad(format!(
                    "记录 {:?} 包含 {} 种颜色，期望 {}",
                    record.name,
                    record.colors.len(),
                    palette_count
                )));
            }
            let colors =
                record.colors.iter().map(|c| Rgb::from_hex(c)).collect::<Result<Vec<_>>>()?;
            vectors.push(matcher::flatten(&colors));
        }
        Ok(Self { records, vectors })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 按目录顺序遍历记录及其颜色向量
    pub fn iter(&self) -> impl Iterator<Item = (&SneakerRecord, &[f32])> {
        self.records.iter().zip(self.vectors.iter().map(Vec::as_slice))
    }
}
