//! sneakmatch 的错误类型

use thiserror::Error;

/// 匹配流水线的顶层错误类型
#[derive(Debug, Error)]
pub enum Error {
    /// 颜色字符串不是合法的 6 位十六进制格式
    #[error("无效的颜色格式: {0:?}")]
    InvalidColorFormat(String),

    /// 上传的字节无法解码为图片，或图片不含任何像素
    #[error("无法读取图片: {0}")]
    UnreadableImage(String),

    /// 目录文件缺失、格式错误或记录不完整
    #[error("目录加载失败: {0}")]
    CatalogLoad(String),

    /// 目录向量与穿搭向量维度不一致
    #[error("向量维度不匹配: 期望 {expected}，实际 {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// 目录为空，不存在可返回的匹配结果
    #[error("目录为空，无法匹配")]
    EmptyCatalog,

    /// IO 错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
