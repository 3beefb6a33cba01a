use axum::body::Bytes;
use axum_typed_multipart::TryFromMultipart;
use utoipa::ToSchema;

use crate::catalog::SneakerRecord;

/// 匹配请求参数
#[derive(TryFromMultipart)]
pub struct MatchRequest {
    pub file: Bytes,
    pub sample_step: Option<usize>,
}

/// 匹配表单（用于API文档）
#[derive(Debug, ToSchema)]
#[allow(unused)]
pub struct MatchForm {
    /// 上传的穿搭图片
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
    /// 像素采样步长
    pub sample_step: Option<usize>,
}

/// 匹配响应
#[derive(Debug, ToSchema)]
#[allow(unused)]
pub struct MatchResponse {
    /// 匹配耗时，单位为毫秒
    pub time: u32,
    /// 检测到的主色，`#rrggbb` 格式，最主导的颜色在前
    pub palette: Vec<String>,
    /// 得分最高的鞋款记录
    pub result: SneakerRecord,
    /// 余弦相似度得分
    pub score: f32,
}
