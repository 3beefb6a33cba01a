use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum_typed_multipart::TypedMultipart;
use log::info;
use prometheus::TextEncoder;
use serde_json::{Value, json};
use tokio::task::block_in_place;

use super::error::Result;
use super::state::AppState;
use super::types::*;
use crate::color::Rgb;
use crate::{matcher, metrics, palette, utils};

/// 匹配一张穿搭图片
#[utoipa::path(
    post,
    path = "/match",
    request_body(content = MatchForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = MatchResponse),
    )
)]
pub async fn match_handler(
    State(state): State<Arc<AppState>>,
    data: TypedMultipart<MatchRequest>,
) -> Result<Json<Value>> {
    // 处理上传的文件和参数
    let sample_step = data.sample_step.unwrap_or(state.palette.sample_step);

    let start = Instant::now();

    info!("正在匹配上传图片");

    let (size, colors) = block_in_place(|| -> Result<_> {
        let img = utils::imdecode(&data.file, state.palette.max_size)?;
        let colors = palette::extract_palette(&img, state.palette.palette_count, sample_step)?;
        Ok((img.dimensions(), colors))
    })?;

    let matched = matcher::match_sneaker(&colors, &state.catalog)?;
    let elapsed = start.elapsed();

    metrics::inc_match_count(size, sample_step);
    metrics::observe_match_duration(size, sample_step, elapsed.as_secs_f32());
    metrics::observe_best_score(size, sample_step, matched.score);

    Ok(Json(json!({
        "time": elapsed.as_millis(),
        "palette": colors.iter().map(Rgb::to_hex).collect::<Vec<_>>(),
        "result": matched.record,
        "score": matched.score,
    })))
}

/// 导出 Prometheus 指标
#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, body = String),
    )
)]
pub async fn metrics_handler() -> Result<String> {
    let encoder = TextEncoder::new();
    Ok(encoder.encode_to_string(&prometheus::gather())?)
}
