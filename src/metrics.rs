use std::sync::LazyLock;

use prometheus::*;

static METRIC_MATCH_COUNT: LazyLock<IntCounterVec> = LazyLock::new(|| {
    register_int_counter_vec!(
        "sm_match_count",
        "count of the outfit images to match",
        &["size", "sample_step"]
    )
    .unwrap()
});

static METRIC_MATCH_DURATION: LazyLock<HistogramVec> = LazyLock::new(|| {
    register_histogram_vec!(
        "sm_match_duration",
        "duration of the per-image match in seconds",
        &["size", "sample_step"]
    )
    .unwrap()
});

static METRIC_MATCH_BEST_SCORE: LazyLock<HistogramVec> = LazyLock::new(|| {
    register_histogram_vec!(
        "sm_match_best_score",
        "best cosine score of the per-image match",
        &["size", "sample_step"],
        (0..=20).map(|x| x as f64 / 20.0).collect()
    )
    .unwrap()
});

/// 增加图像匹配指标计数
pub fn inc_match_count(size: (u32, u32), sample_step: usize) {
    let size = to_fixed_size(size);

    METRIC_MATCH_COUNT.with_label_values(&[size, &sample_step.to_string()]).inc();
}

pub fn observe_match_duration(size: (u32, u32), sample_step: usize, duration: f32) {
    let size = to_fixed_size(size);

    METRIC_MATCH_DURATION
        .with_label_values(&[size, &sample_step.to_string()])
        .observe(duration as f64);
}

pub fn observe_best_score(size: (u32, u32), sample_step: usize, score: f32) {
    let size = to_fixed_size(size);

    METRIC_MATCH_BEST_SCORE
        .with_label_values(&[size, &sample_step.to_string()])
        .observe(score as f64);
}

/// 将图像面积范围调整到几个固定值
fn to_fixed_size((width, height): (u32, u32)) -> &'static str {
    let area = width * height;
    if area <= 128 * 128 {
        "128"
    } else if area <= 256 * 256 {
        "256"
    } else if area <= 512 * 512 {
        "512"
    } else if area <= 768 * 768 {
        "768"
    } else if area <= 1024 * 1024 {
        "1024"
    } else {
        "1024+"
    }
}
