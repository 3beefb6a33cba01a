use crate::catalog::{Catalog, SneakerRecord};
use crate::color::Rgb;
use crate::errors::{Error, Result};

/// 匹配结果
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a> {
    /// 得分最高的目录记录
    pub record: &'a SneakerRecord,
    /// 余弦相似度得分
    pub score: f32,
}

/// 将调色板展平为单个数值向量，每种颜色依次贡献 r、g、b 三个通道
pub fn flatten(palette: &[Rgb]) -> Vec<f32> {
    palette.iter().flat_map(|c| [c.r as f32, c.g as f32, c.b as f32]).collect()
}

/// 计算两个向量的余弦相似度
///
/// 任一向量为零向量时定义为 0，不视为错误。
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot = a.iter().zip(b).map(|(x, y)| x * y).sum::<f32>();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    // 浮点误差可能使结果略微越界
    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

/// 在目录中查找与调色板最相似的鞋款
///
/// 按目录顺序线性扫描，只在得分严格更高时更新最佳匹配，得分相同时保留
/// 先出现的记录。
pub fn match_sneaker<'a>(palette: &[Rgb], catalog: &'a Catalog) -> Result<Match<'a>> {
    if catalog.is_empty() {
        return Err(Error::EmptyCatalog);
    }

    let outfit = flatten(palette);
    let mut best: Option<Match> = None;
    for (record, vector) in catalog.iter() {
        if vector.len() != outfit.len() {
            return Err(Error::DimensionMismatch {
                expected: outfit.len(),
                actual: vector.len(),
            });
        }
        let score = cosine_similarity(&outfit, vector);
        if best.as_ref().is_none_or(|b| score > b.score) {
            best = Some(Match { record, score });
        }
    }
    best.ok_or(Error::EmptyCatalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, colors: &[&str]) -> SneakerRecord {
        SneakerRecord {
            name: name.to_string(),
            brand: "Acme".to_string(),
            image: format!("images/{name}.png"),
            colors: colors.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn catalog(records: Vec<SneakerRecord>, palette_count: usize) -> Catalog {
        Catalog::from_records(records, palette_count).unwrap()
    }

    #[test]
    fn test_flatten() {
        let palette = [Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)];
        assert_eq!(flatten(&palette), vec![1., 2., 3., 4., 5., 6.]);
    }

    #[test]
    fn test_cosine_similarity_bounds() {
        let a = [1.0, 2.0, 3.0];
        let b = [3.0, 2.0, 1.0];
        let score = cosine_similarity(&a, &b);
        assert!((-1.0..=1.0).contains(&score));
        // 相同向量的相似度为 1
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity_zero_vector() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_exact_match() {
        let catalog = catalog(
            vec![
                record("A", &["#000000", "#ffffff"]),
                record("B", &["#ff0000", "#00ff00"]),
            ],
            2,
        );
        let palette = [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)];
        let matched = match_sneaker(&palette, &catalog).unwrap();
        assert_eq!(matched.record.name, "A");
        assert!((matched.score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_vector_palette() {
        // 全黑调色板展平后是零向量，相似度定义为 0，唯一的候选依然胜出
        let catalog = catalog(vec![record("A", &["#808080", "#808080"])], 2);
        let palette = [Rgb::new(0, 0, 0), Rgb::new(0, 0, 0)];
        let matched = match_sneaker(&palette, &catalog).unwrap();
        assert_eq!(matched.record.name, "A");
        assert_eq!(matched.score, 0.0);
    }

    #[test]
    fn test_first_seen_wins_ties() {
        // 两条记录得分相同时，保留目录中先出现的一条
        let catalog = catalog(
            vec![
                record("first", &["#102030", "#405060"]),
                record("second", &["#102030", "#405060"]),
            ],
            2,
        );
        let palette = [Rgb::new(16, 32, 48), Rgb::new(64, 80, 96)];
        let matched = match_sneaker(&palette, &catalog).unwrap();
        assert_eq!(matched.record.name, "first");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = catalog(vec![], 2);
        let palette = [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)];
        assert!(matches!(match_sneaker(&palette, &catalog), Err(Error::EmptyCatalog)));
    }

    #[test]
    fn test_dimension_mismatch() {
        let catalog = catalog(vec![record("A", &["#000000"])], 1);
        let palette = [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)];
        let result = match_sneaker(&palette, &catalog);
        assert!(matches!(result, Err(Error::DimensionMismatch { expected: 6, actual: 3 })));
    }

    #[test]
    fn test_nearest_color_wins() {
        let catalog = catalog(
            vec![
                record("reddish", &["#ff0000", "#cc0000"]),
                record("bluish", &["#0000ff", "#0000cc"]),
            ],
            2,
        );
        let palette = [Rgb::new(250, 10, 10), Rgb::new(200, 5, 5)];
        let matched = match_sneaker(&palette, &catalog).unwrap();
        assert_eq!(matched.record.name, "reddish");
    }
}
