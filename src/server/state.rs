use std::sync::Arc;

use crate::catalog::Catalog;
use crate::cli::server::ServerCommand;
use crate::config::PaletteOptions;

/// 应用状态
pub struct AppState {
    /// 鞋款目录，加载后只读，跨请求共享无需加锁
    pub catalog: Catalog,
    /// 调色板配置选项
    pub palette: PaletteOptions,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(catalog: Catalog, opts: &ServerCommand) -> Arc<Self> {
        Arc::new(AppState { catalog, palette: opts.palette.clone() })
    }
}
