use clap::Parser;
use log::info;
use tokio::net::TcpListener;

use crate::catalog::Catalog;
use crate::cli::SubCommandExtend;
use crate::config::{Opts, PaletteOptions};
use crate::server;

#[derive(Parser, Debug, Clone)]
pub struct ServerCommand {
    #[command(flatten)]
    pub palette: PaletteOptions,
    /// 监听地址
    #[arg(long, default_value = "127.0.0.1:8000")]
    pub addr: String,
}

impl SubCommandExtend for ServerCommand {
    async fn run(&self, opts: &Opts) -> anyhow::Result<()> {
        // 目录加载失败直接终止启动
        let catalog = Catalog::load(&opts.catalog, self.palette.palette_count)?;

        // 创建应用状态
        let state = server::AppState::new(catalog, self);

        // 创建应用
        let app = server::create_app(state);

        // 启动服务器
        info!("服务器启动：http://{}", &self.addr);
        let listener = TcpListener::bind(&self.addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
