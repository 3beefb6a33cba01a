use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::*;

#[derive(Parser, Debug, Clone)]
pub struct PaletteOptions {
    /// 提取的主色数量，目录中每条记录的颜色数量必须与之一致
    #[arg(short = 'n', value_name = "N", long, default_value_t = 2)]
    pub palette_count: usize,
    /// 像素采样步长，越大提取越快，细节越少
    #[arg(long, value_name = "STEP", default_value_t = 10)]
    pub sample_step: usize,
    /// 图片最大尺寸，如果宽高**均**超过这个尺寸，则等比缩放
    #[arg(short = 'S', long, value_name = "WIDTHxHEIGHT", value_parser = parse_size, verbatim_doc_comment, default_value = "1080x768")]
    pub max_size: (u32, u32),
}

#[derive(Parser, Debug, Clone)]
#[command(name = "sneakmatch", version)]
pub struct Opts {
    #[command(subcommand)]
    pub subcmd: SubCommand,
    /// 鞋款目录文件路径
    #[arg(short, long, default_value = "sneaker_data.json")]
    pub catalog: PathBuf,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SubCommand {
    /// 从目录中匹配与穿搭图片最相似的鞋款
    Match(MatchCommand),
    /// 提取图片的主色调色板
    Palette(PaletteCommand),
    /// 启动 HTTP 匹配服务
    Server(ServerCommand),
}

fn parse_size(s: &str) -> anyhow::Result<(u32, u32)> {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() != 2 {
        return Err(anyhow::anyhow!("无效的尺寸: {}", s));
    }
    Ok((parts[0].parse()?, parts[1].parse()?))
}
