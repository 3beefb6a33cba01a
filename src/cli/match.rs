use std::convert::Infallible;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::debug;
use serde_json::json;
use tokio::task::block_in_place;

use crate::catalog::Catalog;
use crate::cli::SubCommandExtend;
use crate::color::Rgb;
use crate::config::{Opts, PaletteOptions};
use crate::matcher::{self, Match};
use crate::{errors, palette, utils};

#[derive(Parser, Debug, Clone)]
pub struct MatchCommand {
    #[command(flatten)]
    pub palette: PaletteOptions,
    /// 被匹配的穿搭图片路径
    pub image: String,
    /// 输出格式
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    pub output_format: OutputFormat,
}

impl SubCommandExtend for MatchCommand {
    async fn run(&self, opts: &Opts) -> anyhow::Result<()> {
        let catalog = Catalog::load(&opts.catalog, self.palette.palette_count)?;

        let colors = block_in_place(|| -> errors::Result<_> {
            let img = utils::imread(&self.image, self.palette.max_size)?;
            palette::extract_palette(&img, self.palette.palette_count, self.palette.sample_step)
        })?;

        debug!("检测到的主色: {:?}", colors.iter().map(Rgb::to_hex).collect::<Vec<_>>());

        let matched = matcher::match_sneaker(&colors, &catalog)?;
        print_result(&colors, &matched, self)
    }
}

fn print_result(colors: &[Rgb], matched: &Match, opts: &MatchCommand) -> Result<()> {
    match opts.output_format {
        OutputFormat::Json => {
            let value = json!({
                "palette": colors.iter().map(Rgb::to_hex).collect::<Vec<_>>(),
                "result": matched.record,
                "score": matched.score,
            });
            println!("{}", serde_json::to_string_pretty(&value)?)
        }
        OutputFormat::Table => {
            println!(
                "{:.4}\t{}\t{}",
                matched.score, matched.record.brand, matched.record.name
            );
        }
    }
    Ok(())
}

#[derive(ValueEnum, Debug, Clone)]
pub enum OutputFormat {
    Json,
    Table,
}

impl FromStr for OutputFormat {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            _ => unreachable!(),
        }
    }
}
