use anyhow::Result;
use clap::Parser;
use tokio::task::block_in_place;

use crate::cli::SubCommandExtend;
use crate::config::{Opts, PaletteOptions};
use crate::{errors, palette, utils};

#[derive(Parser, Debug, Clone)]
pub struct PaletteCommand {
    #[command(flatten)]
    pub palette: PaletteOptions,
    /// 图片路径
    pub image: String,
}

impl SubCommandExtend for PaletteCommand {
    async fn run(&self, _opts: &Opts) -> Result<()> {
        let colors = block_in_place(|| -> errors::Result<_> {
            let img = utils::imread(&self.image, self.palette.max_size)?;
            palette::extract_palette(&img, self.palette.palette_count, self.palette.sample_step)
        })?;

        for color in &colors {
            println!("{}", color.to_hex());
        }
        Ok(())
    }
}
