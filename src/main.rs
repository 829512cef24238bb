use anyhow::Result;
use clap::Parser;
use console_snake::game::GameConfig;
use console_snake::input::StdinSource;
use console_snake::modes::HumanMode;
use console_snake::render::TextRenderer;

#[derive(Parser)]
#[command(name = "console_snake")]
#[command(version, about = "Turn-based console snake game")]
struct Cli {
    /// Grid width
    #[arg(long, default_value = "10")]
    width: usize,

    /// Grid height
    #[arg(long, default_value = "10")]
    height: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.width, cli.height);

    let mut mode = HumanMode::new(config, StdinSource::new(), TextRenderer::stdout());
    mode.run()
}
