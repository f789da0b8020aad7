use super::Parser;

#[derive(Parser, Debug)]
#[command(name = "heartline", about = "Serves the like and inbound-likes API")]
pub struct Cli {
    /// Settings file; falls back to settings/dev.toml or settings/release.toml.
    #[arg(long)]
    pub settings: Option<String>,
}
