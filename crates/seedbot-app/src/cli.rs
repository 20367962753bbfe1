use clap::Parser;

/// seedbot — 종자기능사 quiz trainer chatting with Gemini.
#[derive(Parser, Debug)]
#[command(name = "seedbot", version, about)]
pub struct Args {
    /// Gemini model override.
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Sampling temperature override (0.0–2.0).
    #[arg(short = 't', long)]
    pub temperature: Option<f64>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
