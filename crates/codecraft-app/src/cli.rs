use clap::Parser;

/// CodeCraft, an interactive AI Python tutor for the terminal.
#[derive(Parser, Debug)]
#[command(name = "codecraft", version, about)]
pub struct Args {
    /// Gemini model override.
    #[arg(long)]
    pub model: Option<String>,

    /// Python interpreter used to run code submissions.
    #[arg(long)]
    pub python: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
