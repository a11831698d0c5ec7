use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "kelime")]
#[command(about = "Translate a word or short phrase with alternatives and example sentences.")]
#[command(version)]
pub struct Cli {
    /// Source language (defaults to config, then "en")
    #[arg(short = 's', long = "source")]
    pub source: Option<String>,

    /// Target language (defaults to config, then "tr")
    #[arg(short = 't', long = "target")]
    pub target: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip example sentence lookup
    #[arg(long)]
    pub no_examples: bool,

    /// Choose color theme
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// Text to translate
    #[arg(num_args = 1..)]
    pub query: Vec<String>,
}

impl Cli {
    /// Query words joined and trimmed
    pub fn query_text(&self) -> String {
        self.query.join(" ").trim().to_string()
    }
}
