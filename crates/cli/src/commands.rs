use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Translate a filter document into an SQL predicate and its bound values
    Translate {
        #[arg(long, help = "Filter document path, or '-' for stdin")]
        input: String,

        #[arg(long, help = "Config file path")]
        config: Option<String>,

        #[arg(
            long,
            value_delimiter = ',',
            help = "Comma-separated field whitelist; overrides the config file"
        )]
        whitelist: Option<Vec<String>>,

        #[arg(long, help = "If set, pretty-prints the JSON output")]
        pretty: bool,

        #[arg(
            long,
            help = "If specified, writes the JSON output to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// Parse a filter document and print the resulting tree
    Parse {
        #[arg(long, help = "Filter document path, or '-' for stdin")]
        input: String,

        #[arg(long, help = "Config file path")]
        config: Option<String>,

        #[arg(long, help = "If set, pretty-prints the JSON output")]
        pretty: bool,
    },
}
