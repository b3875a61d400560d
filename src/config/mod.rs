use clap::Parser;

/// The sample values are fixed; the only switch controls logging.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "record-demo")]
#[command(about = "Builds the sample record and prints it on one line")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
