use clap::Parser;
use record_demo::utils::logger;
use record_demo::{CliConfig, Record};

const SAMPLE_NUMBER: i32 = 42;
const SAMPLE_TEXT: &str = "Hello, World!";

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    let record = Record::new(SAMPLE_NUMBER, SAMPLE_TEXT);
    tracing::debug!(number = record.number(), "record created");

    record.display();
}
