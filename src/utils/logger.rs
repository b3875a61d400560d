use tracing_subscriber::EnvFilter;

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "record_demo=debug,info"
    } else {
        "record_demo=info"
    }
}

/// `RUST_LOG` wins over `verbose`. Output goes to stderr; stdout carries only
/// the record line.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "record_demo=info");
        assert!(default_directive(true).starts_with("record_demo=debug"));
    }
}
