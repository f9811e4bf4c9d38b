use clap::Parser;
use shape_dims::utils::{logger, validation::Validate};
use shape_dims::{render, CliConfig};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    let result = config.validate().and_then(|_| config.resolve()).and_then(|settings| {
        tracing::info!(
            "Rendering rectangle {}x{} as {:?}",
            settings.rectangle.length(),
            settings.rectangle.width(),
            settings.format
        );
        render(&settings.rectangle, settings.format, std::io::stdout().lock())
    });

    if let Err(e) = result {
        tracing::error!(
            "❌ shape-dims failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
