use anyhow::{bail, Context};
use commerce_tax::config::{Config, LogFormat};
use commerce_tax::orders::Order;
use commerce_tax::taxes::{TaxOrderProcessor, TaxTypeRegistry};
use std::fs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    init_tracing(&config);

    let Some(order_path) = std::env::args().nth(1) else {
        bail!("usage: commerce-tax <order.json>");
    };

    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        "Loading tax settings from {}",
        config.tax.settings_path.display()
    );

    let settings = config.load_tax_settings().with_context(|| {
        format!(
            "Failed to load tax settings from {}",
            config.tax.settings_path.display()
        )
    })?;
    let tax_types = TaxTypeRegistry::with_builtin().build_all(&settings)?;
    let processor = TaxOrderProcessor::new(tax_types);

    let source = fs::read_to_string(&order_path)
        .with_context(|| format!("Failed to read order from {}", order_path))?;
    let mut order: Order = serde_json::from_str(&source)
        .with_context(|| format!("Failed to parse order {}", order_path))?;

    if let Err(err) = processor.process(&mut order) {
        tracing::error!(kind = %err.kind(), order_id = %order.id, "Tax processing failed: {}", err);
        return Err(err.into());
    }

    println!("{}", serde_json::to_string_pretty(&order)?);
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("commerce_tax={}", config.app.log_level).into());

    // Logs go to stderr so stdout stays valid JSON.
    let registry = tracing_subscriber::registry().with(filter);
    match config.app.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
