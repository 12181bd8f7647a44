use anyhow::Context;
use better_rest::utils::error::{BedtimeError, ErrorSeverity};
use better_rest::utils::{logger, validation::Validate};
use better_rest::{BedtimeEstimator, BedtimeForm, CliConfig};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate() {
        exit_with(&e);
    }

    let app_config = match cli.load_app_config() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    if let Err(e) = app_config.validate() {
        exit_with(&e);
    }

    let settings = match cli.resolve(&app_config) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };
    tracing::debug!(
        model = %settings.model.describe(),
        clock = ?settings.clock,
        "Settings resolved"
    );

    let mut form =
        BedtimeForm::with_inputs(settings.wake_up, settings.sleep_hours, settings.coffee_cups);
    tracing::info!(
        "Wake at {}, sleep {}, {}",
        form.inputs().wake_up,
        form.sleep_label(),
        form.coffee_label()
    );

    let estimator = BedtimeEstimator::new(settings.model, settings.clock);
    let result = form.calculate(&estimator);

    if cli.json {
        let output = serde_json::json!({
            "inputs": form.inputs(),
            "alert": form.alert(),
            "result": result,
        });
        let text = serde_json::to_string_pretty(&output).context("failed to encode result")?;
        println!("{}", text);
    } else {
        println!("{}", form.alert().title);
        println!("{}", form.alert().message);
    }

    if !result.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

fn exit_with(e: &BedtimeError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // Model trouble is a failed estimate; anything else is bad input or setup.
    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 1,
        ErrorSeverity::Low | ErrorSeverity::High | ErrorSeverity::Critical => 2,
    };
    std::process::exit(exit_code);
}
