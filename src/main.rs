use anyhow::Context;
use clap::Parser;
use sigma_calc::adapters::format::{format_json_error, format_json_result};
use sigma_calc::utils::{logger, validation::Validate};
use sigma_calc::{
    CliConfig, ConsolePresenter, Operation, PromptSession, SigmaCalculator, SigmaConfig,
    SigmaError,
};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    if config.logging.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.logging.verbose);
    }

    tracing::info!("Starting sigma-calc");
    tracing::debug!("Effective config: {:?}", config);

    let calculator = SigmaCalculator::from_config(&config);

    match cli.values.as_deref() {
        Some(raw) => run_form(&calculator, raw, cli.operation, config.output.json),
        None => run_interactive(&calculator, config.output.json),
    }
}

fn load_config(cli: &CliConfig) -> sigma_calc::Result<SigmaConfig> {
    let config = match &cli.config {
        Some(path) => SigmaConfig::from_file(path)?,
        None => SigmaConfig::default(),
    }
    .with_overrides(cli);
    config.validate()?;
    Ok(config)
}

/// One-shot evaluation of `--values`, the console stand-in for the form.
fn run_form(
    calculator: &SigmaCalculator,
    raw: &str,
    operation: Operation,
    json: bool,
) -> anyhow::Result<()> {
    let outcome = if json {
        let outcome = calculator.evaluate(raw, operation);
        let rendered = match &outcome {
            Ok(result) => format_json_result(result),
            Err(e) => format_json_error(e),
        }
        .context("rendering output as JSON")?;
        println!("{}", rendered);
        outcome
    } else {
        let mut presenter = ConsolePresenter::new();
        calculator.submit_form(raw, operation, &mut presenter)
    };

    if let Err(e) = outcome {
        tracing::debug!(
            "Form evaluation failed (Category: {:?}, Severity: {:?})",
            e.category(),
            e.severity()
        );
        std::process::exit(e.exit_code());
    }
    Ok(())
}

fn run_interactive(calculator: &SigmaCalculator, json: bool) -> anyhow::Result<()> {
    let outcome = {
        let stdin = io::stdin();
        let mut session = PromptSession::new(calculator, stdin.lock(), io::stdout().lock());
        session.run()
    };

    match outcome {
        Ok(result) => {
            if json {
                let rendered = format_json_result(&result).context("rendering result as JSON")?;
                println!("{}", rendered);
            }
            tracing::info!("✅ Session finished with {:?}", result);
            Ok(())
        }
        Err(e) if e.is_recoverable() => {
            tracing::warn!("❌ {} ({:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
        Err(e) => {
            report_unexpected(&e);
            std::process::exit(1);
        }
    }
}

fn report_unexpected(e: &SigmaError) {
    tracing::error!(
        "Session aborted: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("An unexpected error occurred: {}", e);
}
