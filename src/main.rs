// Main entry point
use clap::Parser;
use colored::Colorize;
use kelime::domain::error::KelimeError;
use kelime::infrastructure::config::{self, load_config};
use kelime::infrastructure::logging::init_logging;
use kelime::interfaces::cli::Cli;
use kelime::presentation::render::{format_error, format_result};
use kelime::presentation::theme::Theme;
use kelime::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }

    let state = AppState::with_examples(config, !cli.no_examples)?;
    let config = state.config.clone();

    if cli.status {
        print_status(&state);
        return Ok(());
    }

    let query = cli.query_text();
    if query.is_empty() {
        eprintln!("{}", "Please provide text to translate".red());
        std::process::exit(1);
    }
    let length = query.chars().count();
    if length > config.max_query_chars {
        return Err(KelimeError::Input(format!(
            "text is {} characters long, the limit is {}",
            length, config.max_query_chars
        ))
        .into());
    }

    let source = cli.source.as_deref().unwrap_or(config.source_lang.as_str());
    let target = cli.target.as_deref().unwrap_or(config.target_lang.as_str());
    let theme_name = cli.theme.as_deref().unwrap_or(config.theme.as_str());
    let theme = Theme::from_name(theme_name);

    // Dropping the request future on Ctrl-C abandons both provider calls
    let outcome = tokio::select! {
        outcome = state.engine.translate(&query, source, target) => outcome,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nTranslation interrupted");
            return Ok(());
        }
    };

    match outcome {
        Ok(result) if cli.json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Ok(result) => {
            print!("{}", format_result(&result, &theme, config.enable_emoji));
        }
        Err(e) => {
            tracing::debug!("Translation failed: {}", e);
            if cli.json {
                let body = serde_json::json!({
                    "error": e.to_string(),
                    "message": e.user_message()
                });
                eprintln!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                eprint!("{}", format_error(&e, &theme, config.enable_emoji));
            }
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_status(state: &AppState) {
    let config = &state.config;
    println!("{}", "kelime Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "Config: {}",
        config::get_config_path()
            .filter(|p| p.exists())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found (using defaults)".to_string())
    );
    println!("Languages: {} → {}", config.source_lang, config.target_lang);
    println!("Translation API: {}", config.providers.mymemory_url);
    if config.examples {
        println!("Examples API: {}", config.providers.tatoeba_url);
    } else {
        println!("Examples API: Disabled");
    }
    match &config.http_proxy {
        Some(proxy) => println!("Proxy: {}", proxy),
        None => println!("Proxy: None"),
    }
}
