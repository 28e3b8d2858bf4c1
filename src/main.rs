use clap::{Arg, ArgAction, Command};
use indic_translate::config::Config;
use indic_translate::mt::{
    MockMode, MockTranslator, MtError, MtResult, SarvamProvider, TranslationClient,
};
use indic_translate::session::{BANNER, Session};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Pick the translator: the mock needs no configuration, Sarvam needs a key
fn load_client<F>(
    use_mock: bool,
    api_url: Option<&str>,
    lookup: F,
) -> MtResult<TranslationClient>
where
    F: Fn(&str) -> Option<String>,
{
    if use_mock {
        return Ok(TranslationClient::new(MockTranslator::new(MockMode::Suffix)));
    }

    let config = Config::from_lookup(lookup)?;
    let config = match api_url {
        Some(url) => config.with_base_url(url),
        None => config,
    };
    Ok(TranslationClient::new(SarvamProvider::new(config)?))
}

/// Line shown when no client could be built
fn startup_error_message(err: &MtError) -> String {
    match err {
        MtError::ConfigError(msg) => format!("Error: {}!", msg),
        other => format!("Error: {}", other),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("indic-translate")
        .version("0.1.0")
        .about("Translate between Indian languages with Sarvam AI")
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use mock translator instead of Sarvam AI")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show debug logs, provider name and detected script")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .help("Sarvam API base URL (default: https://api.sarvam.ai)"),
        )
        .get_matches();

    let use_mock = matches.get_flag("mock");
    let verbose = matches.get_flag("verbose");

    // Before the subscriber, so RUST_LOG can come from .env
    dotenv::dotenv().ok();

    // Logs go to stderr so they never interleave with prompts
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let api_url = matches.get_one::<String>("api-url").map(String::as_str);
    let client = match load_client(use_mock, api_url, |name| std::env::var(name).ok()) {
        Ok(client) => client,
        Err(e) => {
            println!("{}\n", BANNER);
            println!("{}", startup_error_message(&e));
            println!("Please add your API key to the .env file");
            return Ok(());
        }
    };

    info!(provider = client.provider_name(), "starting session");

    let mut session = Session::new(client, io::stdin().lock(), io::stdout()).with_verbose(verbose);
    session.run().await?;

    Ok(())
}
