// crates/citizen-desk-cli/src/main.rs
// ============================================================================
// Module: Citizen Desk CLI Entry Point
// Description: Command dispatcher for the desk server and locale tooling.
// Purpose: Provide a localized CLI for serving, config checks, and catalogs.
// Dependencies: clap, citizen-desk-config, citizen-desk-i18n, citizen-desk-server, tokio.
// ============================================================================

//! ## Overview
//! The Citizen Desk CLI starts the HTTP server, validates configuration, and
//! inspects or switches the persisted interface locale. All user-facing
//! strings are routed through the message catalog. The output locale is the
//! `--lang` flag, then `CITIZEN_DESK_LANG`, then the stored preference.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use citizen_desk_config::CitizenDeskConfig;
use citizen_desk_i18n::DEFAULT_LOCALE;
use citizen_desk_i18n::FilePreferenceStore;
use citizen_desk_i18n::Locale;
use citizen_desk_i18n::Localizer;
use citizen_desk_i18n::MessageArg;
use citizen_desk_i18n::SUPPORTED_LOCALES;
use citizen_desk_i18n::t;
use citizen_desk_server::DeskServer;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "CITIZEN_DESK_LANG";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "citizen-desk", disable_help_subcommand = true)]
struct Cli {
    /// Output language (overrides `CITIZEN_DESK_LANG` and the stored preference).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Config file path (defaults to citizen-desk.toml or env override).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Citizen Desk HTTP server.
    Serve,
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Interface locale utilities.
    Locale {
        /// Selected locale subcommand.
        #[command(subcommand)]
        command: LocaleCommand,
    },
    /// Look up a catalog key in the output locale.
    Translate(TranslateCommand),
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Load and validate the configuration file.
    Validate,
}

/// Locale subcommands.
#[derive(Subcommand, Debug)]
enum LocaleCommand {
    /// Show the active locale and its metadata.
    Show,
    /// Switch and persist the interface locale.
    Set(LocaleSetCommand),
}

/// Arguments for `locale set`.
#[derive(Args, Debug)]
struct LocaleSetCommand {
    /// Locale identifier (ckb, kmr, ar, en).
    #[arg(value_name = "LOCALE")]
    locale: String,
}

/// Arguments for `translate`.
#[derive(Args, Debug)]
struct TranslateCommand {
    /// Dotted catalog key.
    #[arg(value_name = "KEY")]
    key: String,
    /// Placeholder value as `name=value`; repeatable.
    #[arg(long = "param", value_name = "NAME=VALUE")]
    params: Vec<String>,
}

/// Supported CLI language selections.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum LangArg {
    /// Sorani Kurdish.
    Ckb,
    /// Kurmanji Kurdish.
    Kmr,
    /// Arabic.
    Ar,
    /// English.
    En,
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::Ckb => Self::Ckb,
            LangArg::Kmr => Self::Kmr,
            LangArg::Ar => Self::Ar,
            LangArg::En => Self::En,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
async fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let requested = resolve_requested_locale(cli.lang, env_lang.as_deref())?;

    let Some(command) = cli.command else {
        show_help(requested.unwrap_or(DEFAULT_LOCALE))?;
        return Ok(ExitCode::SUCCESS);
    };

    let config = CitizenDeskConfig::load_or_default(cli.config.as_deref()).map_err(|err| {
        let locale = requested.unwrap_or(DEFAULT_LOCALE);
        CliError::new(t!(locale, "cli.config.load_failed", error = err))
    })?;
    let localizer = Localizer::new(
        Box::new(FilePreferenceStore::new(config.i18n.preferences_path())),
        config.i18n.default_locale,
    );
    let locale = requested.unwrap_or_else(|| localizer.locale());

    match command {
        Commands::Serve => command_serve(&config, locale).await,
        Commands::Config {
            command: ConfigCommand::Validate,
        } => command_config_validate(locale),
        Commands::Locale {
            command,
        } => command_locale(command, localizer, locale),
        Commands::Translate(command) => command_translate(&command, locale),
    }
}

/// Resolves an explicitly requested locale from flags or environment.
fn resolve_requested_locale(
    lang: Option<LangArg>,
    env_lang: Option<&str>,
) -> CliResult<Option<Locale>> {
    if let Some(lang) = lang {
        return Ok(Some(lang.into()));
    }
    let Some(value) = env_lang.filter(|value| !value.trim().is_empty()) else {
        return Ok(None);
    };
    Locale::parse(value).map(Some).ok_or_else(|| {
        CliError::new(t!(DEFAULT_LOCALE, "cli.lang.invalid_env", env = LANG_ENV, value = value))
    })
}

// ============================================================================
// SECTION: Serve Command
// ============================================================================

/// Executes the `serve` command.
async fn command_serve(config: &CitizenDeskConfig, locale: Locale) -> CliResult<ExitCode> {
    let server = DeskServer::from_config(config)
        .await
        .map_err(|err| CliError::new(t!(locale, "cli.serve.failed", error = err)))?;
    write_stderr_line(&t!(locale, "cli.serve.starting", bind = server.bind_addr()))
        .map_err(|err| CliError::new(output_error(locale, "stderr", &err)))?;
    server.serve().await.map_err(|err| CliError::new(t!(locale, "cli.serve.failed", error = err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Executes the config validation command. Loading already validated it.
fn command_config_validate(locale: Locale) -> CliResult<ExitCode> {
    write_stdout_line(&t!(locale, "cli.config.validate.ok"))
        .map_err(|err| CliError::new(output_error(locale, "stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Locale Commands
// ============================================================================

/// Dispatches locale subcommands.
fn command_locale(
    command: LocaleCommand,
    mut localizer: Localizer,
    locale: Locale,
) -> CliResult<ExitCode> {
    match command {
        LocaleCommand::Show => {
            write_stdout_line(&describe_locale(locale))
                .map_err(|err| CliError::new(output_error(locale, "stdout", &err)))?;
        }
        LocaleCommand::Set(command) => {
            let Some(target) = Locale::parse(&command.locale) else {
                return Err(CliError::new(t!(
                    locale,
                    "cli.locale.invalid",
                    value = command.locale,
                    expected = supported_locale_list()
                )));
            };
            localizer.set_locale(target.as_str()).map_err(|err| {
                CliError::new(t!(locale, "cli.locale.persist_failed", error = err))
            })?;
            let name = target.translate(target.display_key(), Vec::new());
            write_stdout_line(&t!(target, "cli.locale.set.ok", name = name))
                .map_err(|err| CliError::new(output_error(target, "stdout", &err)))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Renders the one-line description of `locale`.
fn describe_locale(locale: Locale) -> String {
    let name = locale.translate(locale.display_key(), Vec::new());
    let direction =
        locale.translate(&format!("locale.direction.{}", locale.direction()), Vec::new());
    t!(
        locale,
        "cli.locale.current",
        name = name,
        id = locale,
        direction = direction,
        tag = locale.formatting_tag()
    )
}

/// Returns the supported locale identifiers, comma separated.
fn supported_locale_list() -> String {
    SUPPORTED_LOCALES.iter().map(|locale| locale.as_str()).collect::<Vec<_>>().join(", ")
}

// ============================================================================
// SECTION: Translate Command
// ============================================================================

/// Executes the `translate` command.
fn command_translate(command: &TranslateCommand, locale: Locale) -> CliResult<ExitCode> {
    let args = command
        .params
        .iter()
        .map(|param| parse_param(param, locale))
        .collect::<CliResult<Vec<_>>>()?;
    write_stdout_line(&locale.translate(&command.key, args))
        .map_err(|err| CliError::new(output_error(locale, "stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Parses a `name=value` placeholder argument.
fn parse_param(param: &str, locale: Locale) -> CliResult<MessageArg> {
    match param.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok(MessageArg::new(name.trim().to_string(), value))
        }
        _ => Err(CliError::new(t!(locale, "cli.translate.param_invalid", value = param))),
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}

/// Formats a localized output error message.
fn output_error(locale: Locale, stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!(locale, "cli.output.stream.stdout"),
        _ => t!(locale, "cli.output.stream.stderr"),
    };
    t!(locale, "cli.output.write_failed", stream = stream_label, error = error)
}

/// Emits the top-level help message for the CLI.
fn show_help(locale: Locale) -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error(locale, "stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error(locale, "stdout", &err)))?;
    Ok(())
}
