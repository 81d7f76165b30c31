use std::env;
use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::builder::RangedU64ValueParser;
use clap::builder::TypedValueParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Language;
use crate::domain::models::OverlapPolicy;
use crate::domain::models::ReplyPolicyName;
use crate::domain::models::Variant;
use crate::domain::services::actions::help_text;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

pub fn log_dir() -> path::PathBuf {
    if let Ok(dir) = env::var("BANKCHAT_LOG_DIR") {
        return path::PathBuf::from(dir);
    }

    return dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join("bankchat");
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for bankchat")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running bankchat with environment variable RUST_LOG=bankchat")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

fn subcommand_chat() -> Command {
    return Command::new("chat").about("Start a new chat with the banking assistant.");
}

/// Accepts whole milliseconds of at least `min`, kept as a string so config
/// loading reads every flag the same way.
fn millis_parser(min: u64) -> impl TypedValueParser<Value = String> {
    return RangedU64ValueParser::<u64>::new()
        .range(min..)
        .map(|millis| return millis.to_string());
}

fn arg_config_file() -> Arg {
    return Arg::new(ConfigKey::ConfigFile.to_string())
        .short('c')
        .long(ConfigKey::ConfigFile.to_string())
        .env("BANKCHAT_CONFIG_FILE")
        .num_args(1)
        .help(format!(
            "Path to configuration file [default: {}]",
            Config::default(ConfigKey::ConfigFile)
        ))
        .global(true);
}

fn arg_language() -> Arg {
    return Arg::new(ConfigKey::Language.to_string())
        .short('l')
        .long(ConfigKey::Language.to_string())
        .env("BANKCHAT_LANGUAGE")
        .num_args(1)
        .help(format!(
            "The language the chat starts in. Toggle at any time with CTRL+L. [default: {}]",
            Config::default(ConfigKey::Language)
        ))
        .value_parser(PossibleValuesParser::new(Language::VARIANTS))
        .global(true);
}

fn arg_variant() -> Arg {
    return Arg::new(ConfigKey::Variant.to_string())
        .short('v')
        .long(ConfigKey::Variant.to_string())
        .env("BANKCHAT_VARIANT")
        .num_args(1)
        .help(format!(
            "Presentation variant of the chat shell. [default: {}]",
            Config::default(ConfigKey::Variant)
        ))
        .value_parser(PossibleValuesParser::new(Variant::VARIANTS))
        .global(true);
}

fn arg_reply_policy() -> Arg {
    return Arg::new(ConfigKey::ReplyPolicy.to_string())
        .short('p')
        .long(ConfigKey::ReplyPolicy.to_string())
        .env("BANKCHAT_REPLY_POLICY")
        .num_args(1)
        .help(format!(
            "How assistant replies are produced. [default: {}]",
            Config::default(ConfigKey::ReplyPolicy)
        ))
        .value_parser(PossibleValuesParser::new(ReplyPolicyName::VARIANTS))
        .global(true);
}

fn arg_reply_delay() -> Arg {
    return Arg::new(ConfigKey::ReplyDelay.to_string())
        .long(ConfigKey::ReplyDelay.to_string())
        .env("BANKCHAT_REPLY_DELAY")
        .num_args(1)
        .help(format!(
            "Time in milliseconds the keyword policy waits before replying. [default: {}]",
            Config::default(ConfigKey::ReplyDelay)
        ))
        .value_parser(millis_parser(0))
        .global(true);
}

fn arg_reply_timeout() -> Arg {
    return Arg::new(ConfigKey::ReplyTimeout.to_string())
        .long(ConfigKey::ReplyTimeout.to_string())
        .env("BANKCHAT_REPLY_TIMEOUT")
        .num_args(1)
        .help(format!(
            "Time to wait in milliseconds before timing out a request to the remote assistant. [default: {}]",
            Config::default(ConfigKey::ReplyTimeout)
        ))
        .value_parser(millis_parser(1))
        .global(true);
}

fn arg_overlap() -> Arg {
    return Arg::new(ConfigKey::Overlap.to_string())
        .long(ConfigKey::Overlap.to_string())
        .env("BANKCHAT_OVERLAP")
        .num_args(1)
        .help(format!(
            "What happens to pending replies when a new message is sent. [default: {}]",
            Config::default(ConfigKey::Overlap)
        ))
        .value_parser(PossibleValuesParser::new(OverlapPolicy::VARIANTS))
        .global(true);
}

fn arg_remote_url() -> Arg {
    return Arg::new(ConfigKey::RemoteURL.to_string())
        .long(ConfigKey::RemoteURL.to_string())
        .env("BANKCHAT_REMOTE_URL")
        .num_args(1)
        .help(format!(
            "Assistant API URL when using the remote reply policy. [default: {}]",
            Config::default(ConfigKey::RemoteURL)
        ))
        .global(true);
}

fn arg_connectivity_url() -> Arg {
    return Arg::new(ConfigKey::ConnectivityURL.to_string())
        .long(ConfigKey::ConnectivityURL.to_string())
        .env("BANKCHAT_CONNECTIVITY_URL")
        .num_args(1)
        .help("URL probed to detect whether the network is reachable. Probing is disabled when empty.")
        .global(true);
}

fn arg_connectivity_interval() -> Arg {
    return Arg::new(ConfigKey::ConnectivityInterval.to_string())
        .long(ConfigKey::ConnectivityInterval.to_string())
        .env("BANKCHAT_CONNECTIVITY_INTERVAL")
        .num_args(1)
        .help(format!(
            "Time in milliseconds between connectivity probes. [default: {}]",
            Config::default(ConfigKey::ConnectivityInterval)
        ))
        .value_parser(millis_parser(1))
        .global(true);
}

fn arg_account(key: ConfigKey, env_name: &'static str, help: &'static str) -> Arg {
    return Arg::new(key.to_string())
        .long(key.to_string())
        .env(env_name)
        .num_args(1)
        .help(format!("{help} [default: {}]", Config::default(key)))
        .global(true);
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("COMMANDS:") || line.starts_with("HOTKEYS:") {
                return Paint::new(format!("CHAT {line}"))
                    .underline()
                    .bold()
                    .to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}\nBuilt: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_BUILD_TIMESTAMP")
    );

    return Command::new("bankchat")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_chat())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .subcommand(Command::new("manpages").about("Generates manpages and outputs to stdout."))
        .arg(arg_config_file())
        .arg(arg_language())
        .arg(arg_variant())
        .arg(arg_reply_policy())
        .arg(arg_reply_delay())
        .arg(arg_reply_timeout())
        .arg(arg_overlap())
        .arg(arg_remote_url())
        .arg(arg_connectivity_url())
        .arg(arg_connectivity_interval())
        .arg(arg_account(
            ConfigKey::CustomerName,
            "BANKCHAT_CUSTOMER_NAME",
            "Customer name shown in the account summary.",
        ))
        .arg(arg_account(
            ConfigKey::AccountNumber,
            "BANKCHAT_ACCOUNT_NUMBER",
            "Masked account number shown in the account summary.",
        ))
        .arg(arg_account(
            ConfigKey::Balance,
            "BANKCHAT_BALANCE",
            "Balance shown in the account summary and quoted in balance replies.",
        ))
        .arg(arg_account(
            ConfigKey::LastLogin,
            "BANKCHAT_LAST_LOGIN",
            "Last login time shown in the account summary.",
        ));
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    println!("{}", log_dir().join("debug.log").to_string_lossy());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("chat", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("manpages", _)) => {
            clap_mangen::Man::new(build()).render(&mut io::stdout())?;
            return Ok(false);
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
