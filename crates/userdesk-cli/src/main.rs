// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod runtime;

use anyhow::{Context, Result, anyhow, bail};
use config::{Config, MAX_USER_COUNT, parse_start_route};
use runtime::MockRuntime;
use std::env;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};
use userdesk_app::AppState;
use userdesk_tui::UiOptions;

const LOG_FILTER_ENV: &str = "USERDESK_LOG";

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `userdesk --print-example-config` to generate a v1 template",
            options.config_path.display()
        )
    })?;

    let start = options
        .start
        .as_deref()
        .unwrap_or_else(|| config.start_route());
    let start_route = parse_start_route(start).with_context(|| format!("invalid start route {start:?}"))?;
    let ui_options = UiOptions {
        login_delay: config.login_delay()?,
        page_size: config.page_size(),
    };

    let log_path = config.log_path()?;
    init_logging(config.log_level(), &log_path)?;

    let user_count = options.users.unwrap_or_else(|| config.user_count());
    if user_count > MAX_USER_COUNT {
        bail!("--users must be at most {MAX_USER_COUNT}, got {user_count}");
    }
    let seed = options.seed.unwrap_or_else(|| config.seed());
    let users = userdesk_store::generate_users(user_count, seed)
        .with_context(|| format!("generate {user_count} mock users with seed {seed}"))?;
    tracing::info!(
        users = users.len(),
        seed,
        start = %start_route.path(),
        log = %log_path.display(),
        "userdesk starting"
    );
    if options.check_only {
        return Ok(());
    }

    let mut state = AppState::at(&start_route.path());
    let mut runtime = MockRuntime::new(users);
    let result = userdesk_tui::run_app(&mut state, &mut runtime, ui_options);
    tracing::info!(ok = result.is_ok(), "userdesk exiting");
    result
}

/// Routes `tracing` output to a file; the terminal belongs to the UI.
fn init_logging(level: &str, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)
            .with_context(|| format!("create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| {
            format!(
                "open log file {}; set [log].path or USERDESK_LOG_PATH to a writable file",
                path.display()
            )
        })?;

    let env_filter = match EnvFilter::try_from_env(LOG_FILTER_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level {level:?}"))?,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .context("install log subscriber")?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
    users: Option<usize>,
    seed: Option<u64>,
    start: Option<String>,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        print_example: false,
        check_only: false,
        show_help: false,
        users: None,
        seed: None,
        start: None,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--users" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--users requires a count"))?;
                let raw = value.as_ref();
                options.users = Some(raw.parse().with_context(|| {
                    format!("--users expects a non-negative integer, got {raw:?}")
                })?);
            }
            "--seed" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--seed requires a number"))?;
                let raw = value.as_ref();
                options.seed = Some(raw.parse().with_context(|| {
                    format!("--seed expects a non-negative integer, got {raw:?}")
                })?);
            }
            "--start" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--start requires a route such as /users"))?;
                options.start = Some(value.as_ref().to_owned());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("userdesk");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a v1 config template");
    println!("  --users <n>              Number of mock users to generate");
    println!("  --seed <n>               Seed for mock user generation");
    println!("  --start <route>          Open at /login, /users or /users/<id>");
    println!("  --check                  Validate config + logging + mock data, then exit");
    println!("  --help                   Show this help");
}

#[cfg(test)]
mod tests {
    use super::{CliOptions, parse_cli_args};
    use anyhow::Result;
    use std::path::PathBuf;

    fn default_options_path() -> PathBuf {
        PathBuf::from("/tmp/userdesk-config.toml")
    }

    #[test]
    fn parse_cli_args_defaults_to_provided_config_path() -> Result<()> {
        let options = parse_cli_args(Vec::<String>::new(), default_options_path())?;
        assert_eq!(
            options,
            CliOptions {
                config_path: default_options_path(),
                print_config_path: false,
                print_example: false,
                check_only: false,
                show_help: false,
                users: None,
                seed: None,
                start: None,
            }
        );
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_config_path_override() -> Result<()> {
        let options = parse_cli_args(
            vec!["--config", "/custom/config.toml"],
            default_options_path(),
        )?;
        assert_eq!(options.config_path, PathBuf::from("/custom/config.toml"));
        Ok(())
    }

    #[test]
    fn parse_cli_args_reads_data_and_start_overrides() -> Result<()> {
        let options = parse_cli_args(
            vec!["--users", "25", "--seed", "9", "--start", "/users/user-4"],
            default_options_path(),
        )?;
        assert_eq!(options.users, Some(25));
        assert_eq!(options.seed, Some(9));
        assert_eq!(options.start.as_deref(), Some("/users/user-4"));
        Ok(())
    }

    #[test]
    fn parse_cli_args_rejects_non_numeric_counts() {
        let error = parse_cli_args(vec!["--users", "many"], default_options_path())
            .expect_err("non-numeric count should fail");
        assert!(error.to_string().contains("--users expects a non-negative integer"));

        let error = parse_cli_args(vec!["--seed", "-3"], default_options_path())
            .expect_err("negative seed should fail");
        assert!(error.to_string().contains("--seed"));
    }

    #[test]
    fn parse_cli_args_errors_for_missing_values() {
        for flag in ["--config", "--users", "--seed", "--start"] {
            let error = parse_cli_args(vec![flag], default_options_path())
                .expect_err("missing value should fail");
            assert!(error.to_string().contains(flag), "{flag}: {error}");
        }
    }

    #[test]
    fn parse_cli_args_errors_for_unknown_argument() {
        let error = parse_cli_args(vec!["--wat"], default_options_path())
            .expect_err("unknown arg should fail");
        let message = error.to_string();
        assert!(message.contains("unknown argument"));
        assert!(message.contains("--help"));
    }

    #[test]
    fn parse_cli_args_sets_print_and_check_flags() -> Result<()> {
        let options = parse_cli_args(
            vec!["--print-config-path", "--print-example-config", "--check"],
            default_options_path(),
        )?;
        assert!(options.print_config_path);
        assert!(options.print_example);
        assert!(options.check_only);
        assert!(!options.show_help);
        Ok(())
    }

    #[test]
    fn parse_cli_args_accepts_short_help() -> Result<()> {
        let options = parse_cli_args(vec!["-h"], default_options_path())?;
        assert!(options.show_help);
        Ok(())
    }
}
