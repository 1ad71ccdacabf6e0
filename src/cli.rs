// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::{env, path::PathBuf};

use crate::infra::t;

pub mod commands;

use commands::{CommonArgs, generate::GenerateOptions, report::ReportOptions};

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return lang.clone();
        }
    }
    // Fallback to system language detection
    sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
}

fn path_arg(id: &'static str, value_name: &'static str, help: String) -> Arg {
    Arg::new(id)
        .long(id)
        .help(help)
        .value_name(value_name)
        .value_parser(clap::value_parser!(PathBuf))
        .action(ArgAction::Set)
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("catalog-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            path_arg("config", "FILE", t!("cli_config", locale = locale).to_string())
                .short('c')
                .global(true),
        )
        .arg(
            path_arg("project-dir", "DIR", t!("cli_project_dir", locale = locale).to_string())
                .default_value(".")
                .global(true),
        )
        .subcommand(
            Command::new("generate")
                .about(t!("cmd_generate_about", locale = locale).to_string())
                .arg(path_arg("catalog", "FILE", t!("arg_catalog", locale = locale).to_string()))
                .arg(path_arg("results", "FILE", t!("arg_results", locale = locale).to_string()))
                .arg(
                    Arg::new("suite")
                        .long("suite")
                        .help(t!("arg_suite", locale = locale).to_string())
                        .value_name("COMMAND")
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("report")
                .about(t!("cmd_report_about", locale = locale).to_string())
                .arg(path_arg("catalog", "FILE", t!("arg_catalog", locale = locale).to_string()))
                .arg(path_arg("results", "FILE", t!("arg_results", locale = locale).to_string()))
                .arg(path_arg("html", "FILE", t!("arg_html", locale = locale).to_string())),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("arg_non_interactive", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help(t!("arg_force", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = crate::init_locale(&pre_parse_language());

    let matches = build_cli(&language).get_matches();

    let common = CommonArgs {
        lang: matches.get_one::<String>("lang").cloned(),
        config: matches.get_one::<PathBuf>("config").cloned(),
        project_dir: matches
            .get_one::<PathBuf>("project-dir")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    match matches.subcommand() {
        Some(("generate", sub)) => {
            let options = GenerateOptions {
                common,
                catalog: sub.get_one::<PathBuf>("catalog").cloned(),
                results: sub.get_one::<PathBuf>("results").cloned(),
                suite: sub.get_one::<String>("suite").cloned(),
            };
            commands::generate::execute(options).await?;
        }
        Some(("report", sub)) => {
            let options = ReportOptions {
                common,
                catalog: sub.get_one::<PathBuf>("catalog").cloned(),
                results: sub.get_one::<PathBuf>("results").cloned(),
                html: sub.get_one::<PathBuf>("html").cloned(),
            };
            commands::report::execute(options)?;
        }
        Some(("init", sub)) => {
            // Show language detection message if it was auto-detected
            if common.lang.is_none() {
                println!(
                    "🌐 {}",
                    t!("system_language_detected", locale = &language, lang = &language)
                );
            }
            commands::init::execute(
                &common.project_dir,
                &language,
                sub.get_flag("non-interactive"),
                sub.get_flag("force"),
            )?;
        }
        _ => {
            // Clap has already printed help info.
        }
    }
    Ok(())
}
