// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod runtime;

use anyhow::{Context, Result, anyhow, bail};
use atelier_app::EntityKind;
use atelier_store::{Notifier, TracingNotifier};
use config::Config;
use runtime::ScreenRequest;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

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
            "load config {}; run `atelier --print-example-config` to generate a v1 template",
            options.config_path.display()
        )
    })?;
    init_logging(&config)?;

    let export_dir = if options.export {
        let dir = options
            .export_dir
            .clone()
            .or_else(|| config.export_dir())
            .ok_or_else(|| {
                anyhow!(
                    "--export needs a directory; pass one or set [export].dir in {}",
                    options.config_path.display()
                )
            })?;
        Some(dir)
    } else {
        None
    };
    if options.check_only {
        return Ok(());
    }

    if let Some(dir) = &export_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("create export directory {}", dir.display()))?;
    }

    let request = ScreenRequest {
        entity: options.entity,
        search: options.search,
        filter: options.filter,
        page: options.page,
        page_size: config.page_size(),
        export_dir,
    };
    let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    rt.block_on(runtime::run(&request, notifier, &mut out))
}

fn init_logging(config: &Config) -> Result<()> {
    let directives = env::var("ATELIER_LOG")
        .or_else(|_| env::var("RUST_LOG"))
        .unwrap_or_else(|_| config.log_level().to_owned());
    let filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("invalid log filter {directives:?} in ATELIER_LOG or RUST_LOG"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow!("initialize logging: {error}"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
    entity: EntityKind,
    search: String,
    filter: String,
    page: usize,
    export: bool,
    export_dir: Option<PathBuf>,
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
        entity: EntityKind::Supplier,
        search: String::new(),
        filter: String::new(),
        page: 1,
        export: false,
        export_dir: None,
    };

    let mut iter = args.into_iter().peekable();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
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
            "--entity" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--entity requires a name"))?;
                options.entity = EntityKind::parse(value.as_ref()).ok_or_else(|| {
                    anyhow!(
                        "unknown entity {:?}; expected one of: {}",
                        value.as_ref(),
                        entity_names()
                    )
                })?;
            }
            "--search" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--search requires search terms"))?;
                options.search = value.as_ref().to_owned();
            }
            "--filter" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--filter requires filter terms"))?;
                options.filter = value.as_ref().to_owned();
            }
            "--page" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--page requires a page number"))?;
                let page: usize = value
                    .as_ref()
                    .parse()
                    .with_context(|| format!("invalid page number {:?}", value.as_ref()))?;
                if page == 0 {
                    bail!("--page is 1-based; got 0");
                }
                options.page = page;
            }
            "--export" => {
                options.export = true;
                if let Some(next) = iter.next_if(|next| !next.as_ref().starts_with('-')) {
                    options.export_dir = Some(PathBuf::from(next.as_ref()));
                }
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

fn entity_names() -> String {
    EntityKind::ALL
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_help() {
    println!("atelier");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a v1 config template");
    println!("  --check                  Validate config and exit");
    println!("  --entity <name>          Screen to open ({})", entity_names());
    println!("  --search <terms>         Search terms, every term must match");
    println!("  --filter <terms>         Filter terms, every term must match");
    println!("  --page <n>               Page to print (1-based)");
    println!("  --export [dir]           Write the screen's CSV export into dir");
    println!("  --help                   Show this help");
}

#[cfg(test)]
mod tests {
    use super::{CliOptions, parse_cli_args};
    use anyhow::Result;
    use atelier_app::EntityKind;
    use std::path::PathBuf;

    fn default_options_path() -> PathBuf {
        PathBuf::from("/tmp/atelier-config.toml")
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
                entity: EntityKind::Supplier,
                search: String::new(),
                filter: String::new(),
                page: 1,
                export: false,
                export_dir: None,
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
    fn parse_cli_args_errors_for_missing_config_value() {
        let error = parse_cli_args(vec!["--config"], default_options_path())
            .expect_err("missing config value should fail");
        assert!(error.to_string().contains("--config requires a file path"));
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
    fn parse_cli_args_sets_help_flag_for_long_and_short_variants() -> Result<()> {
        let long = parse_cli_args(vec!["--help"], default_options_path())?;
        assert!(long.show_help);

        let short = parse_cli_args(vec!["-h"], default_options_path())?;
        assert!(short.show_help);
        Ok(())
    }

    #[test]
    fn parse_cli_args_reads_screen_query() -> Result<()> {
        let options = parse_cli_args(
            vec![
                "--entity",
                "sub_family",
                "--search",
                "living seating",
                "--filter",
                "sofa",
                "--page",
                "2",
            ],
            default_options_path(),
        )?;
        assert_eq!(options.entity, EntityKind::SubFamily);
        assert_eq!(options.search, "living seating");
        assert_eq!(options.filter, "sofa");
        assert_eq!(options.page, 2);
        Ok(())
    }

    #[test]
    fn parse_cli_args_rejects_unknown_entity() {
        let error = parse_cli_args(vec!["--entity", "lamp"], default_options_path())
            .expect_err("unknown entity should fail");
        let message = error.to_string();
        assert!(message.contains("unknown entity \"lamp\""));
        assert!(message.contains("colour"));
    }

    #[test]
    fn parse_cli_args_rejects_bad_page_numbers() {
        assert!(parse_cli_args(vec!["--page", "0"], default_options_path()).is_err());
        assert!(parse_cli_args(vec!["--page", "two"], default_options_path()).is_err());
    }

    #[test]
    fn parse_cli_args_export_dir_is_optional() -> Result<()> {
        let bare = parse_cli_args(vec!["--export", "--entity", "colour"], default_options_path())?;
        assert!(bare.export);
        assert_eq!(bare.export_dir, None);
        assert_eq!(bare.entity, EntityKind::Colour);

        let with_dir = parse_cli_args(vec!["--export", "/tmp/out"], default_options_path())?;
        assert_eq!(with_dir.export_dir, Some(PathBuf::from("/tmp/out")));
        Ok(())
    }
}
