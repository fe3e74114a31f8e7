// Command-line interface for ctrlcv
//
// Renders a journal listing and a paper listing (YAML) into one static HTML page with
// cross-links and copy buttons. The rendering itself lives in ctrlcv-render; this
// binary resolves configuration, bootstraps missing inputs and reports the result.
//
// Usage:
//  ctrlcv                                   - Generate ExCiting.html from Journals.yaml / Papers.yaml
//  ctrlcv generate [-o <file>] [--journals <file>] [--papers <file>] [--no-bootstrap]
//  ctrlcv -o page.html                      - Same as above, 'generate' is optional
//  ctrlcv init                              - Write the sample listings where missing
//  ctrlcv generate-css                      - Print the embedded stylesheet
//
// Configuration:
//
// Built-in defaults, then ./ctrlcv.toml if present, then --config <path>, then the
// generate flags. Later layers win.

mod logging;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use ctrlcv_config::{ConfigError, CtrlcvConfig, Loader, LOCAL_CONFIG_FILE};
use ctrlcv_render::formats::get_default_css;
use ctrlcv_render::templates::write_missing_samples;
use ctrlcv_render::{publish, PublishSpec};
use logging::{init_logging, LogFormat};
use std::fmt::Display;
use tracing::{debug, error};

const SUBCOMMANDS: [&str; 4] = ["generate", "init", "generate-css", "help"];

fn build_cli() -> Command {
    Command::new("ctrlcv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render journal and paper listings as a cross-linked HTML page")
        .long_about(
            "ctrlcv reads a journal listing and a paper listing (YAML) and writes one\n\
            static HTML page. Article titles link to papers, journal fields link back\n\
            to journals, and every value has a button that copies it.\n\n\
            Commands:\n  \
            - generate:     Render the page (default)\n  \
            - init:         Write the sample listings where missing\n  \
            - generate-css: Print the embedded stylesheet\n\n\
            Examples:\n  \
            ctrlcv                          # Journals.yaml + Papers.yaml -> ExCiting.html\n  \
            ctrlcv -o refs.html             # Same, different output file\n  \
            ctrlcv generate --no-bootstrap  # Fail instead of writing samples",
        )
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a ctrlcv.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .help("Log output format")
                .value_parser(clap::builder::PossibleValuesParser::new(
                    LogFormat::NAMES,
                ))
                .default_value("human")
                .global(true),
        )
        .subcommand(
            Command::new("generate")
                .about("Render the HTML page (default command)")
                .long_about(
                    "Render both listings into one HTML page.\n\n\
                    Missing listings are replaced by the samples first unless\n\
                    --no-bootstrap is given or input.bootstrap_missing is false.\n\n\
                    Examples:\n  \
                    ctrlcv generate                                  # Defaults\n  \
                    ctrlcv generate --journals j.yaml --papers p.yaml\n  \
                    ctrlcv generate -o out.html",
                )
                .arg(
                    Arg::new("journals")
                        .long("journals")
                        .value_name("PATH")
                        .help("Journal listing (default: Journals.yaml)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("papers")
                        .long("papers")
                        .value_name("PATH")
                        .help("Paper listing (default: Papers.yaml)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("PATH")
                        .help("Output file (default: ExCiting.html)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("no-bootstrap")
                        .long("no-bootstrap")
                        .help("Do not write sample listings for missing inputs")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("init").about("Write the sample listings where they are missing"),
        )
        .subcommand(
            Command::new("generate-css")
                .about("Output the stylesheet embedded in the page")
                .long_about(
                    "Outputs the CSS embedded in every generated page.\n\n\
                    Examples:\n  \
                    ctrlcv generate-css              # Print CSS to stdout\n  \
                    ctrlcv generate-css > page.css   # Save to file",
                ),
        )
}

/// Insert `generate` when the arguments start with something other than a subcommand.
///
/// Returns `None` when there is nothing to inject (no arguments, or an explicit
/// subcommand, or a help/version request).
fn with_default_subcommand(args: &[String]) -> Option<Vec<String>> {
    let first = args.get(1)?;
    if SUBCOMMANDS.contains(&first.as_str())
        || matches!(first.as_str(), "-h" | "--help" | "-V" | "--version")
    {
        return None;
    }
    let mut injected = vec![args[0].clone(), "generate".to_string()];
    injected.extend_from_slice(&args[1..]);
    Some(injected)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => match with_default_subcommand(&args) {
            Some(injected) => match cli.try_get_matches_from(&injected) {
                Ok(m) => m,
                Err(e2) => e2.exit(),
            },
            None => e.exit(),
        },
    };

    let format = matches
        .get_one::<String>("log-format")
        .and_then(|name| LogFormat::from_name(name))
        .unwrap_or_default();
    init_logging(format, matches.get_count("verbose"));

    let explicit_config = matches.get_one::<String>("config").map(|s| s.as_str());

    match matches.subcommand() {
        Some(("generate", sub_matches)) => {
            let overrides = GenerateOverrides::from_matches(sub_matches);
            let config = load_cli_config(explicit_config, &overrides);
            handle_generate_command(&config);
        }
        None => {
            let config = load_cli_config(explicit_config, &GenerateOverrides::default());
            handle_generate_command(&config);
        }
        Some(("init", _)) => {
            let config = load_cli_config(explicit_config, &GenerateOverrides::default());
            handle_init_command(&config);
        }
        Some(("generate-css", _)) => {
            handle_generate_css_command();
        }
        _ => {
            fail("Unknown subcommand. Use --help for usage information.");
        }
    }
}

/// Flags of the generate command that map onto configuration keys.
#[derive(Debug, Clone, Default, PartialEq)]
struct GenerateOverrides {
    journals: Option<String>,
    papers: Option<String>,
    output: Option<String>,
    no_bootstrap: bool,
}

impl GenerateOverrides {
    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            journals: matches.get_one::<String>("journals").cloned(),
            papers: matches.get_one::<String>("papers").cloned(),
            output: matches.get_one::<String>("output").cloned(),
            no_bootstrap: matches.get_flag("no-bootstrap"),
        }
    }

    fn apply(&self, mut loader: Loader) -> Result<Loader, ConfigError> {
        if let Some(path) = &self.journals {
            loader = loader.set_override("paths.journals", path.as_str())?;
        }
        if let Some(path) = &self.papers {
            loader = loader.set_override("paths.papers", path.as_str())?;
        }
        if let Some(path) = &self.output {
            loader = loader.set_override("paths.output", path.as_str())?;
        }
        if self.no_bootstrap {
            loader = loader.set_override("input.bootstrap_missing", false)?;
        }
        Ok(loader)
    }
}

fn load_cli_config(explicit_path: Option<&str>, overrides: &GenerateOverrides) -> CtrlcvConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    overrides
        .apply(loader)
        .and_then(Loader::build)
        .unwrap_or_else(|err| fail(format!("Failed to load configuration: {err}")))
}

/// Handle the generate command
fn handle_generate_command(config: &CtrlcvConfig) {
    let paths = &config.paths;

    if config.input.bootstrap_missing {
        write_missing_samples(&paths.journals, &paths.papers).unwrap_or_else(|e| fail(e));
    }

    let spec = PublishSpec::new(&paths.journals, &paths.papers, &paths.output)
        .with_options(config.render_options());
    let result = publish(&spec).unwrap_or_else(|e| fail(e));
    debug!(bytes = result.bytes, "generate finished");

    let output = result.output.display();
    println!("HTML已生成: {output}");
    println!("请在浏览器中打开 {output} 查看结果");
}

/// Handle the init command
fn handle_init_command(config: &CtrlcvConfig) {
    let paths = &config.paths;
    let created = write_missing_samples(&paths.journals, &paths.papers).unwrap_or_else(|e| fail(e));

    if created.is_empty() {
        println!("示例文件均已存在，未做修改");
    }
    for path in created {
        println!("已创建示例文件: {}", path.display());
    }
}

fn handle_generate_css_command() {
    print!("{}", get_default_css());
}

fn fail(err: impl Display) -> ! {
    error!("{err}");
    std::process::exit(1);
}
