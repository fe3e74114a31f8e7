use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() in src/main.rs, minus the help texts.
// Build scripts can't access src/ modules.
const LOG_FORMATS: &[&str] = &["human", "json"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let path_arg = |name: &'static str| {
        Arg::new(name)
            .long(name)
            .value_name("PATH")
            .value_hint(ValueHint::FilePath)
    };

    let mut cmd = Command::new("ctrlcv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render journal and paper listings as a cross-linked HTML page")
        .arg(path_arg("config").global(true))
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .value_parser(clap::builder::PossibleValuesParser::new(LOG_FORMATS))
                .global(true),
        )
        .subcommand(
            Command::new("generate")
                .about("Render the HTML page (default command)")
                .arg(path_arg("journals"))
                .arg(path_arg("papers"))
                .arg(path_arg("output").short('o'))
                .arg(
                    Arg::new("no-bootstrap")
                        .long("no-bootstrap")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("init").about("Write the sample listings where they are missing"))
        .subcommand(
            Command::new("generate-css").about("Output the stylesheet embedded in the page"),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "ctrlcv", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "ctrlcv", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "ctrlcv", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
