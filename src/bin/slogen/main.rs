use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use spdlog::{error, info, warn};

use slogen::config::Config;
use slogen::error::Error;
use slogen::generator::{generate, GeneratorOptions, Output};
use slogen::logger::{configure_console_logger, configure_logger};
use slogen::post_list::retrieve_files;

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "slogen.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Config path. Defaults to slogen.toml next to the executable, in the
    /// current directory or in the user config directory
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug messages
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every post into its own page, <out_dir>/<id>.html
    Pages(PagesArgs),
    /// Render all posts into a single escaped feed page
    Feed(FeedArgs),
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Directory holding the header, item and footer templates
    #[arg(short, long)]
    template_dir: PathBuf,

    /// strftime pattern for ${date}
    #[arg(short, long)]
    date_format: Option<String>,

    /// Post files, or directories of .md files
    #[arg(required = true)]
    posts: Vec<PathBuf>,
}

#[derive(Args, Debug)]
struct PagesArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Directory receiving the pages
    #[arg(short, long)]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct FeedArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Write the page to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn date_format<'a>(args: &'a CommonArgs, config: &'a Config) -> &'a str {
    args.date_format.as_deref().unwrap_or(&config.defaults.date_format)
}

fn run(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Command::Pages(args) => {
            let options = GeneratorOptions::pages(date_format(&args.common, config));
            let posts = retrieve_files(&args.common.posts)?;
            generate(&options, &args.common.template_dir, &posts, Output::PerPost(args.out_dir))?;
        }
        Command::Feed(args) => {
            let options = GeneratorOptions::feed(date_format(&args.common, config));
            let posts = retrieve_files(&args.common.posts)?;
            let mut sink: Box<dyn Write> = match args.output {
                Some(ref path) => Box::new(BufWriter::new(
                    File::create(path).map_err(|e| Error::io(path, e))?,
                )),
                None => Box::new(BufWriter::new(io::stdout().lock())),
            };
            generate(&options, &args.common.template_dir, &posts, Output::Aggregate(&mut sink))?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match open_config(cli.config.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = configure_logger(&config, cli.verbose) {
        if let Err(err) = configure_console_logger(&config, cli.verbose) {
            eprintln!("Error creating the console logger. Desc={}", err);
            return ExitCode::FAILURE;
        }
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    match run(cli, &config) {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
