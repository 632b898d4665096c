use std::path::PathBuf;

use bordercolor::{
    bin_common::{
        args::sampling::SamplingCli,
        init::{init_eyre, init_logger},
    },
    border_color::{decode, DecodeOptions},
};
use clap::{Parser, ValueEnum};
use color_eyre::eyre::{self, Context};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[value(rename_all = "UPPER")]
enum Toggle {
    On,
    Off,
}

#[derive(Parser)]
#[command(version)]
/// Estimates the color of the border of an image and prints it as #rrggbb
struct Cli {
    /// The image file to use
    #[arg(short = 'i', value_name = "PATH")]
    input: PathBuf,

    /// Suppress diagnostic output, except for errors
    #[arg(short = 'q')]
    quiet: bool,

    /// Show the image framed in its border color when done
    #[arg(short = 'p', value_enum, ignore_case = true, default_value_t = Toggle::On)]
    preview: Toggle,

    /// Also save the framed image here
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Write all logs to this file as well
    #[arg(long)]
    logfile: Option<PathBuf>,

    #[command(flatten)]
    sampling: SamplingCli,
}

fn main() -> eyre::Result<()> {
    init_eyre()?;
    let cli = Cli::parse();

    let level = if cli.quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };
    init_logger(level, cli.logfile.as_deref())?;

    let opts = DecodeOptions {
        sampling: cli.sampling.to_args(),
        show_preview: cli.preview == Toggle::On,
        quiet: cli.quiet,
        preview_output: cli.output,
        ..Default::default()
    };

    let color = decode(&cli.input, &opts)
        .wrap_err_with(|| format!("Could not decode {:?}", cli.input))?;
    println!("{color}");

    Ok(())
}
