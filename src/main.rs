use std::io::Write;
use std::path::Path;

use clap::Parser;
use tour_exercises::cli::args::{CommandsEnum, TourArgs};
use tour_exercises::cli::commands::{
    run_fibonacci, run_filter, run_image, run_reader, run_sqrt, run_word_count,
};
use tour_exercises::core::error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn run(args: &TourArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut writer = stdout.lock();

    match &args.command {
        Some(CommandsEnum::Sqrt(params)) => run_sqrt(params, &mut writer),
        Some(CommandsEnum::WordCount(params)) => run_word_count(&params.text, &mut writer),
        Some(CommandsEnum::Fibonacci(params)) => run_fibonacci(params, &mut writer),
        Some(CommandsEnum::Reader(params)) => run_reader(params, &mut writer),
        Some(CommandsEnum::Image(params)) => run_image(params, Path::new("out")).map(|_| ()),
        Some(CommandsEnum::Filter(params)) => run_filter(params, &mut writer),
        None => {
            writeln!(writer, "Default command (nothing specified!)  Try `tour --help`.")?;
            Ok(())
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tour_exercises=info,tour=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: TourArgs = TourArgs::parse();

    if let Err(err) = run(&args) {
        tracing::error!("{}", err);
        eprintln!("ERROR:  {}", err);
        std::process::exit(1);
    }
}
