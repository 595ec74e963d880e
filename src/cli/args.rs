use clap::{Args, Parser, Subcommand};

use crate::exercises::slice_filter::Predicate;

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct TourArgs {
    #[command(subcommand)]
    pub command: Option<CommandsEnum>,
}

#[derive(Debug, Subcommand)]
pub enum CommandsEnum {
    /// Square root by ten steps of Newton's method.
    Sqrt(SqrtArgs),
    /// Count the whitespace-separated words in a string.
    WordCount(WordCountArgs),
    /// Print the leading Fibonacci numbers.
    Fibonacci(FibonacciArgs),
    /// Validate an infinite single-byte stream.
    Reader(ReaderArgs),
    /// Render a procedurally generated image from a parameter file.
    Image(ParameterFilePath),
    /// Keep only the integers that satisfy a predicate.
    Filter(FilterArgs),
}

#[derive(Debug, Args)]
pub struct SqrtArgs {
    #[clap(allow_negative_numbers = true)]
    pub value: f64,

    /// Print every intermediate guess.
    #[clap(long, short)]
    pub trace: bool,
}

#[derive(Debug, Args)]
pub struct WordCountArgs {
    pub text: String,
}

#[derive(Debug, Args)]
pub struct FibonacciArgs {
    #[clap(long, short, default_value_t = 10)]
    pub count: usize,
}

#[derive(Debug, Args)]
pub struct ReaderArgs {
    #[clap(long, default_value_t = 1 << 20)]
    pub bytes: usize,

    #[clap(long, default_value_t = 'A')]
    pub byte: char,
}

#[derive(Debug, Args)]
pub struct ParameterFilePath {
    pub params_path: String,

    #[clap(long, short)]
    pub date_time_out: bool,
}

#[derive(Debug, Args)]
pub struct FilterArgs {
    #[clap(value_enum)]
    pub predicate: Predicate,

    #[clap(allow_negative_numbers = true, required = true)]
    pub values: Vec<i64>,
}
