use std::io::Write;
use std::path::Path;

use crate::cli::args::{FibonacciArgs, FilterArgs, ParameterFilePath, ReaderArgs, SqrtArgs};
use crate::core::error::{Result, TourError};
use crate::core::file_io::{
    build_output_path_with_date_time, extract_base_name, maybe_date_time_string, FilePrefix,
};
use crate::exercises::fibonacci::Fibonacci;
use crate::exercises::newton_sqrt::{compute_root, NewtonIterates, INITIAL_GUESS, ITERATION_COUNT};
use crate::exercises::pattern_image::{PatternImage, PatternImageParams};
use crate::exercises::repeat_reader::{validate_stream, RepeatReader};
use crate::exercises::slice_filter::filter;
use crate::exercises::word_count::word_count;

pub fn run_sqrt<W: Write>(args: &SqrtArgs, writer: &mut W) -> Result<()> {
    let root = compute_root(args.value)?;
    if args.trace {
        // The guess going into each step, starting from the initial guess.
        for (iteration, z) in std::iter::once(INITIAL_GUESS)
            .chain(NewtonIterates::new(args.value))
            .take(ITERATION_COUNT)
            .enumerate()
        {
            writeln!(writer, "iter: {},  z: {}", iteration, z)?;
        }
        writeln!(writer, "-------------")?;
    }
    writeln!(writer, "{}", root)?;
    Ok(())
}

pub fn run_word_count<W: Write>(text: &str, writer: &mut W) -> Result<()> {
    let counts = word_count(text);
    writeln!(writer, "{}", serde_json::to_string_pretty(&counts)?)?;
    Ok(())
}

pub fn run_fibonacci<W: Write>(args: &FibonacciArgs, writer: &mut W) -> Result<()> {
    for value in Fibonacci::new().take(args.count) {
        writeln!(writer, "{}", value)?;
    }
    Ok(())
}

pub fn run_reader<W: Write>(args: &ReaderArgs, writer: &mut W) -> Result<()> {
    if !args.byte.is_ascii() {
        return Err(TourError::InvalidParameter(format!(
            "stream byte must be ASCII, got {:?}",
            args.byte
        )));
    }
    let byte = args.byte as u8;
    let checked = validate_stream(&mut RepeatReader::new(byte), byte, args.bytes)?;
    writeln!(writer, "OK: {} bytes of {:?}", checked, args.byte)?;
    Ok(())
}

pub fn run_filter<W: Write>(args: &FilterArgs, writer: &mut W) -> Result<()> {
    let kept = filter(&args.values, |v| args.predicate.test(v));
    let text: Vec<String> = kept.iter().map(|v| v.to_string()).collect();
    writeln!(writer, "{}", text.join(" "))?;
    Ok(())
}

pub fn load_pattern_params(params_path: &str) -> Result<PatternImageParams> {
    let params: PatternImageParams = serde_json::from_str(&std::fs::read_to_string(params_path)?)?;
    tracing::debug!(?params, path = params_path, "loaded pattern image parameters");
    Ok(params)
}

/// Renders the image described by `params` and writes it as a PNG.
/// Returns the path of the written file.
pub fn render_pattern_image(
    params: &PatternImageParams,
    file_prefix: &FilePrefix,
) -> Result<std::path::PathBuf> {
    let image = PatternImage::new(params.clone())?;
    let path = file_prefix.with_suffix(".png");
    image.render().save(&path)?;
    tracing::info!(path = %path.display(), "wrote image file");
    Ok(path)
}

pub fn run_image(args: &ParameterFilePath, output_root: &Path) -> Result<std::path::PathBuf> {
    let params = load_pattern_params(&args.params_path)?;
    let base_name = extract_base_name(&args.params_path)?;
    let file_prefix = FilePrefix {
        directory_path: build_output_path_with_date_time(
            output_root,
            "image",
            base_name,
            &maybe_date_time_string(args.date_time_out),
        )?,
        file_base: base_name.to_owned(),
    };
    render_pattern_image(&params, &file_prefix)
}
