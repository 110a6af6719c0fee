//! CLI tool for extracting plain text from subtitle files.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use subtext_core::{
    is_supported_file_name, Error, ErrorKind, ExtractionResult, LineMerger, RawInput,
    SubtitleExtractor, SubtitleFormat,
};

/// Extract dialogue text from subtitle files (SRT, VTT, ASS/SSA, SBV, SMI).
#[derive(Parser, Debug)]
#[command(name = "subtext")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input subtitle file(s). Reads pasted text from stdin when omitted or "-"
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Merge all extracted lines into one paragraph
    #[arg(short, long)]
    merge: bool,

    /// Separator placed between lines when merging
    #[arg(short, long, default_value = " ")]
    separator: String,

    /// Force a format instead of detecting it (srt, vtt, ass, sbv, smi, unknown)
    #[arg(short, long, value_parser = parse_format)]
    format: Option<SubtitleFormat>,

    /// Skip SSA/ASS "Comment:" events
    #[arg(long)]
    no_comments: bool,

    /// Print each result as a JSON object instead of plain text
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_format(name: &str) -> std::result::Result<SubtitleFormat, String> {
    SubtitleFormat::from_name(name).ok_or_else(|| format!("unknown subtitle format: {}", name))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let extractor = SubtitleExtractor::new().with_ass_comments(!args.no_comments);
    let merger = LineMerger::new().with_separator(args.separator.as_str());

    let reads_stdin = args.input.is_empty() || args.input.iter().all(|p| p.as_os_str() == "-");
    if reads_stdin {
        return process_stdin(&args, &extractor, &merger);
    }

    let (processed, failed) = process_batch(&args, &extractor, &merger);

    if args.input.len() > 1 {
        eprintln!("Processed {} file(s), {} failed", processed, failed);
    }

    if processed == 0 && failed > 0 {
        bail!("all {} file(s) failed to process", failed);
    }

    Ok(())
}

/// Process every input file, returning the processed and failed counts.
///
/// A failure in one file, including writing its output, does not stop the rest.
fn process_batch(args: &Args, extractor: &SubtitleExtractor, merger: &LineMerger) -> (usize, usize) {
    let mut processed = 0usize;
    let mut failed = 0usize;

    for input_path in &args.input {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        match handle_file(input_path, args, extractor, merger) {
            Ok(()) => processed += 1,
            Err(e) => {
                failed += 1;
                eprintln!("Error processing {}: {:#}", input_path.display(), e);
            }
        }
    }

    (processed, failed)
}

/// Extract one file and print or write its output.
fn handle_file(
    input_path: &Path,
    args: &Args,
    extractor: &SubtitleExtractor,
    merger: &LineMerger,
) -> Result<()> {
    let result = process_file(input_path, args, extractor)?;
    report_status(input_path, &result);

    if result.is_empty() && !args.json {
        return Ok(());
    }

    let output = render(&result, args, merger)?;
    if args.print || args.json {
        print!("{}", output);
    } else {
        let output_path = get_output_path(input_path, args.output.as_ref())?;
        write_output(&output_path, &output)?;
        log::debug!("Written to: {}", output_path.display());
    }

    Ok(())
}

/// Extract text from content piped on stdin.
fn process_stdin(args: &Args, extractor: &SubtitleExtractor, merger: &LineMerger) -> Result<()> {
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read stdin")?;

    let input = RawInput::from_bytes(&bytes, None);
    if input.content.trim().is_empty() {
        bail!("No subtitle content on stdin");
    }

    let result = run_extraction(&input, args, extractor)?;
    report_status(Path::new("stdin"), &result);

    if result.is_empty() && !args.json {
        return Ok(());
    }

    let output = render(&result, args, merger)?;
    if let Some(dir) = &args.output {
        let output_path = get_output_path(Path::new("stdin"), Some(dir))?;
        write_output(&output_path, &output)?;
        log::debug!("Written to: {}", output_path.display());
    } else {
        print!("{}", output);
    }

    Ok(())
}

/// Process a single subtitle file.
fn process_file(
    input_path: &Path,
    args: &Args,
    extractor: &SubtitleExtractor,
) -> Result<ExtractionResult> {
    let filename = input_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown");

    if !is_supported_file_name(filename) {
        return Err(Error::UnsupportedFileType(filename.to_string()).into());
    }

    let mut bytes = Vec::new();
    File::open(input_path)
        .and_then(|mut file| file.read_to_end(&mut bytes))
        .with_context(|| format!("Failed to read {}", input_path.display()))?;

    let input = RawInput::from_bytes(&bytes, Some(filename));
    run_extraction(&input, args, extractor)
}

/// Run detection (unless a format was forced) and extraction.
fn run_extraction(
    input: &RawInput,
    args: &Args,
    extractor: &SubtitleExtractor,
) -> Result<ExtractionResult> {
    let result = match args.format {
        Some(format) => extractor.process_as(input, format),
        None => extractor.process(input),
    };

    Ok(result?)
}

/// Describe the outcome of one extraction on stderr.
fn report_status(source: &Path, result: &ExtractionResult) {
    eprintln!("{}", status_message(source, result));
}

fn status_message(source: &Path, result: &ExtractionResult) -> String {
    let Some(kind) = result.error.filter(ErrorKind::is_soft) else {
        return format!("{}: extracted text (format: {})", source.display(), result.format);
    };

    if kind == ErrorKind::NoTextExtracted {
        format!(
            "{}: no text could be extracted (format: {})",
            source.display(),
            result.format
        )
    } else {
        format!(
            "{}: subtitle format not recognized, used generic extraction",
            source.display()
        )
    }
}

/// Render a result as output text.
fn render(result: &ExtractionResult, args: &Args, merger: &LineMerger) -> Result<String> {
    let text = if args.merge {
        merger.merge(&result.text)
    } else {
        result.text.clone()
    };

    if args.json {
        let rendered = ExtractionResult {
            text,
            format: result.format,
            error: result.error,
        };
        let json = serde_json::to_string(&rendered).context("Failed to serialize result")?;
        return Ok(format!("{}\n", json));
    }

    Ok(format!("{}\n", text))
}

/// Determine the output path for a processed file.
fn get_output_path(input_path: &Path, output_dir: Option<&PathBuf>) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let output_filename = format!("{}.txt", stem);

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => {
            if let Some(parent) = input_path.parent() {
                parent.join(output_filename)
            } else {
                PathBuf::from(output_filename)
            }
        }
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
