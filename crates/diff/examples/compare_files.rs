use anyhow::{bail, Context, Result};
use log::info;
use std::env;
use std::path::Path;
use superdiff::{DiffStats, Differ, Settings};

const USAGE: &str = "Usage: compare_files <old_file> <new_file> [options]

Options:
  --ignore-case
  --ignore-whitespace
  --ignore-whitespace-changes
  --ignore-newline-changes
  --ignore-blank-lines
  --ignore-leading-whitespace
  --ignore-trailing-whitespace";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 {
        println!("{}", USAGE);
        return Ok(());
    }

    let settings = parse_options(&args[2..])?;
    info!("Comparing {} and {} with {:?}", args[0], args[1], settings);

    let old_content = read_file(&args[0])?;
    let new_content = read_file(&args[1])?;

    let diff = Differ::new(settings).compare(&old_content, &new_content);
    if diff.is_empty() {
        println!("Files are equal");
        return Ok(());
    }

    for record in &diff {
        println!("{:<8} {:?} | {:?}", record.tag.to_string(), record.left, record.right);
    }

    let stats = DiffStats::from_records(&diff);
    println!(
        "\n{} equal, {} replaced, {} deleted, {} inserted",
        stats.equal, stats.replaced, stats.deleted, stats.inserted
    );

    Ok(())
}

/// Map command-line flags onto settings
fn parse_options(options: &[String]) -> Result<Settings> {
    let mut settings = Settings::new();
    for option in options {
        settings = match option.as_str() {
            "--ignore-case" => settings.ignore_case(true),
            "--ignore-whitespace" => settings.ignore_non_newline_whitespace(true),
            "--ignore-whitespace-changes" => settings.ignore_non_newline_whitespace_changes(true),
            "--ignore-newline-changes" => settings.ignore_newline_changes(true),
            "--ignore-blank-lines" => settings.ignore_blank_lines(true),
            "--ignore-leading-whitespace" => settings.ignore_leading_whitespace(true),
            "--ignore-trailing-whitespace" => settings.ignore_trailing_whitespace(true),
            other => bail!("Unknown option: {}\n\n{}", other, USAGE),
        };
    }
    Ok(settings)
}

fn read_file(path: &str) -> Result<String> {
    std::fs::read_to_string(Path::new(path)).with_context(|| format!("Failed to read {}", path))
}
