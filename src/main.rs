use std::io::Write;

use clap::Parser;

use vibe_lint::checker::{LintReport, lint};
use vibe_lint::cli::{Cli, ColorChoice};
use vibe_lint::config::LintPolicy;
use vibe_lint::output::{ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use vibe_lint::EXIT_RUNTIME_ERROR;

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_RUNTIME_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> vibe_lint::Result<i32> {
    let policy = LintPolicy::default();
    let report = lint(&cli.path, &policy)?;

    let output = format_output(cli.format, &report, color_choice_to_mode(cli.color))?;
    write_output(&output)?;

    Ok(report.exit_code())
}

fn format_output(
    format: OutputFormat,
    report: &LintReport,
    color_mode: ColorMode,
) -> vibe_lint::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn write_output(output: &str) -> vibe_lint::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}
