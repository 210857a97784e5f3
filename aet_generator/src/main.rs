use aet_generator::config::runtime::{GeneratorPreferences, LoggingPreferences};
use aet_generator::logging::codes;
use aet_generator::{logging, pipeline};
use std::env;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Pin runtime preferences from the environment, then bring up logging
    logging::config::init_runtime_preferences(LoggingPreferences::default())?;
    logging::init_global_logging()?;

    // Validate pipeline configuration
    pipeline::validate_pipeline()?;

    let args: Vec<String> = env::args().collect();

    if args.iter().skip(1).any(|arg| arg == "--help") {
        print_help(&args[0]);
        return Ok(());
    }

    let options = parse_options(&args[1..]);

    if options.check {
        run_check_mode();
    } else {
        run_generate_mode(&options);
    }

    Ok(())
}

#[derive(Debug, Clone, Default)]
struct GeneratorOptions {
    check: bool,
    output: Option<PathBuf>,
    quiet: bool,
}

fn parse_options(args: &[String]) -> GeneratorOptions {
    let mut options = GeneratorOptions::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--check" => {
                options.check = true;
            }
            "--output" => {
                if i + 1 < args.len() {
                    options.output = Some(PathBuf::from(&args[i + 1]));
                    i += 1; // Skip the path argument
                } else {
                    eprintln!("Warning: --output requires a path");
                }
            }
            "--quiet" => {
                options.quiet = true;
            }
            _ => {
                eprintln!("Warning: Unknown option '{}'", args[i]);
            }
        }
        i += 1;
    }

    options
}

fn print_help(program_name: &str) {
    eprintln!("AET Generator v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("Generates the REST API error taxonomy as Rust source text");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!(
        "    {} > errors_generated.rs         # Emit taxonomy to stdout",
        program_name
    );
    eprintln!(
        "    {} --output <FILE>               # Emit taxonomy to a file",
        program_name
    );
    eprintln!(
        "    {} --check                       # Lint the catalog, emit nothing",
        program_name
    );
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    --help              Show this help message");
    eprintln!("    --check             Validate the catalog and report every defect");
    eprintln!("    --output <FILE>     Write the artifact to FILE instead of stdout");
    eprintln!("    --quiet             Suppress the generation summary");
    eprintln!();
    eprintln!("OUTPUT:");
    eprintln!("    stdout carries only the generated source text; all diagnostics");
    eprintln!("    go to stderr, so the artifact stream can be redirected directly");
    eprintln!("    into a source file.");
    eprintln!();

    // Print pipeline capabilities
    let pipeline_info = pipeline::get_pipeline_info();
    eprintln!("PIPELINE CAPABILITIES:");
    for line in pipeline_info.report().lines() {
        eprintln!("    {}", line);
    }
    eprintln!();
}

fn run_check_mode() {
    let preferences = GeneratorPreferences::default();
    let report = pipeline::run_check();

    if preferences.check_report_json {
        match report.report_json() {
            Ok(json) => eprintln!("{}", json),
            Err(e) => eprintln!("Failed to serialize check report: {}", e),
        }
    } else {
        eprint!("{}", ensure_trailing_newline(report.report()));
    }

    if !report.is_clean() {
        std::process::exit(1);
    }
}

fn run_generate_mode(options: &GeneratorOptions) {
    let preferences = GeneratorPreferences::default();

    match pipeline::run_generation() {
        Ok(result) => {
            if let Err(error) = write_artifact(&result.source, options.output.as_deref()) {
                logging::safe_log_critical(
                    codes::emitter::ARTIFACT_WRITE_FAILURE,
                    &format!("Failed to write artifact: {}", error),
                );
                std::process::exit(1);
            }

            if !options.quiet && preferences.report_generation_metrics {
                eprintln!(
                    "Generated {} variants ({} bytes) in {:.2}ms",
                    result.definition_count,
                    result.bytes_emitted,
                    result.processing_duration.as_secs_f64() * 1000.0
                );
            }
        }
        Err(error) => {
            logging::safe_log_error(error.error_code(), &get_error_summary(&error));
            eprintln!("FAILED: {}", error);
            print_detailed_error(&error);
            std::process::exit(1);
        }
    }
}

/// Write the fully rendered artifact to its destination and flush.
///
/// The source is complete before this is called; a failure here can only
/// produce a short artifact at the destination, never a structurally
/// half-rendered one on stdout redirects that succeeded.
fn write_artifact(source: &str, output: Option<&Path>) -> std::io::Result<()> {
    match output {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(source.as_bytes())?;
            file.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(source.as_bytes())?;
            handle.flush()?;
        }
    }
    Ok(())
}

fn ensure_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

fn get_error_summary(error: &pipeline::GenerationError) -> String {
    match error {
        pipeline::GenerationError::Registry(_) => "Registry validation error".to_string(),
        pipeline::GenerationError::Extraction(_) => "Taxonomy extraction error".to_string(),
        pipeline::GenerationError::Emit(_) => "Artifact rendering error".to_string(),
        pipeline::GenerationError::Pipeline { .. } => "Pipeline error".to_string(),
    }
}

fn print_detailed_error(error: &pipeline::GenerationError) {
    match error {
        pipeline::GenerationError::Registry(ref registry_err) => {
            eprintln!("Registry validation stage failed:");
            eprintln!("  {}", registry_err);
        }
        pipeline::GenerationError::Extraction(ref extraction_err) => {
            eprintln!("Taxonomy extraction stage failed:");
            eprintln!("  {}", extraction_err);
        }
        pipeline::GenerationError::Emit(ref emit_err) => {
            eprintln!("Artifact rendering stage failed:");
            eprintln!("  {}", emit_err);
        }
        pipeline::GenerationError::Pipeline { message } => {
            eprintln!("Pipeline error: {}", message);
        }
    }

    let code = error.error_code();
    eprintln!("  Recommended action: {}", codes::get_action(code.as_str()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options() {
        let args = vec![
            "--check".to_string(),
            "--output".to_string(),
            "errors_generated.rs".to_string(),
            "--quiet".to_string(),
        ];

        let options = parse_options(&args);
        assert!(options.check);
        assert!(options.quiet);
        assert_eq!(
            options.output,
            Some(PathBuf::from("errors_generated.rs"))
        );
    }

    #[test]
    fn test_parse_options_invalid() {
        let args = vec!["--output".to_string()];

        let options = parse_options(&args);
        // Dangling --output is reported and ignored
        assert_eq!(options.output, None);
        assert!(!options.check);
    }

    #[test]
    fn test_parse_options_unknown_flag() {
        let args = vec!["--unknown-option".to_string()];

        let options = parse_options(&args);
        assert!(!options.check);
        assert!(!options.quiet);
    }

    #[test]
    fn test_get_error_summary() {
        let error = pipeline::GenerationError::pipeline_error("test");
        let summary = get_error_summary(&error);
        assert_eq!(summary, "Pipeline error");
    }

    #[test]
    fn test_write_artifact_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("errors_generated.rs");

        write_artifact("pub enum RestApiError {\n}\n", Some(&path)).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "pub enum RestApiError {\n}\n");
    }

    #[test]
    fn test_ensure_trailing_newline() {
        assert_eq!(ensure_trailing_newline("abc".to_string()), "abc\n");
        assert_eq!(ensure_trailing_newline("abc\n".to_string()), "abc\n");
    }
}
