use depviz::adapters::outbound::console::StderrProgressReporter;
use depviz::application::dto::ResolveRequest;
use depviz::application::factories::{
    FormatterFactory, LoaderFactory, PresenterFactory, PresenterType,
};
use depviz::application::read_models::DependencyReport;
use depviz::application::use_cases::ResolveDependenciesUseCase;
use depviz::cli::Args;
use depviz::config::{load_config, unknown_field_warnings, Settings};
use depviz::ports::inbound::DependencyResolutionPort;
use depviz::ports::outbound::{ProgressReporter, RepositorySource};
use depviz::shared::error::{DepVizError, ExitCode};
use depviz::shared::Result;
use std::process;

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(exit_code_for(&e).as_i32());
        }
    }
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    error
        .downcast_ref::<DepVizError>()
        .map(DepVizError::exit_code)
        .unwrap_or(ExitCode::ApplicationError)
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments (clap exits with status 2 on usage errors)
    let args = Args::parse_args();

    // Merge config file values under the command line
    let current_dir = std::env::current_dir()?;
    let config = load_config(args.config.as_deref(), &current_dir)?;
    let config_warnings = unknown_field_warnings(&config);
    let settings = Settings::merge(args, config)?;

    let progress_reporter = StderrProgressReporter::new().with_quiet(settings.quiet);
    for warning in &config_warnings {
        progress_reporter.report_error(warning);
    }
    print_banner(&progress_reporter, &settings);

    // Create request
    let request = ResolveRequest::builder()
        .package(settings.package.clone())
        .source(RepositorySource::new(
            settings.repo_path.clone(),
            settings.repo_mode,
        ))
        .include_reverse(settings.reverse)
        .build()?;

    // Create adapters (Dependency Injection)
    let loader = LoaderFactory::create(settings.repo_mode)?;
    let use_case = ResolveDependenciesUseCase::new(loader, &progress_reporter);

    // Execute use case
    let response = use_case.resolve(request)?;
    let has_cycles = response.resolution.has_cycles();

    // Display progress message
    progress_reporter.report(FormatterFactory::progress_message(settings.ascii_mode));

    // Create formatter using factory
    let report = DependencyReport::from_response(response, settings.show_cycles);
    let formatter = FormatterFactory::create(settings.ascii_mode);
    let formatted_output = formatter.format(&report)?;

    // Present output
    let presenter_type = PresenterType::from_output(settings.output);
    let presenter = PresenterFactory::create(presenter_type.clone());
    presenter.present(&formatted_output)?;
    if let PresenterType::File(path) = &presenter_type {
        progress_reporter.report(&format!("✅ Output complete: {}", path.display()));
    }

    if settings.fail_on_cycles && has_cycles {
        progress_reporter.report_error("❌ Dependency cycles detected (--fail-on-cycles).");
        return Ok(ExitCode::CyclesDetected);
    }

    Ok(ExitCode::Success)
}

fn print_banner(reporter: &impl ProgressReporter, settings: &Settings) {
    reporter.report("🔧 Configuration:");
    for line in banner_lines(settings) {
        reporter.report(&line);
    }
    reporter.report("Parameters loaded successfully.");
    reporter.report("");
}

fn banner_lines(settings: &Settings) -> Vec<String> {
    vec![
        format!("   Package:     {}", settings.package),
        format!("   Repo path:   {}", settings.repo_path),
        format!("   Repo mode:   {}", settings.repo_mode),
        format!("   Ascii mode:  {}", settings.ascii_mode),
        format!("   Reverse:     {}", settings.reverse),
        format!("   Show cycles: {}", settings.show_cycles),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use depviz::application::dto::AsciiMode;
    use depviz::ports::outbound::RepoMode;

    fn settings() -> Settings {
        Settings {
            package: "web".to_string(),
            repo_path: "repo.json".to_string(),
            repo_mode: RepoMode::Local,
            ascii_mode: AsciiMode::Tree,
            reverse: true,
            show_cycles: false,
            fail_on_cycles: false,
            output: None,
            quiet: false,
        }
    }

    #[test]
    fn test_banner_lines() {
        let lines = banner_lines(&settings());
        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("Package:") && lines[0].ends_with("web"));
        assert!(lines[1].ends_with("repo.json"));
        assert!(lines[2].ends_with("local"));
        assert!(lines[3].ends_with("tree"));
        assert!(lines[4].ends_with("true"));
        assert!(lines[5].ends_with("false"));
    }

    #[test]
    fn test_exit_code_for_missing_parameter() {
        let error: anyhow::Error = DepVizError::MissingParameter {
            parameter: "package".to_string(),
            config_key: "package".to_string(),
        }
        .into();
        assert_eq!(exit_code_for(&error), ExitCode::InvalidArguments);
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        let error: anyhow::Error = DepVizError::RemoteFetchError {
            url: "https://example.com".to_string(),
            details: "timeout".to_string(),
        }
        .into();
        assert_eq!(exit_code_for(&error), ExitCode::ApplicationError);

        let plain = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&plain), ExitCode::ApplicationError);
    }
}
