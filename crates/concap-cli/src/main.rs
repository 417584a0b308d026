use clap::Parser;

/// Post-build step: takes no arguments and operates on the current working
/// directory. Per-file failures are reported but leave the exit code at 0;
/// only a discovery failure exits non-zero.
#[derive(Parser)]
#[command(name = "concap")]
#[command(about = "Inject the dashboard console-capture script into built HTML files")]
struct Cli {}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "concap_inject=info".into()),
        )
        .init();

    let _cli = Cli::parse();

    match concap_inject::run() {
        Ok(report) => {
            for err in &report.errors {
                eprintln!("error processing {}: {}", err.path.display(), err.message);
            }
            if report.processed == 0 {
                println!("no HTML files found to process for console capture injection");
            } else {
                println!(
                    "console capture injection complete. processed {} file(s)",
                    report.processed
                );
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
