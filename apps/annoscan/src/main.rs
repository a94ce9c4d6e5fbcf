//! annoscan CLI binary entry point.
//! Resolves targets, runs the selected scanner and maps the result to an exit code.

use annoscan::cli::{Cli, Commands, ScanArgs};
use annoscan::matcher::{CommentMarkerMatcher, LineMatcher, LogCallMatcher};
use annoscan::models::Scanner;
use annoscan::{config, logging, output, scan, targets, utils};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    let code = match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            0
        }
        Commands::Logs(args) => run(Scanner::Logs, &args, &LogCallMatcher::new()),
        Commands::Todos(args) => run(Scanner::Todos, &args, &CommentMarkerMatcher::new()),
    };
    std::process::exit(code);
}

/// Exit codes: 0 ok, 1 disallowed category found, 2 usage/config error.
fn run<M: LineMatcher>(scanner: Scanner, args: &ScanArgs, matcher: &M) -> i32 {
    // stderr styling; stdout styling is decided once the output mode is known
    let diag_color = !args.no_color && utils::colors_enabled();
    if let Err(e) = logging::init_logging(args.log_level.as_deref(), diag_color) {
        eprintln!("{} logging disabled: {}", utils::note_prefix(diag_color), e);
    }

    let eff = match config::resolve_effective(&args.overrides()) {
        Ok(eff) => eff,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(diag_color), e);
            return 2;
        }
    };
    match eff.config_path.as_deref() {
        Some(p) if !eff.is_json() => eprintln!(
            "{} using config {}",
            utils::info_prefix(diag_color),
            p.display()
        ),
        Some(_) => {}
        None => log::debug!("no annoscan config found; using defaults"),
    }

    let resolved = match targets::resolve_targets(
        targets::changed_files_from_env(),
        &eff.target_settings(),
    ) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(diag_color), e);
            return 2;
        }
    };
    log::debug!("targets ({:?}): {:?}", resolved.source, resolved.paths);

    let json = eff.is_json();
    let color = output::use_colors(&eff.output, args.no_color);
    let report = scan::scan_targets(&resolved.paths, matcher, |ev| {
        if !json {
            output::print_event(&ev, color);
        }
    });
    if json {
        output::print_json(&report, scanner, &eff.base);
    } else {
        output::print_summary(&report, scanner, color);
    }

    if report.failed() {
        1
    } else {
        0
    }
}
