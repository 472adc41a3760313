use clap::Parser;

use agents_md::cli::{Cli, Commands};
use agents_md::commands::{run_scan, run_synthesize, run_validate};
use agents_md::logging;
use agents_md::output::ColorMode;

fn main() {
    let cli = Cli::parse();

    logging::init(
        cli.verbose,
        cli.quiet,
        ColorMode::from(cli.color).for_stderr(),
    );

    let exit_code = match &cli.command {
        Commands::Scan(args) => run_scan(args, &cli),
        Commands::Synthesize(args) => run_synthesize(args, &cli),
        Commands::Validate(args) => run_validate(args, &cli),
    };

    std::process::exit(exit_code);
}
