use colored::Colorize;
use eval_only_bench::run_benchmark;
use eval_only_bench::utils::logging::init_logging;

fn main() {
    init_logging();

    if let Err(e) = run_benchmark() {
        eprintln!("{} {}", "❌ Error:".bold().red(), e);
        std::process::exit(1);
    }
}
