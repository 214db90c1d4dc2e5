use clap::Parser;

use ray_tracer::cli::Args;
use ray_tracer::logger;

fn main() {
    let args = Args::parse();
    logger::init_logger(args.debug_level.into());

    if let Err(e) = ray_tracer::run(&args) {
        log::error!("exit with error: {}", e);
        std::process::exit(1);
    }
}
