use clap::Parser;

fn main() {
    let args = pyp::cli::Args::parse();
    pyp::cli::init_tracing(args.verbose);
    std::process::exit(pyp::cli::run(args));
}
