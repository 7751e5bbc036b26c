use dist_uploader::{args, run_app};

fn main() {
    // Parse command-line arguments
    let args = args::args_checks();

    // Failures are already reported by the lifecycle logger
    if run_app(&args).is_err() {
        std::process::exit(1);
    }
}
