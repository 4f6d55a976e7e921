use std::io::Write;

use git_log_searcher::app::startup::{run, RunContext};
use git_log_searcher::core::shutdown::ShutdownCoordinator;

#[tokio::main]
async fn main() {
    let coordinator = ShutdownCoordinator::new();
    coordinator.install_signal_handlers();
    let context = RunContext::detect(coordinator.token());

    // Unlocked handles: scan threads log to stderr while the run is in flight
    let mut out = std::io::stdout();
    let mut err = std::io::stderr();

    let code = run(std::env::args_os(), &context, &mut out, &mut err).await;

    let _ = out.flush();
    let _ = err.flush();
    std::process::exit(code);
}
