use std::process::ExitCode;

fn main() -> ExitCode {
    match du_barchart::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("du-barchart: {e}");
            ExitCode::FAILURE
        }
    }
}
