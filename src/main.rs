use std::process::ExitCode;

fn main() -> ExitCode {
    match ascii_plot::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
