use std::process::ExitCode;

use cubework::ui::output;

fn main() -> ExitCode {
    match cubework::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
