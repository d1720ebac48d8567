use std::process::ExitCode;

use adapman::ui::output;

fn main() -> ExitCode {
    match adapman::cli::run() {
        Ok(code) => code,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
