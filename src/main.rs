use std::process::ExitCode;

fn main() -> ExitCode {
    surfacedoc::cli::run()
}
