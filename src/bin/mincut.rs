use contest_algorithms::io::read_stdin;
use contest_algorithms::solution::mincut;
use std::io::{stdout, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let result = read_stdin().and_then(|input| {
        let stdout = stdout();
        let mut out = BufWriter::new(stdout.lock());
        mincut::run(&input, &mut out)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
