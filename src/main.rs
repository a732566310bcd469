use std::ffi::OsString;
use std::io::Write;
use std::{env, process};

use wc_cli::run;

fn main() {
    let args: Vec<OsString> = env::args_os().skip(1).collect();
    let result = run(args);

    print!("{}", result.stdout);
    eprint!("{}", result.stderr);
    std::io::stdout().flush().ok();

    process::exit(result.exit_code);
}

#[cfg(test)]
mod tests {
    use wc_cli::cli::args::Cli;
    use wc_cli::util::testing;
    use tracing::info;

    #[ctor::ctor]
    fn init() {
        testing::init_test_setup();
    }

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
        info!("command tree verified");
    }
}
