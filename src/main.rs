// showbits: raw bit patterns of C numeric types

use std::io::{self, ErrorKind};

use showbits::session::Session;
use showbits::ui::Palette;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout carries only the session transcript
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if std::env::args_os().len() > 1 {
        log::warn!("command-line arguments are ignored");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let palette = Palette::detect(&stdout);

    let mut session = Session::new(stdin.lock(), stdout.lock()).with_palette(palette);
    match session.run() {
        Ok(()) => Ok(()),
        // Reader went away (e.g. piped into `head`); nothing left to say
        Err(e) if e.io_error().kind() == ErrorKind::BrokenPipe => {
            log::debug!("output closed: {}", e);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
