use std::fmt::Display;
use std::io::{self, Write};

use dirbrowse::app::App;
use dirbrowse::infra::config::Config;
use dirbrowse::infra::editor::SystemCommandRunner;
use dirbrowse::infra::lister::FsDirectoryLister;
use dirbrowse::infra::logging;
use dirbrowse::ui::style::Theme;

fn main() -> io::Result<()> {
    let config = Config::from_env();
    if let Err(error) = logging::init(config.log_file.as_deref()) {
        report(format_args!("Warning: logging disabled: {error}"));
    }

    let working_dir = match std::env::current_dir() {
        Ok(working_dir) => working_dir,
        Err(error) => fail(format_args!("Error: cannot determine working directory: {error}")),
    };

    let mut app = match App::new(
        &working_dir,
        config.editor,
        Box::new(FsDirectoryLister),
        Box::new(SystemCommandRunner),
    ) {
        Ok(app) => app,
        Err(error) => fail(format_args!("Error: {error}")),
    };

    dirbrowse::runtime::run(&mut app, &Theme::default())
}

fn report(message: impl Display) {
    #[allow(clippy::print_stderr)]
    {
        let _ = writeln!(io::stderr(), "{message}");
    }
}

/// Prints `message` and exits with status 1.
fn fail(message: impl Display) -> ! {
    report(message);

    #[allow(clippy::exit)]
    std::process::exit(1);
}
