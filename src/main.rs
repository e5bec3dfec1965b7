use clap::Parser;

use term_desk::config::Cli;
use term_desk::drivers::{ConsoleInputDriver, ConsoleTerminal};
use term_desk::runner::run_shell;
use term_desk::shell::DesktopShell;
use term_desk::tracing_sub;

fn main() -> term_desk::Result<()> {
    let config = Cli::parse().into_config()?;
    tracing_sub::init(config.log_file.as_deref(), config.log_level)?;

    let mut console = ConsoleTerminal::new()?;
    console.enter()?;
    let mut shell = DesktopShell::new(&config);
    let result = run_shell(
        console.terminal_mut(),
        ConsoleInputDriver::new(),
        &mut shell,
        config.poll_interval,
    );

    // Restore the terminal before reporting anything.
    let restored = console.exit();
    result?;
    restored?;
    Ok(())
}
