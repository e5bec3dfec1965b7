use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::drivers::InputDriver;
use crate::error::{DeskError, Result};
use crate::event_loop::{ControlFlow, EventLoop};
use crate::shell::DesktopShell;
use crate::ui::UiFrame;

/// Drive `shell` until it asks to quit.
///
/// Mouse capture is switched on for the session and off again on the way
/// out, whether the loop ended normally or with an error.
pub fn run_shell<B, D>(
    terminal: &mut Terminal<B>,
    driver: D,
    shell: &mut DesktopShell,
    poll_interval: Duration,
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    D: InputDriver,
{
    let mut event_loop = EventLoop::new(driver, poll_interval);
    event_loop.driver().set_mouse_capture(true)?;
    tracing::info!("desktop session started");

    let result: Result<()> = event_loop.run(|_driver, event| match event {
        None => {
            terminal
                .draw(|frame| {
                    let mut ui = UiFrame::new(frame);
                    shell.render(&mut ui);
                })
                .map_err(|err| DeskError::Terminal(Box::new(err)))?;
            Ok(ControlFlow::Continue)
        }
        Some(event) => Ok(shell.handle_event(&event)),
    });

    let released = event_loop.driver().set_mouse_capture(false);
    tracing::info!(
        windows = shell.windows().windows().len(),
        "desktop session ended"
    );
    result?;
    released?;
    Ok(())
}
