use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::Event;

use super::InputDriver;

/// Replays a fixed list of events, then reports an idle terminal.
///
/// Used to drive the shell headlessly; `poll` never blocks.
#[derive(Debug, Default)]
pub struct ScriptedInputDriver {
    events: VecDeque<Event>,
    mouse_capture: Option<bool>,
}

impl ScriptedInputDriver {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
            mouse_capture: None,
        }
    }

    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }

    /// Last value passed to `set_mouse_capture`, if any.
    pub fn mouse_capture(&self) -> Option<bool> {
        self.mouse_capture
    }
}

impl InputDriver for ScriptedInputDriver {
    fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> io::Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "event script exhausted"))
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        self.mouse_capture = Some(enabled);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_in_order_then_runs_dry() {
        let mut d = ScriptedInputDriver::new([Event::Resize(10, 5), Event::FocusGained]);
        d.push(Event::FocusLost);
        assert_eq!(d.remaining(), 3);
        assert!(matches!(d.read().unwrap(), Event::Resize(10, 5)));
        assert!(matches!(d.read().unwrap(), Event::FocusGained));
        assert!(matches!(d.read().unwrap(), Event::FocusLost));
        assert!(!d.poll(Duration::from_millis(5)).unwrap());
        let err = d.read().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn records_mouse_capture_requests() {
        let mut d = ScriptedInputDriver::default();
        assert_eq!(d.mouse_capture(), None);
        d.set_mouse_capture(true).unwrap();
        assert_eq!(d.mouse_capture(), Some(true));
    }
}
