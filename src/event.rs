use crate::loader::{LoadState, MountId};
use crossterm::event::{KeyEvent, MouseEvent};

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,
    Tick,
    ReposLoaded { mount: MountId, state: LoadState },
}
