//! Application state and logic

mod data;
mod event;
mod state;

pub use data::AppData;
pub use event::{Event, EventSource};
pub use state::{App, LoginIntent, ModalVisibility, Route};
