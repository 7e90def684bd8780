//! Terminal UI: the interactive game view where a human plays columns and
//! the engine answers with its proven reply.

mod app;
mod game_view;

pub use app::App;
