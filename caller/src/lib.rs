mod console;
mod game;
mod history;
mod mode;
mod recording;
mod session;
pub use console::*;
pub use game::*;
pub use history::*;
pub use mode::*;
pub use recording::*;
pub use session::*;
