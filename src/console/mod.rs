mod errors;
mod menu;
mod session;

pub use session::Console;
