// CLI module
// Public interface for the terminal front-end

mod commands;
mod input;
mod render;
mod repl;

pub use commands::{format_help, Command};
pub use input::{default_history_path, InputHandler};
pub use render::Renderer;
pub use repl::{Flow, Repl};
