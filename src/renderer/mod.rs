pub mod renderer;
pub mod state;

pub use renderer::*;
pub use state::*;
