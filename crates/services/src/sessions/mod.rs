mod controller;
mod state;
mod view;

// Public API of the session subsystem.
pub use controller::SessionController;
pub use state::SessionState;
pub use view::SessionSnapshot;
