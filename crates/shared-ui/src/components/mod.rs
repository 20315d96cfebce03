pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod label;
pub mod separator;

// Re-exports for convenience
pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use label::*;
pub use separator::*;
