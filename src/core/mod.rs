/// Core functionality modules
///
/// Contains the roster operations and the menu loop that drives them.

pub mod menu;
pub mod registrar;

pub use menu::{Menu, MenuChoice, MenuState};
pub use registrar::{is_affirmative, DeleteOutcome, Registrar};
