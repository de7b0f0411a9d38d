pub mod command_palette;
pub mod helpers;

pub use command_palette::{CommandPaletteModal, PaletteLayout};
