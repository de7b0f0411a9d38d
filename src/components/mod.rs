pub mod modals;
pub mod page;
pub mod palette_view;
