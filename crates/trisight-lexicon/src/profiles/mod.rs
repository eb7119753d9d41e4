pub mod clinical;
pub mod genetic_screen;
