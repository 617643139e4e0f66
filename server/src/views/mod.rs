pub mod health;
pub mod layout;
pub mod page;
pub mod settings;
