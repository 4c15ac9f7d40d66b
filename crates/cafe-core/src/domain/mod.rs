//! Domain entities for the café backend.

pub mod contact;
pub mod menu;

pub use contact::{ContactForm, ContactSubmission, NewContactSubmission};
pub use menu::{
    Category, CategorySeed, CategoryWithItems, ItemSeed, MainCategory, MenuItem,
};
