//! Book form state
//!
//! - [`BookForm`] - raw field text and extraction into a request body
//! - [`FormMode`] - whether submit creates a book or updates one

pub mod input;
pub mod mode;

pub use input::BookForm;
pub use mode::FormMode;
