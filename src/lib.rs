pub mod content;
pub mod form;
pub mod motion;
pub mod prelude;
pub mod section;

pub use crate::content::{ContentError, ContentResult, Profile};
pub use crate::form::{ContactFormController, ContactFormOptions, Field, FormFields};
pub use crate::section::Section;
