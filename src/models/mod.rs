pub mod birthday;
pub mod email;
pub mod fields;
pub mod note;
pub mod phone;
pub mod record;
pub mod tag;

pub use birthday::Birthday;
pub use email::Email;
pub use fields::{Address, Name};
pub use note::Note;
pub use phone::Phone;
pub use record::Record;
pub use tag::Tag;
