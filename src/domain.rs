pub mod book;
pub mod contact;

pub use book::AddressBook;
pub use contact::{Contact, PhoneEntry, PhoneNumbers, PhoneType};
