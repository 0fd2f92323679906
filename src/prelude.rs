pub use crate::cli::{command, run_app};
pub use crate::domain::{
    book::AddressBook,
    contact::{self, Contact, PhoneEntry, PhoneNumbers, PhoneType},
};
pub use crate::errors::AppError;
pub use crate::source::{ContactSource, SampleSource, sample_contacts};
