pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::contact::{Contact, PhoneNumbers};

// OUTPUT FUNCTIONS
pub fn display_contact(contact: &Contact) -> String {
    let output = format!(
        "Name: {}\n\
        Address: {}\n\
        Phones: {}",
        contact.name,
        contact.address,
        display_phones(&contact.phones)
    );
    output
}

pub fn display_phones(phones: &PhoneNumbers) -> String {
    let entries: Vec<String> = phones
        .iter()
        .map(|(phone_type, entry)| format!("{} {}", phone_type.as_str(), entry.num))
        .collect();

    if entries.is_empty() {
        "none".to_string()
    } else {
        entries.join(", ")
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::domain::contact::{PhoneEntry, PhoneType};

    #[test]
    fn displays_present_phones_in_declaration_order() {
        let mut phones = PhoneNumbers::default();
        phones.set(PhoneType::Studio, PhoneEntry { num: 314882045 });
        phones.set(PhoneType::Home, PhoneEntry { num: 213423452 });

        assert_eq!(display_phones(&phones), "home 213423452, studio 314882045");
    }

    #[test]
    fn displays_placeholder_for_no_phones() {
        assert_eq!(display_phones(&PhoneNumbers::default()), "none");
    }

    #[test]
    fn check_display_contact() {
        let mut phones = PhoneNumbers::default();
        phones.set(PhoneType::Office, PhoneEntry { num: 44455556666 });

        let contact = Contact::new("Tony".to_string(), "Malibu".to_string(), phones);

        assert_eq!(
            display_contact(&contact),
            "Name: Tony\n\
            Address: Malibu\n\
            Phones: office 44455556666"
        );
    }
}
