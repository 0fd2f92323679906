use super::contact::{Contact, PhoneType};
use crate::source::ContactSource;

/// The in-memory contact store. Created empty, populated wholesale by
/// `load`, grown one contact at a time by `add`. No deletion. All
/// queries are linear scans over store order; a miss is an empty Vec,
/// never an error.
pub struct AddressBook {
    contacts: Vec<Contact>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
        }
    }

    /// Construct-then-fetch in one step.
    pub async fn from_source(source: &dyn ContactSource) -> Self {
        let mut book = Self::new();
        book.load(source).await;
        book
    }

    /// Replaces the book's contents with whatever the source yields.
    /// Until the fetch resolves, readers observe the previous (possibly
    /// empty) contents.
    pub async fn load(&mut self, source: &dyn ContactSource) {
        self.contacts = source.fetch().await;
    }

    pub fn add(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Exact, case-sensitive name match. Duplicate names are permitted,
    /// so this may return more than one contact.
    pub fn find_by_name(&self, name: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|contact| contact.name == name)
            .collect()
    }

    pub fn find_by_address(&self, address: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|contact| contact.address == address)
            .collect()
    }

    /// Contacts whose entry for `phone_type` is present and equals
    /// `number`. Every returned contact therefore has
    /// `phones.get(phone_type)` populated with that number.
    pub fn find_by_phone(&self, number: u64, phone_type: PhoneType) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|contact| {
                contact
                    .phones
                    .get(phone_type)
                    .is_some_and(|entry| entry.num == number)
            })
            .collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.contacts
            .iter()
            .map(|contact| contact.name.as_str())
            .collect()
    }

    pub fn addresses(&self) -> Vec<&str> {
        self.contacts
            .iter()
            .map(|contact| contact.address.as_str())
            .collect()
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

// TEST
#[cfg(test)]
mod tests {

    use super::*;
    use crate::domain::contact::{PhoneEntry, PhoneNumbers};
    use crate::source::SampleSource;

    fn contact(name: &str, address: &str) -> Contact {
        Contact::new(name.to_string(), address.to_string(), PhoneNumbers::default())
    }

    #[tokio::test]
    async fn empty_until_load_resolves() {
        let source = SampleSource::immediate();
        let mut book = AddressBook::new();

        assert!(book.is_empty());
        assert!(book.names().is_empty());

        book.load(&source).await;
        assert_eq!(book.names().len(), 3);
    }

    #[tokio::test]
    async fn load_replaces_contents_wholesale() {
        let source = SampleSource::immediate();
        let mut book = AddressBook::new();

        book.add(contact("Stale", "Nowhere"));
        book.load(&source).await;

        assert_eq!(book.len(), 3);
        assert!(book.find_by_name("Stale").is_empty());
    }

    #[tokio::test]
    async fn find_by_name_is_exact_and_case_sensitive() {
        let book = AddressBook::from_source(&SampleSource::immediate()).await;

        let hits = book.find_by_name("Tony");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].address, "Malibu");

        assert!(book.find_by_name("tony").is_empty());
        assert!(book.find_by_name("Ton").is_empty());
        assert!(book.find_by_name("Nobody").is_empty());
    }

    #[tokio::test]
    async fn find_by_address_is_exact() {
        let book = AddressBook::from_source(&SampleSource::immediate()).await;

        let hits = book.find_by_address("New York");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Banner");

        assert!(book.find_by_address("new york").is_empty());
    }

    #[tokio::test]
    async fn find_by_phone_requires_matching_type() {
        let book = AddressBook::from_source(&SampleSource::immediate()).await;

        let hits = book.find_by_phone(44455556666, PhoneType::Office);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Tony");

        // Same number filed under a different type must not match
        assert!(book.find_by_phone(44455556666, PhoneType::Home).is_empty());
        assert!(book.find_by_phone(99999, PhoneType::Office).is_empty());
    }

    #[tokio::test]
    async fn find_by_phone_hits_carry_the_queried_entry() {
        let book = AddressBook::from_source(&SampleSource::immediate()).await;

        for (number, phone_type) in [
            (11122223333, PhoneType::Home),
            (44455556666, PhoneType::Office),
            (314882045, PhoneType::Studio),
        ] {
            for hit in book.find_by_phone(number, phone_type) {
                let entry = hit.phones.get(phone_type);
                assert_eq!(entry.map(|e| e.num), Some(number));
            }
        }
    }

    #[tokio::test]
    async fn add_appends_at_the_end() {
        let mut book = AddressBook::from_source(&SampleSource::immediate()).await;
        let before = book.names().len();

        let mut phones = PhoneNumbers::default();
        phones.set(PhoneType::Studio, PhoneEntry { num: 2025550147 });
        book.add(Contact::new(
            "Peter".to_string(),
            "Queens".to_string(),
            phones,
        ));

        let names = book.names();
        assert_eq!(names.len(), before + 1);
        assert_eq!(names.last(), Some(&"Peter"));
    }

    #[tokio::test]
    async fn listing_preserves_store_order() {
        let book = AddressBook::from_source(&SampleSource::immediate()).await;

        assert_eq!(book.names(), vec!["Tony", "Banner", "마동석"]);
        assert_eq!(
            book.addresses(),
            vec!["Malibu", "New York", "서울시 강남구"]
        );
    }

    #[test]
    fn duplicate_names_are_permitted() {
        let mut book = AddressBook::new();
        book.add(contact("Tony", "Malibu"));
        book.add(contact("Tony", "Miami"));

        assert_eq!(book.find_by_name("Tony").len(), 2);
    }
}
