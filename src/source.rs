use std::time::Duration;

use async_trait::async_trait;

use crate::domain::contact::{Contact, PhoneEntry, PhoneNumbers, PhoneType};
use crate::helper;

/// Produces the full contact list. The source never fails; the only
/// observable behavior is that delivery may take a while.
#[async_trait]
pub trait ContactSource: Send + Sync {
    async fn fetch(&self) -> Vec<Contact>;
}

/// Hardcoded stand-in for a real backend. Delivers the sample data
/// set after a simulated delay, configurable through `FETCH_DELAY_MS`.
pub struct SampleSource {
    delay: Duration,
}

impl SampleSource {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(helper::fetch_delay_ms()),
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// Zero-delay source, mostly for tests.
    pub fn immediate() -> Self {
        Self::with_delay(Duration::ZERO)
    }
}

impl Default for SampleSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactSource for SampleSource {
    async fn fetch(&self) -> Vec<Contact> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        sample_contacts()
    }
}

pub fn sample_contacts() -> Vec<Contact> {
    let mut tony = PhoneNumbers::default();
    tony.set(PhoneType::Home, PhoneEntry { num: 11122223333 });
    tony.set(PhoneType::Office, PhoneEntry { num: 44455556666 });

    let mut banner = PhoneNumbers::default();
    banner.set(PhoneType::Home, PhoneEntry { num: 77788889999 });

    let mut dongseok = PhoneNumbers::default();
    dongseok.set(PhoneType::Home, PhoneEntry { num: 213423452 });
    dongseok.set(PhoneType::Studio, PhoneEntry { num: 314882045 });

    vec![
        Contact::new("Tony".to_string(), "Malibu".to_string(), tony),
        Contact::new("Banner".to_string(), "New York".to_string(), banner),
        Contact::new("마동석".to_string(), "서울시 강남구".to_string(), dongseok),
    ]
}
