use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Closed set of phone-number categories. Keeping this a proper enum
/// (rather than free-form strings) is what lets `PhoneNumbers::get`
/// hand back a precisely typed entry for whichever tag the caller
/// queried with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PhoneType {
    Home,
    Office,
    Studio,
}

impl PhoneType {
    pub const ALL: [PhoneType; 3] = [PhoneType::Home, PhoneType::Office, PhoneType::Studio];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhoneType::Home => "home",
            PhoneType::Office => "office",
            PhoneType::Studio => "studio",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneEntry {
    pub num: u64,
}

/// One optional slot per `PhoneType` variant. Absent slots are `None`,
/// so a lookup keyed by a tag yields `Option<&PhoneEntry>` and nothing
/// stringly-typed ever leaks through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumbers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<PhoneEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office: Option<PhoneEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub studio: Option<PhoneEntry>,
}

impl PhoneNumbers {
    pub fn get(&self, phone_type: PhoneType) -> Option<&PhoneEntry> {
        match phone_type {
            PhoneType::Home => self.home.as_ref(),
            PhoneType::Office => self.office.as_ref(),
            PhoneType::Studio => self.studio.as_ref(),
        }
    }

    pub fn set(&mut self, phone_type: PhoneType, entry: PhoneEntry) {
        match phone_type {
            PhoneType::Home => self.home = Some(entry),
            PhoneType::Office => self.office = Some(entry),
            PhoneType::Studio => self.studio = Some(entry),
        }
    }

    /// Present entries in declaration order (home, office, studio).
    pub fn iter(&self) -> impl Iterator<Item = (PhoneType, &PhoneEntry)> {
        PhoneType::ALL
            .iter()
            .filter_map(|&phone_type| self.get(phone_type).map(|entry| (phone_type, entry)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub address: String,
    pub phones: PhoneNumbers,
}

impl Contact {
    pub fn new(name: String, address: String, phones: PhoneNumbers) -> Self {
        Contact {
            name,
            address,
            phones,
        }
    }
}
