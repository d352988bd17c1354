//! Shared fixture entities for tests.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::metadata::{
    array, array_string_chips, boolean, date, number, object, string, string_textbox,
    DisplayColumn, EntityDescriptor, MetadataStore,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub id: String,
    pub street: String,
    pub city: String,
    pub zip: String,
}

static ADDRESS_DESCRIPTOR: Lazy<&'static EntityDescriptor> = Lazy::new(|| {
    MetadataStore::define(
        "Address",
        vec![
            string("id").hidden().optional(),
            string("street").display_name("Street").min_length(3).order(0),
            string("city").display_name("City").optional().order(1),
            string("zip").display_name("Zip code").pattern(r"^\d{5}$").order(2),
        ],
    )
});

impl Entity for Address {
    fn descriptor() -> &'static EntityDescriptor {
        *ADDRESS_DESCRIPTOR
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub id: String,
    pub value: String,
}

static CONTACT_DESCRIPTOR: Lazy<&'static EntityDescriptor> = Lazy::new(|| {
    MetadataStore::define(
        "Contact",
        vec![
            string("id").hidden().optional(),
            string("value").display_name("Contact").min_length(3),
        ],
    )
});

impl Entity for Contact {
    fn descriptor() -> &'static EntityDescriptor {
        *CONTACT_DESCRIPTOR
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub nickname: Option<String>,
    pub age: Option<f64>,
    pub bio: String,
    pub address: Address,
    pub contacts: Vec<Contact>,
    pub tags: Vec<String>,
    pub joined: Option<String>,
    pub verified: bool,
}

static CONTACT_COLUMNS: &[DisplayColumn] = &[DisplayColumn {
    header: "Contact",
    keys: &["value"],
}];

static PERSON_DESCRIPTOR: Lazy<&'static EntityDescriptor> = Lazy::new(|| {
    MetadataStore::define(
        "Person",
        vec![
            string("id").hidden().omit_for_create(),
            string("name")
                .display_name("Full name")
                .min_length(5)
                .max_length(10)
                .order(0),
            string("nickname").optional().pattern("^[a-z]+$"),
            number("age").display_name("Age").min(0.0).max(150.0).order(1),
            string_textbox("bio").display_name("Bio").optional().widths(12, 12, 12),
            object("address", Address::descriptor)
                .display_name("Address")
                .order(2),
            array("contacts", Contact::descriptor, CONTACT_COLUMNS)
                .display_name("Contacts")
                .order(3),
            array_string_chips("tags").display_name("Tags").optional().min_length(2),
            date("joined")
                .display_name("Joined")
                .optional()
                .min_date(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
                .max_date(NaiveDate::from_ymd_opt(2030, 12, 31).unwrap()),
            boolean("verified")
                .display_name("Verified")
                .optional()
                .omit_for_update(),
        ],
    )
});

impl Entity for Person {
    fn descriptor() -> &'static EntityDescriptor {
        *PERSON_DESCRIPTOR
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// A person that passes validation for both create and update.
pub fn sample_person() -> Person {
    Person {
        id: "p-1".to_string(),
        name: "Amadeus".to_string(),
        nickname: Some("amadeus".to_string()),
        age: Some(35.0),
        bio: String::new(),
        address: Address {
            id: String::new(),
            street: "Main road 5".to_string(),
            city: "Berlin".to_string(),
            zip: "10115".to_string(),
        },
        contacts: vec![Contact {
            id: String::new(),
            value: "amadeus@example.com".to_string(),
        }],
        tags: vec!["vip".to_string()],
        joined: Some("2020-05-01".to_string()),
        verified: true,
    }
}
