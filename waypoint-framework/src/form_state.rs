use chrono::NaiveDate;
use strum::{Display, EnumString, VariantNames};
use waypoint_protocol::{state::string_value, StateMap};

use kv_log_macro as log;

pub const NAME_INPUT: &str = "name";
pub const DATE_OF_BIRTH_INPUT: &str = "date_of_birth";
pub const GENDER_INPUT: &str = "gender";
pub const ADDRESS_INPUT: &str = "address";
pub const COUNTRY_INPUT: &str = "country";

/// Inputs captured by the form's submit button.
pub const FORM_INPUTS: [&str; 5] = [
    NAME_INPUT,
    DATE_OF_BIRTH_INPUT,
    GENDER_INPUT,
    ADDRESS_INPUT,
    COUNTRY_INPUT,
];

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumString, VariantNames)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumString, VariantNames)]
pub enum Country {
    Finland,
    Hungary,
    Germany,
    #[strum(serialize = "USA")]
    Usa,
}

/// A form submission as the widgets delivered it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub address: String,
    pub country: Option<Country>,
}

impl FormFields {
    /// Build a submission from raw input values.
    ///
    /// Nothing here rejects a submission: a date that does not parse as
    /// `YYYY-MM-DD` and a choice outside the offered options both count as
    /// "not chosen".
    pub fn from_inputs(inputs: &StateMap) -> FormFields {
        FormFields {
            name: string_value(inputs, NAME_INPUT).to_string(),
            date_of_birth: parse_choice(inputs, DATE_OF_BIRTH_INPUT, |s| {
                NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
            }),
            gender: parse_choice(inputs, GENDER_INPUT, |s| s.parse().ok()),
            address: string_value(inputs, ADDRESS_INPUT).to_string(),
            country: parse_choice(inputs, COUNTRY_INPUT, |s| s.parse().ok()),
        }
    }
}

fn parse_choice<T>(inputs: &StateMap, id: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    let raw = string_value(inputs, id);
    if raw.is_empty() {
        return None;
    }

    let parsed = parse(raw);
    if parsed.is_none() {
        log::warn!("Input not recognised, storing empty", { input: id, value: raw });
    }
    parsed
}

/// The committed record shown on the details screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormRecord {
    pub name: String,
    /// `YYYY-MM-DD`, or empty when no date was chosen.
    pub date_of_birth: String,
    pub gender: Option<Gender>,
    pub address: String,
    pub country: Option<Country>,
}

impl FormRecord {
    pub fn gender_label(&self) -> String {
        self.gender.map(|g| g.to_string()).unwrap_or_default()
    }

    pub fn country_label(&self) -> String {
        self.country.map(|c| c.to_string()).unwrap_or_default()
    }
}

impl From<FormFields> for FormRecord {
    fn from(fields: FormFields) -> Self {
        FormRecord {
            name: fields.name,
            date_of_birth: fields
                .date_of_birth
                .map(|date| date.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            gender: fields.gender,
            address: fields.address,
            country: fields.country,
        }
    }
}

/// Single commit point for submitted form data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    record: FormRecord,
}

impl FormState {
    pub fn new() -> FormState {
        FormState::default()
    }

    /// Replace every field with the submission. Earlier values never survive.
    pub fn commit(&mut self, fields: FormFields) {
        self.record = fields.into();
    }

    pub fn read(&self) -> &FormRecord {
        &self.record
    }
}
