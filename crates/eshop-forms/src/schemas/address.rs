//! New-address form.

use eshop_commerce::checkout::NewAddress;

use crate::rule::{CONTACT_NUMBER_RE, PERSON_NAME_RE, SINGLE_WORD_RE, STREET_RE, ZIPCODE_RE};
use crate::{FormError, FormSchema, FormState, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Name,
    ContactNumber,
    Street,
    City,
    State,
    Landmark,
    Zipcode,
}

/// Schema of the address form shown in the address step of checkout.
///
/// The output carries no user; the caller attaches the logged-in user id.
#[derive(Debug, Clone, Copy)]
pub struct AddressSchema;

impl FormSchema for AddressSchema {
    type Field = AddressField;
    type Output = NewAddress;

    const FIELDS: &'static [AddressField] = &[
        AddressField::Name,
        AddressField::ContactNumber,
        AddressField::Street,
        AddressField::City,
        AddressField::State,
        AddressField::Landmark,
        AddressField::Zipcode,
    ];

    fn name(field: AddressField) -> &'static str {
        match field {
            AddressField::Name => "name",
            AddressField::ContactNumber => "contactNumber",
            AddressField::Street => "street",
            AddressField::City => "city",
            AddressField::State => "state",
            AddressField::Landmark => "landmark",
            AddressField::Zipcode => "zipcode",
        }
    }

    fn label(field: AddressField) -> &'static str {
        match field {
            AddressField::Name => "Name *",
            AddressField::ContactNumber => "Contact Number *",
            AddressField::Street => "Street *",
            AddressField::City => "City *",
            AddressField::State => "State *",
            AddressField::Landmark => "Landmark",
            AddressField::Zipcode => "Zip Code *",
        }
    }

    fn rule(field: AddressField) -> Rule<AddressField> {
        match field {
            AddressField::Name => Rule::required(&PERSON_NAME_RE, "Please enter valid name."),
            AddressField::ContactNumber => {
                Rule::required(&CONTACT_NUMBER_RE, "Please enter valid contact number.")
            }
            AddressField::Street => Rule::required(&STREET_RE, "Please enter valid street."),
            AddressField::City => Rule::required(&SINGLE_WORD_RE, "Please enter valid city."),
            AddressField::State => Rule::required(&PERSON_NAME_RE, "Please enter valid state."),
            AddressField::Landmark => Rule::optional(&STREET_RE, "Please enter valid landmark."),
            AddressField::Zipcode => Rule::required(&ZIPCODE_RE, "Please enter valid zip code."),
        }
    }

    fn build(form: &FormState<Self>) -> Result<NewAddress, FormError> {
        let value = |field| form.value(field).to_string();
        let landmark = form.value(AddressField::Landmark);
        Ok(NewAddress {
            name: value(AddressField::Name),
            contact_number: value(AddressField::ContactNumber),
            street: value(AddressField::Street),
            city: value(AddressField::City),
            state: value(AddressField::State),
            landmark: (!landmark.trim().is_empty()).then(|| landmark.to_string()),
            zipcode: value(AddressField::Zipcode),
            user: None,
        })
    }
}
