//! Sign-up form.

use eshop_auth::SignUpRequest;

use crate::rule::{CONTACT_NUMBER_RE, EMAIL_RE, SINGLE_WORD_RE};
use crate::{FormError, FormSchema, FormState, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignUpField {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    ContactNumber,
}

#[derive(Debug, Clone, Copy)]
pub struct SignUpSchema;

impl FormSchema for SignUpSchema {
    type Field = SignUpField;
    type Output = SignUpRequest;

    const FIELDS: &'static [SignUpField] = &[
        SignUpField::FirstName,
        SignUpField::LastName,
        SignUpField::Email,
        SignUpField::Password,
        SignUpField::ConfirmPassword,
        SignUpField::ContactNumber,
    ];

    fn name(field: SignUpField) -> &'static str {
        match field {
            SignUpField::FirstName => "firstName",
            SignUpField::LastName => "lastName",
            SignUpField::Email => "email",
            SignUpField::Password => "password",
            SignUpField::ConfirmPassword => "confirmPassword",
            SignUpField::ContactNumber => "contactNumber",
        }
    }

    fn label(field: SignUpField) -> &'static str {
        match field {
            SignUpField::FirstName => "First Name *",
            SignUpField::LastName => "Last Name *",
            SignUpField::Email => "Email Address *",
            SignUpField::Password => "Password *",
            SignUpField::ConfirmPassword => "Confirm Password *",
            SignUpField::ContactNumber => "Contact Number *",
        }
    }

    fn rule(field: SignUpField) -> Rule<SignUpField> {
        match field {
            SignUpField::FirstName => {
                Rule::required(&SINGLE_WORD_RE, "Please enter valid first name.")
            }
            SignUpField::LastName => Rule::required(&SINGLE_WORD_RE, "Please enter valid last name."),
            SignUpField::Email => Rule::required(&EMAIL_RE, "Please enter valid email address."),
            SignUpField::Password => Rule::Password,
            SignUpField::ConfirmPassword => Rule::SameAs {
                field: SignUpField::Password,
                message: "Passwords do not match.",
            },
            SignUpField::ContactNumber => {
                Rule::required(&CONTACT_NUMBER_RE, "Please enter valid contact number.")
            }
        }
    }

    fn build(form: &FormState<Self>) -> Result<SignUpRequest, FormError> {
        let value = |field| form.value(field).to_string();
        Ok(SignUpRequest {
            first_name: value(SignUpField::FirstName),
            last_name: value(SignUpField::LastName),
            email: value(SignUpField::Email),
            password: value(SignUpField::Password),
            contact_number: value(SignUpField::ContactNumber),
        })
    }
}
