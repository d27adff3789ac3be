//! Login form.

use eshop_auth::Credentials;

use crate::{FormError, FormSchema, FormState, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginField {
    Email,
    Password,
}

/// Login only checks presence; the backend judges the credentials.
#[derive(Debug, Clone, Copy)]
pub struct LoginSchema;

impl FormSchema for LoginSchema {
    type Field = LoginField;
    type Output = Credentials;

    const FIELDS: &'static [LoginField] = &[LoginField::Email, LoginField::Password];

    fn name(field: LoginField) -> &'static str {
        match field {
            LoginField::Email => "username",
            LoginField::Password => "password",
        }
    }

    fn label(field: LoginField) -> &'static str {
        match field {
            LoginField::Email => "Email Address *",
            LoginField::Password => "Password *",
        }
    }

    fn rule(_field: LoginField) -> Rule<LoginField> {
        Rule::Required
    }

    fn build(form: &FormState<Self>) -> Result<Credentials, FormError> {
        Ok(Credentials::new(
            form.value(LoginField::Email),
            form.value(LoginField::Password),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        let mut form = FormState::<LoginSchema>::new();
        form.on_change(LoginField::Email, "asha@example.com");
        assert_eq!(form.submit().unwrap_err().invalid_fields(), &["password"]);

        form.on_change(LoginField::Password, "x");
        let credentials = form.submit().unwrap();
        assert_eq!(credentials.username, "asha@example.com");
        assert_eq!(credentials.password, "x");
    }
}
