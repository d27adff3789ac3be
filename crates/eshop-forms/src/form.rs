//! Form state over a schema.

use std::fmt::Debug;
use std::marker::PhantomData;

use serde_json::{Map, Value};

use crate::{FormError, FormField, Rule};

/// Describes one form: its fields, their rules and what a valid form becomes.
pub trait FormSchema: Sized {
    /// Field identifier.
    type Field: Copy + Eq + Debug + 'static;

    /// Typed result of a valid form.
    type Output;

    /// Fields in display order.
    const FIELDS: &'static [Self::Field];

    /// Wire name of a field (camelCase).
    fn name(field: Self::Field) -> &'static str;

    /// Label shown next to the input.
    fn label(field: Self::Field) -> &'static str;

    fn rule(field: Self::Field) -> Rule<Self::Field>;

    /// Build the output from a form whose fields all passed validation.
    fn build(form: &FormState<Self>) -> Result<Self::Output, FormError>;
}

/// Per-field state for one instance of a form.
pub struct FormState<S: FormSchema> {
    fields: Vec<(S::Field, FormField)>,
    _schema: PhantomData<S>,
}

impl<S: FormSchema> Clone for FormState<S> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            _schema: PhantomData,
        }
    }
}

impl<S: FormSchema> Debug for FormState<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.fields.iter().map(|(k, v)| (S::name(*k), v)))
            .finish()
    }
}

impl<S: FormSchema> Default for FormState<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FormSchema> FormState<S> {
    /// A pristine form.
    pub fn new() -> Self {
        Self {
            fields: S::FIELDS
                .iter()
                .map(|field| (*field, FormField::default()))
                .collect(),
            _schema: PhantomData,
        }
    }

    /// Update a value without validating it.
    pub fn on_change(&mut self, field: S::Field, value: impl Into<String>) {
        self.slot_mut(field).value = value.into();
    }

    /// Validate one field, as when the input loses focus.
    pub fn on_blur(&mut self, field: S::Field) -> bool {
        let verdict = self.check(field);
        let valid = self.slot_mut(field).record(verdict);
        tracing::trace!(field = S::name(field), valid, "field validated");
        valid
    }

    /// Validate every field regardless of history.
    pub fn validate_all(&mut self) -> bool {
        let verdicts: Vec<_> = S::FIELDS.iter().map(|f| (*f, self.check(*f))).collect();
        let mut valid = true;
        for (field, verdict) in verdicts {
            valid &= self.slot_mut(field).record(verdict);
        }
        valid
    }

    /// True when no field is currently flagged.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|(_, f)| !f.error)
    }

    /// Validate everything and, if the form is valid, build its output.
    pub fn submit(&mut self) -> Result<S::Output, FormError> {
        if !self.validate_all() {
            let invalid = self.invalid_fields();
            tracing::debug!(fields = ?invalid, "form rejected");
            return Err(FormError::Invalid(invalid));
        }
        S::build(self)
    }

    /// Values of the fields that are not flagged, keyed by wire name.
    pub fn payload(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .filter(|(_, f)| !f.error)
            .map(|(k, f)| (S::name(*k).to_string(), Value::String(f.value.clone())))
            .collect()
    }

    /// Back to the pristine state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn field(&self, field: S::Field) -> &FormField {
        &self.slot(field).1
    }

    pub fn value(&self, field: S::Field) -> &str {
        &self.field(field).value
    }

    /// Fields with their state, in display order.
    pub fn fields(&self) -> impl Iterator<Item = (S::Field, &FormField)> {
        self.fields.iter().map(|(k, v)| (*k, v))
    }

    /// Wire names of the flagged fields.
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|(_, f)| f.error)
            .map(|(k, _)| S::name(*k))
            .collect()
    }

    fn check(&self, field: S::Field) -> Result<(), &'static str> {
        S::rule(field).check(self.value(field), |other| self.value(other))
    }

    fn slot(&self, field: S::Field) -> &(S::Field, FormField) {
        // Every schema field is present from construction.
        match self.fields.iter().find(|(k, _)| *k == field) {
            Some(slot) => slot,
            None => unreachable!("field {:?} not in schema", field),
        }
    }

    fn slot_mut(&mut self, field: S::Field) -> &mut FormField {
        match self.fields.iter_mut().find(|(k, _)| *k == field) {
            Some((_, slot)) => slot,
            None => unreachable!("field {:?} not in schema", field),
        }
    }
}
