//! Simulated user interactions.
//!
//! These helpers drive a [`ContactForm`] the way a person would: typing
//! appends one character at a time, and every keystroke goes through the
//! form's change handling. Tests that use them exercise the same
//! per-keystroke validation a user triggers.

use contact_form::ContactForm;
use contact_form_forms::Field;

/// Types `text` into `field` one character at a time.
///
/// Appends to whatever the field already contains, firing a change for
/// every keystroke.
pub fn type_into(form: &mut ContactForm, field: Field, text: &str) {
    let mut value = form.value(field).to_string();
    for ch in text.chars() {
        value.push(ch);
        form.change(field, value.clone());
    }
}

/// Clears `field` in a single change.
pub fn clear(form: &mut ContactForm, field: Field) {
    form.change(field, "");
}

/// Moves focus off `field`.
pub fn blur(form: &mut ContactForm, field: Field) {
    form.blur(field);
}

/// Clicks the submit button. Returns `true` when the submission succeeded.
pub fn click_submit(form: &mut ContactForm) -> bool {
    form.submit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_into_appends_per_keystroke() {
        let mut form = ContactForm::new();
        type_into(&mut form, Field::FirstName, "ni");
        type_into(&mut form, Field::FirstName, "ck");
        assert_eq!(form.value(Field::FirstName), "nick");
    }

    #[test]
    fn test_typing_validates_every_keystroke() {
        let mut form = ContactForm::new();
        type_into(&mut form, Field::Email, "a");
        // One keystroke in, the address is already checked.
        assert_eq!(form.errors().get(Field::Email).unwrap().code, "invalid");

        type_into(&mut form, Field::Email, "@b.co");
        assert!(!form.errors().contains(Field::Email));
    }

    #[test]
    fn test_clear_resets_field() {
        let mut form = ContactForm::new();
        type_into(&mut form, Field::LastName, "samples");
        clear(&mut form, Field::LastName);
        assert_eq!(form.value(Field::LastName), "");
        assert_eq!(form.errors().get(Field::LastName).unwrap().code, "required");
    }

    #[test]
    fn test_blur_and_submit_pass_through() {
        let mut form = ContactForm::new();
        blur(&mut form, Field::Email);
        assert!(form.errors().contains(Field::Email));

        assert!(!click_submit(&mut form));

        type_into(&mut form, Field::FirstName, "nicholas");
        type_into(&mut form, Field::LastName, "samples");
        type_into(&mut form, Field::Email, "nick@nick.com");
        assert!(click_submit(&mut form));
    }
}
