//! # contact-form Demo
//!
//! A walkthrough of the contact-form component pipeline:
//!
//! - **Fields**: the typed field set with labels and widgets
//! - **Validation**: the rule table driving per-field checks
//! - **Interaction**: change and submit with live error state
//! - **Events**: replaying a serialized interaction script
//! - **Rendering**: the HTML surface with the captured result block
//!
//! ## Running
//!
//! ```bash
//! cargo run --package contact-example
//! ```

use contact_form::{render, ContactForm, FormEvent};
use contact_form_core::logging::init_tracing;
use contact_form_forms::validation::rules;
use contact_form_forms::{contact_fields, validate_field, Field};

fn main() {
    init_tracing("info", true);

    demonstrate_fields();
    demonstrate_validation();
    demonstrate_interaction();
    demonstrate_events();
    demonstrate_rendering();

    tracing::info!("Contact form demo complete!");
}

/// Shows the field definitions backing the form.
fn demonstrate_fields() {
    tracing::info!("--- Field Definitions ---");

    for def in contact_fields() {
        tracing::info!(
            "  {} -> label={:?}, widget={}, required={}",
            def.field,
            def.display_label(),
            def.widget,
            def.required,
        );
    }
}

/// Walks the validation rule table and checks a few sample values.
fn demonstrate_validation() {
    tracing::info!("\n--- Validation Rules ---");

    for rule in rules() {
        tracing::info!("  {} [{}] -> {:?}", rule.field, rule.code, rule.message);
    }

    for (field, value) in [
        (Field::FirstName, "nick"),
        (Field::FirstName, "nicholas"),
        (Field::Email, "not-an-email"),
        (Field::Email, "nick@nick.com"),
    ] {
        match validate_field(field, value) {
            Some(error) => tracing::info!("  {field}={value:?} rejected: {error}"),
            None => tracing::info!("  {field}={value:?} accepted"),
        }
    }
}

/// Drives a form through a failed and then a successful submission.
fn demonstrate_interaction() {
    tracing::info!("\n--- Form Interaction ---");

    let mut form = ContactForm::new();
    form.change(Field::FirstName, "nick");
    form.change(Field::LastName, "samples");

    if !form.submit() {
        tracing::info!("First attempt rejected with {} error(s):", form.errors().len());
        for (field, error) in form.errors().iter() {
            tracing::info!("  {field}: {error}");
        }
    }

    form.change(Field::FirstName, "nicholas");
    form.change(Field::Email, "nick@nick.com");
    form.change(Field::Message, "hello from the message");

    if form.submit() {
        let result = form.submitted().unwrap();
        tracing::info!("Second attempt accepted: {} <{}>", result.first_name, result.email);
    }
    tracing::info!("Display state: {}", form.display_state());
}

/// Replays a serialized interaction script onto a fresh form.
fn demonstrate_events() {
    tracing::info!("\n--- Event Replay ---");

    let mut form = ContactForm::new();
    for line in sample_script() {
        let event = FormEvent::from_json(line).unwrap();
        tracing::info!("  applying {line}");
        event.apply(&mut form);
    }

    match form.as_json() {
        Ok(state) => tracing::info!("Final state: {state}"),
        Err(e) => tracing::warn!("Serialization failed: {e}"),
    }
}

/// A recorded interaction that ends in a successful submission.
const fn sample_script() -> [&'static str; 4] {
    [
        r#"{"type":"change","field":"firstName","value":"margaret"}"#,
        r#"{"type":"change","field":"lastName","value":"hamilton"}"#,
        r#"{"type":"change","field":"email","value":"margaret@nasa.gov"}"#,
        r#"{"type":"submit"}"#,
    ]
}

/// Renders the component and shows a snippet of the markup.
fn demonstrate_rendering() {
    tracing::info!("\n--- Rendering ---");

    let mut form = ContactForm::new();
    form.change(Field::FirstName, "nicholas");
    form.change(Field::LastName, "samples");
    form.change(Field::Email, "nick@nick.com");
    form.submit();

    let html = render(&form);
    tracing::info!("Rendered component ({} bytes)", html.len());
    let snippet: String = html.chars().take(200).collect();
    tracing::info!("  Preview: {snippet}...");
}
