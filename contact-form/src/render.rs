//! HTML rendering for the contact form component.
//!
//! [`render`] produces the complete component markup: a header, the four
//! form rows, the submit button, and, once a submission has been
//! captured, the results block. All user-provided values are escaped.

use contact_form_forms::{escape_html, Field, SubmittedResult};

use crate::form::ContactForm;

/// Renders the component as an HTML string.
///
/// The results block is present exactly when a submission has been
/// captured, and within it the message element is present exactly when
/// the captured message was non-blank.
pub fn render(form: &ContactForm) -> String {
    let mut html = String::new();
    html.push_str(r#"<section class="contact-form">"#);
    html.push_str("<h1>Contact Form</h1>");
    html.push_str("<form>");
    for bound in form.bound_fields() {
        html.push_str(&bound.as_row());
    }
    html.push_str(r#"<button type="submit">Submit</button>"#);
    html.push_str("</form>");
    if let Some(result) = form.submitted() {
        html.push_str(&render_result(result));
    }
    html.push_str("</section>");
    html
}

fn render_result(result: &SubmittedResult) -> String {
    let mut html = String::new();
    html.push_str(r#"<aside class="results">"#);
    html.push_str("<h2>Form Submitted!</h2>");
    for field in Field::all() {
        if let Some(value) = result.get(field) {
            html.push_str(&format!(
                r#"<p data-testid="{}">{}</p>"#,
                field.display_test_id(),
                escape_html(value)
            ));
        }
    }
    html.push_str("</aside>");
    html
}
