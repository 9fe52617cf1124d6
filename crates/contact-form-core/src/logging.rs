//! Logging integration for the contact-form component.
//!
//! Provides helpers for configuring [`tracing`]-based logging in host
//! applications and for creating per-form spans.

/// Sets up the global tracing subscriber.
///
/// `directives` is an `EnvFilter` directive string (e.g. "debug",
/// "contact_form=trace"). When `pretty` is `true` a human-readable format
/// with file and line information is used; otherwise a structured JSON
/// format is used.
///
/// Installing a subscriber when one is already set is a no-op, so this is
/// safe to call from tests.
///
/// # Examples
///
/// ```
/// contact_form_core::logging::init_tracing("contact_form=debug", true);
/// ```
pub fn init_tracing(directives: &str, pretty: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"));

    if pretty {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for one form instance.
///
/// Attach this span around the event-handling code so that all log entries
/// emitted while processing a form's events carry the form name.
///
/// # Examples
///
/// ```
/// use contact_form_core::logging::form_span;
///
/// let span = form_span("contact");
/// let _guard = span.enter();
/// tracing::info!("handling form event");
/// ```
pub fn form_span(form: &str) -> tracing::Span {
    tracing::info_span!("form", name = form)
}
