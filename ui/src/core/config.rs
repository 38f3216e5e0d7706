//! Build-time configuration. Both values are baked in at compile time, the
//! only configuration surface this client has.

const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Origin of the analysis service, without a trailing slash.
pub fn api_base() -> &'static str {
    match option_env!("SHEETLENS_API_BASE") {
        Some(base) if !base.trim().is_empty() => base,
        _ => DEFAULT_API_BASE,
    }
}

/// Checkout link for the premium call-to-action. `None` until a payment
/// provider is wired up, which switches the CTA to a disabled placeholder.
pub fn checkout_url() -> Option<&'static str> {
    let url = option_env!("SHEETLENS_CHECKOUT_URL")?.trim();
    if url.is_empty() {
        None
    } else {
        Some(url)
    }
}
