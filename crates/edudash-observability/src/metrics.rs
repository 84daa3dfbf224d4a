//! Session and navigation counters.
//!
//! Emitted through the `metrics` facade; without an installed recorder they
//! are no-ops.

use ::metrics::counter;

pub fn track_login(role: &'static str) {
    counter!("edudash_session_logins_total", "role" => role).increment(1);
}

pub fn track_logout() {
    counter!("edudash_session_logouts_total").increment(1);
}

/// `outcome` is one of `restored`, `absent`, `fault`.
pub fn track_session_restored(outcome: &'static str) {
    counter!("edudash_session_restored_total", "outcome" => outcome).increment(1);
}

pub fn track_navigation(view: &'static str, in_role: bool) {
    let scope = if in_role { "in_role" } else { "out_of_role" };
    counter!("edudash_navigations_total", "view" => view, "scope" => scope).increment(1);
}

pub fn track_public_form_opened() {
    counter!("edudash_public_form_opened_total").increment(1);
}
