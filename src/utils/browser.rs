//! Coarse browser classification from the User-Agent header
//!
//! Buckets are intentionally crude: first case-sensitive substring match
//! wins, in a fixed priority order.

/// Match priority. Edge UAs also contain "Chrome", so they land in the
/// Chrome bucket; the order is part of the external stats contract.
const BROWSER_LABELS: [&str; 4] = ["Firefox", "Chrome", "Safari", "Edge"];

/// A missing User-Agent is classified as the literal string "Unknown",
/// which matches no browser name and therefore lands in "Other".
pub fn classify_browser(user_agent: Option<&str>) -> &'static str {
    let ua = user_agent.unwrap_or("Unknown");

    for label in BROWSER_LABELS {
        if ua.contains(label) {
            return label;
        }
    }

    "Other"
}
