/// Renders a currency amount the way it is persisted in the flat files.
///
/// Uses the shortest representation that parses back to the same `f64`, always
/// with a fractional part (`8000.0`, `386.8343279863316`). No rounding happens
/// here; callers that want cents format for display themselves.
pub fn format_amount(value: f64) -> String {
    format!("{:?}", value)
}
