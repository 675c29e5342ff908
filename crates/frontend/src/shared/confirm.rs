/// Ask the operator to confirm a destructive action. Declining (or running
/// without a window) is a silent no-op for the caller.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
