use super::*;

#[test]
fn error_message_carries_code_and_text() {
    let msg = error_message(&ThemeError::StoreUnavailable("localStorage is null".into()));
    assert_eq!(msg, "[E_STORE_UNAVAILABLE] preference store unavailable: localStorage is null");
}

#[test]
fn not_initialized_message_names_the_problem() {
    let msg = error_message(&ThemeError::NotInitialized);
    assert!(msg.starts_with("[E_NOT_INITIALIZED]"));
    assert!(msg.contains("not initialized"));
}
