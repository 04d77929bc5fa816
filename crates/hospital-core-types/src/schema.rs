//! Canonical schema constants for structured logging and events
//!
//! Every `log_op_*` event carries the three fields below; the capture layer
//! in `hospital-core` reads them back by these names.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_are_distinct() {
        assert_ne!(FIELD_COMPONENT, FIELD_OP);
        assert_ne!(FIELD_OP, FIELD_EVENT);
        assert_ne!(FIELD_COMPONENT, FIELD_EVENT);
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }
}
