use crate::components::ButtonVariant;
use crate::config::{
    BUTTON_CLASS, BUTTON_DISABLED_CLASS, DEFAULT_LOG_LEVEL, LOG_QUERY_KEY,
    STATUS_CARD_CLASS, STATUS_CARD_HIGHLIGHT_CLASS,
};
use log::Level;
use ticket_pool::FieldValue;

/// Pick the log level from the page's `?log=<level>` query parameter.
pub fn log_level_from_query(search: &str) -> Level {
    let value = web_sys::UrlSearchParams::new_with_str(search)
        .ok()
        .and_then(|params| params.get(LOG_QUERY_KEY));
    parse_log_level(value.as_deref())
}

/// Unknown or missing values fall back to [`DEFAULT_LOG_LEVEL`].
pub fn parse_log_level(value: Option<&str>) -> Level {
    value
        .and_then(|value| value.parse::<Level>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Text placed in a number input for the stored field value.
/// Unparsed input shows as an empty field, like a browser does for invalid numbers.
pub fn field_display(value: &FieldValue) -> String {
    match value {
        Ok(number) => number.to_string(),
        Err(_) => String::new(),
    }
}

pub fn status_card_class(highlight: bool) -> &'static str {
    if highlight {
        STATUS_CARD_HIGHLIGHT_CLASS
    } else {
        STATUS_CARD_CLASS
    }
}

pub fn button_class(variant: ButtonVariant, disabled: bool) -> String {
    let variant_class = match variant {
        ButtonVariant::Start => "btn-start",
        ButtonVariant::Stop => "btn-stop",
        ButtonVariant::Reset => "btn-reset",
    };
    if disabled {
        format!("{} {} {}", BUTTON_CLASS, variant_class, BUTTON_DISABLED_CLASS)
    } else {
        format!("{} {}", BUTTON_CLASS, variant_class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticket_pool::FieldParseError;

    #[test]
    fn log_level_names_are_case_insensitive() {
        assert_eq!(parse_log_level(Some("debug")), Level::Debug);
        assert_eq!(parse_log_level(Some("TRACE")), Level::Trace);
        assert_eq!(parse_log_level(Some("Warn")), Level::Warn);
    }

    #[test]
    fn log_level_falls_back_to_default() {
        assert_eq!(parse_log_level(None), DEFAULT_LOG_LEVEL);
        assert_eq!(parse_log_level(Some("")), DEFAULT_LOG_LEVEL);
        assert_eq!(parse_log_level(Some("loud")), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn invalid_field_renders_empty() {
        assert_eq!(field_display(&Ok(60)), "60");
        assert_eq!(field_display(&Ok(-2)), "-2");
        assert_eq!(field_display(&Err(FieldParseError::Empty)), "");
    }

    #[test]
    fn disabled_buttons_get_disabled_class() {
        assert_eq!(button_class(ButtonVariant::Start, false), "btn btn-start");
        assert_eq!(
            button_class(ButtonVariant::Stop, true),
            "btn btn-stop disabled"
        );
        assert_eq!(status_card_class(true), "status-card highlight");
        assert_eq!(status_card_class(false), "status-card");
    }
}
