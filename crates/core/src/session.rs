//! Session-scoped navigation state.

use serde::{Deserialize, Serialize};

/// Which view the studio client is showing.
///
/// Pure navigation state, not business data; wire values match the studio
/// frontend's view identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewState {
    #[default]
    Dashboard,
    Generator,
    Gallery,
    Details,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_are_screaming_snake() {
        assert_eq!(serde_json::to_string(&ViewState::Details).unwrap(), "\"DETAILS\"");
        let view: ViewState = serde_json::from_str("\"GALLERY\"").unwrap();
        assert_eq!(view, ViewState::Gallery);
    }

    #[test]
    fn sessions_start_on_the_dashboard() {
        assert_eq!(ViewState::default(), ViewState::Dashboard);
    }
}
