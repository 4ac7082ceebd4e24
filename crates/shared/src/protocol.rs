use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    domain::{ConsultationMode, Section, SortKey, Specialty},
    error::FilterParseError,
};

/// One user input against the filter panel.
///
/// Text form is `mode:<mode>`, `specialty:<name>`, `sort:<key>`, `clear` or
/// `section:<section>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum FilterAction {
    SetConsultationMode(ConsultationMode),
    ToggleSpecialty(Specialty),
    SetSortKey(SortKey),
    ClearAll,
    ToggleSection(Section),
}

impl FilterAction {
    /// Whether applying this action reports a new selection to the host.
    pub fn notifies(&self) -> bool {
        !matches!(self, FilterAction::ToggleSection(_))
    }
}

impl fmt::Display for FilterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterAction::SetConsultationMode(mode) => write!(f, "mode:{mode}"),
            FilterAction::ToggleSpecialty(specialty) => write!(f, "specialty:{specialty}"),
            FilterAction::SetSortKey(key) => write!(f, "sort:{key}"),
            FilterAction::ClearAll => f.write_str("clear"),
            FilterAction::ToggleSection(section) => write!(f, "section:{section}"),
        }
    }
}

impl FromStr for FilterAction {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.eq_ignore_ascii_case("clear") {
            return Ok(FilterAction::ClearAll);
        }

        let Some((kind, value)) = raw.split_once(':') else {
            return Err(FilterParseError::MalformedAction(raw.to_string()));
        };

        match kind.trim().to_ascii_lowercase().as_str() {
            "mode" => value.parse().map(FilterAction::SetConsultationMode),
            "specialty" => value.parse().map(FilterAction::ToggleSpecialty),
            "sort" => value.parse().map(FilterAction::SetSortKey),
            "section" => value.parse().map(FilterAction::ToggleSection),
            _ => Err(FilterParseError::MalformedAction(raw.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_action_form() {
        assert_eq!(
            "mode:video".parse::<FilterAction>(),
            Ok(FilterAction::SetConsultationMode(ConsultationMode::Video))
        );
        assert_eq!(
            "specialty:Dietitian/Nutritionist".parse::<FilterAction>(),
            Ok(FilterAction::ToggleSpecialty(Specialty::DietitianNutritionist))
        );
        assert_eq!(
            "sort:experience".parse::<FilterAction>(),
            Ok(FilterAction::SetSortKey(SortKey::Experience))
        );
        assert_eq!("CLEAR".parse::<FilterAction>(), Ok(FilterAction::ClearAll));
        assert_eq!(
            "section:moc".parse::<FilterAction>(),
            Ok(FilterAction::ToggleSection(Section::ConsultationMode))
        );
    }

    #[test]
    fn specialty_names_with_spaces_survive_display_and_parse() {
        let action = FilterAction::ToggleSpecialty(Specialty::GeneralPhysician);
        assert_eq!(action.to_string(), "specialty:General Physician");
        assert_eq!(action.to_string().parse::<FilterAction>(), Ok(action));
    }

    #[test]
    fn rejects_unknown_kinds_and_values() {
        assert_eq!(
            "zoom:in".parse::<FilterAction>(),
            Err(FilterParseError::MalformedAction("zoom:in".into()))
        );
        assert_eq!(
            "video".parse::<FilterAction>(),
            Err(FilterParseError::MalformedAction("video".into()))
        );
        assert_eq!(
            "sort:rating".parse::<FilterAction>(),
            Err(FilterParseError::UnknownSortKey("rating".into()))
        );
    }

    #[test]
    fn only_section_toggles_are_silent() {
        assert!(FilterAction::ClearAll.notifies());
        assert!(FilterAction::SetSortKey(SortKey::Fees).notifies());
        assert!(!FilterAction::ToggleSection(Section::Sort).notifies());
    }

    #[test]
    fn serializes_with_type_and_payload_tags() {
        let value = serde_json::to_value(FilterAction::ToggleSpecialty(Specialty::Ent))
            .expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({ "type": "toggle_specialty", "payload": "ENT" })
        );
        let value = serde_json::to_value(FilterAction::ClearAll).expect("serialize");
        assert_eq!(value, serde_json::json!({ "type": "clear_all" }));
    }
}
