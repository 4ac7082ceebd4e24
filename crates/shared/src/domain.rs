use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::{element_ids, error::FilterParseError};

macro_rules! specialty_catalog {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// A medical practice area offered as a filter facet.
        ///
        /// Variants are declared in catalog order, so `Ord` follows the catalog.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum Specialty {
            $(
                #[serde(rename = $name)]
                $variant,
            )+
        }

        impl Specialty {
            /// The fixed, ordered specialty catalog.
            pub const CATALOG: &'static [Specialty] = &[$(Specialty::$variant),+];

            /// Exact catalog name. Element identifiers are derived from it.
            pub fn name(self) -> &'static str {
                match self {
                    $(Specialty::$variant => $name,)+
                }
            }
        }
    };
}

specialty_catalog! {
    GeneralPhysician => "General Physician",
    Dentist => "Dentist",
    Dermatologist => "Dermatologist",
    Paediatrician => "Paediatrician",
    Gynaecologist => "Gynaecologist",
    Ent => "ENT",
    Diabetologist => "Diabetologist",
    Cardiologist => "Cardiologist",
    Physiotherapist => "Physiotherapist",
    Endocrinologist => "Endocrinologist",
    Orthopaedic => "Orthopaedic",
    Ophthalmologist => "Ophthalmologist",
    Gastroenterologist => "Gastroenterologist",
    Pulmonologist => "Pulmonologist",
    Psychiatrist => "Psychiatrist",
    Urologist => "Urologist",
    DietitianNutritionist => "Dietitian/Nutritionist",
    Psychologist => "Psychologist",
    Sexologist => "Sexologist",
    Nephrologist => "Nephrologist",
    Neurologist => "Neurologist",
    Oncologist => "Oncologist",
    Ayurveda => "Ayurveda",
    Homeopath => "Homeopath",
}

impl Specialty {
    pub fn element_id(self) -> String {
        element_ids::specialty(self.name())
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the catalog name or its identifier form (`Dietitian-Nutritionist`).
impl FromStr for Specialty {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        Specialty::CATALOG
            .iter()
            .copied()
            .find(|specialty| {
                specialty.name() == raw || element_ids::id_suffix(specialty.name()) == raw
            })
            .ok_or_else(|| FilterParseError::UnknownSpecialty(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationMode {
    Video,
    Clinic,
}

impl ConsultationMode {
    pub const ALL: [ConsultationMode; 2] = [ConsultationMode::Video, ConsultationMode::Clinic];

    pub fn as_str(self) -> &'static str {
        match self {
            ConsultationMode::Video => "video",
            ConsultationMode::Clinic => "clinic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConsultationMode::Video => "Video Consult",
            ConsultationMode::Clinic => "In Clinic",
        }
    }

    pub fn element_id(self) -> &'static str {
        match self {
            ConsultationMode::Video => element_ids::VIDEO_CONSULT,
            ConsultationMode::Clinic => element_ids::IN_CLINIC,
        }
    }
}

impl fmt::Display for ConsultationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsultationMode {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.eq_ignore_ascii_case("video") {
            Ok(ConsultationMode::Video)
        } else if raw.eq_ignore_ascii_case("clinic") {
            Ok(ConsultationMode::Clinic)
        } else {
            Err(FilterParseError::UnknownConsultationMode(raw.to_string()))
        }
    }
}

/// Result ordering: `Fees` sorts by fee ascending, `Experience` by experience descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Fees,
    Experience,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [SortKey::Fees, SortKey::Experience];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Fees => "fees",
            SortKey::Experience => "experience",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Fees => "Price: Low-High",
            SortKey::Experience => "Experience: Most Experience first",
        }
    }

    pub fn element_id(self) -> &'static str {
        match self {
            SortKey::Fees => element_ids::SORT_FEES,
            SortKey::Experience => element_ids::SORT_EXPERIENCE,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.eq_ignore_ascii_case("fees") {
            Ok(SortKey::Fees)
        } else if raw.eq_ignore_ascii_case("experience") {
            Ok(SortKey::Experience)
        } else {
            Err(FilterParseError::UnknownSortKey(raw.to_string()))
        }
    }
}

/// The combined selection reported to the host on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub consultation_mode: Option<ConsultationMode>,
    #[serde(default, deserialize_with = "deserialize_specialties")]
    specialties: Vec<Specialty>,
    #[serde(rename = "sort_by")]
    pub sort_key: Option<SortKey>,
}

impl FilterSelection {
    /// Builds a selection, dropping repeated specialties while keeping first-seen order.
    pub fn new(
        consultation_mode: Option<ConsultationMode>,
        specialties: impl IntoIterator<Item = Specialty>,
        sort_key: Option<SortKey>,
    ) -> Self {
        Self {
            consultation_mode,
            specialties: dedup_in_order(specialties),
            sort_key,
        }
    }

    /// Selected specialties in the order they were added.
    pub fn specialties(&self) -> &[Specialty] {
        &self.specialties
    }

    pub fn contains(&self, specialty: Specialty) -> bool {
        self.specialties.contains(&specialty)
    }

    /// Removes `specialty` if present, appends it otherwise. Returns whether it is now selected.
    pub fn toggle_specialty(&mut self, specialty: Specialty) -> bool {
        if let Some(index) = self.specialties.iter().position(|s| *s == specialty) {
            self.specialties.remove(index);
            false
        } else {
            self.specialties.push(specialty);
            true
        }
    }

    pub fn clear(&mut self) {
        self.consultation_mode = None;
        self.specialties.clear();
        self.sort_key = None;
    }

    pub fn is_empty(&self) -> bool {
        self.consultation_mode.is_none() && self.specialties.is_empty() && self.sort_key.is_none()
    }
}

fn dedup_in_order(specialties: impl IntoIterator<Item = Specialty>) -> Vec<Specialty> {
    let mut out: Vec<Specialty> = Vec::new();
    for specialty in specialties {
        if !out.contains(&specialty) {
            out.push(specialty);
        }
    }
    out
}

fn deserialize_specialties<'de, D>(deserializer: D) -> Result<Vec<Specialty>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Specialty>::deserialize(deserializer)?;
    Ok(dedup_in_order(raw))
}

/// The three collapsible sections of the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    #[serde(rename = "sort")]
    Sort,
    #[serde(rename = "speciality")]
    Specialities,
    #[serde(rename = "moc")]
    ConsultationMode,
}

impl Section {
    /// Render order of the panel.
    pub const ALL: [Section; 3] = [
        Section::Sort,
        Section::Specialities,
        Section::ConsultationMode,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Sort => "sort",
            Section::Specialities => "speciality",
            Section::ConsultationMode => "moc",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Sort => "Sort by",
            Section::Specialities => "Specialities",
            Section::ConsultationMode => "Mode of consultation",
        }
    }

    pub fn header_element_id(self) -> &'static str {
        match self {
            Section::Sort => element_ids::SORT_HEADER,
            Section::Specialities => element_ids::SPECIALITY_HEADER,
            Section::ConsultationMode => element_ids::MOC_HEADER,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.as_str().eq_ignore_ascii_case(raw))
            .ok_or_else(|| FilterParseError::UnknownSection(raw.to_string()))
    }
}

/// Local expand/collapse state. Never part of a [`FilterSelection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionVisibility {
    pub sort_expanded: bool,
    pub specialties_expanded: bool,
    pub consultation_expanded: bool,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self {
            sort_expanded: true,
            specialties_expanded: true,
            consultation_expanded: true,
        }
    }
}

impl SectionVisibility {
    pub fn is_expanded(&self, section: Section) -> bool {
        match section {
            Section::Sort => self.sort_expanded,
            Section::Specialities => self.specialties_expanded,
            Section::ConsultationMode => self.consultation_expanded,
        }
    }

    /// Flips one flag and returns its new value.
    pub fn toggle(&mut self, section: Section) -> bool {
        let flag = match section {
            Section::Sort => &mut self.sort_expanded,
            Section::Specialities => &mut self.specialties_expanded,
            Section::ConsultationMode => &mut self.consultation_expanded,
        };
        *flag = !*flag;
        *flag
    }
}
