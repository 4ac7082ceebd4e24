//! Public element identifiers used by automated UI checks. These strings are
//! load-bearing and must not change.

pub const SORT_HEADER: &str = "filter-header-sort";
pub const SPECIALITY_HEADER: &str = "filter-header-speciality";
pub const MOC_HEADER: &str = "filter-header-moc";

pub const SORT_FEES: &str = "sort-fees";
pub const SORT_EXPERIENCE: &str = "sort-experience";
pub const VIDEO_CONSULT: &str = "filter-video-consult";
pub const IN_CLINIC: &str = "filter-in-clinic";

const SPECIALTY_PREFIX: &str = "filter-specialty-";

/// Every `/` in the name becomes `-`.
pub fn id_suffix(name: &str) -> String {
    name.replace('/', "-")
}

pub fn specialty(name: &str) -> String {
    format!("{SPECIALTY_PREFIX}{}", id_suffix(name))
}
