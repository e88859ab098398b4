//! Location persistence gate.
//!
//! The selection lives in four cookies. Presence of the two slug cookies is
//! the sole gating signal: display-name cookies may be stale or absent and
//! the gate still treats the selection as made (kept product behavior).

use axum_extra::extract::cookie::{Cookie, CookieJar};
use thiserror::Error;
use time::Duration;

pub const PROVINCE_KEY: &str = "selectedProvince";
pub const MUNICIPALITY_KEY: &str = "selectedMunicipality";
pub const PROVINCE_NAME_KEY: &str = "selectedProvinceName";
pub const MUNICIPALITY_NAME_KEY: &str = "selectedMunicipalityName";

const SELECTION_MAX_AGE: Duration = Duration::days(365);

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("both a province and a municipality are required")]
    Incomplete,
}

/// The persisted selection. Names are optional: the gate only requires the
/// slug pair to consider the selection made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredLocation {
    pub province: String,
    pub municipality: String,
    pub province_name: Option<String>,
    pub municipality_name: Option<String>,
}

impl StoredLocation {
    /// Human-readable "Municipio, Provincia", falling back to slugs when a
    /// display-name cookie is missing.
    pub fn display(&self) -> String {
        let municipality = self
            .municipality_name
            .as_deref()
            .unwrap_or(&self.municipality);
        let province = self.province_name.as_deref().unwrap_or(&self.province);
        format!("{}, {}", municipality, province)
    }
}

fn cookie_value(jar: &CookieJar, key: &str) -> Option<String> {
    // The jar percent-decodes incoming cookies; values arrive verbatim.
    jar.get(key).map(|c| c.value().to_string())
}

/// Read the stored selection. Returns `Some` iff both slug cookies are set.
pub fn stored_location(jar: &CookieJar) -> Option<StoredLocation> {
    let province = cookie_value(jar, PROVINCE_KEY)?;
    let municipality = cookie_value(jar, MUNICIPALITY_KEY)?;
    if province.is_empty() || municipality.is_empty() {
        return None;
    }
    Some(StoredLocation {
        province,
        municipality,
        province_name: cookie_value(jar, PROVINCE_NAME_KEY),
        municipality_name: cookie_value(jar, MUNICIPALITY_NAME_KEY),
    })
}

/// Whether the selector container should be presented on page load.
pub fn needs_selection(jar: &CookieJar) -> bool {
    stored_location(jar).is_none()
}

fn persistent_cookie(key: &'static str, value: String) -> Cookie<'static> {
    // Percent-encoding on the wire is the jar's job; storing the raw value
    // keeps the persisted names exact after one standard cookie decode.
    let mut cookie = Cookie::new(key, value);
    cookie.set_path("/");
    cookie.set_max_age(SELECTION_MAX_AGE);
    cookie
}

/// Commit a completed selection. Only the non-empty guard from the selector
/// contract is re-checked here; all four keys are written together, so a
/// repeat call with identical arguments leaves storage unchanged.
pub fn confirm_location(
    jar: CookieJar,
    province: &str,
    municipality: &str,
    province_name: &str,
    municipality_label: &str,
) -> Result<CookieJar, SelectionError> {
    if province.is_empty() || municipality.is_empty() {
        return Err(SelectionError::Incomplete);
    }
    Ok(jar
        .add(persistent_cookie(PROVINCE_KEY, province.to_string()))
        .add(persistent_cookie(MUNICIPALITY_KEY, municipality.to_string()))
        .add(persistent_cookie(PROVINCE_NAME_KEY, province_name.to_string()))
        .add(persistent_cookie(
            MUNICIPALITY_NAME_KEY,
            municipality_label.to_string(),
        )))
}
