//! Cascading province → municipality selector.
//!
//! Pure state transitions driven by discrete selection events; rendering the
//! control states is the template's job. No I/O happens here.

use crate::catalog;

/// Explicit event record for a selection change, in place of duck-typed
/// DOM payloads: the control that fired and the value it now holds.
#[derive(Debug, Clone)]
pub struct SelectEvent {
    pub source_control_id: &'static str,
    pub value: String,
}

impl SelectEvent {
    pub fn province(value: impl Into<String>) -> Self {
        Self { source_control_id: "provinceSelect", value: value.into() }
    }

    pub fn municipality(value: impl Into<String>) -> Self {
        Self { source_control_id: "municipalitySelect", value: value.into() }
    }
}

/// One entry of the dependent municipality list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MunicipalityOption {
    pub slug: String,
    pub label: String,
}

/// Presented state of the location selector controls.
#[derive(Debug, Clone, Default)]
pub struct SelectorState {
    pub province: String,
    pub municipality: String,
    pub options: Vec<MunicipalityOption>,
    pub municipality_enabled: bool,
    pub confirm_enabled: bool,
}

impl SelectorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// React to a province selection: the municipality list is rebuilt from
    /// the catalog (in catalog order) and the downstream controls reset. An
    /// empty or unknown slug leaves the list empty and everything disabled.
    pub fn on_province_chosen(&mut self, event: &SelectEvent) {
        self.province = event.value.clone();
        self.municipality.clear();
        self.options.clear();
        self.municipality_enabled = false;
        self.confirm_enabled = false;

        if let Some(province) = catalog::lookup(&self.province) {
            self.options = province
                .municipalities
                .iter()
                .map(|name| MunicipalityOption {
                    slug: catalog::slugify(name),
                    label: (*name).to_string(),
                })
                .collect();
            self.municipality_enabled = true;
        }
    }

    /// React to a municipality selection: confirm is available iff a
    /// non-empty value is selected.
    pub fn on_municipality_chosen(&mut self, event: &SelectEvent) {
        self.municipality = event.value.clone();
        self.confirm_enabled = !self.municipality.is_empty();
    }

    /// Display label for the currently selected municipality, if any.
    pub fn selected_label(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.slug == self.municipality)
            .map(|o| o.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_province_populates_options_in_catalog_order() {
        let mut s = SelectorState::new();
        s.on_province_chosen(&SelectEvent::province("la-habana"));
        assert!(s.municipality_enabled);
        assert!(!s.confirm_enabled);
        let expected: Vec<String> = crate::catalog::lookup("la-habana")
            .unwrap()
            .municipalities
            .iter()
            .map(|m| m.to_string())
            .collect();
        let labels: Vec<String> = s.options.iter().map(|o| o.label.clone()).collect();
        assert_eq!(labels, expected);
        assert_eq!(s.options[0].slug, "playa");
    }

    #[test]
    fn unknown_province_leaves_controls_disabled() {
        let mut s = SelectorState::new();
        s.on_province_chosen(&SelectEvent::province("atlantis"));
        assert!(s.options.is_empty());
        assert!(!s.municipality_enabled);
        assert!(!s.confirm_enabled);

        s.on_province_chosen(&SelectEvent::province(""));
        assert!(s.options.is_empty());
        assert!(!s.municipality_enabled);
    }

    #[test]
    fn confirm_enabled_only_with_municipality() {
        let mut s = SelectorState::new();
        s.on_province_chosen(&SelectEvent::province("la-habana"));
        s.on_municipality_chosen(&SelectEvent::municipality("playa"));
        assert!(s.confirm_enabled);

        // Clearing the municipality retroactively disables confirm.
        s.on_municipality_chosen(&SelectEvent::municipality(""));
        assert!(!s.confirm_enabled);

        // Re-choosing a province also resets confirm.
        s.on_municipality_chosen(&SelectEvent::municipality("playa"));
        s.on_province_chosen(&SelectEvent::province("matanzas"));
        assert!(!s.confirm_enabled);
        assert!(s.municipality.is_empty());
    }

    #[test]
    fn vinales_slug_keeps_the_tilde() {
        let mut s = SelectorState::new();
        s.on_province_chosen(&SelectEvent::province("pinar-del-rio"));
        assert!(s.options.iter().any(|o| o.slug == "viñales" && o.label == "Viñales"));
    }
}
