//! Catalog Module
//!
//! Static reference data: supported countries, visa centres, consulate
//! contacts, visa requirements and document checklists.

mod contacts;
mod countries;
mod requirements;

use std::fmt;

use serde::Serialize;

pub use contacts::ContactInfo;
pub use countries::{CentreKind, CountryConfig, VisaCentre, SCHENGEN_COUNTRIES};
pub use requirements::{DocumentChecklist, DocumentItem, VisaRequirements};

use contacts::CONTACTS;
use countries::{COUNTRY_CONFIGS, VISA_CENTRES};
use requirements::{DOCUMENT_CHECKLISTS, VISA_REQUIREMENTS};

/// Visa type assumed when a caller does not name one.
pub const DEFAULT_VISA_TYPE: &str = "tourist";

// == Country Lookup ==
/// Resolves a country id to its display metadata.
pub trait CountryLookup: Send + Sync + fmt::Debug {
    fn country(&self, id: &str) -> Option<&CountryConfig>;
}

// == Country Info ==
/// Everything the catalog knows about one country.
#[derive(Debug, Clone, Serialize)]
pub struct CountryInfo {
    pub config: Option<CountryConfig>,
    pub contacts: Vec<ContactInfo>,
    pub requirements: Option<VisaRequirements>,
    pub checklist: Option<DocumentChecklist>,
    pub has_full_info: bool,
}

// == Catalog ==
/// Read-only view over the built-in tables. Ids match case-insensitively.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    pub fn is_schengen(&self, country: &str) -> bool {
        SCHENGEN_COUNTRIES
            .iter()
            .any(|id| id.eq_ignore_ascii_case(country))
    }

    pub fn countries(&self) -> &'static [CountryConfig] {
        COUNTRY_CONFIGS
    }

    pub fn country_by_name(&self, name: &str) -> Option<&'static CountryConfig> {
        COUNTRY_CONFIGS
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Countries whose provider name contains `provider`, ignoring case.
    pub fn countries_by_provider(&self, provider: &str) -> Vec<&'static CountryConfig> {
        let needle = provider.to_lowercase();
        COUNTRY_CONFIGS
            .iter()
            .filter(|c| c.provider.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn visa_centre(&self, country: &str) -> Option<&'static VisaCentre> {
        VISA_CENTRES
            .iter()
            .find(|c| c.country.eq_ignore_ascii_case(country))
    }

    pub fn visa_centres(&self) -> &'static [VisaCentre] {
        VISA_CENTRES
    }

    pub fn visa_centres_in_city(&self, city: &str) -> Vec<&'static VisaCentre> {
        VISA_CENTRES.iter().filter(|c| c.serves(city)).collect()
    }

    /// Contacts for a country, narrowed to one city when given.
    pub fn contacts(&self, country: &str, city: Option<&str>) -> Vec<&'static ContactInfo> {
        CONTACTS
            .iter()
            .filter(|c| c.country.eq_ignore_ascii_case(country))
            .filter(|c| city.map_or(true, |city| c.city.eq_ignore_ascii_case(city)))
            .collect()
    }

    pub fn visa_requirements(
        &self,
        country: &str,
        visa_type: &str,
    ) -> Option<&'static VisaRequirements> {
        VISA_REQUIREMENTS
            .iter()
            .find(|r| {
                r.country.eq_ignore_ascii_case(country)
                    && r.visa_type.eq_ignore_ascii_case(visa_type)
            })
    }

    /// Every visa type with requirements on file for a country.
    pub fn visa_types(&self, country: &str) -> Vec<&'static VisaRequirements> {
        VISA_REQUIREMENTS
            .iter()
            .filter(|r| r.country.eq_ignore_ascii_case(country))
            .collect()
    }

    pub fn document_checklist(
        &self,
        country: &str,
        visa_type: &str,
    ) -> Option<&'static DocumentChecklist> {
        DOCUMENT_CHECKLISTS
            .iter()
            .find(|d| {
                d.country.eq_ignore_ascii_case(country)
                    && d.visa_type.eq_ignore_ascii_case(visa_type)
            })
    }

    /// Config, contacts, tourist requirements and checklist in one record.
    pub fn country_info(&self, country: &str) -> CountryInfo {
        let config = self.country(country).cloned();
        let contacts: Vec<ContactInfo> =
            self.contacts(country, None).into_iter().cloned().collect();
        let requirements = self.visa_requirements(country, DEFAULT_VISA_TYPE).cloned();
        let checklist = self.document_checklist(country, DEFAULT_VISA_TYPE).cloned();

        let has_full_info = config.is_some()
            && !contacts.is_empty()
            && requirements.is_some()
            && checklist.is_some();

        CountryInfo {
            config,
            contacts,
            requirements,
            checklist,
            has_full_info,
        }
    }
}

impl CountryLookup for Catalog {
    fn country(&self, id: &str) -> Option<&CountryConfig> {
        COUNTRY_CONFIGS
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_schengen() {
        let catalog = Catalog;
        assert!(catalog.is_schengen("fr"));
        assert!(catalog.is_schengen("DE"));
        assert!(!catalog.is_schengen("uk"));
        assert!(!catalog.is_schengen("tr"));
    }

    #[test]
    fn test_country_lookup() {
        let catalog = Catalog;
        assert_eq!(catalog.country("FR").map(|c| c.name), Some("France"));
        assert_eq!(catalog.country_by_name("germany").map(|c| c.id), Some("de"));
        assert!(catalog.country("xx").is_none());
    }

    #[test]
    fn test_countries_by_provider() {
        let vfs = Catalog.countries_by_provider("vfs");
        assert!(vfs.len() >= 3);
        assert!(vfs.iter().all(|c| c.provider == "VFS Global"));
    }

    #[test]
    fn test_visa_centres_in_city() {
        let izmir = Catalog.visa_centres_in_city("izmir");
        let ids: Vec<&str> = izmir.iter().map(|c| c.country).collect();
        assert_eq!(ids, vec!["fr", "de", "it"]);
    }

    #[test]
    fn test_contacts_filter_by_city() {
        let catalog = Catalog;
        assert_eq!(catalog.contacts("fr", None).len(), 2);

        let ankara = catalog.contacts("de", Some("Ankara"));
        assert_eq!(ankara.len(), 1);
        assert_eq!(ankara[0].email, Some("info@ankara.diplo.de"));

        assert!(catalog.contacts("es", Some("istanbul")).is_empty());
    }

    #[test]
    fn test_requirements_and_types() {
        let catalog = Catalog;
        let fr = catalog.visa_requirements("fr", "tourist").unwrap();
        assert_eq!(fr.processing_time, "15 working days");
        assert!(catalog.visa_requirements("fr", "student").is_none());
        assert_eq!(catalog.visa_types("it").len(), 1);
    }

    #[test]
    fn test_visa_type_lookup_ignores_case() {
        let catalog = Catalog;
        assert!(catalog.visa_requirements("FR", "Tourist").is_some());
        assert!(catalog.document_checklist("de", "TOURIST").is_some());
        assert!(catalog.document_checklist("de", "business").is_none());
    }

    #[test]
    fn test_country_info() {
        let catalog = Catalog;

        let de = catalog.country_info("de");
        assert!(de.has_full_info);
        assert_eq!(de.contacts.len(), 2);

        let es = catalog.country_info("es");
        assert!(es.requirements.is_some());
        assert!(es.checklist.is_none());
        assert!(!es.has_full_info);
    }
}
