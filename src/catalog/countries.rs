//! Country and visa centre tables.

use serde::Serialize;

/// Ids of the Schengen member states.
pub const SCHENGEN_COUNTRIES: [&str; 29] = [
    "at", "be", "bg", "ch", "cz", "de", "dk", "ee", "es", "fi", "fr", "gr", "hr", "hu", "is",
    "it", "li", "lt", "lu", "lv", "mt", "nl", "no", "pl", "pt", "ro", "se", "si", "sk",
];

// == Country Config ==
/// Display and booking metadata for a supported country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    /// Company or office running the appointment system
    pub provider: &'static str,
    pub booking_url: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'static str>,
}

pub(crate) const COUNTRY_CONFIGS: &[CountryConfig] = &[
    CountryConfig {
        id: "fr",
        name: "France",
        flag: "🇫🇷",
        provider: "TLScontact",
        booking_url: "https://visas-fr.tlscontact.com/visa/tr",
        notes: Some("Biometric data collected at the TLScontact centre"),
    },
    CountryConfig {
        id: "de",
        name: "Germany",
        flag: "🇩🇪",
        provider: "iDATA",
        booking_url: "https://www.idata.com.tr/de/tr",
        notes: None,
    },
    CountryConfig {
        id: "nl",
        name: "Netherlands",
        flag: "🇳🇱",
        provider: "VFS Global",
        booking_url: "https://visa.vfsglobal.com/tur/en/nld",
        notes: None,
    },
    CountryConfig {
        id: "es",
        name: "Spain",
        flag: "🇪🇸",
        provider: "BLS International",
        booking_url: "https://turkey.blsspainvisa.com",
        notes: None,
    },
    CountryConfig {
        id: "it",
        name: "Italy",
        flag: "🇮🇹",
        provider: "iDATA",
        booking_url: "https://www.idata.com.tr/it/tr",
        notes: Some("Documents must be in Italian or English"),
    },
    CountryConfig {
        id: "at",
        name: "Austria",
        flag: "🇦🇹",
        provider: "VFS Global",
        booking_url: "https://visa.vfsglobal.com/tur/en/aut",
        notes: None,
    },
    CountryConfig {
        id: "be",
        name: "Belgium",
        flag: "🇧🇪",
        provider: "VFS Global",
        booking_url: "https://visa.vfsglobal.com/tur/en/bel",
        notes: None,
    },
    CountryConfig {
        id: "ch",
        name: "Switzerland",
        flag: "🇨🇭",
        provider: "VFS Global",
        booking_url: "https://visa.vfsglobal.com/tur/en/che",
        notes: None,
    },
    CountryConfig {
        id: "gr",
        name: "Greece",
        flag: "🇬🇷",
        provider: "Kosmos Visa",
        booking_url: "https://www.kosmosvisa.com.tr",
        notes: None,
    },
    CountryConfig {
        id: "pl",
        name: "Poland",
        flag: "🇵🇱",
        provider: "VFS Global",
        booking_url: "https://visa.vfsglobal.com/tur/en/pol",
        notes: None,
    },
];

// == Visa Centre ==
/// Kind of office that takes appointments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CentreKind {
    VfsGlobal,
    BlsInternational,
    Consulate,
}

/// Appointment page probed for a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisaCentre {
    pub country: &'static str,
    pub url: &'static str,
    pub kind: CentreKind,
    pub cities: &'static [&'static str],
    /// City -> phone number
    pub phones: &'static [(&'static str, &'static str)],
}

impl VisaCentre {
    pub fn serves(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c.eq_ignore_ascii_case(city))
    }

    pub fn phone(&self, city: &str) -> Option<&'static str> {
        self.phones
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(city))
            .map(|(_, phone)| *phone)
    }
}

pub(crate) const VISA_CENTRES: &[VisaCentre] = &[
    VisaCentre {
        country: "fr",
        url: "https://visas-fr.tlscontact.com/visa/tr",
        kind: CentreKind::Consulate,
        cities: &["ankara", "istanbul", "izmir"],
        phones: &[("ankara", "+90 312 455 45 45"), ("istanbul", "+90 212 334 87 30")],
    },
    VisaCentre {
        country: "de",
        url: "https://www.idata.com.tr/de/tr",
        kind: CentreKind::Consulate,
        cities: &["ankara", "istanbul", "izmir"],
        phones: &[("ankara", "+90 312 455 51 00"), ("istanbul", "+90 212 334 61 00")],
    },
    VisaCentre {
        country: "nl",
        url: "https://visa.vfsglobal.com/tur/en/nld",
        kind: CentreKind::VfsGlobal,
        cities: &["ankara", "istanbul"],
        phones: &[("ankara", "+90 312 409 18 00"), ("istanbul", "+90 212 393 21 21")],
    },
    VisaCentre {
        country: "es",
        url: "https://turkey.blsspainvisa.com",
        kind: CentreKind::BlsInternational,
        cities: &["ankara", "istanbul"],
        phones: &[("ankara", "+90 312 438 03 92")],
    },
    VisaCentre {
        country: "it",
        url: "https://www.idata.com.tr/it/tr",
        kind: CentreKind::Consulate,
        cities: &["ankara", "istanbul", "izmir"],
        phones: &[("ankara", "+90 312 457 42 00"), ("istanbul", "+90 212 243 10 24")],
    },
    VisaCentre {
        country: "at",
        url: "https://visa.vfsglobal.com/tur/en/aut",
        kind: CentreKind::VfsGlobal,
        cities: &["ankara", "istanbul"],
        phones: &[("istanbul", "+90 212 363 84 10")],
    },
    VisaCentre {
        country: "be",
        url: "https://visa.vfsglobal.com/tur/en/bel",
        kind: CentreKind::VfsGlobal,
        cities: &["ankara", "istanbul"],
        phones: &[("ankara", "+90 312 405 61 66")],
    },
];
