//! Consulate and visa centre contact directory.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub country: &'static str,
    pub city: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'static str>,
    pub website: &'static str,
    pub working_hours: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<&'static str>,
}

pub(crate) const CONTACTS: &[ContactInfo] = &[
    ContactInfo {
        country: "fr",
        city: "ankara",
        address: "Paris Caddesi No: 70, Kavaklidere, Ankara",
        phone: "+90 312 455 45 45",
        email: Some("info.ankara-amba@diplomatie.gouv.fr"),
        website: "https://tr.ambafrance.org",
        working_hours: "Mon-Fri 09:00-12:00, 14:00-17:00",
        emergency_contact: Some("+90 312 455 45 00"),
    },
    ContactInfo {
        country: "fr",
        city: "istanbul",
        address: "Istiklal Caddesi No: 8, Taksim, Istanbul",
        phone: "+90 212 334 87 30",
        email: Some("info.istanbul-fslt@diplomatie.gouv.fr"),
        website: "https://istanbul.consulfrance.org",
        working_hours: "Mon-Fri 09:00-12:00, 14:00-17:00",
        emergency_contact: None,
    },
    ContactInfo {
        country: "de",
        city: "ankara",
        address: "Ataturk Bulvari No: 114, Kavaklidere, Ankara",
        phone: "+90 312 455 51 00",
        email: Some("info@ankara.diplo.de"),
        website: "https://tuerkei.diplo.de",
        working_hours: "Mon-Fri 08:30-11:30",
        emergency_contact: Some("+90 312 455 51 00"),
    },
    ContactInfo {
        country: "de",
        city: "istanbul",
        address: "Inonu Caddesi No: 10, Gumussuyu, Istanbul",
        phone: "+90 212 334 61 00",
        email: Some("info@istanbul.diplo.de"),
        website: "https://tuerkei.diplo.de",
        working_hours: "Mon-Fri 08:30-11:30",
        emergency_contact: None,
    },
    ContactInfo {
        country: "nl",
        city: "ankara",
        address: "Hollanda Caddesi No: 5, Yildiz, Ankara",
        phone: "+90 312 409 18 00",
        email: Some("ank@minbuza.nl"),
        website: "https://www.netherlandsworldwide.nl",
        working_hours: "Mon-Fri 09:00-12:00",
        emergency_contact: None,
    },
    ContactInfo {
        country: "nl",
        city: "istanbul",
        address: "Istiklal Caddesi No: 197, Beyoglu, Istanbul",
        phone: "+90 212 393 21 21",
        email: Some("ist@minbuza.nl"),
        website: "https://www.netherlandsworldwide.nl",
        working_hours: "Mon-Fri 09:00-12:00",
        emergency_contact: None,
    },
    ContactInfo {
        country: "es",
        city: "ankara",
        address: "Abdullah Cevdet Sokak No: 8, Cankaya, Ankara",
        phone: "+90 312 438 03 92",
        email: Some("emb.ankara@maec.es"),
        website: "http://www.exteriores.gob.es/Embajadas/ANKARA",
        working_hours: "Mon-Fri 09:00-13:00",
        emergency_contact: None,
    },
    ContactInfo {
        country: "it",
        city: "ankara",
        address: "Ataturk Bulvari No: 118, Kavaklidere, Ankara",
        phone: "+90 312 457 42 00",
        email: Some("ambasciata.ankara@esteri.it"),
        website: "https://ambankara.esteri.it",
        working_hours: "Mon-Fri 09:00-12:00",
        emergency_contact: None,
    },
    ContactInfo {
        country: "it",
        city: "istanbul",
        address: "Tomtom Kaptan Sokak No: 15, Beyoglu, Istanbul",
        phone: "+90 212 243 10 24",
        email: Some("consolato.istanbul@esteri.it"),
        website: "https://constistanbul.esteri.it",
        working_hours: "Mon-Fri 09:00-12:00",
        emergency_contact: None,
    },
];
