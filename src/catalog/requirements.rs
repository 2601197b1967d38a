//! Visa requirements and document checklists.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisaRequirements {
    pub country: &'static str,
    pub visa_type: &'static str,
    pub required_documents: &'static [&'static str],
    pub processing_time: &'static str,
    pub visa_fee: &'static str,
    pub validity_period: &'static str,
    pub stay_duration: &'static str,
    pub additional_info: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentItem {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentChecklist {
    pub country: &'static str,
    pub visa_type: &'static str,
    pub mandatory: &'static [DocumentItem],
    pub optional: &'static [DocumentItem],
    pub tips: &'static [&'static str],
}

const SCHENGEN_FEE: &str = "80 EUR (adult), 40 EUR (age 6-12)";
const SCHENGEN_STAY: &str = "90 days within any 180 days";

pub(crate) const VISA_REQUIREMENTS: &[VisaRequirements] = &[
    VisaRequirements {
        country: "fr",
        visa_type: "tourist",
        required_documents: &[
            "Valid passport (at least 3 months beyond return)",
            "Signed visa application form",
            "Two biometric photographs",
            "Travel medical insurance (min. 30,000 EUR)",
            "Flight reservation",
            "Hotel booking or invitation letter",
            "Proof of funds (bank statement)",
            "Leave letter from employer",
            "Civil status document",
        ],
        processing_time: "15 working days",
        visa_fee: SCHENGEN_FEE,
        validity_period: "90 days",
        stay_duration: SCHENGEN_STAY,
        additional_info: &[
            "Appointments are booked through TLScontact",
            "Biometric data collection is mandatory",
            "Apply at most 6 months before travel",
        ],
    },
    VisaRequirements {
        country: "de",
        visa_type: "tourist",
        required_documents: &[
            "Valid passport (at least 3 months beyond return)",
            "Completed and signed application form",
            "Two biometric photographs (35x45mm)",
            "Travel medical insurance (min. 30,000 EUR)",
            "Return flight ticket",
            "Proof of accommodation",
            "Proof of financial means",
            "Employer letter",
            "Bank statements for the last 3 months",
        ],
        processing_time: "15 working days",
        visa_fee: SCHENGEN_FEE,
        validity_period: "90 days",
        stay_duration: SCHENGEN_STAY,
        additional_info: &[
            "Appointments via iDATA or the consulate",
            "Biometric data stays valid for 59 months",
            "Expedited processing possible in emergencies",
        ],
    },
    VisaRequirements {
        country: "nl",
        visa_type: "tourist",
        required_documents: &[
            "Valid passport",
            "Application form",
            "Biometric photograph",
            "Travel medical insurance (min. 30,000 EUR)",
            "Flight and accommodation bookings",
            "Bank statements for the last 3 months",
        ],
        processing_time: "15 working days",
        visa_fee: SCHENGEN_FEE,
        validity_period: "90 days",
        stay_duration: SCHENGEN_STAY,
        additional_info: &["Applications are handled by VFS Global"],
    },
    VisaRequirements {
        country: "es",
        visa_type: "tourist",
        required_documents: &[
            "Valid passport",
            "Application form",
            "Two biometric photographs",
            "Travel medical insurance (min. 30,000 EUR)",
            "Flight reservation",
            "Accommodation proof",
            "Bank statement",
        ],
        processing_time: "15 working days",
        visa_fee: SCHENGEN_FEE,
        validity_period: "90 days",
        stay_duration: SCHENGEN_STAY,
        additional_info: &[
            "Applications go through BLS International",
            "Documents must be in Spanish or English",
            "Invitation letters must be notarised",
        ],
    },
    VisaRequirements {
        country: "it",
        visa_type: "tourist",
        required_documents: &[
            "Valid passport",
            "Application form",
            "Two biometric photographs",
            "Travel medical insurance (min. 30,000 EUR)",
            "Flight reservation",
            "Hotel booking or invitation letter",
            "Bank statement",
            "Employment certificate",
            "Civil status document",
        ],
        processing_time: "15 working days",
        visa_fee: SCHENGEN_FEE,
        validity_period: "90 days",
        stay_duration: SCHENGEN_STAY,
        additional_info: &[
            "Online appointment system",
            "Documents must be translated to Italian or English",
            "Biometric data collection is mandatory",
        ],
    },
];

const fn item(
    name: &'static str,
    description: &'static str,
    format: &'static str,
    quantity: Option<u32>,
) -> DocumentItem {
    DocumentItem {
        name,
        description,
        format: Some(format),
        quantity,
    }
}

pub(crate) const DOCUMENT_CHECKLISTS: &[DocumentChecklist] = &[
    DocumentChecklist {
        country: "fr",
        visa_type: "tourist",
        mandatory: &[
            item("Passport", "Valid 3+ months, two blank pages", "Original + copy", Some(1)),
            item("Application form", "Completed and signed", "Printed online form", Some(1)),
            item("Photograph", "Biometric, white background", "35x45mm, colour", Some(2)),
            item("Travel insurance", "Minimum 30,000 EUR cover", "Original policy", Some(1)),
            item("Flight ticket", "Return reservation", "Booking confirmation", Some(1)),
            item("Accommodation", "Hotel booking or invitation", "Certified document", Some(1)),
            item("Bank statement", "Last 3 months, 50-60 EUR per day", "Bank stamped", Some(1)),
            item("Employer letter", "Leave approval and salary", "Letterhead", Some(1)),
        ],
        optional: &[
            item("Property deed", "Proof of ties to home country", "Copy", None),
            item("Previous visas", "Copies of earlier Schengen visas", "Copy", None),
        ],
        tips: &[
            "Book the TLScontact appointment early",
            "Bring originals and copies of every document",
            "Translations must be certified",
        ],
    },
    DocumentChecklist {
        country: "de",
        visa_type: "tourist",
        mandatory: &[
            item("Passport", "Valid 3+ months, two blank pages", "Original + copy", Some(1)),
            item("Application form", "Filled in via VIDEX", "Printed", Some(1)),
            item("Photograph", "Biometric", "35x45mm", Some(2)),
            item("Travel insurance", "Minimum 30,000 EUR cover", "Original policy", Some(1)),
            item("Flight reservation", "Return, need not be paid", "Booking code", Some(1)),
            item(
                "Proof of accommodation",
                "Hotel or host invitation",
                "Certified document",
                Some(1),
            ),
            item("Financial means", "Last 3 months bank statement", "Bank stamped", Some(1)),
            item(
                "Employment document",
                "Employment status and leave",
                "Letterhead, signed",
                Some(1),
            ),
        ],
        optional: &[
            item("Tax certificate", "Proof of income", "Copy", None),
            item("Travel itinerary", "Detailed plan", "Written", None),
        ],
        tips: &[
            "Fill in the VIDEX form online",
            "All documents in German or English",
            "Biometric data valid for 59 months",
            "Arrive on time for the appointment",
            "Missing documents can lead to refusal",
        ],
    },
];
