//! Closed option sets used by the onboarding forms.
//!
//! Each set is an enum whose variants carry the wire id submitted by the
//! form controls. Ids double as the suffix of the option's locale key.

use serde::Serialize;

/// A fixed, enumerated set of form options.
pub trait Choice: Sized + Copy + Eq + Ord + 'static {
    const ALL: &'static [Self];

    fn id(self) -> &'static str;

    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|choice| choice.id() == id)
    }

    fn ids() -> Vec<&'static str> {
        Self::ALL.iter().map(|choice| choice.id()).collect()
    }
}

/// Option id that unlocks a paired free-text field.
pub const OTHER: &str = "other";

macro_rules! choice {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $id:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        pub enum $name {
            $(
                #[serde(rename = $id)]
                $variant,
            )+
        }

        impl Choice for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn id(self) -> &'static str {
                match self {
                    $($name::$variant => $id,)+
                }
            }
        }
    };
}

choice!(
    /// Kind of organization signing up; decides which survey is shown.
    OrganizationType {
        Company => "azienda",
        Consultant => "consulente",
        CertificationBody => "ente",
    }
);

choice!(YesNo { Yes => "yes", No => "no" });

choice!(
    /// 1 (not important at all) to 5 (very important).
    Rating {
        One => "1",
        Two => "2",
        Three => "3",
        Four => "4",
        Five => "5",
    }
);

choice!(CompanySize { Small => "small", Medium => "medium", Large => "large" });

choice!(CompanyRole {
    Management => "management",
    Technical => "technical",
    Commercial => "commercial",
});

choice!(EpdChallenge {
    Complexity => "complexity",
    FindConsultant => "findConsultant",
    ProjectManagement => "projectManagement",
    DataCollection => "dataCollection",
    CertificationProcess => "certificationProcess",
    Other => "other",
});

choice!(ConsultantChannel {
    PersonalNetwork => "personalNetwork",
    OnlineSearch => "onlineSearch",
    Linkedin => "linkedin",
    Events => "events",
    Other => "other",
});

choice!(UpdateFrequency {
    MultipleWeekly => "multipleWeekly",
    Weekly => "weekly",
    Biweekly => "biweekly",
    Monthly => "monthly",
    Quarterly => "quarterly",
    Other => "other",
});

choice!(WorkStatus {
    Freelance => "freelance",
    SmallCompany => "smallCompany",
    MediumCompany => "mediumCompany",
    LargeCompany => "largeCompany",
});

choice!(EpdDifficulty {
    ClientAcquisition => "clientAcquisition",
    ClientCommunication => "clientCommunication",
    DataStructure => "dataStructure",
    TimeManagement => "timeManagement",
    Other => "other",
});

choice!(
    /// Channels consultants and certification bodies use to find clients.
    AcquisitionChannel {
        ContactNetwork => "contactNetwork",
        PhoneSearch => "phoneSearch",
        Linkedin => "linkedin",
        Events => "events",
        Other => "other",
    }
);

choice!(
    /// Share of working time spent on client acquisition, in percent.
    TimeShare {
        From5To15 => "5-15",
        From15To25 => "15-25",
        From25To35 => "25-35",
        Over35 => "more35",
    }
);

choice!(OrganizationSize { Small => "small", Medium => "medium", Large => "large" });

choice!(VerificationChallenge {
    ClientAcquisition => "clientAcquisition",
    CompanyCommunication => "companyComm",
    ConsultantCommunication => "consultantComm",
    NonCompliance => "nonCompliance",
    Delays => "delays",
    Other => "other",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_id_matches_declared_ids() {
        assert_eq!(OrganizationType::from_id("consulente"), Some(OrganizationType::Consultant));
        assert_eq!(TimeShare::from_id("more35"), Some(TimeShare::Over35));
        assert_eq!(Rating::from_id("6"), None);
        assert_eq!(YesNo::from_id("YES"), None);
    }

    #[test]
    fn serializes_as_wire_id() {
        let json = serde_json::to_string(&VerificationChallenge::CompanyCommunication).unwrap();
        assert_eq!(json, "\"companyComm\"");
        assert_eq!(serde_json::to_string(&Rating::Four).unwrap(), "\"4\"");
    }

    #[test]
    fn ratings_cover_one_to_five() {
        assert_eq!(Rating::ids(), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn multi_select_sets_end_with_other() {
        assert_eq!(EpdChallenge::ids().last(), Some(&OTHER));
        assert_eq!(ConsultantChannel::ids().last(), Some(&OTHER));
        assert_eq!(EpdDifficulty::ids().last(), Some(&OTHER));
        assert_eq!(AcquisitionChannel::ids().last(), Some(&OTHER));
        assert_eq!(VerificationChallenge::ids().last(), Some(&OTHER));
    }
}
