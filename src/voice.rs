//! Voice record types shared by both providers.

use std::fmt;

/// Gender tag attached to a provider voice record.
///
/// Providers spell this differently (`FEMALE` vs `Female`); anything that is
/// not recognizably female or male (Neutral, Unspecified and whatever a
/// provider adds next) collapses to [Gender::Unspecified] and is skipped when
/// a catalog is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Female,
    Male,
    Unspecified,
}

impl Gender {
    /// Parse a provider's gender tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Female" | "FEMALE" => Gender::Female,
            "Male" | "MALE" => Gender::Male,
            _ => Gender::Unspecified,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Unspecified => "Unspecified",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One synthesizable voice as reported by a provider listing.
///
/// `name` is the provider-specific identifier, unique within that provider
/// only. A voice may serve several language codes (GCP voices often do).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub name: String,
    pub language_codes: Vec<String>,
    pub gender: Gender,
}

impl Voice {
    pub fn new<N, I, L>(name: N, language_codes: I, gender: Gender) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            name: name.into(),
            language_codes: language_codes.into_iter().map(Into::into).collect(),
            gender,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_tags_from_both_providers() {
        assert_eq!(Gender::from_tag("Female"), Gender::Female);
        assert_eq!(Gender::from_tag("FEMALE"), Gender::Female);
        assert_eq!(Gender::from_tag("Male"), Gender::Male);
        assert_eq!(Gender::from_tag("MALE"), Gender::Male);
    }

    #[test]
    fn unknown_gender_tags_are_unspecified() {
        for tag in ["NEUTRAL", "Neutral", "SSML_VOICE_GENDER_UNSPECIFIED", "", "female"] {
            assert_eq!(Gender::from_tag(tag), Gender::Unspecified, "tag {tag:?}");
        }
    }
}
