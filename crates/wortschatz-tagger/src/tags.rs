use serde::{Deserialize, Serialize};

/// STTS part-of-speech tags as emitted by the tagging service.
///
/// Tags outside the set fold into [`Tag::Unknown`] rather than failing
/// deserialization, so a newer tagger model cannot break sentence matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tag {
    #[serde(rename = "$(")]
    OtherPunct,
    #[serde(rename = "$,")]
    Comma,
    #[serde(rename = "$.")]
    FinalPunct,
    #[serde(rename = "TRUNC")]
    Truncation,
    #[serde(rename = "XY")]
    NonLexical,
    #[serde(rename = "_SP")]
    Space,
    #[serde(rename = "CARD")]
    Cardinal,

    #[serde(rename = "ADJA")]
    AttributiveAdjective,
    #[serde(rename = "ADJD")]
    PredicativeAdjective,

    #[serde(rename = "ADV")]
    Adverb,
    #[serde(rename = "PROAV")]
    PronominalAdverb,

    #[serde(rename = "APPO")]
    Postposition,
    #[serde(rename = "APPR")]
    Preposition,
    #[serde(rename = "APPRART")]
    FusedPreposition,
    #[serde(rename = "APZR")]
    CircumpositionRight,

    #[serde(rename = "ART")]
    Article,
    #[serde(rename = "FM")]
    ForeignWord,
    #[serde(rename = "ITJ")]
    Interjection,

    #[serde(rename = "KOKOM")]
    ComparisonConjunction,
    #[serde(rename = "KON")]
    CoordinatingConjunction,
    #[serde(rename = "KOUI")]
    InfinitiveConjunction,
    #[serde(rename = "KOUS")]
    SubordinatingConjunction,

    #[serde(rename = "NE")]
    ProperNoun,
    #[serde(rename = "NN")]
    CommonNoun,
    #[serde(rename = "NNE")]
    CompoundProperNoun,

    #[serde(rename = "PDAT")]
    AttributiveDemonstrative,
    #[serde(rename = "PDS")]
    SubstitutingDemonstrative,
    #[serde(rename = "PIAT")]
    AttributiveIndefinite,
    #[serde(rename = "PIS")]
    SubstitutingIndefinite,
    #[serde(rename = "PPER")]
    PersonalPronoun,
    #[serde(rename = "PPOSAT")]
    AttributivePossessive,
    #[serde(rename = "PPOSS")]
    SubstitutingPossessive,
    #[serde(rename = "PRELAT")]
    AttributiveRelative,
    #[serde(rename = "PRELS")]
    SubstitutingRelative,
    #[serde(rename = "PRF")]
    ReflexivePronoun,
    #[serde(rename = "PWAT")]
    AttributiveInterrogative,
    #[serde(rename = "PWAV")]
    InterrogativeAdverb,
    #[serde(rename = "PWS")]
    SubstitutingInterrogative,

    #[serde(rename = "PTKA")]
    DegreeParticle,
    #[serde(rename = "PTKANT")]
    AnswerParticle,
    #[serde(rename = "PTKNEG")]
    NegationParticle,
    #[serde(rename = "PTKVZ")]
    SeparableParticle,
    #[serde(rename = "PTKZU")]
    InfinitiveMarker,

    #[serde(rename = "VAFIN")]
    FiniteAuxiliary,
    #[serde(rename = "VAIMP")]
    ImperativeAuxiliary,
    #[serde(rename = "VAINF")]
    InfinitiveAuxiliary,
    #[serde(rename = "VAPP")]
    ParticipleAuxiliary,
    #[serde(rename = "VMFIN")]
    FiniteModal,
    #[serde(rename = "VMINF")]
    InfinitiveModal,
    #[serde(rename = "VMPP")]
    ParticipleModal,
    #[serde(rename = "VVFIN")]
    FiniteVerb,
    #[serde(rename = "VVIMP")]
    ImperativeVerb,
    #[serde(rename = "VVINF")]
    InfinitiveVerb,
    #[serde(rename = "VVIZU")]
    ZuInfinitiveVerb,
    #[serde(rename = "VVPP")]
    ParticipleVerb,

    #[serde(other)]
    Unknown,
}

impl Tag {
    /// Only common nouns are matched against the noun table. Proper nouns
    /// never carry dataset entries.
    pub fn is_noun(&self) -> bool {
        *self == Tag::CommonNoun
    }

    pub fn is_adjective(&self) -> bool {
        matches!(self, Tag::AttributiveAdjective | Tag::PredicativeAdjective)
    }

    pub fn is_verb(&self) -> bool {
        matches!(
            self,
            Tag::FiniteAuxiliary
                | Tag::ImperativeAuxiliary
                | Tag::InfinitiveAuxiliary
                | Tag::ParticipleAuxiliary
                | Tag::FiniteModal
                | Tag::InfinitiveModal
                | Tag::ParticipleModal
                | Tag::FiniteVerb
                | Tag::ImperativeVerb
                | Tag::InfinitiveVerb
                | Tag::ZuInfinitiveVerb
                | Tag::ParticipleVerb
        )
    }

    /// Everything except punctuation, fragments and symbols counts as a word.
    pub fn is_word(&self) -> bool {
        !matches!(
            self,
            Tag::OtherPunct
                | Tag::Comma
                | Tag::FinalPunct
                | Tag::Truncation
                | Tag::NonLexical
                | Tag::Space
                | Tag::Cardinal
        )
    }

    pub fn is_punctuation(&self) -> bool {
        matches!(self, Tag::OtherPunct | Tag::FinalPunct | Tag::Comma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_deserialize_from_stts_codes() {
        assert_eq!(
            serde_json::from_str::<Tag>("\"NN\"").unwrap(),
            Tag::CommonNoun
        );
        assert_eq!(
            serde_json::from_str::<Tag>("\"$.\"").unwrap(),
            Tag::FinalPunct
        );
        assert_eq!(
            serde_json::from_str::<Tag>("\"PTKVZ\"").unwrap(),
            Tag::SeparableParticle
        );
        assert_eq!(
            serde_json::from_str::<Tag>("\"VVIZU\"").unwrap(),
            Tag::ZuInfinitiveVerb
        );
    }

    #[test]
    fn test_tags_serialize_back_to_stts_codes() {
        assert_eq!(
            serde_json::to_value(Tag::FusedPreposition).unwrap(),
            serde_json::json!("APPRART")
        );
        assert_eq!(
            serde_json::to_value(Tag::OtherPunct).unwrap(),
            serde_json::json!("$(")
        );
    }

    #[test]
    fn test_unexpected_code_folds_into_unknown() {
        let tag: Tag = serde_json::from_str("\"PIDAT\"").unwrap();
        assert_eq!(tag, Tag::Unknown);
        assert!(tag.is_word());
        assert!(!tag.is_punctuation());
    }

    #[test]
    fn test_noun_classifier_excludes_proper_nouns() {
        assert!(Tag::CommonNoun.is_noun());
        assert!(!Tag::ProperNoun.is_noun());
        assert!(!Tag::CompoundProperNoun.is_noun());
    }

    #[test]
    fn test_verb_classifier_covers_all_verb_families() {
        let verbs = [
            Tag::FiniteAuxiliary,
            Tag::ImperativeAuxiliary,
            Tag::InfinitiveAuxiliary,
            Tag::ParticipleAuxiliary,
            Tag::FiniteModal,
            Tag::InfinitiveModal,
            Tag::ParticipleModal,
            Tag::FiniteVerb,
            Tag::ImperativeVerb,
            Tag::InfinitiveVerb,
            Tag::ZuInfinitiveVerb,
            Tag::ParticipleVerb,
        ];
        for tag in verbs {
            assert!(tag.is_verb(), "{tag:?} should classify as a verb");
        }
        assert!(!Tag::SeparableParticle.is_verb());
        assert!(!Tag::InfinitiveMarker.is_verb());
    }

    #[test]
    fn test_word_classifier_rejects_non_words() {
        for tag in [
            Tag::OtherPunct,
            Tag::Comma,
            Tag::FinalPunct,
            Tag::Truncation,
            Tag::NonLexical,
            Tag::Space,
            Tag::Cardinal,
        ] {
            assert!(!tag.is_word(), "{tag:?} should not classify as a word");
        }
        assert!(Tag::Adverb.is_word());
        assert!(Tag::ProperNoun.is_word());
    }
}
