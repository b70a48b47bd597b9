use serde::{Deserialize, Serialize};

use crate::level::Level;

/// Grammatical case axis, in dataset order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Nominative,
    Accusative,
    Dative,
    Genitive,
}

impl Case {
    pub const ALL: [Case; 4] = [
        Case::Nominative,
        Case::Accusative,
        Case::Dative,
        Case::Genitive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Case::Nominative => "nominative",
            Case::Accusative => "accusative",
            Case::Dative => "dative",
            Case::Genitive => "genitive",
        }
    }
}

/// Grammatical number axis, in dataset order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Number {
    Singular,
    Plural,
}

impl Number {
    pub const ALL: [Number; 2] = [Number::Singular, Number::Plural];

    pub fn as_str(&self) -> &'static str {
        match self {
            Number::Singular => "singular",
            Number::Plural => "plural",
        }
    }
}

/// Column axis of adjective declension tables: the three genders plus plural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclinedForm {
    Masculine,
    Feminine,
    Neuter,
    Plural,
}

impl DeclinedForm {
    pub const ALL: [DeclinedForm; 4] = [
        DeclinedForm::Masculine,
        DeclinedForm::Feminine,
        DeclinedForm::Neuter,
        DeclinedForm::Plural,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeclinedForm::Masculine => "m",
            DeclinedForm::Feminine => "f",
            DeclinedForm::Neuter => "n",
            DeclinedForm::Plural => "p",
        }
    }
}

/// Pronoun axis of conjugation rows, in dataset order.
///
/// `es` covers the whole third person singular and `Sie` the polite
/// address shared with third person plural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pronoun {
    Ich,
    Du,
    Es,
    Ihr,
    Sie,
}

impl Pronoun {
    pub const ALL: [Pronoun; 5] = [
        Pronoun::Ich,
        Pronoun::Du,
        Pronoun::Es,
        Pronoun::Ihr,
        Pronoun::Sie,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pronoun::Ich => "ich",
            Pronoun::Du => "du",
            Pronoun::Es => "es",
            Pronoun::Ihr => "ihr",
            Pronoun::Sie => "Sie",
        }
    }
}

/// Grammatical gender of a noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "m")]
    Masculine,
    #[serde(rename = "f")]
    Feminine,
    #[serde(rename = "n")]
    Neuter,
}

impl Gender {
    pub fn from_str(s: &str) -> Option<Gender> {
        match s {
            "m" => Some(Gender::Masculine),
            "f" => Some(Gender::Feminine),
            "n" => Some(Gender::Neuter),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Masculine => "m",
            Gender::Feminine => "f",
            Gender::Neuter => "n",
        }
    }
}

/// Word class of a dictionary record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordType {
    Noun,
    Verb,
    Adjective,
}

impl WordType {
    pub fn from_str(s: &str) -> Option<WordType> {
        match s {
            "noun" => Some(WordType::Noun),
            "verb" => Some(WordType::Verb),
            "adjective" => Some(WordType::Adjective),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WordType::Noun => "noun",
            WordType::Verb => "verb",
            WordType::Adjective => "adjective",
        }
    }
}

/// Singular and plural cells of one case row. `None` marks a form the
/// word does not have.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseForms {
    pub singular: Option<String>,
    pub plural: Option<String>,
}

impl CaseForms {
    pub fn get(&self, number: Number) -> Option<&str> {
        match number {
            Number::Singular => self.singular.as_deref(),
            Number::Plural => self.plural.as_deref(),
        }
    }

    pub fn set(&mut self, number: Number, form: Option<String>) {
        match number {
            Number::Singular => self.singular = form,
            Number::Plural => self.plural = form,
        }
    }
}

/// Full case paradigm of a noun. Every case row is present even when
/// all of its cells are empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseTable {
    pub nominative: CaseForms,
    pub accusative: CaseForms,
    pub dative: CaseForms,
    pub genitive: CaseForms,
}

impl CaseTable {
    pub fn get(&self, case: Case) -> &CaseForms {
        match case {
            Case::Nominative => &self.nominative,
            Case::Accusative => &self.accusative,
            Case::Dative => &self.dative,
            Case::Genitive => &self.genitive,
        }
    }

    pub fn get_mut(&mut self, case: Case) -> &mut CaseForms {
        match case {
            Case::Nominative => &mut self.nominative,
            Case::Accusative => &mut self.accusative,
            Case::Dative => &mut self.dative,
            Case::Genitive => &mut self.genitive,
        }
    }
}

/// One tense row of a verb paradigm. An empty string marks a cell the
/// source data leaves blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conjugation {
    pub ich: String,
    pub du: String,
    pub es: String,
    pub ihr: String,
    #[serde(rename = "Sie")]
    pub sie: String,
}

impl Conjugation {
    pub fn get(&self, pronoun: Pronoun) -> &str {
        match pronoun {
            Pronoun::Ich => &self.ich,
            Pronoun::Du => &self.du,
            Pronoun::Es => &self.es,
            Pronoun::Ihr => &self.ihr,
            Pronoun::Sie => &self.sie,
        }
    }

    pub fn get_mut(&mut self, pronoun: Pronoun) -> &mut String {
        match pronoun {
            Pronoun::Ich => &mut self.ich,
            Pronoun::Du => &mut self.du,
            Pronoun::Es => &mut self.es,
            Pronoun::Ihr => &mut self.ihr,
            Pronoun::Sie => &mut self.sie,
        }
    }
}

/// Imperative forms of a verb, addressed to `du`, `ihr` and `Sie`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Imperative {
    pub du: String,
    pub ihr: String,
    #[serde(rename = "Sie")]
    pub sie: String,
}

/// Cells of one adjective declension row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeclinedForms {
    pub m: Option<String>,
    pub f: Option<String>,
    pub n: Option<String>,
    pub p: Option<String>,
}

impl DeclinedForms {
    pub fn get(&self, form: DeclinedForm) -> Option<&str> {
        match form {
            DeclinedForm::Masculine => self.m.as_deref(),
            DeclinedForm::Feminine => self.f.as_deref(),
            DeclinedForm::Neuter => self.n.as_deref(),
            DeclinedForm::Plural => self.p.as_deref(),
        }
    }

    pub fn set(&mut self, form: DeclinedForm, value: Option<String>) {
        match form {
            DeclinedForm::Masculine => self.m = value,
            DeclinedForm::Feminine => self.f = value,
            DeclinedForm::Neuter => self.n = value,
            DeclinedForm::Plural => self.p = value,
        }
    }
}

/// One adjective declension table (strong, weak or mixed).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Declension {
    pub nominative: DeclinedForms,
    pub accusative: DeclinedForms,
    pub dative: DeclinedForms,
    pub genitive: DeclinedForms,
}

impl Declension {
    pub fn get(&self, case: Case) -> &DeclinedForms {
        match case {
            Case::Nominative => &self.nominative,
            Case::Accusative => &self.accusative,
            Case::Dative => &self.dative,
            Case::Genitive => &self.genitive,
        }
    }

    pub fn get_mut(&mut self, case: Case) -> &mut DeclinedForms {
        match case {
            Case::Nominative => &mut self.nominative,
            Case::Accusative => &mut self.accusative,
            Case::Dative => &mut self.dative,
            Case::Genitive => &mut self.genitive,
        }
    }
}

/// A dictionary record with its full inflection data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Word {
    Noun(Noun),
    Verb(Verb),
    Adjective(Adjective),
}

impl Word {
    pub fn word_type(&self) -> WordType {
        match self {
            Word::Noun(_) => WordType::Noun,
            Word::Verb(_) => WordType::Verb,
            Word::Adjective(_) => WordType::Adjective,
        }
    }

    pub fn lemma(&self) -> &str {
        match self {
            Word::Noun(noun) => &noun.lemma,
            Word::Verb(verb) => &verb.lemma,
            Word::Adjective(adjective) => &adjective.lemma,
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self {
            Word::Noun(noun) => noun.level,
            Word::Verb(verb) => verb.level,
            Word::Adjective(adjective) => adjective.level,
        }
    }

    pub fn translations(&self) -> &[String] {
        match self {
            Word::Noun(noun) => &noun.translations,
            Word::Verb(verb) => &verb.translations,
            Word::Adjective(adjective) => &adjective.translations,
        }
    }

    pub fn frequency(&self) -> Option<f64> {
        match self {
            Word::Noun(noun) => noun.frequency,
            Word::Verb(verb) => verb.frequency,
            Word::Adjective(adjective) => adjective.frequency,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Noun {
    pub lemma: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub translations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    /// `None` for nouns used without an article, e.g. proper names.
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub no_article: bool,
    #[serde(default)]
    pub singular_only: bool,
    #[serde(default)]
    pub plural_only: bool,
    pub cases: CaseTable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verb {
    /// Separable lemmas carry a `_` between prefix and base,
    /// e.g. `auf_stehen`.
    pub lemma: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub translations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    #[serde(default)]
    pub separable: bool,
    pub present: Conjugation,
    pub simple: Conjugation,
    pub conjunctive1: Conjugation,
    pub conjunctive2: Conjugation,
    #[serde(default)]
    pub imperative: Option<Imperative>,
    pub perfect: String,
    pub gerund: String,
    pub zuinfinitive: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjective {
    pub lemma: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub translations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    #[serde(default)]
    pub singular_only: bool,
    #[serde(default)]
    pub plural_only: bool,
    #[serde(default)]
    pub predicative_only: bool,
    #[serde(default)]
    pub absolute: bool,
    #[serde(default)]
    pub not_declinable: bool,
    #[serde(default)]
    pub no_mixed: bool,
    pub strong: Declension,
    pub weak: Declension,
    pub mixed: Declension,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparative: Option<String>,
    #[serde(default)]
    pub is_comparative: bool,
    #[serde(default)]
    pub no_comparative: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superlative: Option<String>,
    #[serde(default)]
    pub is_superlative: bool,
    #[serde(default)]
    pub superlative_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_nouns: Option<Vec<String>>,
}
