use std::collections::BTreeMap;

use crate::word::{Adjective, Case, DeclinedForm, Noun, Number, Pronoun, Verb, Word};

/// A record that failed one or more curation checks. Field names refer
/// to the dataset's JSON keys.
#[derive(Debug, thiserror::Error)]
#[error("{kind} '{lemma}' failed validation: {}", describe(.errors))]
pub struct ValidationError {
    pub kind: &'static str,
    pub lemma: String,
    pub errors: BTreeMap<String, String>,
}

fn describe(errors: &BTreeMap<String, String>) -> String {
    let parts: Vec<String> = errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect();
    parts.join("; ")
}

/// Check a record against the curation rules for its word class.
pub fn validate(word: &Word) -> Result<(), ValidationError> {
    match word {
        Word::Noun(noun) => validate_noun(noun),
        Word::Verb(verb) => validate_verb(verb),
        Word::Adjective(adjective) => validate_adjective(adjective),
    }
}

#[derive(Default)]
struct Validator {
    errors: BTreeMap<String, String>,
}

impl Validator {
    fn flag(&mut self, field: &str, message: String) {
        self.errors.insert(field.to_owned(), message);
    }

    /// German orthography plus any explicitly allowed extras.
    fn word(&mut self, field: &str, value: &str, allowed: &str, numbers: bool) {
        let valid = !value.is_empty()
            && value.chars().all(|c| {
                c.is_ascii_alphabetic()
                    || matches!(c, 'ä' | 'ö' | 'ü' | 'Ä' | 'Ö' | 'Ü' | 'ß' | 'é')
                    || allowed.contains(c)
                    || (numbers && c.is_ascii_digit())
            });

        if !valid {
            self.flag(field, format!("Invalid '{value}'"));
        }
    }

    fn required(&mut self, field: &str, value: Option<&str>) {
        match value {
            Some(v) => self.word(field, v, "", false),
            None => self.flag(field, "Can't be blank".to_owned()),
        }
    }

    fn empty(&mut self, field: &str, value: Option<&str>) {
        if let Some(v) = value {
            self.flag(field, format!("'{v}' must be empty"));
        }
    }

    fn count(&mut self, field: &str, value: &str, words: usize) {
        if value.split(' ').count() != words {
            self.flag(field, format!("'{value}' must have {words} words"));
        }
    }

    fn condition(&mut self, field: &str, ok: bool, message: &str) {
        if !ok {
            self.flag(field, message.to_owned());
        }
    }

    fn finish(self, kind: &'static str, lemma: &str) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                kind,
                lemma: lemma.to_owned(),
                errors: self.errors,
            })
        }
    }
}

fn validate_base(v: &mut Validator, lemma: &str, translations: &[String]) {
    v.word("lemma", lemma, "_", false);
    v.condition(
        "lemma",
        lemma.matches('_').count() <= 1,
        "Must have at most one '_'",
    );

    for (i, translation) in translations.iter().enumerate() {
        v.word(&format!("translations[{i}]"), translation, " -'éè”&", true);
    }
}

fn validate_noun(noun: &Noun) -> Result<(), ValidationError> {
    let mut v = Validator::default();
    validate_base(&mut v, &noun.lemma, &noun.translations);

    v.condition(
        "singularOnly/pluralOnly",
        !(noun.singular_only && noun.plural_only),
        "Can't be singularOnly and pluralOnly at the same time",
    );

    if noun.no_article {
        if let Some(gender) = noun.gender {
            v.flag("gender", format!("'{}' must be empty", gender.as_str()));
        }
    }

    for case in Case::ALL {
        let forms = noun.cases.get(case);
        let singular = format!("{}.singular", case.as_str());
        let plural = format!("{}.plural", case.as_str());

        if noun.singular_only {
            v.required(&singular, forms.get(Number::Singular));
            v.empty(&plural, forms.get(Number::Plural));
        } else if noun.plural_only {
            v.empty(&singular, forms.get(Number::Singular));
            v.required(&plural, forms.get(Number::Plural));
        } else {
            v.required(&singular, forms.get(Number::Singular));
            v.required(&plural, forms.get(Number::Plural));
        }
    }

    v.finish("noun", &noun.lemma)
}

fn validate_verb(verb: &Verb) -> Result<(), ValidationError> {
    let mut v = Validator::default();
    validate_base(&mut v, &verb.lemma, &verb.translations);

    if verb.separable {
        v.condition(
            "zuinfinitive",
            has_sandwiched_zu(&verb.zuinfinitive),
            "'zu' must be sandwiched",
        );
    } else {
        v.condition("lemma", !verb.lemma.contains('_'), "Must not include '_'");
        v.condition(
            "zuinfinitive",
            verb.zuinfinitive.contains("zu"),
            "Must include 'zu'",
        );
    }

    let words = if verb.separable { 2 } else { 1 };
    let extra = if verb.separable { "/ " } else { "/" };

    for pronoun in Pronoun::ALL {
        for (tense, row) in [("present", &verb.present), ("simple", &verb.simple)] {
            let field = format!("{tense}.{}", pronoun.as_str());
            v.word(&field, row.get(pronoun), extra, false);
            v.count(&field, row.get(pronoun), words);
        }
    }

    if let Some(imperative) = &verb.imperative {
        // du and ihr imperatives carry the pronoun as an extra word.
        v.word("imperative.du", &imperative.du, " ", false);
        v.count("imperative.du", &imperative.du, words + 1);
        v.word("imperative.ihr", &imperative.ihr, " ", false);
        v.count("imperative.ihr", &imperative.ihr, words + 1);
    }

    v.word("perfect", &verb.perfect, " ", false);
    v.word("gerund", &verb.gerund, " ", false);
    v.word("zuinfinitive", &verb.zuinfinitive, " ", false);

    v.finish("verb", &verb.lemma)
}

/// Accepts "aufzustehen" as well as the spaced "sich zu treffen" shape.
fn has_sandwiched_zu(form: &str) -> bool {
    let lower = |c: char| c.is_ascii_lowercase() || matches!(c, 'ä' | 'ö' | 'ü');
    let stem_end = |c: char| lower(c) || c == 'ß';

    let chars: Vec<char> = form.chars().collect();

    let tight = chars
        .windows(4)
        .any(|w| stem_end(w[0]) && w[1] == 'z' && w[2] == 'u' && lower(w[3]));
    let spaced = chars.windows(6).any(|w| {
        stem_end(w[0]) && w[1] == ' ' && w[2] == 'z' && w[3] == 'u' && w[4] == ' ' && lower(w[5])
    });

    tight || spaced
}

fn validate_adjective(adjective: &Adjective) -> Result<(), ValidationError> {
    let mut v = Validator::default();
    validate_base(&mut v, &adjective.lemma, &adjective.translations);

    if adjective.not_declinable {
        v.condition(
            "notDeclinable",
            adjective.strong.nominative.p == adjective.weak.genitive.p,
            "Declined cells must all agree",
        );
    } else {
        for case in Case::ALL {
            for form in DeclinedForm::ALL {
                let blank = adjective.predicative_only
                    || (adjective.singular_only && form == DeclinedForm::Plural);

                for (name, table) in [
                    ("strong", &adjective.strong),
                    ("weak", &adjective.weak),
                    ("mixed", &adjective.mixed),
                ] {
                    let field = format!("{name}.{}.{}", case.as_str(), form.as_str());
                    let cell = table.get(case).get(form);
                    if blank {
                        v.empty(&field, cell);
                    } else {
                        v.required(&field, cell);
                    }
                }
            }
        }
    }

    v.finish("adjective", &adjective.lemma)
}
