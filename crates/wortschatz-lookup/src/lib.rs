use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;
use wortschatz_core::{Adjective, Noun, Pronoun, Verb, Word};

/// Inflected-form indexes over a dataset, one map per word class.
/// Noun keys are stored lowercased so capitalized sentence tokens still
/// match.
#[derive(Debug)]
pub struct LookupTables<'a> {
    nouns: HashMap<String, &'a Word>,
    verbs: HashMap<String, &'a Word>,
    adjectives: HashMap<String, &'a Word>,
}

impl<'a> LookupTables<'a> {
    /// Index every inflected form of every record. When two records
    /// share a surface form the later one wins.
    pub fn build(words: &'a [Word]) -> LookupTables<'a> {
        let mut tables = LookupTables {
            nouns: HashMap::new(),
            verbs: HashMap::new(),
            adjectives: HashMap::new(),
        };

        for word in words {
            match word {
                Word::Noun(noun) => tables.index_noun(noun, word),
                Word::Verb(verb) => tables.index_verb(verb, word),
                Word::Adjective(adjective) => tables.index_adjective(adjective, word),
            }
        }

        tracing::debug!(
            "indexed {} noun, {} verb and {} adjective forms",
            tables.nouns.len(),
            tables.verbs.len(),
            tables.adjectives.len()
        );
        tables
    }

    pub fn noun(&self, form: &str) -> Option<&'a Word> {
        self.nouns.get(&key(form).to_lowercase()).copied()
    }

    pub fn verb(&self, form: &str) -> Option<&'a Word> {
        self.verbs.get(&key(form)).copied()
    }

    pub fn adjective(&self, form: &str) -> Option<&'a Word> {
        self.adjectives.get(&key(form)).copied()
    }

    fn index_noun(&mut self, noun: &'a Noun, word: &'a Word) {
        let cases = &noun.cases;
        let forms = [
            cases.nominative.singular.as_deref(),
            cases.genitive.singular.as_deref(),
            cases.dative.singular.as_deref(),
            cases.accusative.singular.as_deref(),
            cases.nominative.plural.as_deref(),
            cases.genitive.plural.as_deref(),
            cases.dative.plural.as_deref(),
            cases.accusative.plural.as_deref(),
        ];

        for form in forms.into_iter().flatten() {
            if !form.is_empty() {
                self.nouns.insert(key(form).to_lowercase(), word);
            }
        }
    }

    fn index_verb(&mut self, verb: &'a Verb, word: &'a Word) {
        let mut forms: Vec<String> = Vec::new();
        for row in [&verb.present, &verb.simple] {
            for pronoun in Pronoun::ALL {
                forms.push(join_separable(row.get(pronoun)));
            }
        }
        if let Some(imperative) = &verb.imperative {
            forms.push(imperative.du.clone());
        }
        forms.push(verb.perfect.clone());
        forms.push(verb.zuinfinitive.clone());
        forms.push(verb.lemma.replacen('_', "", 1));

        for form in forms {
            if !form.is_empty() {
                self.verbs.insert(key(&form), word);
            }
        }
    }

    fn index_adjective(&mut self, adjective: &'a Adjective, word: &'a Word) {
        let strong = &adjective.strong;
        let mixed = &adjective.mixed;
        let weak = &adjective.weak;

        let forms = [
            Some(adjective.lemma.as_str()),
            strong.accusative.m.as_deref(),
            strong.dative.m.as_deref(),
            strong.dative.f.as_deref(),
            strong.dative.p.as_deref(),
            strong.genitive.m.as_deref(),
            strong.genitive.p.as_deref(),
            strong.nominative.m.as_deref(),
            strong.nominative.n.as_deref(),
            strong.nominative.f.as_deref(),
            strong.nominative.p.as_deref(),
            mixed.accusative.m.as_deref(),
            mixed.dative.m.as_deref(),
            mixed.dative.p.as_deref(),
            mixed.genitive.p.as_deref(),
            mixed.nominative.m.as_deref(),
            mixed.nominative.n.as_deref(),
            mixed.nominative.f.as_deref(),
            mixed.nominative.p.as_deref(),
            weak.accusative.m.as_deref(),
            weak.dative.m.as_deref(),
            weak.dative.f.as_deref(),
            weak.genitive.m.as_deref(),
            weak.nominative.m.as_deref(),
        ];

        for form in forms.into_iter().flatten() {
            if !form.is_empty() {
                self.adjectives.insert(key(form), word);
            }
        }
    }
}

/// Taggers may hand back decomposed characters; keys and queries both
/// go through NFC so "schön" matches either way.
fn key(form: &str) -> String {
    form.nfc().collect()
}

/// "steht auf" indexes as "aufsteht", the surface shape a finite verb
/// takes once its particle recombines.
fn join_separable(form: &str) -> String {
    let mut parts = form.split(' ');
    match (parts.next(), parts.next()) {
        (Some(stem), Some(particle)) => format!("{particle}{stem}"),
        _ => form.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use wortschatz_core::{
        CaseForms, CaseTable, Conjugation, Declension, DeclinedForms, Gender, Noun, Verb, Word,
    };

    use super::*;

    fn noun(lemma: &str, plural: &str) -> Word {
        let row = CaseForms {
            singular: Some(lemma.to_owned()),
            plural: Some(plural.to_owned()),
        };
        Word::Noun(Noun {
            lemma: lemma.to_owned(),
            level: None,
            translations: vec![],
            frequency: None,
            gender: Some(Gender::Feminine),
            no_article: false,
            singular_only: false,
            plural_only: false,
            cases: CaseTable {
                nominative: row.clone(),
                accusative: row.clone(),
                dative: row.clone(),
                genitive: row,
            },
        })
    }

    fn verb(lemma: &str, ich: &str, es: &str) -> Word {
        let present = Conjugation {
            ich: ich.to_owned(),
            es: es.to_owned(),
            ..Conjugation::default()
        };
        Word::Verb(Verb {
            lemma: lemma.to_owned(),
            level: None,
            translations: vec![],
            frequency: None,
            separable: lemma.contains('_'),
            present,
            simple: Conjugation::default(),
            conjunctive1: Conjugation::default(),
            conjunctive2: Conjugation::default(),
            imperative: None,
            perfect: String::new(),
            gerund: String::new(),
            zuinfinitive: String::new(),
        })
    }

    fn adjective(lemma: &str) -> Word {
        let strong = Declension {
            dative: DeclinedForms {
                m: Some(format!("{lemma}em")),
                ..DeclinedForms::default()
            },
            nominative: DeclinedForms {
                f: Some(format!("{lemma}e")),
                ..DeclinedForms::default()
            },
            ..Declension::default()
        };
        Word::Adjective(Adjective {
            lemma: lemma.to_owned(),
            level: None,
            translations: vec![],
            frequency: None,
            singular_only: false,
            plural_only: false,
            predicative_only: false,
            absolute: false,
            not_declinable: false,
            no_mixed: false,
            strong,
            weak: Declension::default(),
            mixed: Declension::default(),
            comparative: None,
            is_comparative: false,
            no_comparative: false,
            superlative: None,
            is_superlative: false,
            superlative_only: false,
            common_nouns: None,
        })
    }

    #[test]
    fn test_noun_lookup_is_case_insensitive() {
        let words = vec![noun("Lampe", "Lampen")];
        let tables = LookupTables::build(&words);
        assert!(tables.noun("Lampen").is_some());
        assert!(tables.noun("lampen").is_some());
        assert!(tables.noun("Tisch").is_none());
    }

    #[test]
    fn test_separable_present_forms_index_recombined() {
        let words = vec![verb("auf_stehen", "stehe auf", "steht auf")];
        let tables = LookupTables::build(&words);
        assert!(tables.verb("aufstehe").is_some());
        assert!(tables.verb("aufsteht").is_some());
        assert!(tables.verb("stehe auf").is_none());
    }

    #[test]
    fn test_lemma_indexes_without_delimiter() {
        let words = vec![verb("auf_stehen", "stehe auf", "steht auf")];
        let tables = LookupTables::build(&words);
        assert!(tables.verb("aufstehen").is_some());
        assert!(tables.verb("auf_stehen").is_none());
    }

    #[test]
    fn test_blank_cells_are_not_indexed() {
        let words = vec![verb("lernen", "lerne", "lernt")];
        let tables = LookupTables::build(&words);
        assert!(tables.verb("").is_none());
        assert!(tables.verb("lernt").is_some());
    }

    #[test]
    fn test_later_records_win_shared_forms() {
        let words = vec![verb("lernen", "lerne", "lernt"), verb("lehren", "lerne", "lehrt")];
        let tables = LookupTables::build(&words);
        let hit = tables.verb("lerne").unwrap();
        assert_eq!(hit.lemma(), "lehren");
    }

    #[test]
    fn test_adjective_lemma_and_cells_index() {
        let words = vec![adjective("schön")];
        let tables = LookupTables::build(&words);
        assert!(tables.adjective("schön").is_some());
        assert!(tables.adjective("schönem").is_some());
        assert!(tables.adjective("schöne").is_some());
        assert!(tables.adjective("Schön").is_none());
    }

    #[test]
    fn test_decomposed_queries_normalize() {
        let words = vec![adjective("schön")];
        let tables = LookupTables::build(&words);
        assert!(tables.adjective("scho\u{308}n").is_some());
    }

    #[test]
    fn test_join_separable_shapes() {
        assert_eq!(join_separable("steht auf"), "aufsteht");
        assert_eq!(join_separable("lernt"), "lernt");
        assert_eq!(join_separable(""), "");
    }
}
