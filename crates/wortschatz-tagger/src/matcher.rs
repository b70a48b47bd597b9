use wortschatz_core::Word;
use wortschatz_lookup::LookupTables;

use crate::client::{SentenceToken, TagError, Tagger};
use crate::tags::Tag;

/// First verb of the current clause: where its slot sits in the output and
/// where its token sits in the sentence.
struct OpenVerb {
    matched_idx: usize,
    token_idx: usize,
}

/// Align tagged tokens with dataset records.
///
/// Every non-punctuation token produces one output slot, `None` when nothing
/// in the dataset matches. Punctuation produces no slot and closes the
/// current clause. A separable verb split across its clause is stitched back
/// together when the particle turns up, including particles the tagger
/// mistook for a clause-final adverb or adjective.
pub fn match_sentence<'a>(
    tokens: &[SentenceToken],
    tables: &LookupTables<'a>,
) -> Vec<Option<&'a Word>> {
    let mut matched: Vec<Option<&'a Word>> = Vec::with_capacity(tokens.len());
    let mut open_verb: Option<OpenVerb> = None;

    for (i, token) in tokens.iter().enumerate() {
        if token.tag.is_punctuation() {
            open_verb = None;
            continue;
        }

        let clause_final = i + 1 == tokens.len() || tokens[i + 1].tag.is_punctuation();

        if token.tag.is_noun() {
            matched.push(tables.noun(&token.token));
        } else if token.tag.is_adjective() {
            if let Some(verb) = &open_verb
                && clause_final
            {
                recombine(&mut matched, verb, tokens, &token.token, tables);
                matched.push(None);
            } else {
                matched.push(tables.adjective(&token.token));
            }
        } else if token.tag.is_verb() {
            if open_verb.is_none() {
                open_verb = Some(OpenVerb {
                    matched_idx: matched.len(),
                    token_idx: i,
                });
            }
            matched.push(tables.verb(&token.token));
        } else if token.tag == Tag::SeparableParticle {
            if let Some(verb) = &open_verb {
                recombine(&mut matched, verb, tokens, &token.token, tables);
            }
            matched.push(None);
        } else if token.tag == Tag::Adverb {
            if let Some(verb) = &open_verb
                && clause_final
            {
                recombine(&mut matched, verb, tokens, &token.token, tables);
            }
            matched.push(None);
        } else {
            matched.push(None);
        }
    }

    matched
}

/// Upgrade the open verb's slot if particle plus verb token resolves in the
/// verb table. On a miss the slot keeps whatever it had.
fn recombine<'a>(
    matched: &mut [Option<&'a Word>],
    verb: &OpenVerb,
    tokens: &[SentenceToken],
    particle: &str,
    tables: &LookupTables<'a>,
) {
    let joined = format!("{}{}", particle, tokens[verb.token_idx].token);
    if let Some(word) = tables.verb(&joined) {
        matched[verb.matched_idx] = Some(word);
    }
}

/// Tag a sentence through `tagger` and align the tokens with the dataset.
pub async fn resolve_sentence<'a, T>(
    tagger: &T,
    sentence: &str,
    tables: &LookupTables<'a>,
) -> Result<Vec<Option<&'a Word>>, TagError>
where
    T: Tagger + ?Sized,
{
    let tokens = tagger.tag(sentence).await?;
    Ok(match_sentence(&tokens, tables))
}

#[cfg(test)]
mod tests {
    use wortschatz_core::{
        Adjective, CaseTable, Conjugation, Declension, DeclinedForms, Gender, Noun, Verb,
    };

    use super::*;

    fn token(tag: Tag, text: &str) -> SentenceToken {
        SentenceToken {
            id: 0,
            start: 0,
            end: 0,
            tag,
            token: text.to_string(),
        }
    }

    fn verb(lemma: &str, present: [&str; 5]) -> Word {
        let [ich, du, es, ihr, sie] = present.map(str::to_string);
        Word::Verb(Verb {
            lemma: lemma.to_string(),
            level: None,
            translations: vec![],
            frequency: None,
            separable: lemma.contains('_'),
            present: Conjugation {
                ich,
                du,
                es,
                ihr,
                sie,
            },
            simple: Conjugation::default(),
            conjunctive1: Conjugation::default(),
            conjunctive2: Conjugation::default(),
            imperative: None,
            perfect: String::new(),
            gerund: String::new(),
            zuinfinitive: String::new(),
        })
    }

    fn noun(lemma: &str) -> Word {
        let mut cases = CaseTable::default();
        cases.nominative.singular = Some(lemma.to_string());
        Word::Noun(Noun {
            lemma: lemma.to_string(),
            level: None,
            translations: vec![],
            frequency: None,
            gender: Some(Gender::Feminine),
            no_article: false,
            singular_only: false,
            plural_only: false,
            cases,
        })
    }

    fn adjective(lemma: &str, nominative_f: &str) -> Word {
        Word::Adjective(Adjective {
            lemma: lemma.to_string(),
            level: None,
            translations: vec![],
            frequency: None,
            singular_only: false,
            plural_only: false,
            predicative_only: false,
            absolute: false,
            not_declinable: false,
            no_mixed: false,
            strong: Declension {
                nominative: DeclinedForms {
                    f: Some(nominative_f.to_string()),
                    ..DeclinedForms::default()
                },
                ..Declension::default()
            },
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

    fn aufstehen() -> Word {
        verb(
            "auf_stehen",
            [
                "stehe auf",
                "stehst auf",
                "steht auf",
                "steht auf",
                "stehen auf",
            ],
        )
    }

    fn lernen() -> Word {
        verb("lernen", ["lerne", "lernst", "lernt", "lernt", "lernen"])
    }

    #[test]
    fn test_separable_verb_recombines_with_trailing_particle() {
        let words = vec![aufstehen()];
        let tables = LookupTables::build(&words);
        let tokens = vec![
            token(Tag::PersonalPronoun, "ich"),
            token(Tag::FiniteVerb, "stehe"),
            token(Tag::Adverb, "früh"),
            token(Tag::SeparableParticle, "auf"),
        ];

        let matched = match_sentence(&tokens, &tables);

        assert_eq!(matched.len(), 4);
        assert!(matched[0].is_none());
        assert_eq!(matched[1].unwrap().lemma(), "auf_stehen");
        assert!(matched[2].is_none());
        assert!(matched[3].is_none());
    }

    #[test]
    fn test_clause_final_adverb_recombines_like_a_particle() {
        let words = vec![aufstehen()];
        let tables = LookupTables::build(&words);
        let tokens = vec![
            token(Tag::FiniteVerb, "stehe"),
            token(Tag::Adverb, "auf"),
        ];

        let matched = match_sentence(&tokens, &tables);

        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].unwrap().lemma(), "auf_stehen");
        assert!(matched[1].is_none());
    }

    #[test]
    fn test_adverb_mid_clause_does_not_recombine() {
        let words = vec![aufstehen(), noun("Lampe")];
        let tables = LookupTables::build(&words);
        let tokens = vec![
            token(Tag::FiniteVerb, "stehe"),
            token(Tag::Adverb, "auf"),
            token(Tag::CommonNoun, "Lampe"),
        ];

        let matched = match_sentence(&tokens, &tables);

        assert!(matched[0].is_none());
        assert!(matched[1].is_none());
        assert_eq!(matched[2].unwrap().lemma(), "Lampe");
    }

    #[test]
    fn test_punctuation_closes_the_clause_and_yields_no_slot() {
        let words = vec![aufstehen(), lernen()];
        let tables = LookupTables::build(&words);
        let tokens = vec![
            token(Tag::FiniteVerb, "lernt"),
            token(Tag::FinalPunct, "."),
            token(Tag::SeparableParticle, "auf"),
        ];

        let matched = match_sentence(&tokens, &tables);

        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].unwrap().lemma(), "lernen");
        assert!(matched[1].is_none());
    }

    #[test]
    fn test_clause_final_adjective_recombines_with_verb() {
        let words = vec![verb(
            "fertig_machen",
            [
                "mache fertig",
                "machst fertig",
                "macht fertig",
                "macht fertig",
                "machen fertig",
            ],
        )];
        let tables = LookupTables::build(&words);
        let tokens = vec![
            token(Tag::PersonalPronoun, "er"),
            token(Tag::FiniteVerb, "macht"),
            token(Tag::PredicativeAdjective, "fertig"),
        ];

        let matched = match_sentence(&tokens, &tables);

        assert!(matched[0].is_none());
        assert_eq!(matched[1].unwrap().lemma(), "fertig_machen");
        assert!(matched[2].is_none());
    }

    #[test]
    fn test_attributive_adjective_uses_the_adjective_table() {
        let words = vec![lernen(), adjective("schön", "schöne"), noun("Lampe")];
        let tables = LookupTables::build(&words);
        let tokens = vec![
            token(Tag::FiniteVerb, "lernt"),
            token(Tag::AttributiveAdjective, "schöne"),
            token(Tag::CommonNoun, "Lampe"),
        ];

        let matched = match_sentence(&tokens, &tables);

        assert_eq!(matched[0].unwrap().lemma(), "lernen");
        assert_eq!(matched[1].unwrap().lemma(), "schön");
        assert_eq!(matched[2].unwrap().lemma(), "Lampe");
    }

    #[test]
    fn test_first_verb_keeps_the_clause_open() {
        let words = vec![aufstehen()];
        let tables = LookupTables::build(&words);
        let tokens = vec![
            token(Tag::FiniteVerb, "stehe"),
            token(Tag::InfinitiveVerb, "gehen"),
            token(Tag::SeparableParticle, "auf"),
        ];

        let matched = match_sentence(&tokens, &tables);

        assert_eq!(matched[0].unwrap().lemma(), "auf_stehen");
        assert!(matched[1].is_none());
        assert!(matched[2].is_none());
    }

    #[test]
    fn test_failed_recombination_keeps_the_direct_match() {
        let words = vec![lernen()];
        let tables = LookupTables::build(&words);
        let tokens = vec![
            token(Tag::FiniteVerb, "lernt"),
            token(Tag::SeparableParticle, "auf"),
        ];

        let matched = match_sentence(&tokens, &tables);

        assert_eq!(matched[0].unwrap().lemma(), "lernen");
        assert!(matched[1].is_none());
    }

    #[test]
    fn test_unknown_words_stay_unmatched() {
        let words = vec![noun("Lampe")];
        let tables = LookupTables::build(&words);
        let tokens = vec![
            token(Tag::CommonNoun, "Tisch"),
            token(Tag::FiniteVerb, "rennt"),
        ];

        let matched = match_sentence(&tokens, &tables);

        assert_eq!(matched, vec![None, None]);
    }

    struct FixedTagger {
        tokens: Vec<SentenceToken>,
    }

    #[async_trait::async_trait]
    impl Tagger for FixedTagger {
        async fn tag(&self, _sentence: &str) -> Result<Vec<SentenceToken>, TagError> {
            Ok(self.tokens.clone())
        }
    }

    #[tokio::test]
    async fn test_resolve_sentence_tags_then_matches() {
        let words = vec![aufstehen()];
        let tables = LookupTables::build(&words);
        let tagger = FixedTagger {
            tokens: vec![
                token(Tag::PersonalPronoun, "ich"),
                token(Tag::FiniteVerb, "stehe"),
                token(Tag::SeparableParticle, "auf"),
            ],
        };

        let matched = resolve_sentence(&tagger, "ich stehe auf", &tables)
            .await
            .unwrap();

        assert_eq!(matched.len(), 3);
        assert_eq!(matched[1].unwrap().lemma(), "auf_stehen");
    }
}
