use wortschatz_core::{
    Adjective, Case, CaseTable, Conjugation, Declension, DeclinedForm, Gender, Imperative, Level,
    Noun, Number, Pronoun, Verb, Word, WordType,
};

use crate::CodecError;

/// Serialize one record into a tab-separated row. Inflected forms have
/// the stem elided to `=` and, for separable verbs, the prefix elided
/// to `~`.
pub fn encode_record(word: &Word) -> String {
    let mut fields: Vec<String> = vec![
        word.word_type().as_str().to_owned(),
        word.lemma().to_owned(),
        word.level().map(|l| l.as_str().to_owned()).unwrap_or_default(),
        word.translations().join("|"),
        word.frequency().map(|f| f.to_string()).unwrap_or_default(),
    ];

    match word {
        Word::Noun(noun) => encode_noun(noun, &mut fields),
        Word::Verb(verb) => encode_verb(verb, &mut fields),
        Word::Adjective(adjective) => encode_adjective(adjective, &mut fields),
    }

    fields.join("\t")
}

/// Parse one row back into a record. Missing trailing fields read as
/// empty, so rows from older snapshots still decode.
pub fn decode_record(row: &str) -> Result<Word, CodecError> {
    let mut cursor = FieldCursor::new(row);

    let tag = cursor.field();
    let word_type =
        WordType::from_str(tag).ok_or_else(|| CodecError::UnknownWordType(tag.to_owned()))?;

    let lemma = cursor.field().to_owned();
    let level = Level::from_str(cursor.field());
    let translations = split_list(cursor.field());
    let frequency = cursor.field().parse::<f64>().ok();

    Ok(match word_type {
        WordType::Noun => {
            Word::Noun(decode_noun(lemma, level, translations, frequency, &mut cursor))
        }
        WordType::Verb => {
            Word::Verb(decode_verb(lemma, level, translations, frequency, &mut cursor))
        }
        WordType::Adjective => {
            Word::Adjective(decode_adjective(lemma, level, translations, frequency, &mut cursor))
        }
    })
}

/// Walks the tab-separated fields of a row, yielding empty strings once
/// the row runs out.
struct FieldCursor<'a> {
    fields: std::str::Split<'a, char>,
}

impl<'a> FieldCursor<'a> {
    fn new(row: &'a str) -> FieldCursor<'a> {
        FieldCursor {
            fields: row.split('\t'),
        }
    }

    fn field(&mut self) -> &'a str {
        self.fields.next().unwrap_or("")
    }
}

fn flag(value: bool) -> String {
    if value { "t" } else { "f" }.to_owned()
}

fn split_list(field: &str) -> Vec<String> {
    if field.is_empty() {
        return Vec::new();
    }
    field.split('|').map(str::to_owned).collect()
}

/// Replace the first occurrence of the stem with `=`.
fn elide_first(form: &str, stem: &str) -> String {
    if stem.is_empty() {
        return form.to_owned();
    }
    form.replacen(stem, "=", 1)
}

/// Put the stem back for the first `=`.
fn expand_first(cell: &str, stem: &str) -> String {
    if stem.is_empty() {
        return cell.to_owned();
    }
    cell.replacen('=', stem, 1)
}

/// Conjugation stem: the last lemma segment without its final two
/// characters, e.g. `lern` for `lernen` and `steh` for `auf_stehen`.
fn verb_stem(lemma: &str) -> &str {
    let base = lemma.rsplit('_').next().unwrap_or(lemma);
    match base.char_indices().rev().nth(1) {
        Some((idx, _)) => &base[..idx],
        None => "",
    }
}

/// Verb forms elide every stem occurrence, and for separable verbs
/// every prefix occurrence, since both can show up more than once in a
/// single cell ("aufzustehen").
fn elide_verb(form: &str, stem: &str, prefix: Option<&str>) -> String {
    let mut out = if stem.is_empty() {
        form.to_owned()
    } else {
        form.replace(stem, "=")
    };
    if let Some(prefix) = prefix {
        if !prefix.is_empty() {
            out = out.replace(prefix, "~");
        }
    }
    out
}

fn expand_verb(cell: &str, stem: &str, prefix: Option<&str>) -> String {
    let mut out = if stem.is_empty() {
        cell.to_owned()
    } else {
        cell.replace('=', stem)
    };
    if let Some(prefix) = prefix {
        if !prefix.is_empty() {
            out = out.replace('~', prefix);
        }
    }
    out
}

/// Superlative-only lemmas end in `sten`; stripping the ending leaves
/// the stem shared by the declined cells.
fn adjective_stem(lemma: &str) -> &str {
    lemma.strip_suffix("sten").unwrap_or(lemma)
}

fn encode_noun(noun: &Noun, fields: &mut Vec<String>) {
    fields.push(noun.gender.map(|g| g.as_str().to_owned()).unwrap_or_default());
    fields.push(flag(noun.no_article));
    fields.push(flag(noun.singular_only));
    fields.push(flag(noun.plural_only));

    let mut cells = Vec::with_capacity(8);
    for case in Case::ALL {
        for number in Number::ALL {
            let form = noun.cases.get(case).get(number).unwrap_or("");
            cells.push(elide_first(form, &noun.lemma));
        }
    }
    fields.push(cells.join("|"));
}

fn decode_noun(
    lemma: String,
    level: Option<Level>,
    translations: Vec<String>,
    frequency: Option<f64>,
    cursor: &mut FieldCursor,
) -> Noun {
    let gender = Gender::from_str(cursor.field());
    let no_article = cursor.field() == "t";
    let singular_only = cursor.field() == "t";
    let plural_only = cursor.field() == "t";

    let mut cells = cursor.field().split('|');
    let mut cases = CaseTable::default();
    for case in Case::ALL {
        for number in Number::ALL {
            let cell = cells.next().unwrap_or("");
            let form = (!cell.is_empty()).then(|| expand_first(cell, &lemma));
            cases.get_mut(case).set(number, form);
        }
    }

    Noun {
        lemma,
        level,
        translations,
        frequency,
        gender,
        no_article,
        singular_only,
        plural_only,
        cases,
    }
}

fn encode_verb(verb: &Verb, fields: &mut Vec<String>) {
    let stem = verb_stem(&verb.lemma);
    let prefix = verb
        .separable
        .then(|| verb.lemma.split('_').next().unwrap_or(""));

    fields.push(flag(verb.separable));

    for table in [
        &verb.present,
        &verb.simple,
        &verb.conjunctive1,
        &verb.conjunctive2,
    ] {
        let cells: Vec<String> = Pronoun::ALL
            .iter()
            .map(|&pronoun| elide_verb(table.get(pronoun), stem, prefix))
            .collect();
        fields.push(cells.join("|"));
    }

    match &verb.imperative {
        Some(imperative) => {
            fields.push(elide_verb(&imperative.du, stem, prefix));
            fields.push(elide_verb(&imperative.ihr, stem, prefix));
            fields.push(elide_verb(&imperative.sie, stem, prefix));
        }
        None => fields.extend([String::new(), String::new(), String::new()]),
    }

    fields.push(elide_verb(&verb.perfect, stem, prefix));
    fields.push(elide_verb(&verb.gerund, stem, prefix));
    fields.push(elide_verb(&verb.zuinfinitive, stem, prefix));
}

fn decode_verb(
    lemma: String,
    level: Option<Level>,
    translations: Vec<String>,
    frequency: Option<f64>,
    cursor: &mut FieldCursor,
) -> Verb {
    let separable = cursor.field() == "t";
    let stem = verb_stem(&lemma);
    let prefix = separable.then(|| lemma.split('_').next().unwrap_or(""));

    let conjugation = |raw: &str| -> Conjugation {
        let mut cells = raw.split('|');
        let mut row = Conjugation::default();
        for pronoun in Pronoun::ALL {
            *row.get_mut(pronoun) = expand_verb(cells.next().unwrap_or(""), stem, prefix);
        }
        row
    };

    let present = conjugation(cursor.field());
    let simple = conjugation(cursor.field());
    let conjunctive1 = conjugation(cursor.field());
    let conjunctive2 = conjugation(cursor.field());

    let raw_du = cursor.field();
    let raw_ihr = cursor.field();
    let raw_sie = cursor.field();
    // An empty du form means the verb has no imperative at all.
    let imperative = (!raw_du.is_empty()).then(|| Imperative {
        du: expand_verb(raw_du, stem, prefix),
        ihr: expand_verb(raw_ihr, stem, prefix),
        sie: expand_verb(raw_sie, stem, prefix),
    });

    let perfect = expand_verb(cursor.field(), stem, prefix);
    let gerund = expand_verb(cursor.field(), stem, prefix);
    let zuinfinitive = expand_verb(cursor.field(), stem, prefix);

    Verb {
        lemma,
        level,
        translations,
        frequency,
        separable,
        present,
        simple,
        conjunctive1,
        conjunctive2,
        imperative,
        perfect,
        gerund,
        zuinfinitive,
    }
}

fn encode_adjective(adjective: &Adjective, fields: &mut Vec<String>) {
    let stem = adjective_stem(&adjective.lemma);

    fields.push(flag(adjective.singular_only));
    fields.push(flag(adjective.plural_only));
    fields.push(flag(adjective.predicative_only));
    fields.push(flag(adjective.absolute));
    fields.push(flag(adjective.not_declinable));
    fields.push(flag(adjective.no_mixed));

    for table in [&adjective.strong, &adjective.weak, &adjective.mixed] {
        let mut cells = Vec::with_capacity(16);
        for case in Case::ALL {
            for form in DeclinedForm::ALL {
                let cell = table.get(case).get(form).unwrap_or("");
                cells.push(elide_first(cell, stem));
            }
        }
        fields.push(cells.join("|"));
    }

    fields.push(elide_first(adjective.comparative.as_deref().unwrap_or(""), stem));
    fields.push(flag(adjective.is_comparative));
    fields.push(flag(adjective.no_comparative));
    fields.push(elide_first(adjective.superlative.as_deref().unwrap_or(""), stem));
    fields.push(flag(adjective.is_superlative));
    fields.push(flag(adjective.superlative_only));
    fields.push(
        adjective
            .common_nouns
            .as_deref()
            .map(|nouns| nouns.join("|"))
            .unwrap_or_default(),
    );
}

fn decode_adjective(
    lemma: String,
    level: Option<Level>,
    translations: Vec<String>,
    frequency: Option<f64>,
    cursor: &mut FieldCursor,
) -> Adjective {
    let singular_only = cursor.field() == "t";
    let plural_only = cursor.field() == "t";
    let predicative_only = cursor.field() == "t";
    let absolute = cursor.field() == "t";
    let not_declinable = cursor.field() == "t";
    let no_mixed = cursor.field() == "t";

    let stem = adjective_stem(&lemma);

    let declension = |raw: &str| -> Declension {
        let mut cells = raw.split('|');
        let mut table = Declension::default();
        for case in Case::ALL {
            for form in DeclinedForm::ALL {
                let cell = cells.next().unwrap_or("");
                let value = (!cell.is_empty()).then(|| expand_first(cell, stem));
                table.get_mut(case).set(form, value);
            }
        }
        table
    };

    let strong = declension(cursor.field());
    let weak = declension(cursor.field());
    let mixed = declension(cursor.field());

    let comparative = graded_form(cursor.field(), stem);
    let is_comparative = cursor.field() == "t";
    let no_comparative = cursor.field() == "t";
    let superlative = graded_form(cursor.field(), stem);
    let is_superlative = cursor.field() == "t";
    let superlative_only = cursor.field() == "t";

    let nouns = cursor.field();
    let common_nouns = (!nouns.is_empty()).then(|| split_list(nouns));

    Adjective {
        lemma,
        level,
        translations,
        frequency,
        singular_only,
        plural_only,
        predicative_only,
        absolute,
        not_declinable,
        no_mixed,
        strong,
        weak,
        mixed,
        comparative,
        is_comparative,
        no_comparative,
        superlative,
        is_superlative,
        superlative_only,
        common_nouns,
    }
}

fn graded_form(cell: &str, stem: &str) -> Option<String> {
    (!cell.is_empty()).then(|| expand_first(cell, stem))
}
