pub mod level;
pub mod validate;
pub mod word;

pub use level::Level;
pub use validate::{ValidationError, validate};
pub use word::{
    Adjective, Case, CaseForms, CaseTable, Conjugation, Declension, DeclinedForm, DeclinedForms,
    Gender, Imperative, Noun, Number, Pronoun, Verb, Word, WordType,
};
