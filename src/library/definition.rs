//! Sprite library definitions keyed by gender, race, color and part

use super::id::{IdPart, Selector};
use crate::warning::Warning;
use std::cell::OnceCell;
use std::fmt;

/// Why a definition does not apply to a requested character slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    Gender { requested: String, applicable: String },
    Part { requested: String, applicable: String },
    Race { requested: String, applicable: Vec<String> },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Gender { requested, applicable } => {
                write!(f, "gender mismatch: {} != {}", requested, applicable)
            }
            Mismatch::Part { requested, applicable } => {
                write!(f, "part mismatch: {} != {}", requested, applicable)
            }
            Mismatch::Race { requested, applicable } => {
                write!(f, "race mismatch: {} not in [{}]", requested, applicable.join(", "))
            }
        }
    }
}

/// Declares which characters a sprite library applies to.
///
/// `G`, `R`, `C` and `P` are the gender, race, color permutation and part
/// types. Each has an unset value (see [`IdPart::is_none`]) that is flagged by
/// [`validate`](Self::validate) and never matches a request.
#[derive(Debug, Clone)]
pub struct LibraryDefinition<G, R, C, P> {
    library: Option<String>,
    variant: String,
    gender: G,
    part: P,
    color: C,
    races: Vec<R>,
    id: OnceCell<String>,
}

impl<G, R, C, P> LibraryDefinition<G, R, C, P>
where
    G: Selector + Default,
    R: Selector + Default,
    C: IdPart + Default,
    P: Selector + Default,
{
    pub fn new(variant: impl Into<String>) -> Self {
        Self {
            library: None,
            variant: variant.into(),
            gender: G::default(),
            part: P::default(),
            color: C::default(),
            races: vec![R::default()],
            id: OnceCell::new(),
        }
    }

    pub fn with_library(mut self, library: impl Into<String>) -> Self {
        self.library = Some(library.into());
        self
    }

    pub fn with_gender(mut self, gender: G) -> Self {
        self.set_gender(gender);
        self
    }

    pub fn with_part(mut self, part: P) -> Self {
        self.set_part(part);
        self
    }

    pub fn with_color(mut self, color: C) -> Self {
        self.set_color(color);
        self
    }

    pub fn with_races(mut self, races: Vec<R>) -> Self {
        self.races = races;
        self
    }

    pub fn set_gender(&mut self, gender: G) {
        self.gender = gender;
        self.id.take();
    }

    pub fn set_part(&mut self, part: P) {
        self.part = part;
        self.id.take();
    }

    pub fn set_color(&mut self, color: C) {
        self.color = color;
        self.id.take();
    }

    pub fn set_variant(&mut self, variant: impl Into<String>) {
        self.variant = variant.into();
        self.id.take();
    }

    pub fn library(&self) -> Option<&str> {
        self.library.as_deref()
    }

    pub fn part(&self) -> &P {
        &self.part
    }

    /// `{gender}_{part}_{variant}_{color}`, computed once per set of inputs.
    pub fn library_id(&self) -> &str {
        self.id.get_or_init(|| {
            format!(
                "{}_{}_{}_{}",
                self.gender.id_part(),
                self.part.id_part(),
                self.variant,
                self.color.id_part()
            )
        })
    }

    /// Report unset fields.
    pub fn validate(&self) -> Vec<Warning> {
        let mut warnings = Vec::new();
        let id = self.library_id();

        if self.gender.is_none() {
            warnings.push(Warning::logged(format!("library '{}' has gender set to 'none'", id)));
        }
        if self.color.is_none() {
            warnings.push(Warning::logged(format!(
                "library '{}' has color permutation set to 'none'",
                id
            )));
        }
        if self.races.is_empty() || self.races.iter().any(IdPart::is_none) {
            warnings.push(Warning::logged(format!(
                "library '{}' has no races defined or has 'none' in the list",
                id
            )));
        }
        if self.part.is_none() {
            warnings.push(Warning::logged(format!("library '{}' has part set to 'none'", id)));
        }

        warnings
    }

    /// List the reasons this definition does not apply. Empty means it applies.
    pub fn check(&self, gender: &G, part: &P, race: &R) -> Vec<Mismatch> {
        let mut mismatches = Vec::new();

        if !self.gender.accepts(gender) {
            mismatches.push(Mismatch::Gender {
                requested: gender.id_part(),
                applicable: self.gender.id_part(),
            });
        }
        if !self.part.accepts(part) {
            mismatches
                .push(Mismatch::Part { requested: part.id_part(), applicable: self.part.id_part() });
        }
        if !self.races.iter().any(|r| r.accepts(race)) {
            mismatches.push(Mismatch::Race {
                requested: race.id_part(),
                applicable: self.races.iter().map(IdPart::id_part).collect(),
            });
        }

        mismatches
    }

    /// The library to use for a request, if one is assigned and applicable.
    pub fn resolve(&self, gender: &G, part: &P, race: &R) -> Option<&str> {
        let library = self.library.as_deref()?;
        self.check(gender, part, race).is_empty().then_some(library)
    }
}
