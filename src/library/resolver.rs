//! Per-part library resolution for a character

use super::definition::LibraryDefinition;
use super::id::{IdPart, Selector};
use crate::warning::Warning;
use std::collections::HashMap;
use std::hash::Hash;

/// The library chosen for one slot of a character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<P> {
    pub part: P,
    pub library: String,
    /// True when no applicable definition was found and the default was used.
    pub fallback: bool,
}

/// Result of resolving every slot of a character.
#[derive(Debug, Clone)]
pub struct Resolution<P> {
    pub assignments: Vec<Assignment<P>>,
    pub warnings: Vec<Warning>,
}

impl<P: PartialEq> Resolution<P> {
    pub fn library_for(&self, part: &P) -> Option<&str> {
        self.assignments.iter().find(|a| &a.part == part).map(|a| a.library.as_str())
    }
}

/// Chooses a sprite library for each part slot of a character.
///
/// Each slot starts from the default library and is overridden by the
/// definition registered for that part when it applies to the character.
#[derive(Debug, Clone)]
pub struct CharacterResolver<G, R, C, P> {
    default_library: String,
    slots: Vec<P>,
    definitions: HashMap<P, LibraryDefinition<G, R, C, P>>,
}

impl<G, R, C, P> CharacterResolver<G, R, C, P>
where
    G: Selector + Default,
    R: Selector + Default,
    C: IdPart + Default,
    P: Selector + Default + Eq + Hash + Clone,
{
    pub fn new(default_library: impl Into<String>, slots: Vec<P>) -> Self {
        Self { default_library: default_library.into(), slots, definitions: HashMap::new() }
    }

    /// Register a definition for its part. Returns the definition it replaced.
    pub fn register(
        &mut self,
        definition: LibraryDefinition<G, R, C, P>,
    ) -> Option<LibraryDefinition<G, R, C, P>> {
        let part = definition.part().clone();
        let previous = self.definitions.insert(part, definition);
        if let Some(prev) = &previous {
            log::debug!("definition '{}' replaced", prev.library_id());
        }
        previous
    }

    pub fn definition(&self, part: &P) -> Option<&LibraryDefinition<G, R, C, P>> {
        self.definitions.get(part)
    }

    pub fn slots(&self) -> &[P] {
        &self.slots
    }

    /// Resolve one library per slot, in slot order.
    pub fn resolve(&self, gender: &G, race: &R) -> Resolution<P> {
        let mut warnings = Vec::new();

        if self.default_library.is_empty() {
            warnings.push(Warning::logged("default sprite library is not assigned"));
        }
        if gender.is_none() {
            warnings
                .push(Warning::logged("gender is set to 'none'; libraries may resolve incorrectly"));
        }
        if race.is_none() {
            warnings.push(Warning::logged("race is set to 'none'; libraries may resolve incorrectly"));
        }

        let assignments = self
            .slots
            .iter()
            .map(|part| match self.resolve_slot(part, gender, race, &mut warnings) {
                Some(library) => {
                    Assignment { part: part.clone(), library: library.to_string(), fallback: false }
                }
                None => Assignment {
                    part: part.clone(),
                    library: self.default_library.clone(),
                    fallback: true,
                },
            })
            .collect();

        Resolution { assignments, warnings }
    }

    fn resolve_slot<'a>(
        &'a self,
        part: &P,
        gender: &G,
        race: &R,
        warnings: &mut Vec<Warning>,
    ) -> Option<&'a str> {
        let Some(definition) = self.definitions.get(part) else {
            log::debug!("no definition for part '{}', using default", part.id_part());
            return None;
        };

        let mismatches = definition.check(gender, part, race);
        if !mismatches.is_empty() {
            let reasons: Vec<String> = mismatches.iter().map(|m| m.to_string()).collect();
            warnings.push(Warning::logged(format!(
                "library '{}' does not apply: {}",
                definition.library_id(),
                reasons.join("; ")
            )));
            return None;
        }

        if definition.library().is_none() {
            warnings.push(Warning::logged(format!(
                "library '{}' has no sprite library assigned",
                definition.library_id()
            )));
        }
        definition.library()
    }
}
