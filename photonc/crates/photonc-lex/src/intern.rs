//! Arena-backed string interning.
//!
//! Identifier text and decoded literal bodies are copied into the lexer's
//! arena once; equal strings share one backing slice, so token equality
//! on text reduces to comparing short slices that sit in a handful of
//! arena blocks.

use rustc_hash::FxHashMap;

use photonc_util::Arena;

/// Deduplicating string store on top of an [`Arena`].
///
/// `intern` hands out `&'a str` slices owned by the arena; interning the
/// same text twice returns the identical slice.
pub struct StringInterner<'a> {
    arena: &'a Arena,
    map: FxHashMap<&'a str, &'a str>,
}

impl<'a> StringInterner<'a> {
    pub fn new(arena: &'a Arena) -> StringInterner<'a> {
        StringInterner {
            arena,
            map: FxHashMap::default(),
        }
    }

    /// Intern `text`, copying it into the arena on first sight.
    pub fn intern(&mut self, text: &str) -> &'a str {
        if let Some(stored) = self.map.get(text).copied() {
            return stored;
        }
        let stored = self.arena.alloc_str(text);
        self.map.insert(stored, stored);
        stored
    }

    /// Number of distinct interned strings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
