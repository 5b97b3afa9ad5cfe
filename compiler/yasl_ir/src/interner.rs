//! String interner for identifier and lexeme storage.
//!
//! Provides O(1) interning and lookup. A single `RwLock` protects the
//! table; YASL sources are small enough that sharding would buy nothing.

// Arc is needed for SharedInterner - the interner is shared between the
// lexer, the evaluator, and the driver.
use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Interner storage: map from string content to index, plus the strings.
struct InternTable {
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

impl InternTable {
    fn with_empty() -> Self {
        // Pre-intern the empty string at index 0 so Name::EMPTY is valid.
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, 0);
        InternTable {
            map,
            strings: vec![empty],
        }
    }
}

/// String interner providing O(1) lookup and equality for interned text.
///
/// Interned strings are leaked and live for the process lifetime; a
/// single interpreter run interns a bounded set of identifiers and
/// numeric lexemes, so this is the usual compiler trade.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create a new interner with the YASL keywords pre-interned.
    pub fn new() -> Self {
        let interner = StringInterner {
            table: RwLock::new(InternTable::with_empty()),
        };
        interner.pre_intern_keywords();
        interner
    }

    /// Intern a string, returning its [`Name`].
    ///
    /// Interning the same text twice yields equal names.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        // Fast path: already interned.
        {
            let guard = self.table.read();
            if let Some(&index) = guard.map.get(s) {
                return Name::from_index(index);
            }
        }
        self.intern_slow(s.to_owned())
    }

    /// Intern an owned `String`, avoiding the extra allocation of
    /// `intern(&s)` when the caller already owns the text.
    pub fn intern_owned(&self, s: String) -> Name {
        {
            let guard = self.table.read();
            if let Some(&index) = guard.map.get(s.as_str()) {
                return Name::from_index(index);
            }
        }
        self.intern_slow(s)
    }

    fn intern_slow(&self, s: String) -> Name {
        let mut guard = self.table.write();
        // Double-check after acquiring the write lock.
        if let Some(&index) = guard.map.get(s.as_str()) {
            return Name::from_index(index);
        }
        let leaked: &'static str = Box::leak(s.into_boxed_str());
        let index = u32::try_from(guard.strings.len())
            .unwrap_or_else(|_| panic!("interner exceeded {} strings", u32::MAX));
        guard.strings.push(leaked);
        guard.map.insert(leaked, index);
        Name::from_index(index)
    }

    /// Look up the text for a [`Name`].
    ///
    /// Interned strings are never deallocated, so the returned reference
    /// is `'static`.
    pub fn lookup(&self, name: Name) -> &'static str {
        let guard = self.table.read();
        guard.strings[name.index()]
    }

    /// Number of interned strings.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Check if the interner holds only the empty string.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    /// Pre-intern the YASL keywords and common identifiers.
    fn pre_intern_keywords(&self) {
        const KEYWORDS: &[&str] = &[
            "program", "print", "mod", "div", "val", "begin", "end", "main", "int", "bool",
        ];
        for kw in KEYWORDS {
            self.intern(kw);
        }
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared interner handle passed between the lexer, evaluator, and driver.
///
/// This newtype enforces that interner sharing goes through one type
/// rather than ad-hoc `Arc<StringInterner>` plumbing.
#[derive(Clone)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    /// Create a new shared interner.
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl Default for SharedInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
