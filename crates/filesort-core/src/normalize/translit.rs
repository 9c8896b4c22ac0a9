//! Cyrillic to Latin phonetic transcription table.
//!
//! Names produced by earlier runs were built from exactly these sequences.
//! Keys are lower-case; callers fold case before lookup.

/// Fixed mapping from a lower-case Cyrillic letter to its Latin sequence.
#[derive(Debug, Clone, Copy)]
pub struct TranslitTable {
    entries: &'static [(char, &'static str)],
}

pub static CYRILLIC: TranslitTable = TranslitTable {
    entries: &[
        ('а', "a"),
        ('б', "b"),
        ('в', "v"),
        ('г', "g"),
        ('д', "d"),
        ('е', "e"),
        ('ё', "yo"),
        ('ж', "zh"),
        ('з', "z"),
        ('и', "i"),
        ('й', "j"),
        ('к', "k"),
        ('л', "l"),
        ('м', "m"),
        ('н', "n"),
        ('о', "o"),
        ('п', "p"),
        ('р', "r"),
        ('с', "s"),
        ('т', "t"),
        ('у', "u"),
        ('ф', "f"),
        ('х', "h"),
        ('ц', "ts"),
        ('ч', "ch"),
        ('ш', "sh"),
        ('щ', "sch"),
        ('ь', "'"),
        ('ъ', "''"),
        ('ы', "y"),
        ('э', "e"),
        ('ю', "yu"),
        ('я', "ya"),
    ],
};

impl TranslitTable {
    /// Latin sequence for a lower-case letter, if it has one.
    pub fn get(&self, lower: char) -> Option<&'static str> {
        // All keys are non-ASCII.
        if lower.is_ascii() {
            return None;
        }
        self.entries
            .iter()
            .find(|&&(key, _)| key == lower)
            .map(|&(_, latin)| latin)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|&(key, _)| key)
    }
}
