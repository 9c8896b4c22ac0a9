/// Filename normalization: transliteration plus underscore substitution.
///
/// The stem of a normalized name contains only ASCII letters, digits and
/// underscores; the final extension is carried over untouched. Normalizing
/// an already normalized name returns it unchanged.
pub mod translit;

pub use translit::{TranslitTable, CYRILLIC};

/// Normalize a file name (no directory components).
///
/// `видео.mp4` becomes `video.mp4`, `My File (1).PDF` becomes
/// `My_File__1_.PDF`. A name without a dot is all stem and gets no trailing
/// dot.
pub fn normalize(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) => {
            let mut out = transliterate(stem);
            out.push('.');
            out.push_str(ext);
            out
        }
        None => transliterate(file_name),
    }
}

/// Apply the character mapping to every character of `text`.
pub fn transliterate(text: &str) -> String {
    text.chars().flat_map(map_char).collect()
}

/// Strip the final extension from a (normalized) name.
///
/// Used to derive an archive's extraction folder from its normalized name.
pub fn strip_extension(name: &str) -> &str {
    name.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(name)
}

/// Map one source character to its normalized sequence.
fn map_char(c: char) -> MappedChars {
    if let Some(latin) = CYRILLIC.get(fold_case(c)) {
        MappedChars::Latin {
            chars: latin.chars(),
            upper: c.is_uppercase(),
        }
    } else if c.is_ascii_alphanumeric() {
        MappedChars::One(Some(c))
    } else {
        MappedChars::One(Some('_'))
    }
}

/// Lower-case a character when its lower-case form is a single character.
fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Output of [`map_char`], iterated without allocating.
enum MappedChars {
    One(Option<char>),
    Latin {
        chars: std::str::Chars<'static>,
        upper: bool,
    },
}

impl Iterator for MappedChars {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        match self {
            Self::One(c) => c.take(),
            Self::Latin { chars, upper } => {
                let c = chars.next()?;
                // Soft and hard signs map to apostrophes; keep the stem safe.
                Some(if !c.is_ascii_alphanumeric() {
                    '_'
                } else if *upper {
                    c.to_ascii_uppercase()
                } else {
                    c
                })
            }
        }
    }
}
