//! `key<TAB>word` data files.

use super::{ProfileData, ProfileError};
use crate::lexicon::IrregularTable;
use std::{borrow::Cow, fs, path::Path};

/// `(line, key, word)`
type Row = (usize, String, String);

/// Parse a data file. Blank lines and `#` comments are skipped; keys and
/// words are trimmed.
pub(crate) fn read(path: &Path) -> Result<Vec<Row>, ProfileError> {
    let text = fs::read_to_string(path)?;
    parse(&text, &path.display().to_string())
}

pub(crate) fn parse(text: &str, origin: &str) -> Result<Vec<Row>, ProfileError> {
    let mut rows = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        let bad = |reason: &str| ProfileError::DataFile {
            path: origin.to_string(),
            line: i + 1,
            reason: reason.to_string(),
        };
        let (key, word) = line.split_once('\t').ok_or_else(|| bad("expected `key<TAB>word`"))?;
        let (key, word) = (key.trim(), word.trim());
        if key.is_empty() {
            return Err(bad("empty key"));
        }
        if word.is_empty() {
            return Err(bad("empty word"));
        }
        rows.push((i + 1, key.to_string(), word.to_string()));
    }
    Ok(rows)
}

/// Apply every recognised file in `dir` to `data`; returns how many were read.
pub(crate) fn load_dir(dir: &Path, data: &mut ProfileData) -> Result<usize, ProfileError> {
    let mut loaded = 0;

    for name in ["zero.tsv", "digit.tsv"] {
        let path = dir.join(name);
        if !path.is_file() {
            continue;
        }
        for (line, key, word) in read(&path)? {
            let digit = match key.as_bytes() {
                &[d] if d.is_ascii_digit() => d,
                _ => {
                    return Err(ProfileError::DataFile {
                        path: path.display().to_string(),
                        line,
                        reason: format!("`{key}` is not a single digit"),
                    });
                }
            };
            data.lexicon.set(digit, Cow::Owned(word));
        }
        loaded += 1;
    }

    let tables: [(&[&str], &mut IrregularTable); 4] = [
        (&["teen.tsv"], &mut data.teens),
        (&["tens.tsv", "twenties.tsv"], &mut data.tens),
        (&["sign.tsv"], &mut data.signs),
        (&["dot.tsv"], &mut data.decimal_markers),
    ];
    for (names, table) in tables {
        for name in names {
            let path = dir.join(name);
            if !path.is_file() {
                continue;
            }
            for (_, key, word) in read(&path)? {
                table.insert(key, word);
            }
            loaded += 1;
        }
    }

    let path = dir.join("percent.tsv");
    if path.is_file() {
        if let Some((_, _, word)) = read(&path)?.into_iter().next() {
            data.percent = Cow::Owned(word);
        }
        loaded += 1;
    }

    Ok(loaded)
}
