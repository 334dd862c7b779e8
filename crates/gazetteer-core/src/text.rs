// crates/gazetteer-core/src/text.rs

//! Text normalization applied to user input before it meets the name index.

/// Returns the Latin replacement for a Cyrillic letter, or `None` when the
/// character is not part of the table.
///
/// Upper and lower case have separate entries. `Ъ`, `ъ` and `Ь` are deleted,
/// while lowercase `ь` becomes a backtick; the two soft signs are not symmetric.
#[inline]
pub fn latin_for(ch: char) -> Option<&'static str> {
    let s = match ch {
        'А' => "A",
        'Б' => "B",
        'В' => "V",
        'Г' => "G",
        'Д' => "D",
        'Е' | 'Ё' => "E",
        'Ж' => "Zh",
        'З' => "Z",
        'И' => "I",
        'Й' => "Y",
        'К' => "K",
        'Л' => "L",
        'М' => "M",
        'Н' => "N",
        'О' => "O",
        'П' => "P",
        'Р' => "R",
        'С' => "S",
        'Т' => "T",
        'У' => "U",
        'Ф' => "F",
        'Х' => "H",
        'Ц' => "Ts",
        'Ч' => "Ch",
        'Ш' => "Sh",
        'Щ' => "Sch",
        'Ъ' => "",
        'Ы' => "Y",
        'Ь' => "",
        'Э' => "E",
        'Ю' => "Yu",
        'Я' => "Ya",

        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' | 'ё' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' => "",
        'ы' => "y",
        'ь' => "`",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(s)
}

/// Transliterates Russian Cyrillic into Latin letters, one character at a time.
///
/// Characters outside the table pass through untouched, so Latin input comes
/// back unchanged and the function is idempotent.
///
/// # Examples
///
/// ```rust
/// use gazetteer_core::text::transliterate;
///
/// assert_eq!(transliterate("Москва"), "Moskva");
/// assert_eq!(transliterate("Ель"), "El`");
/// assert_eq!(transliterate("Sankt-Peterburg"), "Sankt-Peterburg");
/// ```
pub fn transliterate(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match latin_for(ch) {
            Some(latin) => out.push_str(latin),
            None => out.push(ch),
        }
    }
    out
}

/// `true` if `s` contains at least one character the table would rewrite.
pub fn needs_transliteration(s: &str) -> bool {
    s.chars().any(|ch| latin_for(ch).is_some())
}
