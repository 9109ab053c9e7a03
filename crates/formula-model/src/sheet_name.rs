use unicode_normalization::UnicodeNormalization;

/// Case-fold a sheet name for comparisons.
///
/// Sheet names are compared case-insensitively (like Excel). Names are NFKC-normalized first so
/// compatibility forms (e.g. full-width letters) collide with their plain spelling.
pub fn sheet_name_casefold(name: &str) -> String {
    name.nfkc().flat_map(char::to_uppercase).collect()
}

/// Returns true if two sheet names would collide in a workbook.
pub fn sheet_name_eq_case_insensitive(a: &str, b: &str) -> bool {
    a == b || sheet_name_casefold(a) == sheet_name_casefold(b)
}

/// Next candidate name when `name` is already taken.
///
/// A trailing number is incremented (`Sheet2` -> `Sheet3`); a name without one gets a `~`
/// appended (`Budget` -> `Budget~`).
pub fn next_sheet_name_candidate(name: &str) -> String {
    let digits_start = name
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(idx, _)| idx);

    let Some(start) = digits_start else {
        return format!("{name}~");
    };

    match name[start..].parse::<u64>() {
        Ok(n) => format!("{}{}", &name[..start], n.saturating_add(1)),
        // Too many digits to fit a counter: fall back to the suffix form.
        Err(_) => format!("{name}~"),
    }
}
