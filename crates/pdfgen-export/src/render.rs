//! `{ key }` placeholder substitution.
//!
//! Templates are plain HTML with placeholders written as an opening brace,
//! one space, the key, one space, a closing brace. Substitution is literal
//! text replacement: there is no nesting, no conditionals and no escaping
//! of the placeholder syntax. Placeholders with no matching key are left in
//! place.

use pdfgen_core::models::substitution::Substitutions;

use crate::error::ExportError;

/// The exact placeholder text for `key`.
pub fn placeholder(key: &str) -> String {
    format!("{{ {key} }}")
}

/// Decode raw template bytes fetched from storage.
pub fn decode_template(bytes: Vec<u8>) -> Result<String, ExportError> {
    Ok(String::from_utf8(bytes)?)
}

/// Replace every placeholder in `template` with its substitution.
///
/// Placeholders are located in the original template in a single
/// left-to-right pass, so text inserted by one substitution is never matched
/// by another. When two placeholders start at the same offset the longer one
/// wins. The result does not depend on the iteration order of
/// `substitutions`.
pub fn render_template(template: &str, substitutions: &Substitutions) -> String {
    let replacements: Vec<(String, String)> = substitutions
        .iter()
        .map(|(key, value)| (placeholder(key), value.as_template_text()))
        .collect();

    // Absolute offset of the next occurrence of each placeholder at or after
    // `cursor`.
    let mut next: Vec<Option<usize>> = replacements
        .iter()
        .map(|(pattern, _)| template.find(pattern.as_str()))
        .collect();

    let mut out = String::with_capacity(template.len());
    let mut cursor = 0;

    loop {
        let best = next
            .iter()
            .enumerate()
            .filter_map(|(idx, pos)| pos.map(|pos| (pos, idx)))
            .min_by(|(pos_a, idx_a), (pos_b, idx_b)| {
                pos_a
                    .cmp(pos_b)
                    .then(replacements[*idx_b].0.len().cmp(&replacements[*idx_a].0.len()))
            });

        let Some((pos, idx)) = best else { break };
        let (pattern, value) = &replacements[idx];

        out.push_str(&template[cursor..pos]);
        out.push_str(value);
        cursor = pos + pattern.len();

        for (slot, (pattern, _)) in next.iter_mut().zip(&replacements) {
            if let Some(found) = *slot
                && found < cursor
            {
                *slot = template[cursor..]
                    .find(pattern.as_str())
                    .map(|offset| cursor + offset);
            }
        }
    }

    out.push_str(&template[cursor..]);
    out
}
