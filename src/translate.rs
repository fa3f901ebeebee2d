//! Static phrase translation tables for display strings.
//!
//! Plain phrase lookups keyed by ISO 639-1 language code. Unknown
//! languages and phrases pass through unchanged. This is display glue,
//! not part of the matching core; normalized keys stay English.

use std::collections::HashMap;
use std::sync::OnceLock;

type PhraseTable = HashMap<&'static str, &'static str>;

static TRANSLATIONS: OnceLock<HashMap<&'static str, PhraseTable>> = OnceLock::new();

fn translations() -> &'static HashMap<&'static str, PhraseTable> {
    TRANSLATIONS.get_or_init(|| {
        let pl = PhraseTable::from([
            ("ingredients", "Składniki"),
            ("steps", "Kroki"),
            ("back", "Wstecz"),
            ("edit", "Edytuj"),
            ("delete", "Usuń"),
            ("tomato", "pomidor"),
            ("salt", "sól"),
            ("egg", "jajko"),
            ("flour", "mąka"),
            ("milk", "mleko"),
            ("sugar", "cukier"),
        ]);
        let es = PhraseTable::from([
            ("ingredients", "Ingredientes"),
            ("steps", "Pasos"),
            ("back", "Atrás"),
            ("edit", "Editar"),
            ("delete", "Eliminar"),
            ("tomato", "tomate"),
            ("salt", "sal"),
            ("egg", "huevo"),
        ]);
        HashMap::from([("pl", pl), ("es", es)])
    })
}

/// Translate one phrase, falling back to the input when the language or
/// phrase is unknown.
pub fn translate_text(text: &str, lang: &str) -> String {
    if lang.is_empty() {
        return text.to_string();
    }
    let lang = lang.to_lowercase();
    let Some(mapping) = translations().get(lang.as_str()) else {
        return text.to_string();
    };

    let key = text.trim();
    match mapping.get(key.to_lowercase().as_str()) {
        Some(translated) => (*translated).to_string(),
        None => text.to_string(),
    }
}

/// Translate a list of phrases
pub fn translate_list(items: &[String], lang: &str) -> Vec<String> {
    if lang.is_empty() {
        return items.to_vec();
    }
    items.iter().map(|item| translate_text(item, lang)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_known_phrases() {
        assert_eq!(translate_text("tomato", "pl"), "pomidor");
        assert_eq!(translate_text("egg", "es"), "huevo");
        assert_eq!(translate_text("Ingredients", "pl"), "Składniki");
    }

    #[test]
    fn test_case_insensitive_lookup() {
        assert_eq!(translate_text("TOMATO", "pl"), "pomidor");
        assert_eq!(translate_text("  salt  ", "es"), "sal");
    }

    #[test]
    fn test_unknown_language_passes_through() {
        assert_eq!(translate_text("tomato", "fr"), "tomato");
        assert_eq!(translate_text("tomato", ""), "tomato");
    }

    #[test]
    fn test_unknown_phrase_passes_through() {
        assert_eq!(translate_text("durian", "pl"), "durian");
    }

    #[test]
    fn test_translate_list() {
        let items = vec!["tomato".to_string(), "butter".to_string()];
        assert_eq!(translate_list(&items, "pl"), vec!["pomidor", "butter"]);
        assert_eq!(translate_list(&items, ""), items);
    }
}
