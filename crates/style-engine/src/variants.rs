//! Regional spelling table

use std::collections::HashMap;

/// British spellings and their American equivalents
pub const BRITISH_TO_AMERICAN: &[(&str, &str)] = &[
    ("organisation", "organization"),
    ("organisations", "organizations"),
    ("colour", "color"),
    ("colours", "colors"),
    ("fibre", "fiber"),
    ("programme", "program"),
    ("labour", "labor"),
    ("centre", "center"),
    ("behaviour", "behavior"),
    ("travelling", "traveling"),
    ("travelled", "traveled"),
    ("fibres", "fibers"),
    ("programmes", "programs"),
    ("centres", "centers"),
    ("behaviours", "behaviors"),
    ("coloured", "colored"),
    ("favour", "favor"),
    ("favourite", "favorite"),
    ("honour", "honor"),
    ("neighbour", "neighbor"),
    ("harbour", "harbor"),
    ("metre", "meter"),
    ("metres", "meters"),
    ("litre", "liter"),
    ("litres", "liters"),
    ("theatre", "theater"),
    ("catalogue", "catalog"),
    ("defence", "defense"),
    ("licence", "license"),
    ("grey", "gray"),
    ("jewellery", "jewelry"),
    ("aluminium", "aluminum"),
    ("ageing", "aging"),
    ("enrolment", "enrollment"),
    ("fulfil", "fulfill"),
    ("traveller", "traveler"),
    ("travellers", "travelers"),
    ("modelling", "modeling"),
    ("labelling", "labeling"),
    ("labelled", "labeled"),
    ("cancelled", "canceled"),
    ("analyse", "analyze"),
    ("analysed", "analyzed"),
    ("organise", "organize"),
    ("organised", "organized"),
    ("recognise", "recognize"),
    ("recognised", "recognized"),
    ("realise", "realize"),
    ("prioritise", "prioritize"),
    ("minimise", "minimize"),
    ("maximise", "maximize"),
    ("standardise", "standardize"),
    ("utilise", "utilize"),
    ("optimise", "optimize"),
    ("emphasise", "emphasize"),
    ("characterise", "characterize"),
];

/// Lowercase regional form -> preferred form
#[derive(Debug, Clone, Default)]
pub struct SpellingVariants {
    preferred: HashMap<String, String>,
}

impl SpellingVariants {
    pub fn british_to_american() -> Self {
        Self::from_pairs(BRITISH_TO_AMERICAN.iter().copied())
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            preferred: pairs
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_lowercase(), v.into()))
                .collect(),
        }
    }

    /// Preferred spelling for `word`, looked up case-insensitively
    pub fn preferred(&self, word: &str) -> Option<&str> {
        self.preferred.get(&word.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.preferred.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preferred.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let variants = SpellingVariants::british_to_american();
        assert_eq!(variants.preferred("colour"), Some("color"));
        assert_eq!(variants.preferred("Colour"), Some("color"));
        assert_eq!(variants.preferred("FIBRE"), Some("fiber"));
        assert_eq!(variants.preferred("color"), None);
    }

    #[test]
    fn test_table_has_no_duplicate_keys() {
        let variants = SpellingVariants::british_to_american();
        assert_eq!(variants.len(), BRITISH_TO_AMERICAN.len());
    }

    #[test]
    fn test_custom_table() {
        let variants = SpellingVariants::from_pairs([("Tyre", "tire")]);
        assert_eq!(variants.preferred("tyres"), None);
        assert_eq!(variants.preferred("tyre"), Some("tire"));
    }
}
