//! Localized chart strings.

use serde::Deserialize;

use kinchart_core::family::Role;

use crate::generation::GenerationBucket;

/// Language of the labels printed on a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    /// Title used when the caller supplies none.
    pub fn default_title(self) -> &'static str {
        match self {
            Self::En => "FAMILY TREE",
            Self::Ru => "СЕМЕЙНОЕ ДРЕВО",
        }
    }

    /// Subtitle used when the caller supplies none.
    pub fn default_subtitle(self) -> &'static str {
        match self {
            Self::En => "Created with Kinchart",
            Self::Ru => "Создано в Kinchart",
        }
    }

    /// Prefix of the footer creation date.
    pub fn created_on(self) -> &'static str {
        match self {
            Self::En => "Created on",
            Self::Ru => "Дата создания",
        }
    }

    /// Label printed above a generation row.
    pub fn generation_label(self, bucket: GenerationBucket) -> &'static str {
        use GenerationBucket::*;

        match self {
            Self::En => match bucket {
                Grandparents => "Grandparents",
                Parents => "Parents",
                Uncles => "Uncles & Aunts",
                Children => "Children",
                Nephews => "Nephews & Nieces",
                Grandchildren => "Grandchildren",
                Other => "Others",
            },
            Self::Ru => match bucket {
                Grandparents => "Бабушки и Дедушки",
                Parents => "Родители",
                Uncles => "Дяди и Тёти",
                Children => "Дети",
                Nephews => "Племянники",
                Grandchildren => "Внуки",
                Other => "Другие",
            },
        }
    }

    /// Role caption printed on a member card.
    pub fn role_label(self, role: Role) -> &'static str {
        match self {
            Self::En => match role {
                Role::Grandfather => "Grandfather",
                Role::Grandmother => "Grandmother",
                Role::Father => "Father",
                Role::Mother => "Mother",
                Role::Son => "Son",
                Role::Daughter => "Daughter",
                Role::Brother => "Brother",
                Role::Sister => "Sister",
                Role::Uncle => "Uncle",
                Role::Aunt => "Aunt",
                Role::Nephew => "Nephew",
                Role::Niece => "Niece",
                Role::Grandson => "Grandson",
                Role::Granddaughter => "Granddaughter",
                Role::Other => "Relative",
            },
            Self::Ru => match role {
                Role::Grandfather => "Дедушка",
                Role::Grandmother => "Бабушка",
                Role::Father => "Отец",
                Role::Mother => "Мать",
                Role::Son => "Сын",
                Role::Daughter => "Дочь",
                Role::Brother => "Брат",
                Role::Sister => "Сестра",
                Role::Uncle => "Дядя",
                Role::Aunt => "Тётя",
                Role::Nephew => "Племянник",
                Role::Niece => "Племянница",
                Role::Grandson => "Внук",
                Role::Granddaughter => "Внучка",
                Role::Other => "Родственник",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_role_labels_distinct() {
        for locale in [Locale::En, Locale::Ru] {
            let labels: HashSet<_> = Role::KNOWN
                .iter()
                .map(|role| locale.role_label(*role))
                .collect();
            assert_eq!(labels.len(), Role::KNOWN.len());
        }
    }

    #[test]
    fn test_generation_labels() {
        assert_eq!(Locale::En.generation_label(GenerationBucket::Uncles), "Uncles & Aunts");
        assert_eq!(Locale::Ru.generation_label(GenerationBucket::Parents), "Родители");
    }

    #[test]
    fn test_deserialize() {
        #[derive(Deserialize)]
        struct Holder {
            locale: Locale,
        }

        let holder: Holder = serde_json::from_str(r#"{"locale":"ru"}"#).unwrap();
        assert_eq!(holder.locale, Locale::Ru);
    }
}
