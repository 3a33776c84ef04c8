use services::SectionListItem;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionCardVm {
    pub slug: String,
    pub name: String,
    pub count_label: String,
}

impl From<&SectionListItem> for SectionCardVm {
    fn from(item: &SectionListItem) -> Self {
        let count_label = match item.question_count {
            1 => "1 question".to_string(),
            n => format!("{n} questions"),
        };
        Self {
            slug: item.slug.as_str().to_string(),
            name: item.name.clone(),
            count_label,
        }
    }
}

#[must_use]
pub fn map_section_cards(items: &[SectionListItem]) -> Vec<SectionCardVm> {
    items.iter().map(SectionCardVm::from).collect()
}
