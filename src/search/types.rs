use serde::Deserialize;

/// Subset of the Instant Answer response Synapse consumes.
///
/// The API returns many more fields; everything else is ignored. Both fields
/// default so a sparse or partially malformed document still deserializes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstantAnswer {
    #[serde(default, rename = "AbstractText")]
    pub abstract_text: String,

    #[serde(default, rename = "RelatedTopics")]
    pub related_topics: Vec<RelatedTopic>,
}

/// A related-topic entry. Topic *groups* (nested `Topics` arrays) carry no
/// `Text` of their own and deserialize with `text: None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelatedTopic {
    #[serde(default, rename = "Text")]
    pub text: Option<String>,
}

impl InstantAnswer {
    /// Joins the abstract and up to `max_topics` related-topic texts into the
    /// context snippet. Returns an empty string when nothing usable is present.
    pub fn snippet(&self, max_topics: usize) -> String {
        let mut lines: Vec<&str> = Vec::new();

        let abstract_text = self.abstract_text.trim();
        if !abstract_text.is_empty() {
            lines.push(abstract_text);
        }

        lines.extend(
            self.related_topics
                .iter()
                .filter_map(|topic| topic.text.as_deref())
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .take(max_topics),
        );

        lines.join("\n")
    }
}
