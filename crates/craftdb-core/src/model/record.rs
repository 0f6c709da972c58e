// crates/craftdb-core/src/model/record.rs

use serde::{Deserialize, Serialize};

use crate::text::fold_key;

/// One searchable unit: an artisan profile, a job post, an opportunity or an
/// applicant, normalized to a common shape.
///
/// Records are semi-structured. Every attribute except the skill lists is
/// optional and the engine treats an absent field as "non-matching" for
/// clauses that require it, never as an error. Wire names are camelCase
/// (`skillsRequired`, `appliedDate`, ...) to stay compatible with the
/// upstream marketplace datasets.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Record {
    pub id: Option<String>,
    /// Display name for people/artisans. Either `name` or `title` is
    /// expected to be present.
    pub name: Option<String>,
    /// Display title for job posts and opportunities.
    pub title: Option<String>,
    pub description: Option<String>,
    /// Skill tags an artisan offers.
    pub skills: Vec<String>,
    /// Skill tags a post requires. Logically the same facet as `skills`.
    pub skills_required: Vec<String>,
    pub location: Option<String>,
    /// Record classification, e.g. "full-time" / "contract".
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
    /// Conventionally 0–5.
    pub rating: Option<f64>,
    /// String-encoded, e.g. "5 years".
    pub experience: Option<String>,
    /// String-encoded currency range, e.g. "₹20,000 - ₹40,000".
    pub salary: Option<String>,
    pub craft: Option<String>,
    pub company: Option<String>,
    pub applied_date: Option<String>,
    pub posted_date: Option<String>,
}

impl Record {
    /// `name` falling back to `title`, empty string when both are absent.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or("")
    }

    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }

    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or("")
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }

    /// The union of offered and required skill tags, in declaration order.
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .chain(self.skills_required.iter())
            .map(String::as_str)
    }

    /// Date used for chronological sorting: `applied_date` wins over
    /// `posted_date`.
    pub fn sort_date(&self) -> Option<&str> {
        self.applied_date
            .as_deref()
            .or(self.posted_date.as_deref())
    }

    /// The folded text blob the free-text and fuzzy clauses match against:
    /// display name, description, craft, company and every skill tag.
    pub fn searchable_text(&self) -> String {
        let mut blob = String::new();
        for part in [
            self.display_name(),
            self.description.as_deref().unwrap_or(""),
            self.craft.as_deref().unwrap_or(""),
            self.company.as_deref().unwrap_or(""),
        ] {
            if !part.is_empty() {
                blob.push_str(part);
                blob.push(' ');
            }
        }
        for skill in self.all_skills() {
            blob.push_str(skill);
            blob.push(' ');
        }
        fold_key(blob.trim_end())
    }
}
