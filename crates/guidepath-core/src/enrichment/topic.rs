//! Topic derivation for the resource recommendation channel
//!
//! Topics are derived declaratively: a selected category maps through a
//! fixed table, a workflow maps through its title. The mapping is pure so
//! the recommendation key can be tested without touching any service.

use crate::domain::WorkflowKind;

/// What the user is looking at when resources are requested
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Browsing a kind of workflow, optionally narrowed to one category
    Category {
        /// Workflow kind being browsed
        kind: WorkflowKind,
        /// Active category label; `None` means all categories
        category: Option<String>,
    },

    /// Traversing a single workflow
    Workflow {
        /// The workflow's title
        title: String,
    },
}

/// Query strings for named (kind, category) pairs
const CATEGORY_TOPICS: &[(WorkflowKind, &str, &str)] = &[
    (
        WorkflowKind::Apply,
        "Government",
        "Government Documents official guides",
    ),
    (
        WorkflowKind::Apply,
        "Banking",
        "Banking and bank accounts official guides",
    ),
    (
        WorkflowKind::Learn,
        "Personal Finance",
        "Personal Finance basics budgeting",
    ),
    (
        WorkflowKind::Learn,
        "Tax",
        "Income Tax and ITR guide official",
    ),
    (
        WorkflowKind::Learn,
        "Credit",
        "Credit scores CIBIL and loans guide",
    ),
    (
        WorkflowKind::Learn,
        "Investing",
        "Investing in mutual funds and stocks guide",
    ),
];

impl Topic {
    /// Topic for browsing a kind, optionally narrowed to one category
    pub fn for_category(kind: WorkflowKind, category: Option<impl Into<String>>) -> Self {
        Topic::Category {
            kind,
            category: category.map(Into::into),
        }
    }

    /// Topic for traversing one workflow
    pub fn for_workflow(title: impl Into<String>) -> Self {
        Topic::Workflow {
            title: title.into(),
        }
    }

    /// The query string sent to the recommendation service
    pub fn query(&self) -> String {
        match self {
            Topic::Workflow { title } => {
                format!("{} guide official website steps tutorials", title)
            }
            Topic::Category {
                kind,
                category: None,
            } => match kind {
                WorkflowKind::Apply => "Government Banking financial official guides".to_string(),
                WorkflowKind::Learn => {
                    "Financial literacy and money management basics".to_string()
                }
            },
            Topic::Category {
                kind,
                category: Some(category),
            } => CATEGORY_TOPICS
                .iter()
                .find(|(entry_kind, entry_category, _)| {
                    entry_kind == kind && *entry_category == category.as_str()
                })
                .map(|(_, _, query)| (*query).to_string())
                .unwrap_or_else(|| format!("{} official guides", category)),
        }
    }
}
