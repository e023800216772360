//! CSV row source for LinkedIn export directories.
//!
//! Each export category lives in a fixed file name inside the export
//! directory. Reading is best-effort: a missing or unparseable file yields
//! an empty row sequence with a warning, never an error.

mod reader;

pub use reader::{read_category, read_rows};

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// One of the seven export categories, with its fixed file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Profile,
    Positions,
    Skills,
    Education,
    Certifications,
    Recommendations,
    Projects,
}

impl Category {
    /// All categories, in assembly order.
    pub const ALL: [Category; 7] = [
        Category::Profile,
        Category::Positions,
        Category::Skills,
        Category::Education,
        Category::Certifications,
        Category::Recommendations,
        Category::Projects,
    ];

    /// The fixed file name this category occupies in a LinkedIn export.
    pub fn file_name(self) -> &'static str {
        match self {
            Category::Profile => "Profile.csv",
            Category::Positions => "Positions.csv",
            Category::Skills => "Skills.csv",
            Category::Education => "Education.csv",
            Category::Certifications => "Certifications.csv",
            Category::Recommendations => "Recommendations_Received.csv",
            Category::Projects => "Projects.csv",
        }
    }

    /// Display label for summaries and progress output.
    pub fn label(self) -> &'static str {
        match self {
            Category::Profile => "Profile",
            Category::Positions => "Positions",
            Category::Skills => "Skills",
            Category::Education => "Education",
            Category::Certifications => "Certifications",
            Category::Recommendations => "Recommendations",
            Category::Projects => "Projects",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_file_names() {
        assert_eq!(Category::Profile.file_name(), "Profile.csv");
        assert_eq!(
            Category::Recommendations.file_name(),
            "Recommendations_Received.csv"
        );
    }

    #[test]
    fn all_categories_distinct_files() {
        let mut names: Vec<_> = Category::ALL.iter().map(|c| c.file_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Category::ALL.len());
    }
}
