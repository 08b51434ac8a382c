use tracing::instrument;

/// A titled block of lines, rendered by Discord as an embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEmbed {
    pub title: String,
    pub description: String,
}

impl CreateEmbed {
    #[instrument(level = "trace", skip(title, lines))]
    pub fn from_lines<S: AsRef<str>>(title: impl Into<String>, lines: &[S]) -> Self {
        let description = lines
            .iter()
            .map(|line| line.as_ref())
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            title: title.into(),
            description,
        }
    }
}
