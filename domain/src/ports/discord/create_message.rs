use crate::ports::discord::CreateEmbed;

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct CreateMessage {
    pub content: Option<String>,
    pub embeds: Vec<CreateEmbed>,
}

impl CreateMessage {
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn embed(mut self, embed: CreateEmbed) -> Self {
        self.embeds.push(embed);
        self
    }
}
