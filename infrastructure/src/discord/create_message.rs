use crate::discord::create_embed::domain_to_serenity_create_embed;
use domain::ports::discord::CreateMessage;
use poise::serenity_prelude as serenity;

pub fn domain_to_serenity_create_message(message: CreateMessage) -> serenity::CreateMessage {
    let CreateMessage { content, embeds } = message;

    let mut message = serenity::CreateMessage::default();

    if let Some(content) = content {
        message = message.content(content);
    }

    let embeds = embeds
        .into_iter()
        .map(domain_to_serenity_create_embed)
        .collect::<Vec<_>>();
    if !embeds.is_empty() {
        message = message.embeds(embeds);
    }

    message
}
