use domain::ports::discord::CreateEmbed;
use poise::serenity_prelude as serenity;
use tracing::instrument;

#[instrument(level = "trace", skip(embed))]
pub fn domain_to_serenity_create_embed(embed: CreateEmbed) -> serenity::CreateEmbed {
    let CreateEmbed { title, description } = embed;

    serenity::CreateEmbed::new()
        .title(title)
        .description(description)
}
