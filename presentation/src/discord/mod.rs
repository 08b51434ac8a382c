use crate::application_ports::Locator;
use domain_shared::discord::ChannelId;
use poise::serenity_prelude as serenity;
use poise::serenity_prelude::ClientBuilder;
use poise::FrameworkError;
use tracing::{debug, info, instrument, warn};

pub mod commands;
mod response;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a, D> = poise::Context<'a, D, Error>;

#[instrument(level = "debug", skip(locator, token))]
pub async fn run_bot<L: Locator + Send + Sync + 'static>(
    locator: L,
    token: String,
    intents: serenity::GatewayIntents,
    prefix: String,
) -> Result<(), Error> {
    let framework = poise::Framework::builder()
        .options(framework_options(prefix))
        .setup(move |_ctx, ready, _framework| {
            Box::pin(async move {
                info!(
                    user = %ready.user.name,
                    guilds = ready.guilds.len(),
                    "Bot is ready",
                );
                Ok(locator)
            })
        })
        .build();

    let mut client = ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;
    client.start().await?;

    Ok(())
}

fn framework_options<L: Locator + Send + Sync + 'static>(
    prefix: String,
) -> poise::FrameworkOptions<L, Error> {
    poise::FrameworkOptions {
        commands: commands::enabled_commands(),
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(prefix),
            case_insensitive_commands: true,
            ..Default::default()
        },
        command_check: Some(|ctx| Box::pin(is_command_channel(ctx))),
        on_error: |error| Box::pin(on_error(error)),
        ..Default::default()
    }
}

async fn is_command_channel<L: Locator>(ctx: Context<'_, L>) -> Result<bool, Error> {
    Ok(accepts_channel(
        ctx.channel_id(),
        ctx.data().get_command_channel(),
    ))
}

fn accepts_channel(channel_id: serenity::ChannelId, command_channel: ChannelId) -> bool {
    channel_id.get() == command_channel.0
}

/// Commands sent outside the command channel fail the check without an error
/// and are dropped quietly, everything else goes to the poise default handler.
async fn on_error<L: Locator + Send + Sync>(error: FrameworkError<'_, L, Error>) {
    match error {
        FrameworkError::CommandCheckFailed { error: None, ctx, .. } => {
            debug!(
                channel_id = ctx.channel_id().get(),
                "Ignoring command outside the command channel",
            );
        }
        error => {
            if let Err(err) = poise::builtins::on_error(error).await {
                warn!(error = ?err, "Failed to handle framework error");
            }
        }
    }
}
