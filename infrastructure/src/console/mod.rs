use async_trait::async_trait;
use domain::ports::discord::{ChannelId, CreateMessage, DiscordError, DiscordPort, MessageId};
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

/// Chat adapter that prints messages to a writer instead of Discord.
///
/// Lets operators run a search from the command line. Deleting a message is
/// a no-op since printed output cannot be retracted.
pub struct ConsoleAdapter<W> {
    writer: Mutex<W>,
    next_message_id: AtomicU64,
}

impl<W: Write> ConsoleAdapter<W> {
    #[instrument(level = "trace", skip_all)]
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            next_message_id: AtomicU64::new(1),
        }
    }

    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl<W: Write + Send> DiscordPort for ConsoleAdapter<W> {
    #[instrument(level = "debug", err, skip(self, channel_id, message))]
    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<MessageId, DiscordError> {
        let mut writer = self.writer.lock().map_err(|_| {
            warn!("Console writer lock is poisoned");
            DiscordError::DiscordUnavailable
        })?;

        render(&mut *writer, message).map_err(|err| {
            warn!(error = ?err, "Failed to write message to console");
            DiscordError::DiscordUnavailable
        })?;

        let message_id = MessageId(self.next_message_id.fetch_add(1, Ordering::Relaxed));
        debug!(
            channel_id = channel_id.0,
            message_id = message_id.0,
            "Printed message",
        );

        Ok(message_id)
    }

    #[instrument(level = "debug", skip_all)]
    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), DiscordError> {
        debug!(
            channel_id = channel_id.0,
            message_id = message_id.0,
            "Console output cannot be retracted, ignoring delete",
        );
        Ok(())
    }
}

fn render(writer: &mut impl Write, message: CreateMessage) -> std::io::Result<()> {
    let CreateMessage { content, embeds } = message;

    if let Some(content) = content {
        writeln!(writer, "{content}")?;
    }

    for embed in embeds {
        writeln!(writer, "== {} ==", embed.title)?;
        writeln!(writer, "{}", embed.description)?;
    }

    writer.flush()
}
