use crate::mutual_friends::MutualFriendsService;
use application_ports::friends_search::{FriendsSearchError, FriendsSearchPort, SearchSummary};
use async_trait::async_trait;
use domain::ports::discord::{DiscordError, DiscordPort};
use domain::search_results::{create_messages, processing_notice, MAX_STEAM_IDS};
use domain_shared::discord::{ChannelId, UserId};
use domain_shared::steam::SteamId;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

pub struct FriendsSearchService {
    discord_port: Arc<dyn DiscordPort + Send + Sync>,
    mutual_friends_service: MutualFriendsService,
}

impl FriendsSearchService {
    #[instrument(level = "trace", skip_all)]
    pub fn new(
        discord_port: Arc<dyn DiscordPort + Send + Sync>,
        mutual_friends_service: MutualFriendsService,
    ) -> Self {
        Self {
            discord_port,
            mutual_friends_service,
        }
    }
}

#[async_trait]
impl FriendsSearchPort for FriendsSearchService {
    #[instrument(level = "info", skip(self))]
    async fn search_mutual_friends(
        &self,
        channel_id: ChannelId,
        requested_by: UserId,
        steam_ids: Vec<SteamId>,
    ) -> Result<SearchSummary, FriendsSearchError> {
        if steam_ids.is_empty() {
            return Err(FriendsSearchError::NoSteamIds);
        }
        if steam_ids.len() > MAX_STEAM_IDS {
            return Err(FriendsSearchError::TooManySteamIds);
        }

        let notice = processing_notice(requested_by, &mut rand::thread_rng());
        let notice_id = match self.discord_port.send_message(channel_id, notice).await {
            Ok(message_id) => Some(message_id),
            Err(err) => {
                warn!(error = ?err, "Failed to send processing notice");
                None
            }
        };

        let (criteria, mutuals) = futures::join!(
            self.mutual_friends_service.resolve_criteria(&steam_ids),
            self.mutual_friends_service.resolve_mutual(&steam_ids),
        );

        if let Some(notice_id) = notice_id {
            if let Err(err) = self.discord_port.delete_message(channel_id, notice_id).await {
                warn!(error = ?err, "Failed to delete processing notice");
            }
        }

        let messages = create_messages(&criteria, &mutuals);
        let messages_sent = messages.len();
        for message in messages {
            self.discord_port
                .send_message(channel_id, message)
                .await
                .map_err(map_discord_err)?;
        }

        info!(
            channel_id = channel_id.0,
            user_id = requested_by.0,
            mutual_friends = mutuals.len(),
            "Mutual friends search finished",
        );

        Ok(SearchSummary {
            mutual_friends: mutuals.len(),
            messages_sent,
        })
    }
}

#[instrument(level = "trace", skip_all)]
fn map_discord_err(err: DiscordError) -> FriendsSearchError {
    match err {
        DiscordError::DiscordUnavailable => {
            error!("DiscordError::DiscordUnavailable");
            FriendsSearchError::DiscordUnavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::friend_list::FriendListService;
    use crate::profile::ProfileService;
    use crate::test_support::{owned_game, summary};
    use domain::ports::discord::{CreateMessage, MessageId, MockDiscordPort};
    use domain::ports::steam::{MockSteamPort, SteamPort};
    use domain::profile::TrackedGame;
    use domain::search_results::{CRITERIA_TITLE, NO_MATCH_DESCRIPTION, RESULTS_TITLE};
    use std::sync::Mutex;

    const CHANNEL: ChannelId = ChannelId(1200);
    const REQUESTER: UserId = UserId(42);
    const NOTICE_ID: MessageId = MessageId(900);

    #[derive(Debug, PartialEq)]
    enum Event {
        Sent(CreateMessage),
        Deleted(MessageId),
    }

    fn recording_discord(events: Arc<Mutex<Vec<Event>>>) -> MockDiscordPort {
        let mut discord = MockDiscordPort::new();
        let sent = events.clone();
        discord
            .expect_send_message()
            .withf(|channel_id, _| *channel_id == CHANNEL)
            .returning(move |_, message| {
                let mut sent = sent.lock().unwrap();
                let id = if sent.is_empty() { NOTICE_ID } else { MessageId(sent.len() as u64) };
                sent.push(Event::Sent(message));
                Ok(id)
            });
        discord
            .expect_delete_message()
            .withf(|channel_id, _| *channel_id == CHANNEL)
            .returning(move |_, message_id| {
                events.lock().unwrap().push(Event::Deleted(message_id));
                Ok(())
            });
        discord
    }

    fn service(steam: MockSteamPort, discord: MockDiscordPort) -> FriendsSearchService {
        let steam: Arc<dyn SteamPort + Send + Sync> = Arc::new(steam);
        FriendsSearchService::new(
            Arc::new(discord),
            MutualFriendsService::new(
                ProfileService::new(steam.clone(), TrackedGame::default()),
                FriendListService::new(steam),
            ),
        )
    }

    fn embed_of(event: &Event) -> (String, String) {
        match event {
            Event::Sent(message) => (
                message.embeds[0].title.clone(),
                message.embeds[0].description.clone(),
            ),
            Event::Deleted(_) => panic!("expected a sent message, got {event:?}"),
        }
    }

    #[tokio::test]
    async fn retracts_notice_then_posts_criteria_and_pages() {
        let requested = SteamId(76561198000000001);
        let mut steam = MockSteamPort::new();
        steam
            .expect_get_friend_list()
            .returning(|_| Ok((1..=12).map(SteamId).collect()));
        steam
            .expect_get_player_summary()
            .returning(|id| Ok(Some(summary(id, "Player"))));
        steam
            .expect_get_owned_game()
            .returning(|_, _| Ok(Some(owned_game(61))));

        let events = Arc::new(Mutex::new(Vec::new()));
        let summary = service(steam, recording_discord(events.clone()))
            .search_mutual_friends(CHANNEL, REQUESTER, vec![requested])
            .await
            .unwrap();

        assert_eq!(
            summary,
            SearchSummary {
                mutual_friends: 12,
                messages_sent: 3,
            }
        );

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 5);
        match &events[0] {
            Event::Sent(notice) => {
                assert!(notice.content.as_deref().unwrap().starts_with("<@42>, "));
                assert!(notice.embeds.is_empty());
            }
            other => panic!("expected the processing notice, got {other:?}"),
        }
        assert_eq!(events[1], Event::Deleted(NOTICE_ID));

        let (title, description) = embed_of(&events[2]);
        assert_eq!(title, CRITERIA_TITLE);
        assert_eq!(
            description,
            format!("[Player](https://steamcommunity.com/profiles/{requested}/) - DayZ: 1h 1m")
        );

        let (title, first_page) = embed_of(&events[3]);
        assert_eq!(title, RESULTS_TITLE);
        assert_eq!(first_page.lines().count(), 10);
        let (_, second_page) = embed_of(&events[4]);
        assert_eq!(second_page.lines().count(), 2);
    }

    #[tokio::test]
    async fn reports_no_match() {
        let mut steam = MockSteamPort::new();
        steam.expect_get_friend_list().returning(|id| match id.0 % 2 {
            0 => Ok(vec![SteamId(1)]),
            _ => Ok(vec![SteamId(2)]),
        });
        steam.expect_get_player_summary().returning(|_| Ok(None));
        steam.expect_get_owned_game().never();

        let events = Arc::new(Mutex::new(Vec::new()));
        let summary = service(steam, recording_discord(events.clone()))
            .search_mutual_friends(
                CHANNEL,
                REQUESTER,
                vec![SteamId(76561198000000001), SteamId(76561198000000002)],
            )
            .await
            .unwrap();

        assert_eq!(summary.mutual_friends, 0);
        let events = events.lock().unwrap();
        assert_eq!(events.len(), 4);
        assert_eq!(
            embed_of(&events[3]),
            (RESULTS_TITLE.to_string(), NO_MATCH_DESCRIPTION.to_string())
        );
    }

    #[tokio::test]
    async fn failed_notice_does_not_abort_the_search() {
        let mut steam = MockSteamPort::new();
        steam.expect_get_friend_list().returning(|_| Ok(vec![]));
        steam.expect_get_player_summary().returning(|_| Ok(None));

        let mut discord = MockDiscordPort::new();
        let mut notice_sent = false;
        discord.expect_send_message().returning(move |_, _| {
            if notice_sent {
                Ok(MessageId(1))
            } else {
                notice_sent = true;
                Err(DiscordError::DiscordUnavailable)
            }
        });
        discord.expect_delete_message().never();

        let summary = service(steam, discord)
            .search_mutual_friends(CHANNEL, REQUESTER, vec![SteamId(76561198000000001)])
            .await
            .unwrap();

        assert_eq!(summary.messages_sent, 2);
    }

    #[tokio::test]
    async fn results_failing_to_send_are_reported() {
        let mut steam = MockSteamPort::new();
        steam.expect_get_friend_list().returning(|_| Ok(vec![]));
        steam.expect_get_player_summary().returning(|_| Ok(None));

        let mut discord = MockDiscordPort::new();
        discord
            .expect_send_message()
            .returning(|_, message| match message.content {
                Some(_) => Ok(NOTICE_ID),
                None => Err(DiscordError::DiscordUnavailable),
            });
        discord.expect_delete_message().returning(|_, _| Ok(()));

        let result = service(steam, discord)
            .search_mutual_friends(CHANNEL, REQUESTER, vec![SteamId(76561198000000001)])
            .await;

        assert!(matches!(result, Err(FriendsSearchError::DiscordUnavailable)));
    }

    #[tokio::test]
    async fn refuses_more_accounts_than_one_criteria_embed_holds() {
        let mut discord = MockDiscordPort::new();
        discord.expect_send_message().never();
        let mut steam = MockSteamPort::new();
        steam.expect_get_friend_list().never();

        let steam_ids = (0..=MAX_STEAM_IDS as u64)
            .map(|i| SteamId(76561198000000000 + i))
            .collect();
        let result = service(steam, discord)
            .search_mutual_friends(CHANNEL, REQUESTER, steam_ids)
            .await;

        assert!(matches!(result, Err(FriendsSearchError::TooManySteamIds)));
    }

    #[tokio::test]
    async fn refuses_an_empty_search() {
        let mut discord = MockDiscordPort::new();
        discord.expect_send_message().never();

        let result = service(MockSteamPort::new(), discord)
            .search_mutual_friends(CHANNEL, REQUESTER, vec![])
            .await;

        assert!(matches!(result, Err(FriendsSearchError::NoSteamIds)));
    }
}
