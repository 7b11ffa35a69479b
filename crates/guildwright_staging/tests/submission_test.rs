use async_trait::async_trait;
use guildwright_error::{
    GuildwrightErrorKind, GuildwrightResult, TransportError, TransportErrorKind,
};
use guildwright_interface::{GuildTransport, LiveGuild, RawGuildData};
use guildwright_staging::{NewGuild, NewTemplatedGuild, RoleOptions, TextChannelOptions};
use serde_json::{Value as JsonValue, json};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Records every request and answers with a canned guild, optionally failing
/// the first `failures` calls.
#[derive(Default)]
struct RecordingTransport {
    documents: Mutex<Vec<JsonValue>>,
    templates: Mutex<Vec<(String, String, Option<String>)>>,
    failures: AtomicUsize,
}

impl RecordingTransport {
    fn failing(times: usize) -> Self {
        Self {
            failures: AtomicUsize::new(times),
            ..Default::default()
        }
    }

    fn maybe_fail(&self) -> GuildwrightResult<()> {
        let remaining = self.failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures.store(remaining - 1, Ordering::SeqCst);
            return Err(TransportError::new(TransportErrorKind::RateLimited(5)).into());
        }
        Ok(())
    }
}

#[async_trait]
impl GuildTransport for RecordingTransport {
    async fn create_guild(&self, document: JsonValue) -> GuildwrightResult<RawGuildData> {
        self.maybe_fail()?;
        let name = document["name"].clone();
        self.documents.lock().unwrap().push(document);
        Ok(RawGuildData::new(json!({"id": "81384788765712384", "name": name})))
    }

    async fn create_guild_from_template(
        &self,
        code: &str,
        name: &str,
        icon: Option<String>,
    ) -> GuildwrightResult<RawGuildData> {
        self.maybe_fail()?;
        self.templates
            .lock()
            .unwrap()
            .push((code.to_string(), name.to_string(), icon));
        Ok(RawGuildData::new(json!({"id": "41771983423143937", "name": name})))
    }
}

/// Minimal live handle built from the transport's answer.
#[derive(Debug)]
struct CreatedGuild {
    id: String,
}

impl LiveGuild for CreatedGuild {
    fn from_raw(data: RawGuildData) -> GuildwrightResult<Self> {
        Ok(Self {
            id: data.id().unwrap_or_default().to_string(),
        })
    }
}

#[tokio::test]
async fn test_create_submits_rendered_document() {
    let mut guild = NewGuild::new("Test");
    guild.add_role("Mods", RoleOptions::default()).unwrap();
    guild
        .add_text_channel("chat", TextChannelOptions::default())
        .unwrap();
    let transport = RecordingTransport::default();

    let created: CreatedGuild = guild.create(&transport).await.unwrap();

    assert_eq!(created.id, "81384788765712384");
    let documents = transport.documents.lock().unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0], guild.to_document().unwrap());
}

#[tokio::test]
async fn test_raw_data_is_a_live_guild() {
    let guild = NewGuild::new("Raw");
    let transport = RecordingTransport::default();
    let created: RawGuildData = guild.create(&transport).await.unwrap();
    assert_eq!(created.name(), Some("Raw"));
}

#[tokio::test]
async fn test_transport_failure_propagates_unchanged() {
    let guild = NewGuild::new("Test");
    let transport = RecordingTransport::failing(1);

    let err = guild
        .create::<_, RawGuildData>(&transport)
        .await
        .unwrap_err();

    match err.kind() {
        GuildwrightErrorKind::Transport(e) => {
            assert_eq!(e.kind(), &TransportErrorKind::RateLimited(5));
        }
        other => panic!("expected transport error, got {}", other),
    }
    assert!(transport.documents.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_same_graph_can_be_resubmitted() {
    let guild = NewGuild::new("Retry");
    let transport = RecordingTransport::failing(1);

    assert!(guild.create::<_, RawGuildData>(&transport).await.is_err());
    let created: CreatedGuild = guild.create(&transport).await.unwrap();
    assert_eq!(created.id, "81384788765712384");
}

#[tokio::test]
async fn test_create_through_trait_object() {
    let guild = NewGuild::new("Dyn");
    let transport: Box<dyn GuildTransport> = Box::new(RecordingTransport::default());
    let created: RawGuildData = guild.create(transport.as_ref()).await.unwrap();
    assert_eq!(created.id(), Some("81384788765712384"));
}

#[tokio::test]
async fn test_template_creation_encodes_icon() {
    let gif = b"GIF89a".to_vec();
    let request = NewTemplatedGuild::new("Cloned", "hgM48av5Q69A").with_icon(gif);
    let transport = RecordingTransport::default();

    let created: CreatedGuild = request.create(&transport).await.unwrap();

    assert_eq!(created.id, "41771983423143937");
    let templates = transport.templates.lock().unwrap();
    assert_eq!(templates.len(), 1);
    let (code, name, icon) = &templates[0];
    assert_eq!(code, "hgM48av5Q69A");
    assert_eq!(name, "Cloned");
    assert_eq!(icon.as_deref(), Some("data:image/gif;base64,R0lGODlh"));
}

#[tokio::test]
async fn test_template_without_icon() {
    let request = NewTemplatedGuild::new("Plain", "abc");
    let transport = RecordingTransport::default();
    let _: RawGuildData = request.create(&transport).await.unwrap();
    assert_eq!(transport.templates.lock().unwrap()[0].2, None);
}
