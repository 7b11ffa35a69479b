use guildwright_core::{
    Colour, ContentFilter, ForumTag, PermissionOverwrite, Permissions, VerificationLevel,
};
use guildwright_error::{GuildwrightErrorKind, StagingErrorKind};
use guildwright_staging::{
    CategoryOptions, ChannelOptions, ForumOptions, GuildOptions, IdAllocator, NewGuild,
    Overwrites, RoleOptions, StageChannelOptions, TextChannelOptions, VoiceChannelOptions,
    DEFAULT_ROLE_NAME,
};
use serde_json::json;

fn staging_kind(err: &guildwright_error::GuildwrightError) -> &StagingErrorKind {
    match err.kind() {
        GuildwrightErrorKind::Staging(e) => e.kind(),
        other => panic!("expected staging error, got {}", other),
    }
}

#[test]
fn test_empty_guild_renders_default_role_only() {
    let guild = NewGuild::new("Empty");
    let document = guild.to_document().unwrap();

    assert_eq!(
        document,
        json!({
            "name": "Empty",
            "roles": [{"id": 1, "name": "@everyone", "color": 0}],
        })
    );
    assert!(guild.roles().is_empty());
}

#[test]
fn test_first_named_role_is_preceded_by_default() {
    let mut guild = NewGuild::new("Test");
    let mods = guild.add_role("Mods", RoleOptions::default()).unwrap();
    let members = guild.add_role("Members", RoleOptions::default()).unwrap();

    let document = guild.to_document().unwrap();
    let roles = document["roles"].as_array().unwrap();
    assert_eq!(roles.len(), 3);
    assert_eq!(roles[0]["name"], json!(DEFAULT_ROLE_NAME));
    assert_eq!(roles[1]["id"], json!(mods.id().value()));
    assert_eq!(roles[2]["id"], json!(members.id().value()));
}

#[test]
fn test_explicit_default_role_is_not_duplicated() {
    let mut guild = NewGuild::new("Test");
    let everyone = guild.add_role(
        DEFAULT_ROLE_NAME,
        RoleOptions::default().with_permissions(Permissions::VIEW_CHANNEL),
    )
    .unwrap();
    guild.add_role("Mods", RoleOptions::default()).unwrap();

    assert_eq!(guild.ensure_default_role(), everyone);
    let document = guild.to_document().unwrap();
    let roles = document["roles"].as_array().unwrap();
    assert_eq!(roles.len(), 2);
    assert_eq!(roles[0]["permissions"], json!("1024"));
}

#[test]
fn test_default_role_id_is_stable() {
    let mut implicit = NewGuild::new("A");
    let implicit_id = implicit.to_document().unwrap()["roles"][0]["id"].clone();
    let explicit = implicit.ensure_default_role();
    assert_eq!(implicit_id, json!(explicit.id().value()));
}

#[test]
fn test_colour_wins_over_color() {
    let mut guild = NewGuild::new("Test");
    let role = guild.add_role(
        "Painted",
        RoleOptions::default()
            .with_colour(Colour::from(0x00ff00))
            .with_color(Colour::from(0xff0000)),
    )
    .unwrap();
    assert_eq!(guild.role(role).unwrap().colour(), &Some(Colour::from(0x00ff00)));

    let only_color = guild.add_role(
        "Alias",
        RoleOptions::default().with_color(Colour::from(0x0000ff)),
    )
    .unwrap();
    assert_eq!(guild.role(only_color).unwrap().color(), &Some(Colour::from(0x0000ff)));
}

#[test]
fn test_channels_keep_insertion_order() {
    let mut guild = NewGuild::new("Order");
    let voice = guild.add_category("Voice", CategoryOptions::default()).unwrap();
    let text = guild.add_category("Text", CategoryOptions::default()).unwrap();
    guild
        .category(voice)
        .add_voice_channel("Lounge", VoiceChannelOptions::default())
        .unwrap();
    guild
        .add_text_channel("rules", TextChannelOptions::default())
        .unwrap();
    guild
        .category(text)
        .add_forum("help", ForumOptions::default())
        .unwrap();
    guild
        .category(voice)
        .add_stage_channel("Town hall", StageChannelOptions::default())
        .unwrap();

    let document = guild.to_document().unwrap();
    let names: Vec<&str> = document["channels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Voice", "Text", "Lounge", "rules", "help", "Town hall"]);
    let types: Vec<u64> = document["channels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["type"].as_u64().unwrap())
        .collect();
    assert_eq!(types, vec![4, 4, 2, 0, 15, 13]);
}

#[test]
fn test_parent_id_matches_category_id() {
    let mut guild = NewGuild::new("Test");
    let general = guild.add_category("General", CategoryOptions::default()).unwrap();
    let chat = guild
        .add_text_channel("chat", TextChannelOptions::default().with_category(general))
        .unwrap();

    assert_eq!(guild.channel(chat).unwrap().parent(), &Some(general.id()));
    let document = guild.to_document().unwrap();
    assert_eq!(document["channels"][1]["parent_id"], document["channels"][0]["id"]);
    assert!(document["channels"][0].get("parent_id").is_none());
}

#[test]
fn test_special_channels_only_render_with_channels() {
    let mut guild = NewGuild::new("Test");
    let afk = guild
        .add_voice_channel("AFK", VoiceChannelOptions::default().with_afk_channel(true))
        .unwrap();
    let system = guild
        .add_text_channel("welcome", TextChannelOptions::default().with_system_channel(true))
        .unwrap();

    let document = guild.to_document().unwrap();
    assert_eq!(document["afk_channel_id"], json!(afk.id().value()));
    assert_eq!(document["system_channel_id"], json!(system.id().value()));
    assert_eq!(guild.afk_channel(), &Some(afk));
}

#[test]
fn test_roles_without_channels_never_render_special_ids() {
    let mut guild = NewGuild::new("Test");
    guild.add_role("Mods", RoleOptions::default()).unwrap();

    let document = guild.to_document().unwrap();
    assert!(document.get("channels").is_none());
    assert!(document.get("afk_channel_id").is_none());
    assert!(document.get("system_channel_id").is_none());
}

#[test]
fn test_set_special_channel_rejects_foreign_handle() {
    let mut other = NewGuild::new("Other");
    let foreign = other
        .add_voice_channel("AFK", VoiceChannelOptions::default())
        .unwrap();

    let mut guild = NewGuild::new("Test");
    let err = guild.set_afk_channel(foreign).unwrap_err();
    assert!(matches!(
        staging_kind(&err),
        StagingErrorKind::ForeignEntity { entity, .. } if entity == "channel"
    ));
    assert_eq!(guild.afk_channel(), &None);
}

#[test]
fn test_set_system_channel_after_the_fact() {
    let mut guild = NewGuild::new("Test");
    let welcome = guild
        .add_text_channel("welcome", TextChannelOptions::default())
        .unwrap();
    guild.set_system_channel(welcome).unwrap();
    assert_eq!(
        guild.to_document().unwrap()["system_channel_id"],
        json!(welcome.id().value())
    );
}

#[test]
fn test_category_cannot_be_designated() {
    let mut guild = NewGuild::new("Test");
    let lobby = guild.add_category("Lobby", CategoryOptions::default()).unwrap();

    let err = guild.set_afk_channel(lobby.into()).unwrap_err();
    assert_eq!(
        staging_kind(&err),
        &StagingErrorKind::TypeMismatch {
            expected: "channel".to_string(),
            found: "category".to_string(),
        }
    );
    let err = guild.set_system_channel(lobby.into()).unwrap_err();
    assert!(matches!(staging_kind(&err), StagingErrorKind::TypeMismatch { .. }));

    assert_eq!(guild.afk_channel(), &None);
    assert_eq!(guild.system_channel(), &None);
    assert!(guild.to_document().unwrap().get("afk_channel_id").is_none());
}

#[test]
fn test_unset_options_are_absent() {
    let mut guild = NewGuild::new("Sparse");
    guild
        .add_text_channel("chat", TextChannelOptions::default())
        .unwrap();
    guild
        .add_voice_channel("talk", VoiceChannelOptions::default())
        .unwrap();
    guild.add_forum("board", ForumOptions::default()).unwrap();

    let document = guild.to_document().unwrap();
    for key in ["icon", "afk_timeout", "verification_level", "explicit_content_filter"] {
        assert!(document.get(key).is_none(), "unexpected key {}", key);
    }
    for channel in document["channels"].as_array().unwrap() {
        let keys: Vec<&String> = channel.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3, "unexpected keys {:?}", keys);
    }
}

#[test]
fn test_guild_attributes_render_codes() {
    let options = GuildOptions::default()
        .with_afk_timeout(300u32)
        .with_verification_level(VerificationLevel::High)
        .with_content_filter(ContentFilter::AllMembers);
    let guild = NewGuild::with_options("Strict", options);

    let document = guild.to_document().unwrap();
    assert_eq!(document["afk_timeout"], json!(300));
    assert_eq!(document["verification_level"], json!(3));
    assert_eq!(document["explicit_content_filter"], json!(2));
    assert!(document.get("default_message_notifications").is_none());
}

#[test]
fn test_icon_renders_as_data_uri() {
    let png = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    let guild = NewGuild::with_options("Pictured", GuildOptions::default().with_icon(png));
    let document = guild.to_document().unwrap();
    assert_eq!(document["icon"], json!("data:image/png;base64,iVBORw0KGgo="));
}

#[test]
fn test_unrecognised_icon_is_rejected() {
    let guild = NewGuild::with_options(
        "Broken",
        GuildOptions::default().with_icon(b"not an image".to_vec()),
    );
    let err = guild.to_payload().unwrap_err();
    assert_eq!(staging_kind(&err), &StagingErrorKind::UnsupportedImage);
}

#[test]
fn test_overwrite_resolves_to_role_id() {
    let mut guild = NewGuild::new("Test");
    let mods = guild.add_role("Mods", RoleOptions::default()).unwrap();
    let allow = Permissions::SEND_MESSAGES | Permissions::MANAGE_MESSAGES;
    let deny = Permissions::MANAGE_ROLES;
    guild
        .add_text_channel(
            "chat",
            TextChannelOptions::default().with_overwrite(mods, PermissionOverwrite::new(allow, deny)),
        )
        .unwrap();

    let document = guild.to_document().unwrap();
    assert_eq!(
        document["channels"][0]["permission_overwrites"],
        json!([{
            "id": mods.id().value(),
            "type": 0,
            "allow": allow.value().to_string(),
            "deny": deny.value().to_string(),
        }])
    );
}

#[test]
fn test_category_overwrites_render() {
    let mut guild = NewGuild::new("Test");
    let everyone = guild.ensure_default_role();
    guild
        .add_category(
            "Staff",
            CategoryOptions::default()
                .with_overwrite(everyone, PermissionOverwrite::deny_only(Permissions::VIEW_CHANNEL)),
        )
        .unwrap();

    let document = guild.to_document().unwrap();
    assert_eq!(
        document["channels"][0]["permission_overwrites"][0]["deny"],
        json!("1024")
    );
}

#[test]
fn test_non_role_overwrite_is_rejected_without_side_effects() {
    let mut guild = NewGuild::new("Test");
    let general = guild.add_category("General", CategoryOptions::default()).unwrap();
    let before = guild.to_document().unwrap();

    let err = guild
        .add_text_channel(
            "chat",
            TextChannelOptions::default()
                .with_overwrite(general, PermissionOverwrite::allow_only(Permissions::VIEW_CHANNEL)),
        )
        .unwrap_err();

    assert!(matches!(
        staging_kind(&err),
        StagingErrorKind::TypeMismatch { expected, found } if expected == "role" && found == "category"
    ));
    assert_eq!(guild.channels().len(), 1);
    assert_eq!(guild.to_document().unwrap(), before);
}

#[test]
fn test_foreign_role_overwrite_is_rejected() {
    let mut other = NewGuild::new("Other");
    let stranger = other.add_role("Stranger", RoleOptions::default()).unwrap();

    let mut guild = NewGuild::new("Test");
    let err = guild
        .add_voice_channel(
            "talk",
            VoiceChannelOptions::default()
                .with_overwrites(Overwrites::new().with(stranger, PermissionOverwrite::default())),
        )
        .unwrap_err();
    assert!(matches!(
        staging_kind(&err),
        StagingErrorKind::ForeignEntity { entity, .. } if entity == "role"
    ));
    assert!(guild.channels().is_empty());
}

#[test]
fn test_foreign_category_is_rejected() {
    let mut other = NewGuild::new("Other");
    let elsewhere = other.add_category("Elsewhere", CategoryOptions::default()).unwrap();

    let mut guild = NewGuild::new("Test");
    let err = guild
        .add_text_channel("chat", TextChannelOptions::default().with_category(elsewhere))
        .unwrap_err();
    assert!(matches!(staging_kind(&err), StagingErrorKind::ForeignEntity { .. }));
}

#[test]
fn test_forum_tags_keep_caller_order() {
    let mut guild = NewGuild::new("Test");
    guild
        .add_forum(
            "help",
            ForumOptions::default().with_available_tags(vec![
                ForumTag::new("solved").with_emoji("✅"),
                ForumTag::new("bug").with_moderated(true),
                ForumTag::new("question"),
            ]),
        )
        .unwrap();

    let document = guild.to_document().unwrap();
    let tags = document["channels"][0]["available_tags"].as_array().unwrap();
    let names: Vec<&str> = tags.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["solved", "bug", "question"]);
    assert_eq!(tags[0]["emoji_name"], json!("✅"));
    assert_eq!(tags[1]["moderated"], json!(true));
}

#[test]
fn test_configured_allocator_offsets_ids() {
    let mut guild =
        NewGuild::with_allocator("Offset", GuildOptions::default(), IdAllocator::starting_at(100))
            .unwrap();
    let mods = guild.add_role("Mods", RoleOptions::default()).unwrap();
    let document = guild.to_document().unwrap();
    assert_eq!(document["roles"][0]["id"], json!(100));
    assert_eq!(mods.id().value(), 101);
}

#[test]
fn test_allocator_at_top_of_range_reports_exhaustion() {
    let mut guild = NewGuild::with_allocator(
        "Edge",
        GuildOptions::default(),
        IdAllocator::starting_at(u64::MAX),
    )
    .unwrap();
    assert_eq!(guild.to_document().unwrap()["roles"][0]["id"], json!(u64::MAX));

    let err = guild.add_role("Mods", RoleOptions::default()).unwrap_err();
    assert_eq!(staging_kind(&err), &StagingErrorKind::IdsExhausted);
    let err = guild
        .add_text_channel("chat", TextChannelOptions::default())
        .unwrap_err();
    assert_eq!(staging_kind(&err), &StagingErrorKind::IdsExhausted);

    assert!(guild.roles().is_empty());
    assert!(guild.channels().is_empty());
}

#[test]
fn test_exhausted_allocator_is_rejected() {
    let mut ids = IdAllocator::starting_at(u64::MAX);
    ids.allocate().unwrap();
    let err = NewGuild::with_allocator("Spent", GuildOptions::default(), ids).unwrap_err();
    assert_eq!(staging_kind(&err), &StagingErrorKind::IdsExhausted);
}

#[test]
fn test_serialization_is_repeatable() {
    let mut guild = NewGuild::new("Test");
    let mods = guild.add_role("Mods", RoleOptions::default()).unwrap();
    guild
        .add_text_channel(
            "chat",
            TextChannelOptions::default().with_overwrite(mods, PermissionOverwrite::default()),
        )
        .unwrap();

    let first = serde_json::to_string(&guild.to_document().unwrap()).unwrap();
    let second = serde_json::to_string(&guild.to_document().unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_concrete_scenario() {
    let mut guild = NewGuild::new("Test");
    let general = guild.add_category("General", CategoryOptions::default()).unwrap();
    let mods = guild.add_role(
        "Mods",
        RoleOptions::default().with_permissions(Permissions::MANAGE_MESSAGES | Permissions::MANAGE_ROLES),
    )
    .unwrap();
    guild
        .category(general)
        .add_text_channel(
            "chat",
            TextChannelOptions::default().with_overwrite(mods, PermissionOverwrite::new(8u64, 0u64)),
        )
        .unwrap();

    let document = guild.to_document().unwrap();
    assert_eq!(document["name"], json!("Test"));

    let roles = document["roles"].as_array().unwrap();
    assert_eq!(roles.len(), 2);
    assert_eq!(roles[0]["name"], json!("@everyone"));
    assert_eq!(roles[1]["name"], json!("Mods"));

    let channels = document["channels"].as_array().unwrap();
    assert_eq!(channels.len(), 2);
    assert_eq!(channels[0]["name"], json!("General"));
    assert_eq!(channels[0]["type"], json!(4));
    assert_eq!(channels[1]["name"], json!("chat"));
    assert_eq!(channels[1]["type"], json!(0));
    assert_eq!(channels[1]["parent_id"], channels[0]["id"]);
    assert_eq!(
        channels[1]["permission_overwrites"],
        json!([{"id": roles[1]["id"], "type": 0, "allow": "8", "deny": "0"}])
    );
}
