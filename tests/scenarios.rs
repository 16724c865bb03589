use std::sync::Arc;
use video_player::model::{Catalog, Video};
use video_player::playback::{Notification, PlaybackController};
use video_player::playlists::PlaylistStore;
use video_player::{Command, InvalidState, PlayerConfig, PlayerError, VideoPlayer};

/// Create the two-video test catalog
fn create_test_catalog() -> Arc<Catalog> {
    let catalog: Catalog = [
        Video::new("v1", "Amazing Cat Video", &["#cat", "#animal"]),
        Video::new("v2", "Funny Dogs", &["#dog", "#animal"]),
    ]
    .into_iter()
    .collect();
    Arc::new(catalog)
}

fn playlist_ids(store: &PlaylistStore<Catalog>, name: &str) -> Vec<String> {
    store
        .show(name)
        .unwrap()
        .videos()
        .iter()
        .map(|v| v.id.clone())
        .collect()
}

#[test]
fn test_playlist_scenario() {
    let mut store = PlaylistStore::new(create_test_catalog());

    store.create("My List").unwrap();

    store.add_video("my list", "v1").unwrap();
    assert_eq!(playlist_ids(&store, "My List"), vec!["v1"]);

    assert!(matches!(
        store.add_video("MY LIST", "v1"),
        Err(PlayerError::DuplicateVideo { .. })
    ));
    assert_eq!(playlist_ids(&store, "My List"), vec!["v1"]);

    assert!(matches!(
        store.remove_video("My List", "v2"),
        Err(PlayerError::VideoNotInPlaylist { .. })
    ));

    store.clear("my LIST").unwrap();
    assert!(playlist_ids(&store, "My List").is_empty());
    assert_eq!(store.list_all(), vec!["My List"]);
}

#[test]
fn test_case_variants_collide() {
    let names = [("abc", "ABC"), ("Road Trip", "road trip"), ("MiXeD", "mIxEd")];

    for (first, second) in names {
        let mut store = PlaylistStore::new(create_test_catalog());
        store.create(first).unwrap();
        assert_eq!(
            store.create(second).unwrap_err(),
            PlayerError::AlreadyExists(second.to_string())
        );
    }
}

#[test]
fn test_remove_twice() {
    let mut store = PlaylistStore::new(create_test_catalog());
    store.create("list").unwrap();
    store.add_video("list", "v2").unwrap();

    store.remove_video("list", "v2").unwrap();
    assert!(matches!(
        store.remove_video("list", "v2"),
        Err(PlayerError::VideoNotInPlaylist { .. })
    ));
}

#[test]
fn test_play_valid_id_from_any_state() {
    let mut ctl = PlaybackController::new(create_test_catalog()).with_seed(3);

    // Stopped, playing, paused, then playing again
    let setups: [fn(&mut PlaybackController<Catalog>); 3] = [
        |_| {},
        |c| {
            c.play("v1").unwrap();
        },
        |c| {
            c.play("v1").unwrap();
            c.pause().unwrap();
        },
    ];

    for setup in setups {
        let _ = ctl.stop();
        setup(&mut ctl);

        ctl.play("v2").unwrap();
        let now = ctl.currently_playing().unwrap();
        assert_eq!(now.video.id, "v2");
        assert!(!now.paused);
    }
}

#[test]
fn test_implicit_stop_precedes_play() {
    let mut ctl = PlaybackController::new(create_test_catalog());
    ctl.play("v1").unwrap();
    ctl.pause().unwrap();

    let events = ctl.play("v2").unwrap();
    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], Notification::Stopped(v) if v.id == "v1"));
    assert!(matches!(&events[1], Notification::Playing(v) if v.id == "v2"));
}

#[test]
fn test_resume_keeps_current_video() {
    let mut ctl = PlaybackController::new(create_test_catalog());
    ctl.play("v2").unwrap();
    ctl.pause().unwrap();
    ctl.pause().unwrap();

    ctl.resume().unwrap();
    let now = ctl.currently_playing().unwrap();
    assert_eq!(now.video.id, "v2");
    assert!(!now.paused);

    assert_eq!(
        ctl.resume().unwrap_err(),
        PlayerError::InvalidState(InvalidState::NotPaused)
    );
}

#[test]
fn test_empty_catalog_random_play() {
    let mut ctl = PlaybackController::new(Arc::new(Catalog::new()));
    assert_eq!(ctl.play_random().unwrap_err(), PlayerError::EmptyCatalog);
}

#[test]
fn test_session_transcript() {
    let mut player = VideoPlayer::new(Catalog::sample(), &PlayerConfig::new().with_seed(9));

    let script = [
        "CREATE_PLAYLIST Favourites",
        "add_to_playlist favourites life_at_google_video_id",
        "ADD_TO_PLAYLIST FAVOURITES another_cat_video_id",
        "PLAY life_at_google_video_id",
        "PAUSE",
        "SHOW_PLAYLIST favourites",
    ];

    let mut output = Vec::new();
    for line in script {
        let command: Command = line.parse().unwrap();
        output.extend(player.execute(&command));
    }

    assert_eq!(
        output,
        vec![
            "Successfully created new playlist: Favourites",
            "Added video to Favourites: Life at Google",
            "Added video to Favourites: Another Cat Video",
            "Playing video: Life at Google",
            "Pausing video: Life at Google",
            "Showing playlist: Favourites",
            "  Life at Google (life_at_google_video_id) [#google #career]",
            "  Another Cat Video (another_cat_video_id) [#cat #animal]",
        ]
    );
}
