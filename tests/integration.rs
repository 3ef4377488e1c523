// SPDX-License-Identifier: MPL-2.0
use podium::config::{self, Config};
use podium::content::{ContentSource, SiteContent};
use podium::i18n::fluent::I18n;
use podium::rotation::{Direction, Rotation, RotationSpec, Schedule, TickInterval};
use podium::ui::carousel::{Gallery, Testimonials, VideoSlideshow};
use std::time::Instant;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &config_path).expect("Failed to write initial config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &config_path).expect("Failed to write french config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("nav-about"), "À propos");
}

#[test]
fn test_custom_manifest_with_local_images() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let manifest = dir.path().join("site.toml");
    std::fs::write(
        &manifest,
        r#"
            gallery = ["a.jpeg", "b.jpeg", "c.jpeg", "d.jpeg"]
            testimonials = ["Great talk."]

            [speaker]
            name = "Ada Lovelace"
            booking_email = "ada@example.com"

            [hero]
            headline = "HEAR FROM ADA"
            tagline = "Engines and poetry."

            [about]
            heading = "About Ada"

            [[videos]]
            id = "abc123"
            title = "Notes"

            [cta]
            heading = "Book Ada"
            body = "Any event."
        "#,
    )
    .expect("Failed to write manifest");
    std::fs::write(dir.path().join("a.jpeg"), b"not really a jpeg").expect("Failed to write image");

    let source = ContentSource::resolve(Some(manifest), &config::ContentConfig::default());
    assert_eq!(source.asset_dir(), dir.path());
    let content = source.load().expect("manifest parses");

    let photos = source.images(&content.gallery);
    assert!(photos[0].available);
    assert!(!photos[1].available);

    let now = Instant::now();
    let mut gallery = Gallery::mount(photos, TickInterval::from_millis(3000), true, now)
        .expect("four photos fill a three-photo window");
    gallery.state_mut().tick(now);
    let window: Vec<&str> = gallery
        .state()
        .rotation()
        .visible_window()
        .map(|photo| photo.name.as_str())
        .collect();
    assert_eq!(window, vec!["d.jpeg", "a.jpeg", "b.jpeg"]);

    let testimonials = Testimonials::mount(
        content.testimonials.clone(),
        TickInterval::from_millis(7000),
        true,
        now,
    )
    .expect("one testimonial is enough");
    assert_eq!(testimonials.state().rotation().len(), 1);
}

#[test]
fn test_embedded_page_lifecycle() {
    let content = SiteContent::embedded().expect("embedded manifest parses");
    let now = Instant::now();

    let mut videos =
        VideoSlideshow::mount(content.videos.clone(), false, now).expect("videos mount");
    videos.state_mut().step(Direction::Previous, now);
    assert_eq!(videos.state().rotation().current().id, "EZdyAnEc2AM");

    videos.state_mut().dispose();
    assert_eq!(videos.state().schedule(), Schedule::Cancelled);
    videos.state_mut().dispose();
    assert_eq!(videos.state().schedule(), Schedule::Cancelled);
}

#[test]
fn test_manual_navigation_does_not_touch_the_timer() {
    let mut rotation = Rotation::new(
        vec!["first", "second", "third"],
        RotationSpec::single(TickInterval::from_millis(7000)),
    )
    .expect("three quotes");

    rotation.go_to(-1);
    assert_eq!(*rotation.current(), "third");
    assert_eq!(rotation.timer(), Some(TickInterval::from_millis(7000)));

    rotation.tick();
    assert_eq!(*rotation.current(), "first");
}
