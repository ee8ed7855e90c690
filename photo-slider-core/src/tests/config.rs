use crate::{Config, Error};

use std::fs::{create_dir, read_to_string, write};

use tempfile::tempdir;

#[test]
fn template_round_trip() {
    let defaults = Config::default();

    assert_eq!(Config::parse(&defaults.template()), defaults);
}

#[test]
fn parse_overrides_recognised_keys() {
    let config = Config::parse(
        "include_author=false
author_text_color=#000000
author_stroke_color = red
title_text_color=blue
title_stroke_color=  #123456
image_border_color=#abcdef
image_border_style=solid",
    );

    assert_eq!(
        config,
        Config {
            include_author: false,
            author_text_color: "#000000".to_string(),
            author_stroke_color: "red".to_string(),
            title_text_color: "blue".to_string(),
            title_stroke_color: "#123456".to_string(),
            image_border_color: "#abcdef".to_string(),
            image_border_style: "solid".to_string(),
        }
    );
}

#[test]
fn parse_skips_comments_and_junk() {
    let config = Config::parse(
        "# include_author=false

   # image_border_style=solid
this line has no separator
unknown_key=whatever
=orphan value
title_text_color=#010101
",
    );

    let expected = Config {
        title_text_color: "#010101".to_string(),
        ..Config::default()
    };

    assert_eq!(config, expected);
}

#[test]
fn parse_splits_on_first_equals() {
    let config = Config::parse("image_border_style=a=b");

    assert_eq!(config.image_border_style, "a=b");
}

#[test]
fn parse_malformed_boolean_is_false() {
    for value in ["TRUE", "yes", "1", "", "true!"] {
        let config = Config::parse(&format!("include_author={}", value));
        assert!(!config.include_author, "{:?} should be false", value);
        assert_eq!(config.author_text_color, Config::default().author_text_color);
    }

    assert!(Config::parse("include_author = true ").include_author);
}

#[test]
fn parse_last_value_wins() {
    let config = Config::parse("image_border_color=#111111\nimage_border_color=#222222");

    assert_eq!(config.image_border_color, "#222222");
}

#[test]
fn parse_windows_line_endings() {
    let config = Config::parse("include_author=false\r\nimage_border_style=dotted\r\n");

    assert!(!config.include_author);
    assert_eq!(config.image_border_style, "dotted");
}

#[test]
fn set_reports_unknown_keys() {
    let mut config = Config::default();

    assert!(config.set("title_text_color", "#000000"));
    assert!(!config.set("title_colour", "#ffffff"));
    assert_eq!(config.title_text_color, "#000000");
}

#[test]
fn load_creates_default_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("photo-slider.config");

    let config = Config::load(&path).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(read_to_string(&path).unwrap(), Config::default().template());
    assert_eq!(Config::load(&path).unwrap(), Config::default());
}

#[test]
fn default_file_is_commented() {
    let template = Config::default().template();

    assert!(template.starts_with("# Photo Slider Configuration\n"));
    assert!(template.contains("\ninclude_author=true\n"));
    assert!(template.contains("\nimage_border_style=dashed\n"));
}

#[test]
fn load_reads_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("photo-slider.config");
    write(&path, "include_author=false\nimage_border_style=groove\n").unwrap();

    let config = Config::load(&path).unwrap();

    assert!(!config.include_author);
    assert_eq!(config.image_border_style, "groove");
    assert_eq!(config.image_border_color, "#741d34");
}

#[test]
fn load_unreadable_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("photo-slider.config");
    create_dir(&path).unwrap();

    let error = Config::load(&path).unwrap_err();

    assert!(matches!(error, Error::ReadConfig(..)));
    assert_eq!(error.path(), Some(path.as_path()));
}

#[test]
fn load_unwritable_location_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("photo-slider.config");

    let error = Config::load(&path).unwrap_err();

    assert!(matches!(error, Error::WriteConfig(..)));
}
