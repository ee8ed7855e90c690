#[macro_use]
mod r#macro;

mod config;

use crate::ImageMeta;

use std::path::Path;

define_captions![
    author_and_title: "jane doe - sunset" => ("jane doe", "sunset"),
    no_separator: "cabin%view" => ("", "cabin<br>view"),
    no_separator_untrimmed: "  lake  " => ("", "  lake  "),
    only_first_dash_splits: "a - b - c" => ("a", "b - c"),
    no_spaces_around_dash: "anon-untitled" => ("anon", "untitled"),
    empty_author: " - sunset" => ("", "sunset"),
    empty_title: "jane doe -   " => ("jane doe", ""),
    lone_dash: "-" => ("", ""),
    breaks_on_both_sides: "jane%doe - sun%set%" => ("jane<br>doe", "sun<br>set<br>"),
    break_then_trim: " %jane - title% " => ("<br>jane", "title<br>"),
    consecutive_breaks: "a%%b" => ("", "a<br><br>b"),
    markup_is_kept: "<b>bold</b>" => ("", "<b>bold</b>"),
];

fn image_at(name: &str) -> ImageMeta {
    let root = Path::new("project");
    ImageMeta::from_path(&root.join("images").join(name), root)
}

#[test]
fn meta_strips_extension() {
    let meta = image_at("jane doe - sunset.jpg");

    assert_eq!(meta.rel_path, "images/jane doe - sunset.jpg");
    assert_eq!(meta.author, "jane doe");
    assert_eq!(meta.title, "sunset");
}

#[test]
fn meta_strips_only_last_extension() {
    let meta = image_at("archive.tar.png");

    assert_eq!(meta.author, "");
    assert_eq!(meta.title, "archive.tar");
}

#[test]
fn meta_of_dotfile_has_empty_title() {
    let meta = image_at(".png");

    assert_eq!(meta.rel_path, "images/.png");
    assert_eq!(meta.title, "");
}

#[test]
fn meta_relative_to_current_directory() {
    let meta = ImageMeta::from_path(Path::new("./images/a - b.gif"), Path::new("."));

    assert_eq!(meta.rel_path, "images/a - b.gif");
}
