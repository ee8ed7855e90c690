//! Provides the embedded stylesheet of the gallery page.

use crate::layout::SECONDS_PER_IMAGE;
use crate::Config;

use std::io::{Result, Write};

/// Rules which do not depend on the configuration, placed before the scroll track.
static PAGE_RULES: &str = r#"      html, body {
        display: flex;
        flex-direction: column;
        width: 100%;
        height: 100%;
        margin: 0px;
        padding: 0px;
        overflow: hidden;
        max-width: 100%;
        overflow-x: hidden;
        scrollbar-width: none;
        -ms-overflow-style: none;
      }
     html::-webkit-scrollbar, body::-webkit-scrollbar {
       display: none;
     }

      *, *::before, *::after {
        box-sizing: border-box;
      }
"#;

/// Rules for the two halves of the track and the image containers.
static CONTENT_RULES: &str = r#"      #permas .scroll-content {
        display: flex;
        white-space: nowrap;
        flex-shrink: 0;
      }

      #permas .scroll-content-duplicate {
        display: flex;
        white-space: nowrap;
        flex-shrink: 0;
      }

      .image-container {
        display: inline-block;
        margin-top: 32px;
        margin-right: 80px;
        text-align: center;
      }
"#;

/// The caption block rule, shared by the author and title lines.
static CAPTION_RULE: &str = r#"      #permas .caption {
        font-family: "Nunito", sans-serif;
        white-space: normal;
        overflow: hidden;
        text-overflow: ellipsis;
        max-width: 100%;
        text-align: center;
        margin: 0 auto;
        margin-top: 32px;
      }
"#;

/// Moves the track left by half its width, which is exactly one copy of the images.
static KEYFRAMES: &str = r#"      @keyframes scroll {
        0% {
          transform: translateX(0);
        }
        100% {
          transform: translateX(-50%);
        }
      }
"#;

/// Returns the duration of one full animation cycle in seconds.
pub fn animation_duration(image_count: usize) -> usize {
    image_count * SECONDS_PER_IMAGE
}

/// Writes the contents of the `<style>` element.
pub fn write_stylesheet(w: &mut impl Write, image_count: usize, config: &Config) -> Result<()> {
    w.write_all(PAGE_RULES.as_bytes())?;
    writeln!(w)?;

    writeln!(w, "      #permas {{")?;
    writeln!(w, "        height: 750px;")?;
    writeln!(w, "        position: absolute;")?;
    writeln!(w, "        overflow: hidden;")?;
    writeln!(w, "        overflow-y: hidden;")?;
    writeln!(w, "        white-space: nowrap;")?;
    writeln!(w, "        left: 0;")?;
    writeln!(w, "        animation-name: scroll;")?;
    writeln!(
        w,
        "        animation-duration: {}s;",
        animation_duration(image_count)
    )?;
    writeln!(w, "        animation-iteration-count: infinite;")?;
    writeln!(w, "        animation-timing-function: linear;")?;
    writeln!(w, "        display: flex;")?;
    writeln!(w, "        width: max-content;")?;
    writeln!(w, "      }}")?;
    writeln!(w)?;

    w.write_all(CONTENT_RULES.as_bytes())?;
    writeln!(w)?;

    writeln!(w, "      #permas img {{")?;
    writeln!(w, "        height: 500px;")?;
    writeln!(w, "        border-radius: 12px;")?;
    writeln!(w, "        display: block;")?;
    writeln!(w, "        margin-bottom: 10px;")?;
    writeln!(
        w,
        "        outline: 5px {} {};",
        config.image_border_style, config.image_border_color
    )?;
    writeln!(w, "        outline-offset: 16px;")?;
    writeln!(w, "      }}")?;
    writeln!(w)?;

    w.write_all(CAPTION_RULE.as_bytes())?;
    writeln!(w)?;

    writeln!(w, "      #permas .author {{")?;
    writeln!(w, "        font-size: 48px;")?;
    writeln!(w, "        color: {};", config.author_text_color)?;
    writeln!(
        w,
        "        -webkit-text-stroke: 10px {};",
        config.author_stroke_color
    )?;
    writeln!(w, "        paint-order: stroke fill;")?;
    writeln!(w, "        font-weight: bold;")?;
    writeln!(w, "        display: block;")?;
    writeln!(w, "      }}")?;
    writeln!(w)?;

    writeln!(w, "      #permas .title {{")?;
    writeln!(w, "        font-size: 40px;")?;
    writeln!(w, "        display: block;")?;
    writeln!(w, "        color: {};", config.title_text_color)?;
    writeln!(
        w,
        "        -webkit-text-stroke: 10px {};",
        config.title_stroke_color
    )?;
    writeln!(w, "        paint-order: stroke fill;")?;
    writeln!(w, "      }}")?;
    writeln!(w)?;

    w.write_all(KEYFRAMES.as_bytes())
}
