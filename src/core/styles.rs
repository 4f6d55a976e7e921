//! Style roles expressed as an enum + macro mapping logical names to ANSI colours.
//!
//! Coloring is applied only when the `enabled` flag passed to `paint()` is true, so no
//! global colour state is involved.
//!
//! ```
//! use git_log_searcher::core::styles::StyleRole;
//! assert_eq!(StyleRole::Header.paint("searched", false), "searched");
//! assert!(StyleRole::Header.paint("searched", true).starts_with("\x1b["));
//! ```

use clap::builder::styling::{AnsiColor, Color, Style};

macro_rules! style {
    ( $( $variant:ident => $color:expr ),+ $(,)? ) => {
        #[derive(Copy, Clone, Debug)]
        pub enum StyleRole { $( $variant ),+ }

        impl StyleRole {
            pub fn color(self) -> Option<AnsiColor> {
                match self { $( StyleRole::$variant => $color ),+ }
            }

            pub fn style(self) -> Style {
                Style::new().fg_color(self.color().map(Color::Ansi))
            }

            pub fn paint(self, text: &str, enabled: bool) -> String {
                if !enabled || self.color().is_none() {
                    return text.to_string();
                }
                let style = self.style();
                format!("{}{}{}", style.render(), text, style.render_reset())
            }
        }
    }
}

style! {
    Header     => Some(AnsiColor::Yellow),
    Identifier => Some(AnsiColor::Cyan),
    Error      => Some(AnsiColor::BrightRed),
    Summary    => None,
}

/// Build clap Styles for help and usage errors from the same roles
pub fn palette_to_clap(enabled: bool) -> clap::builder::Styles {
    if !enabled {
        return clap::builder::Styles::plain();
    }

    clap::builder::Styles::styled()
        .header(StyleRole::Header.style().bold())
        .usage(StyleRole::Header.style().bold())
        .literal(StyleRole::Identifier.style())
        .placeholder(StyleRole::Header.style())
        .valid(StyleRole::Identifier.style())
        .invalid(StyleRole::Error.style())
        .error(StyleRole::Error.style().bold())
}
