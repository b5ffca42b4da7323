//! Class list merging for Tailwind-style utility classes.
//!
//! Components compose their classes from a computed base plus caller overrides.
//! Concatenation alone is not enough: `px-6 px-10` leaves the winner up to the
//! stylesheet's rule order, so [`cn`] drops the earlier utility of any pair that
//! targets the same property under the same variant prefix.

use std::collections::HashSet;

/// Utility prefixes that set one property group, most specific first.
///
/// A class matches an entry when it equals the prefix or starts with
/// `prefix-`.
const PREFIX_GROUPS: &[(&str, &str)] = &[
    ("bg-gradient-to", "bg-image"),
    ("bg", "bg-color"),
    ("from", "gradient-from"),
    ("via", "gradient-via"),
    ("to", "gradient-to"),
    ("px", "padding-x"),
    ("py", "padding-y"),
    ("pt", "padding-top"),
    ("pr", "padding-right"),
    ("pb", "padding-bottom"),
    ("pl", "padding-left"),
    ("p", "padding"),
    ("mx", "margin-x"),
    ("my", "margin-y"),
    ("mt", "margin-top"),
    ("mr", "margin-right"),
    ("mb", "margin-bottom"),
    ("ml", "margin-left"),
    ("m", "margin"),
    ("space-x", "space-x"),
    ("space-y", "space-y"),
    ("gap-x", "gap-x"),
    ("gap-y", "gap-y"),
    ("gap", "gap"),
    ("min-w", "min-width"),
    ("max-w", "max-width"),
    ("min-h", "min-height"),
    ("max-h", "max-height"),
    ("w", "width"),
    ("h", "height"),
    ("size", "size"),
    ("rounded-t", "rounded-top"),
    ("rounded-b", "rounded-bottom"),
    ("rounded-l", "rounded-left"),
    ("rounded-r", "rounded-right"),
    ("rounded", "rounded"),
    ("inset-x", "inset-x"),
    ("inset-y", "inset-y"),
    ("inset", "inset"),
    ("top", "top"),
    ("right", "right"),
    ("bottom", "bottom"),
    ("left", "left"),
    ("z", "z-index"),
    ("overflow-x", "overflow-x"),
    ("overflow-y", "overflow-y"),
    ("overflow", "overflow"),
    ("items", "align-items"),
    ("justify", "justify-content"),
    ("self", "align-self"),
    ("aspect", "aspect-ratio"),
    ("tracking", "letter-spacing"),
    ("leading", "line-height"),
    ("opacity", "opacity"),
    ("shadow", "shadow"),
    ("object", "object-fit"),
    ("animate", "animation"),
];

/// Shorthand groups and the longhand groups they also set.
///
/// A later shorthand (`p-2`) removes earlier longhands (`px-6`, `pt-1`); a
/// later longhand leaves an earlier shorthand in place.
const SHORTHANDS: &[(&str, &[&str])] = &[
    (
        "padding",
        &[
            "padding-x",
            "padding-y",
            "padding-top",
            "padding-right",
            "padding-bottom",
            "padding-left",
        ],
    ),
    ("padding-x", &["padding-right", "padding-left"]),
    ("padding-y", &["padding-top", "padding-bottom"]),
    (
        "margin",
        &[
            "margin-x",
            "margin-y",
            "margin-top",
            "margin-right",
            "margin-bottom",
            "margin-left",
        ],
    ),
    ("margin-x", &["margin-right", "margin-left"]),
    ("margin-y", &["margin-top", "margin-bottom"]),
    (
        "rounded",
        &["rounded-top", "rounded-bottom", "rounded-left", "rounded-right"],
    ),
    ("inset", &["inset-x", "inset-y", "top", "right", "bottom", "left"]),
    ("inset-x", &["right", "left"]),
    ("inset-y", &["top", "bottom"]),
    ("overflow", &["overflow-x", "overflow-y"]),
    ("gap", &["gap-x", "gap-y"]),
    ("size", &["width", "height"]),
];

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "contents",
    "hidden",
];

const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];

const FLEX_DIRECTION: &[&str] = &["flex-row", "flex-row-reverse", "flex-col", "flex-col-reverse"];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

/// Merge class lists into one `class` attribute value.
///
/// Later classes win: an exact duplicate or a class from the same property
/// group (under the same `md:`/`hover:` style prefix) removes the earlier one,
/// and a shorthand such as `p-2` also removes earlier `px-*`/`pt-*` classes.
/// Classes without a known group only deduplicate exactly.
///
/// ```
/// use page_banner::ui::cn;
///
/// assert_eq!(cn(["px-6 py-6", "px-10"]), "py-6 px-10");
/// assert_eq!(cn(["px-6 py-6", "p-2"]), "p-2");
/// assert_eq!(cn(["h-6 w-48", "md:w-56"]), "h-6 w-48 md:w-56");
/// ```
pub fn cn<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<S> = parts.into_iter().collect();
    let tokens: Vec<&str> = parts
        .iter()
        .flat_map(|part| part.as_ref().split_whitespace())
        .collect();

    let mut seen = HashSet::new();
    let mut kept: Vec<&str> = tokens
        .iter()
        .rev()
        .filter(|token| {
            let (variants, group) = conflict_group(token);
            if !seen.insert(format!("{variants}:{group}")) {
                return false;
            }
            for longhand in longhands_of(group) {
                seen.insert(format!("{variants}:{longhand}"));
            }
            true
        })
        .copied()
        .collect();
    kept.reverse();
    kept.join(" ")
}

/// Variant prefix and property group under which two classes override each other.
fn conflict_group(token: &str) -> (&str, &str) {
    let (variants, utility) = token.rsplit_once(':').unwrap_or(("", token));
    let utility = utility.strip_prefix('-').unwrap_or(utility);
    (variants, group_of(utility))
}

fn longhands_of(group: &str) -> &'static [&'static str] {
    SHORTHANDS
        .iter()
        .find(|(shorthand, _)| *shorthand == group)
        .map(|(_, longhands)| *longhands)
        .unwrap_or_default()
}

fn group_of(utility: &str) -> &str {
    if DISPLAY.contains(&utility) {
        return "display";
    }
    if POSITION.contains(&utility) {
        return "position";
    }
    if FLEX_DIRECTION.contains(&utility) {
        return "flex-direction";
    }
    if let Some(rest) = utility.strip_prefix("text-") {
        if FONT_SIZES.contains(&rest) {
            return "font-size";
        }
        if TEXT_ALIGN.contains(&rest) {
            return "text-align";
        }
        if let Some(value) = rest.strip_prefix('[') {
            return arbitrary_text_group(value).unwrap_or(utility);
        }
        return "text-color";
    }
    if let Some(rest) = utility.strip_prefix("font-") {
        return if FONT_WEIGHTS.contains(&rest) {
            "font-weight"
        } else {
            "font-family"
        };
    }

    PREFIX_GROUPS
        .iter()
        .find(|(prefix, _)| {
            utility == *prefix
                || utility
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.starts_with('-'))
        })
        .map_or(utility, |(_, group)| group)
}

/// Group of a `text-[...]` arbitrary value, when its type is recognizable.
fn arbitrary_text_group(value: &str) -> Option<&'static str> {
    if value.starts_with("length:") || value.starts_with(|c: char| c.is_ascii_digit() || c == '.')
    {
        Some("font-size")
    } else if value.starts_with("color:")
        || value.starts_with('#')
        || value.starts_with("rgb")
        || value.starts_with("hsl")
    {
        Some("text-color")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_and_skips_blank_parts() {
        assert_eq!(cn(["flex-1", "", "  space-y-4 "]), "flex-1 space-y-4");
        assert_eq!(cn(Vec::<String>::new()), "");
    }

    #[test]
    fn test_exact_duplicates_keep_last_position() {
        assert_eq!(cn(["a b", "a"]), "b a");
    }

    #[test]
    fn test_later_padding_overrides_earlier() {
        assert_eq!(cn(["px-6 py-6", "px-10"]), "py-6 px-10");
        assert_eq!(cn(["rounded-md", "rounded-full"]), "rounded-full");
    }

    #[test]
    fn test_variant_prefixes_do_not_conflict_with_base() {
        assert_eq!(
            cn(["h-6 w-48 md:w-56 lg:w-64"]),
            "h-6 w-48 md:w-56 lg:w-64"
        );
        assert_eq!(
            cn(["md:flex-row", "md:flex-row-reverse"]),
            "md:flex-row-reverse"
        );
    }

    #[test]
    fn test_text_size_and_color_are_separate_groups() {
        assert_eq!(
            cn(["text-sm text-muted-foreground", "md:text-base"]),
            "text-sm text-muted-foreground md:text-base"
        );
        assert_eq!(cn(["text-sm", "text-lg"]), "text-lg");
        assert_eq!(cn(["font-medium", "font-bold"]), "font-bold");
    }

    #[test]
    fn test_gradient_stops_and_background() {
        assert_eq!(
            cn([
                "bg-gradient-to-br from-primary/20 via-primary/10 to-secondary/20",
                "from-accent/30"
            ]),
            "bg-gradient-to-br via-primary/10 to-secondary/20 from-accent/30"
        );
        // A flat background color does not cancel a gradient image.
        assert_eq!(
            cn(["bg-gradient-to-r", "bg-muted"]),
            "bg-gradient-to-r bg-muted"
        );
    }

    #[test]
    fn test_prefix_match_requires_dash_boundary() {
        // `top-0` must not be read as a `to-*` gradient stop.
        assert_eq!(cn(["to-transparent top-0"]), "to-transparent top-0");
        assert_eq!(cn(["-mt-2", "mt-4"]), "mt-4");
    }

    #[test]
    fn test_shorthand_removes_earlier_longhands() {
        assert_eq!(cn(["px-6 py-6", "p-2"]), "p-2");
        assert_eq!(cn(["pt-1 pl-3", "px-4"]), "pt-1 px-4");
        assert_eq!(cn(["mt-2 mx-auto", "m-0"]), "m-0");
        assert_eq!(cn(["rounded-t-lg", "rounded-2xl"]), "rounded-2xl");
        assert_eq!(cn(["top-0 left-2", "inset-0"]), "inset-0");
        assert_eq!(cn(["overflow-x-auto", "overflow-hidden"]), "overflow-hidden");
        assert_eq!(cn(["w-4 h-4", "size-8"]), "size-8");
    }

    #[test]
    fn test_longhand_keeps_earlier_shorthand() {
        assert_eq!(cn(["p-4", "px-2"]), "p-4 px-2");
        assert_eq!(cn(["overflow-hidden", "overflow-x-auto"]), "overflow-hidden overflow-x-auto");
        assert_eq!(cn(["rounded-2xl", "rounded-t-none"]), "rounded-2xl rounded-t-none");
    }

    #[test]
    fn test_shorthand_respects_variant_prefix() {
        assert_eq!(cn(["px-6", "md:p-2"]), "px-6 md:p-2");
        assert_eq!(cn(["md:px-6", "md:p-2"]), "md:p-2");
    }

    #[test]
    fn test_arbitrary_text_values() {
        assert_eq!(
            cn(["text-muted-foreground", "text-[14px]"]),
            "text-muted-foreground text-[14px]"
        );
        assert_eq!(cn(["text-sm", "text-[14px]"]), "text-[14px]");
        assert_eq!(cn(["text-primary", "text-[#ff0000]"]), "text-[#ff0000]");
        assert_eq!(
            cn(["text-sm text-primary", "text-[var(--size)]"]),
            "text-sm text-primary text-[var(--size)]"
        );
    }

    #[test]
    fn test_display_and_position_groups() {
        assert_eq!(cn(["flex", "hidden"]), "hidden");
        assert_eq!(cn(["relative", "absolute inset-0"]), "absolute inset-0");
    }
}
