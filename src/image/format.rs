use colored::Colorize;

use super::ImageRecord;

/// Tags at least this long are shortened.
const TAG_TRUNCATE_AT: usize = 40;
/// Characters of a long tag kept before the ellipsis.
const TAG_KEEP: usize = 37;
const ELLIPSIS: &str = "...";

const SIZE_WIDTH: usize = 10;
const AGE_WIDTH: usize = 15;

/// A choice label for one image, aligned with the rest of its listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow<'a> {
    pub image: &'a ImageRecord,
    pub label: String,
}

/// `repository:tag` as shown in the picker, without colour.
pub fn format_name(image: &ImageRecord) -> String {
    format!("{}:{}", image.display_repository(), truncate_tag(&image.tag))
}

/// Width of the name column: the longest formatted name in the listing.
pub fn name_width(images: &[ImageRecord]) -> usize {
    images
        .iter()
        .map(|image| format_name(image).chars().count())
        .max()
        .unwrap_or(0)
}

/// Format every image of one listing against a shared name column.
pub fn format_rows(images: &[ImageRecord], color: bool) -> Vec<DisplayRow<'_>> {
    let width = name_width(images);
    images
        .iter()
        .map(|image| DisplayRow {
            image,
            label: format_row(image, width, color),
        })
        .collect()
}

fn format_row(image: &ImageRecord, width: usize, color: bool) -> String {
    let tag = truncate_tag(&image.tag);
    let repository = image.display_repository();
    // Pad from the plain name so escape codes never count towards the width.
    let visible = repository.chars().count() + 1 + tag.chars().count();
    let padding = " ".repeat(width.saturating_sub(visible));
    let name = if color {
        format!("{}:{}", repository.red(), tag.cyan())
    } else {
        format!("{repository}:{tag}")
    };

    format!(
        "{name}{padding} {:>SIZE_WIDTH$} {:>AGE_WIDTH$}",
        image.size, image.created_since
    )
}

fn truncate_tag(tag: &str) -> String {
    if tag.chars().count() >= TAG_TRUNCATE_AT {
        let kept: String = tag.chars().take(TAG_KEEP).collect();
        format!("{kept}{ELLIPSIS}")
    } else {
        tag.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(repository: &str, tag: &str, id: &str, size: &str, age: &str) -> ImageRecord {
        ImageRecord {
            id: id.to_string(),
            repository: repository.to_string(),
            tag: tag.to_string(),
            size: size.to_string(),
            created_since: age.to_string(),
        }
    }

    fn sample() -> Vec<ImageRecord> {
        vec![
            image("app", "v1", "sha1", "10MB", "2 days ago"),
            image("<none>", "", "sha2", "5MB", "1 week ago"),
        ]
    }

    #[test]
    fn names_use_id_for_untagged_repository() {
        let images = sample();
        assert_eq!(format_name(&images[0]), "app:v1");
        assert_eq!(format_name(&images[1]), "sha2:");
    }

    #[test]
    fn long_tags_are_cut_to_forty_characters() {
        for len in [40, 41, 64, 128] {
            let tag = "t".repeat(len);
            let name = format_name(&image("repo", &tag, "id", "", ""));
            let shown = name.strip_prefix("repo:").unwrap();
            assert_eq!(shown.chars().count(), 40, "tag of length {len}");
            assert!(shown.ends_with("..."));
            assert_eq!(&shown[..37], &tag[..37]);
        }
    }

    #[test]
    fn tags_below_the_limit_are_untouched() {
        let tag = "x".repeat(39);
        assert_eq!(
            format_name(&image("repo", &tag, "id", "", "")),
            format!("repo:{tag}")
        );
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let tag = "é".repeat(45);
        let name = format_name(&image("r", &tag, "id", "", ""));
        let shown = name.strip_prefix("r:").unwrap();
        assert_eq!(shown.chars().count(), 40);
        assert!(shown.starts_with(&"é".repeat(37)));
    }

    #[test]
    fn column_width_is_longest_name() {
        let images = sample();
        assert_eq!(name_width(&images), "app:v1".len());
        assert_eq!(name_width(&[]), 0);
    }

    #[test]
    fn rows_share_the_name_column() {
        let images = sample();
        let rows = format_rows(&images, false);

        assert_eq!(rows[0].label, "app:v1       10MB      2 days ago");
        assert_eq!(rows[1].label, "sha2:         5MB      1 week ago");
        assert!(std::ptr::eq(rows[1].image, &images[1]));

        let widths: Vec<usize> = rows.iter().map(|r| r.label.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == 6 + 1 + 10 + 1 + 15));
    }

    #[test]
    fn width_is_recomputed_per_listing() {
        let mut images = sample();
        images.push(image(
            "registry.example.com/team/service",
            "latest",
            "sha3",
            "1GB",
            "3 months ago",
        ));
        let width = name_width(&images);
        assert_eq!(width, "registry.example.com/team/service:latest".len());

        for row in format_rows(&images, false) {
            let name_field: String = row.label.chars().take(width).collect();
            assert!(name_field.starts_with(&format_name(row.image)));
        }
    }

    #[test]
    fn colour_does_not_change_the_columns() {
        let images = sample();
        let plain = format_rows(&images, false);
        let coloured = format_rows(&images, true);
        for (p, c) in plain.iter().zip(&coloured) {
            let suffix = &p.label[p.label.len() - 27..];
            assert!(c.label.ends_with(suffix));
        }
    }

    #[test]
    fn missing_fields_render_as_blanks() {
        let images = vec![ImageRecord::default()];
        let rows = format_rows(&images, false);
        assert_eq!(rows[0].label, format!(":{}", " ".repeat(1 + 10 + 1 + 15)));
    }
}
