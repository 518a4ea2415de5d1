use artistriage_core::{Artist, InferenceReport, Registry, Status};

use crate::colors::ColorScheme;
use crate::session::{ImportSummary, RelatedRefresh};

pub fn display_candidate(artist: &Artist, remaining: usize, colors: &ColorScheme) {
    println!();
    println!("{}", format_candidate(artist, remaining, colors));
}

pub fn format_candidate(artist: &Artist, remaining: usize, colors: &ColorScheme) -> String {
    let mut line = format!(
        "🎵 {} | {} left to classify",
        colors.artist_name(artist.display_name()),
        colors.number(&remaining.saturating_sub(1).to_string())
    );

    if !artist.genres.is_empty() {
        line.push_str(&format!(" | {}", colors.genre(&artist.genres.join(", "))));
    }

    line
}

pub fn display_classified(artist: &Artist, colors: &ColorScheme) {
    println!(
        "{} {} {}",
        colors.status(artist.status),
        colors.artist_name(artist.display_name()),
        artist.status
    );
}

pub fn display_related_refresh(refresh: &RelatedRefresh, colors: &ColorScheme) {
    println!(
        "🔗 {} related artists, {} new",
        colors.number(&refresh.related_count.to_string()),
        colors.number(&refresh.new_artists.len().to_string())
    );

    if !refresh.undescribed.is_empty() {
        println!(
            "{} Could not fetch details for {} of them",
            colors.warning("⚠️"),
            refresh.undescribed.len()
        );
    }
}

pub fn display_inference(report: &InferenceReport, registry: &Registry, colors: &ColorScheme) {
    for change in &report.promoted {
        println!(
            "✨ {} has potential. Referenced by: {}",
            colors.potential(registry.display_name(&change.artist_id)),
            format_referenced_by(&change.referenced_by, registry)
        );
    }

    for change in &report.demoted {
        println!(
            "{} {} is no longer potential and was reverted to {}. Referenced by: {}",
            colors.warning("↩️"),
            colors.artist_name(registry.display_name(&change.artist_id)),
            Status::Neutral.symbol(),
            format_referenced_by(&change.referenced_by, registry)
        );
    }
}

pub fn format_referenced_by(referenced_by: &[String], registry: &Registry) -> String {
    if referenced_by.is_empty() {
        return "nobody".to_string();
    }

    referenced_by
        .iter()
        .map(|id| registry.display_name(id))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn display_potentials(potentials: &[&Artist], colors: &ColorScheme) {
    if potentials.is_empty() {
        println!("No artists with potential yet.");
        return;
    }

    println!(
        "{} artists with potential:",
        colors.number(&potentials.len().to_string())
    );
    for artist in potentials {
        println!(
            "  {} (ID: {})",
            colors.potential(artist.display_name()),
            colors.id(&artist.id)
        );
    }
}

pub fn display_import(summary: &ImportSummary, colors: &ColorScheme) {
    if summary.added == 0 {
        println!("No new artists were added.");
    } else {
        println!(
            "{} Added {} new artists ({} followed)",
            colors.success("✅"),
            colors.number(&summary.added.to_string()),
            summary.seen
        );
    }
}

pub fn display_error(message: &str, colors: &ColorScheme) {
    eprintln!("{} {}", colors.error("❌ Error:"), message);
}
