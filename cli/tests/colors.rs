use artistriage::colors::ColorScheme;
use artistriage_core::Status;

#[test]
fn test_color_scheme_with_colors() {
    let colors = ColorScheme::new(true);

    // Only the text matters here; escape codes depend on the terminal
    let artist = colors.artist_name("Test Artist");
    assert!(artist.to_string().contains("Test Artist"));

    let genre = colors.genre("shoegaze");
    assert!(genre.to_string().contains("shoegaze"));

    let potential = colors.potential("Slowdive");
    assert!(potential.to_string().contains("Slowdive"));

    let status = colors.status(Status::Positive);
    assert!(status.to_string().contains('+'));

    let prompt = colors.prompt("Enter +, - or =");
    assert!(prompt.to_string().contains("Enter +, - or ="));
}

#[test]
fn test_color_scheme_no_colors() {
    let colors = ColorScheme::new(false);

    assert_eq!(colors.artist_name("Test Artist").to_string(), "Test Artist");
    assert_eq!(colors.id("4Z8W4fKeB5YxbusRsdQVPb").to_string(), "4Z8W4fKeB5YxbusRsdQVPb");
    assert_eq!(colors.success("Success").to_string(), "Success");
    assert_eq!(colors.warning("Careful").to_string(), "Careful");
    assert_eq!(colors.error("Error").to_string(), "Error");
    assert_eq!(colors.status(Status::Neutral).to_string(), "=");
    assert_eq!(colors.status(Status::Unlabeled).to_string(), "");
}
