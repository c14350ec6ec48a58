use super::*;

const PLACEHOLDER: &str = "https://via.placeholder.com/50x50/1e3c72/ffffff?text=U";

#[test]
fn starts_with_primary_source() {
    let image = ImageFallback::new("/static/logo.png", PLACEHOLDER);
    assert_eq!(image.src(), "/static/logo.png");
    assert!(image.can_fall_back());
}

#[test]
fn first_error_switches_to_fallback() {
    let mut image = ImageFallback::new("/static/logo.png", PLACEHOLDER);
    image.mark_failed();
    assert_eq!(image.src(), PLACEHOLDER);
}

#[test]
fn fallback_is_one_shot() {
    let mut image = ImageFallback::new("/static/photo.jpg", PLACEHOLDER);
    image.mark_failed();
    assert!(!image.can_fall_back());
    image.mark_failed();
    assert_eq!(image.src(), PLACEHOLDER);
}
