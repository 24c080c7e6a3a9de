use super::*;

#[test]
fn starts_closed() {
    let lightbox = LightboxController::new();
    assert!(!lightbox.is_open());
    assert_eq!(lightbox.active_image(), None);
}

#[test]
fn last_open_wins() {
    let mut lightbox = LightboxController::new();
    lightbox.open("/x.png");
    lightbox.open("/y.png");
    assert_eq!(lightbox.active_image(), Some("/y.png"));
}

#[test]
fn close_after_open_empties() {
    let mut lightbox = LightboxController::new();
    for image in ["/x.png", "", "not a uri"] {
        lightbox.open(image);
        lightbox.close();
        assert_eq!(lightbox.active_image(), None, "{image:?}");
    }
}

#[test]
fn content_click_does_not_dismiss() {
    let mut lightbox = LightboxController::new();
    lightbox.open("/a.png");
    assert!(!lightbox.handle_click(OverlayTarget::Content));
    assert_eq!(lightbox.active_image(), Some("/a.png"));
}

#[test]
fn background_click_dismisses() {
    let mut lightbox = LightboxController::new();
    lightbox.open("/a.png");
    assert!(lightbox.handle_click(OverlayTarget::Background));
    assert_eq!(lightbox.active_image(), None);
}

#[test]
fn close_control_dismisses() {
    let mut lightbox = LightboxController::new();
    lightbox.open("/a.png");
    assert!(lightbox.handle_click(OverlayTarget::CloseControl));
    assert!(!lightbox.is_open());
}

#[test]
fn clicks_on_closed_overlay_are_ignored() {
    let mut lightbox = LightboxController::new();
    assert!(!lightbox.handle_click(OverlayTarget::Background));
    assert!(!lightbox.is_open());
}
