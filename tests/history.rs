use rasterfx::{apply_sobel, Color, History, HistoryError, Image, PixelBuffer};

fn marked(v: u8) -> Image {
    let mut img = Image::new(4, 4);
    img.set_pixel(0, 0, Color::gray(v));
    img
}

#[test]
fn push_then_pop_restores_size() {
    let mut history = History::new();
    history.push(marked(1)).unwrap();
    let before = history.len();

    history.push(marked(2)).unwrap();
    assert_eq!(history.len(), before + 1);
    assert!(history.pop());
    assert_eq!(history.len(), before);
    assert_eq!(history.top().map(|img| img.pixel(0, 0)), Some(Color::gray(1)));
}

#[test]
fn pop_on_empty_is_noop() {
    let mut history: History = History::new();
    assert!(!history.pop());
    assert_eq!(history.len(), 0);
    assert!(history.is_empty());
}

#[test]
fn pops_follow_reverse_push_order() {
    const N: u8 = 8;
    let mut history = History::new();
    for v in 1..=N {
        history.push(marked(v)).unwrap();
        assert_eq!(history.len(), v as usize);
    }

    for v in (1..=N).rev() {
        assert_eq!(history.top().map(|img| img.pixel(0, 0)), Some(Color::gray(v)));
        assert!(history.pop());
    }
    assert!(history.is_empty());
    assert!(history.top().is_none());
}

#[test]
fn undo_restores_pre_filter_image() {
    let mut image = Image::filled(5, 5, Color::gray(80));
    image.set_pixel(2, 2, Color::WHITE);

    let mut history = History::new();
    history.push(image.clone()).unwrap();
    apply_sobel(&mut image).unwrap();
    assert_ne!(history.top(), Some(&image));

    let restored = history.take().unwrap();
    assert_eq!(restored.pixel(2, 2), Color::WHITE);
    assert!(history.is_empty());
}

#[test]
fn history_error_is_displayable() {
    assert_eq!(HistoryError::Allocation.to_string(), "failed to allocate history entry");
}
