use questicon::{render, IconConfig, ICON_SIZE};

#[test]
fn smoke_render_default() {
    let c = render(&IconConfig::default());
    assert_eq!(c.width(), ICON_SIZE);
    assert_eq!(c.height(), ICON_SIZE);
    assert_eq!(c.as_raw().len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
}
