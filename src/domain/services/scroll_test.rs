use super::Scroll;

#[test]
fn it_clamps_to_the_list() {
    let mut scroll = Scroll::default();
    scroll.set_state(30, 10);

    scroll.down_page();
    scroll.down_page();
    scroll.down_page();
    assert_eq!(scroll.position, 20);
    assert!(scroll.is_at_bottom());

    scroll.up();
    assert_eq!(scroll.position, 19);
    assert!(!scroll.is_at_bottom());

    scroll.up_page();
    scroll.up_page();
    assert_eq!(scroll.position, 0);
}

#[test]
fn it_jumps_to_the_last_line() {
    let mut scroll = Scroll::default();
    scroll.set_state(30, 10);
    scroll.last();
    assert_eq!(scroll.position, 20);

    scroll.set_state(5, 10);
    assert_eq!(scroll.position, 0);
    assert!(scroll.is_at_bottom());
}
