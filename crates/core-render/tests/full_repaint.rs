//! Renderer output across scroll ticks.

use core_events::Direction;
use core_grid::{Grid, ScrollBuffer};
use core_render::Renderer;
use proptest::prelude::*;

fn frame_text(out: &[u8]) -> String {
    String::from_utf8(out.to_vec()).unwrap()
}

#[test]
fn each_frame_reflects_latest_update() {
    let mut buf = ScrollBuffer::new(Grid::from_rows(["abc", "def", "ghi"]).unwrap());
    let mut r = Renderer::new(Vec::<u8>::new());
    buf.update();
    r.draw(buf.grid()).unwrap();
    assert_eq!(
        frame_text(r.sink()),
        "\x1b[1;1Hcab\x1b[2;1Hfde\x1b[3;1High"
    );

    let mut r = Renderer::new(Vec::<u8>::new());
    buf.set_direction(Direction::Up);
    buf.update();
    r.draw(buf.grid()).unwrap();
    assert_eq!(
        frame_text(r.sink()),
        "\x1b[1;1Hfde\x1b[2;1High\x1b[3;1Hcab"
    );
}

#[test]
fn banner_frame_has_one_move_per_row() {
    let buf = ScrollBuffer::with_banner().unwrap();
    let mut r = Renderer::new(Vec::<u8>::new());
    r.draw(buf.grid()).unwrap();
    let out = frame_text(r.sink());
    assert_eq!(out.matches('\x1b').count(), buf.grid().rows());
    assert!(out.starts_with("\x1b[1;1H"));
    assert!(out.contains(&format!("\x1b[{};1H", buf.grid().rows())));
}

proptest! {
    // Every frame prints rows * cols chars of text regardless of direction.
    #[test]
    fn text_volume_constant(dirs in prop::collection::vec(prop::sample::select(Direction::ALL.to_vec()), 1..20)) {
        let mut buf = ScrollBuffer::new(Grid::from_rows(["%% ", " %%", "%  ", "  %"]).unwrap());
        let mut r = Renderer::new(std::io::sink());
        for d in &dirs {
            buf.set_direction(*d);
            buf.update();
            r.draw(buf.grid()).unwrap();
        }
        let s = r.metrics_snapshot();
        prop_assert_eq!(s.frames, dirs.len() as u64);
        prop_assert_eq!(s.text_bytes, 12 * dirs.len() as u64);
    }
}
